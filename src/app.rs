//! Application state and core logic

use crate::api::{
    ApiError, BusApi, BusApiClient, CodeNotice, LocalGateway, VerificationGateway,
};
use crate::config::TuiConfig;
use crate::input::{digits_only, InputKind};
use crate::platform::RESEND_MODIFIER;
use crate::state::{
    AddBusForm, AppState, Form, FormState, IdCaptureForm, LoginForm, OtpForm, Route, RouteParams,
    Transition, VerificationChannel, VerificationTarget,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Shown when a bus cannot be created, whatever the cause
pub const ADD_BUS_FAILED: &str = "Failed to add bus. Please check your input and try again.";
pub const ADD_BUS_SUCCEEDED: &str = "Bus added successfully!";
pub const LIST_BUSES_FAILED: &str = "Failed to load buses. Press r to retry.";
pub const SEND_CODE_FAILED: &str = "Failed to send OTP. Please try again.";
pub const OTP_REJECTED: &str = "Invalid OTP. Please try again.";
pub const VERIFY_FAILED: &str = "Could not verify OTP. Please try again.";
/// Error boundary message for unexpected failures
pub const UNEXPECTED_ERROR: &str = "Something went wrong. Please try again.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: TuiConfig,
    gateway: Box<dyn VerificationGateway>,
    bus_api: Box<dyn BusApi>,
    /// Development codes issued by the local gateway, waiting for the status line
    notices: Arc<Mutex<VecDeque<String>>>,
    last_tick: Instant,
}

impl App {
    /// Create a new App instance wired to the configured API
    pub fn new(config: TuiConfig) -> Result<Self> {
        let bus_api = BusApiClient::new(&config.api_base_url())?;

        let notices: Arc<Mutex<VecDeque<String>>> = Arc::default();
        let sink = Arc::clone(&notices);
        let notice: CodeNotice = Box::new(move |target, code| {
            if let Ok(mut queue) = sink.lock() {
                queue.push_back(format!("Development OTP for {target}: {code}"));
            }
        });
        let gateway = LocalGateway::with_notice(notice);

        let mut app = Self::with_services(config, Box::new(gateway), Box::new(bus_api));
        app.notices = notices;
        Ok(app)
    }

    /// Create an App over explicit collaborators
    pub fn with_services(
        config: TuiConfig,
        gateway: Box<dyn VerificationGateway>,
        bus_api: Box<dyn BusApi>,
    ) -> Self {
        let mut app = Self {
            state: AppState::default(),
            config,
            gateway,
            bus_api,
            notices: Arc::default(),
            last_tick: Instant::now(),
        };
        app.mount(Route::Login, RouteParams::default());
        app
    }

    /// Advance time-driven state (the resend cooldown) to `now`
    pub fn on_tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if let FormState::Otp(form) = &mut self.state.form {
            if form.timer.advance(elapsed) {
                tracing::debug!("Resend enabled for {}", form.target);
                form.resend_fade = Some(Transition::new(Transition::RESEND_FADE));
            }
        }
    }

    /// Show an unexpected failure in the error dialog instead of exiting
    pub fn report_unexpected(&mut self, err: anyhow::Error) {
        tracing::error!("Unhandled error: {err:?}");
        let message = if cfg!(debug_assertions) {
            format!("{UNEXPECTED_ERROR}\n\n{err}")
        } else {
            UNEXPECTED_ERROR.to_string()
        };
        self.state.push_error(message);
    }

    /// Navigate along a route graph edge, remembering the current route.
    /// Targets that are not the current route's successor are refused.
    pub async fn navigate(&mut self, route: Route, params: RouteParams) {
        if !self.state.current_view.can_navigate_to(route) {
            tracing::warn!("Refusing navigation {} -> {}", self.state.current_view, route);
            return;
        }
        self.enter(route, params).await;
    }

    async fn enter(&mut self, route: Route, params: RouteParams) {
        tracing::debug!("Navigating {} -> {}", self.state.current_view, route);
        self.state.view_history.push((
            self.state.current_view,
            std::mem::take(&mut self.state.view_params),
        ));
        self.mount(route, params);
        if route == Route::AllBus {
            self.refresh_buses().await;
        }
    }

    /// Go back to the previous route. OTP screens are skipped: a code
    /// screen is only reachable by sending a code.
    pub async fn go_back(&mut self) {
        while let Some((route, params)) = self.state.view_history.pop() {
            if route.is_otp() && !self.state.view_history.is_empty() {
                continue;
            }
            tracing::debug!("Back {} -> {}", self.state.current_view, route);
            self.mount(route, params);
            if route == Route::AllBus {
                self.refresh_buses().await;
            }
            return;
        }
    }

    /// Install fresh screen state for `route`. The previous screen's form
    /// state, including any running timer, is dropped.
    fn mount(&mut self, route: Route, params: RouteParams) {
        let param = |value: &Option<String>| value.clone().unwrap_or_default();
        self.state.form = match route {
            Route::Login => FormState::Login(LoginForm::new()),
            Route::Otp => FormState::Otp(OtpForm::new(VerificationTarget::new(
                VerificationChannel::Phone,
                param(&params.phone_number),
            ))),
            Route::Aadhaar => FormState::IdCapture(IdCaptureForm::national_id()),
            Route::AadhaarOtp => FormState::Otp(OtpForm::new(VerificationTarget::new(
                VerificationChannel::NationalId,
                param(&params.aadhaar),
            ))),
            Route::Pancard => FormState::IdCapture(IdCaptureForm::tax_id()),
            Route::PanOtp => FormState::Otp(OtpForm::new(VerificationTarget::new(
                VerificationChannel::TaxId,
                param(&params.pan),
            ))),
            Route::AllBus => FormState::None,
            Route::AddBus => FormState::AddBus(AddBusForm::new()),
        };
        self.state.current_view = route;
        self.state.view_params = params;
        self.state.status_message = None;
        self.state.fade_in = Some(Transition::new(Transition::FADE_IN));
        self.last_tick = Instant::now();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.go_back().await;
            return Ok(());
        }

        match self.state.current_view {
            Route::Login | Route::Aadhaar | Route::Pancard => {
                self.handle_single_field_key(key).await?
            }
            Route::Otp | Route::AadhaarOtp | Route::PanOtp => self.handle_otp_key(key).await?,
            Route::AllBus => self.handle_bus_list_key(key).await?,
            Route::AddBus => self.handle_add_bus_key(key).await?,
        }

        self.drain_notices();
        Ok(())
    }

    /// Handle pasted text
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() {
            return;
        }
        match &mut self.state.form {
            FormState::Otp(form) => {
                form.digits.paste(text);
                form.error = None;
            }
            form => {
                if let Some(field) = form.get_active_field_mut() {
                    if field.accepts_text() {
                        let combined = format!("{}{}", field.as_text(), text);
                        field.set_text(&combined);
                    }
                }
                form.clear_error();
            }
        }
    }

    /// Keys for the phone, Aadhaar and PAN capture screens
    async fn handle_single_field_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.submit_single_field().await,
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
                self.state.form.clear_error();
                Ok(())
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
                self.state.form.clear_error();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Validate the capture field, send a code and move to its OTP screen
    async fn submit_single_field(&mut self) -> Result<()> {
        let (channel, value, result) = match &self.state.form {
            FormState::Login(form) => (
                VerificationChannel::Phone,
                form.phone.as_text().to_string(),
                form.validate(),
            ),
            FormState::IdCapture(form) => {
                let channel = match form.kind {
                    InputKind::TaxId => VerificationChannel::TaxId,
                    _ => VerificationChannel::NationalId,
                };
                (channel, form.field.as_text().to_string(), form.validate())
            }
            _ => return Ok(()),
        };

        if let Err(e) = result.into_result() {
            self.set_form_error(e.to_string());
            return Ok(());
        }

        self.state.form.press();
        let value = match channel {
            VerificationChannel::NationalId => digits_only(&value).collect(),
            _ => value,
        };
        let target = VerificationTarget::new(channel, value);

        if let Err(e) = self.gateway.send_code(&target).await {
            tracing::warn!("Failed to send OTP to {target}: {e}");
            self.set_form_error(SEND_CODE_FAILED.to_string());
            return Ok(());
        }

        let mut params = self.state.view_params.clone();
        match channel {
            VerificationChannel::Phone => params.phone_number = Some(target.value),
            VerificationChannel::NationalId => params.aadhaar = Some(target.value),
            VerificationChannel::TaxId => params.pan = Some(target.value),
        }
        if let Some(next) = self.state.current_view.next() {
            self.navigate(next, params).await;
        }
        Ok(())
    }

    /// Keys for the OTP screens
    async fn handle_otp_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::Otp(form) = &mut self.state.form else {
            return Ok(());
        };

        let resend_modifier = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(RESEND_MODIFIER);

        match key.code {
            KeyCode::Char('r') if resend_modifier => return self.resend_code().await,
            KeyCode::Enter => return self.submit_otp().await,
            KeyCode::Char(c) if !resend_modifier => {
                if form.digits.input(&c.to_string()) {
                    form.error = None;
                }
            }
            KeyCode::Backspace => {
                form.digits.backspace();
                form.error = None;
            }
            KeyCode::Left | KeyCode::BackTab => form.digits.focus_left(),
            KeyCode::Right | KeyCode::Tab => form.digits.focus_right(),
            _ => {}
        }
        Ok(())
    }

    /// Verify the entered code and move on
    async fn submit_otp(&mut self) -> Result<()> {
        let FormState::Otp(form) = &mut self.state.form else {
            return Ok(());
        };

        if let Some(reason) = form.digits.validate().reason() {
            form.error = Some(reason);
            return Ok(());
        }
        form.pressed = Some(Transition::new(Transition::PULSE));
        let target = form.target.clone();
        let code = form.digits.code();

        match self.gateway.verify_code(&target, &code).await {
            Ok(true) => {
                tracing::info!("OTP verified for {target}");
                if let Some(next) = self.state.current_view.next() {
                    let params = self.state.view_params.clone();
                    self.navigate(next, params).await;
                }
            }
            Ok(false) => self.reject_otp(OTP_REJECTED),
            // No code was ever issued for this screen: a broken flow, not a typo
            Err(e) if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::NoCodeIssued(_))) => {
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("OTP verification for {target} failed: {e}");
                self.reject_otp(VERIFY_FAILED);
            }
        }
        Ok(())
    }

    /// Show `message` and clear the cells for re-entry
    fn reject_otp(&mut self, message: &str) {
        if let FormState::Otp(form) = &mut self.state.form {
            form.digits.clear();
            form.error = Some(message.to_string());
        }
    }

    /// Resend the code if the cooldown has expired; ignored otherwise
    async fn resend_code(&mut self) -> Result<()> {
        let FormState::Otp(form) = &mut self.state.form else {
            return Ok(());
        };
        if !form.begin_resend() {
            tracing::debug!("Resend ignored, {}s left", form.timer.remaining());
            return Ok(());
        }
        let target = form.target.clone();
        self.last_tick = Instant::now();

        if let Err(e) = self.gateway.send_code(&target).await {
            tracing::warn!("Failed to resend OTP to {target}: {e}");
            self.set_form_error(SEND_CODE_FAILED.to_string());
        }
        Ok(())
    }

    /// Keys for the bus list
    async fn handle_bus_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.buses.len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('a') | KeyCode::Char('n') => {
                let params = self.state.view_params.clone();
                self.navigate(Route::AddBus, params).await;
            }
            KeyCode::Char('r') => self.refresh_buses().await,
            _ => {}
        }
        Ok(())
    }

    /// Reload the bus list
    pub async fn refresh_buses(&mut self) {
        match self.bus_api.list_buses().await {
            Ok(buses) => {
                self.state.buses = buses;
                self.state.list_error = None;
            }
            Err(e) => {
                tracing::warn!("Failed to list buses: {e}");
                self.state.buses.clear();
                self.state.list_error = Some(LIST_BUSES_FAILED.to_string());
            }
        }
        self.state.selected_index = 0;
    }

    /// Keys for the add-bus form
    async fn handle_add_bus_key(&mut self, key: KeyEvent) -> Result<()> {
        let FormState::AddBus(form) = &mut self.state.form else {
            return Ok(());
        };

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.submit_bus().await;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter if form.is_submit_active() => return self.submit_bus().await,
            KeyCode::Enter => {
                let multiline = form
                    .get_field(form.active_field_index)
                    .is_some_and(|f| f.is_multiline);
                if multiline {
                    if let Some(field) = form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    form.next_field();
                }
            }
            KeyCode::Left => {
                if let Some(field) = form.get_active_field_mut() {
                    field.cycle_back();
                }
            }
            KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.cycle();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
                form.error = None;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    if field.accepts_text() {
                        field.push_char(c);
                    } else if c == ' ' {
                        field.cycle();
                    }
                }
                form.error = None;
                form.success = None;
            }
            _ => {}
        }
        Ok(())
    }

    /// Post the bus form
    async fn submit_bus(&mut self) -> Result<()> {
        let FormState::AddBus(form) = &mut self.state.form else {
            return Ok(());
        };
        form.error = None;
        form.success = None;
        form.pressed = Some(Transition::new(Transition::PULSE));
        let request = form.to_request(self.config.vendor_id.clone());

        let outcome = self.bus_api.create_bus(&request).await;

        let FormState::AddBus(form) = &mut self.state.form else {
            return Ok(());
        };
        match outcome {
            Ok(()) => {
                tracing::info!("Bus {} added", request.number);
                form.success = Some(ADD_BUS_SUCCEEDED.to_string());
                form.reset();
            }
            Err(e) => {
                tracing::warn!("Failed to add bus {}: {e}", request.number);
                form.error = Some(ADD_BUS_FAILED.to_string());
            }
        }
        Ok(())
    }

    fn set_form_error(&mut self, message: String) {
        match &mut self.state.form {
            FormState::None => {}
            FormState::Login(f) => f.error = Some(message),
            FormState::IdCapture(f) => f.error = Some(message),
            FormState::Otp(f) => f.error = Some(message),
            FormState::AddBus(f) => f.error = Some(message),
        }
    }

    /// Move gateway notices to the status line
    fn drain_notices(&mut self) {
        if let Ok(mut queue) = self.notices.lock() {
            if let Some(last) = queue.drain(..).last() {
                self.state.status_message = Some(last);
            }
        }
    }
}
