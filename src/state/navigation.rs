//! Named route graph for the onboarding flow

use std::fmt;

/// A named route. Each route is bound to exactly one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Login,
    Otp,
    Aadhaar,
    AadhaarOtp,
    Pancard,
    PanOtp,
    AllBus,
    AddBus,
}

impl Route {
    #[cfg(test)]
    pub const ALL: [Route; 8] = [
        Route::Login,
        Route::Otp,
        Route::Aadhaar,
        Route::AadhaarOtp,
        Route::Pancard,
        Route::PanOtp,
        Route::AllBus,
        Route::AddBus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Otp => "Otp",
            Self::Aadhaar => "Aadhaar",
            Self::AadhaarOtp => "AadhaarOtp",
            Self::Pancard => "Pancard",
            Self::PanOtp => "PanOtp",
            Self::AllBus => "AllBus",
            Self::AddBus => "Addbus",
        }
    }

    /// The route reached when this screen's primary action succeeds
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Login => Some(Self::Otp),
            Self::Otp => Some(Self::Aadhaar),
            Self::Aadhaar => Some(Self::AadhaarOtp),
            Self::AadhaarOtp => Some(Self::Pancard),
            Self::Pancard => Some(Self::PanOtp),
            Self::PanOtp => Some(Self::AllBus),
            Self::AllBus => Some(Self::AddBus),
            Self::AddBus => None,
        }
    }

    /// Routes that wait for a one-time code
    pub fn is_otp(&self) -> bool {
        matches!(self, Self::Otp | Self::AadhaarOtp | Self::PanOtp)
    }

    /// Whether `self -> to` is an edge in the graph
    pub fn can_navigate_to(&self, to: Route) -> bool {
        self.next() == Some(to)
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Welcome Back!",
            Self::Otp => "OTP Verification",
            Self::Aadhaar => "Aadhaar Verification",
            Self::AadhaarOtp => "Aadhaar OTP Verification",
            Self::Pancard => "PAN Verification",
            Self::PanOtp => "PAN OTP Verification",
            Self::AllBus => "Your Buses",
            Self::AddBus => "Add New Bus",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters carried along a transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    pub phone_number: Option<String>,
    pub aadhaar: Option<String>,
    pub pan: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_login() {
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_forward_chain_visits_every_route_once() {
        let mut route = Route::Login;
        let mut visited = vec![route];
        while let Some(next) = route.next() {
            assert!(!visited.contains(&next), "cycle at {next}");
            visited.push(next);
            route = next;
        }
        assert_eq!(visited, Route::ALL.to_vec());
    }

    #[test]
    fn test_can_navigate_to() {
        assert!(Route::Login.can_navigate_to(Route::Otp));
        assert!(!Route::Login.can_navigate_to(Route::Aadhaar));
        assert!(!Route::AddBus.can_navigate_to(Route::Login));
    }
}
