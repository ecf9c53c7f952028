//! Resend cooldown timer for OTP screens

use std::time::Duration;

/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Counting down; resend is disabled
    Running,
    /// Countdown finished; resend is enabled
    Expired,
}

/// Countdown that gates the "resend code" action.
///
/// `remaining` stays within `0..=COOLDOWN_SECS` and resend is enabled exactly
/// when it is zero.
#[derive(Debug, Clone)]
pub struct ResendTimer {
    remaining: u32,
    /// Wall-clock time accumulated toward the next tick
    carry: Duration,
}

impl ResendTimer {
    /// Cooldown length in seconds
    pub const COOLDOWN_SECS: u32 = 30;
    const TICK: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            remaining: Self::COOLDOWN_SECS,
            carry: Duration::ZERO,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> TimerPhase {
        if self.remaining == 0 {
            TimerPhase::Expired
        } else {
            TimerPhase::Running
        }
    }

    pub fn resend_enabled(&self) -> bool {
        self.phase() == TimerPhase::Expired
    }

    /// Apply a single one-second tick.
    /// Returns true if this tick expired the timer.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Feed elapsed wall-clock time; applies one tick per whole second.
    /// Returns true if the timer expired during this call.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.remaining == 0 {
            self.carry = Duration::ZERO;
            return false;
        }

        self.carry += elapsed;
        let mut expired = false;
        while self.carry >= Self::TICK && self.remaining > 0 {
            self.carry -= Self::TICK;
            expired = self.tick();
        }
        if expired {
            self.carry = Duration::ZERO;
        }
        expired
    }

    /// Restart the cooldown if it has expired.
    /// Returns false (and changes nothing) while the countdown is still running.
    pub fn try_resend(&mut self) -> bool {
        if !self.resend_enabled() {
            return false;
        }
        *self = Self::new();
        true
    }

    /// Label for the resend action, e.g. `Resend OTP (12s)`
    pub fn label(&self) -> String {
        if self.remaining > 0 {
            format!("Resend OTP ({}s)", self.remaining)
        } else {
            "Resend OTP".to_string()
        }
    }
}

impl Default for ResendTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_running_at_thirty() {
        let timer = ResendTimer::new();
        assert_eq!(timer.remaining(), 30);
        assert_eq!(timer.phase(), TimerPhase::Running);
        assert!(!timer.resend_enabled());
    }

    #[test]
    fn test_thirty_ticks_expire() {
        let mut timer = ResendTimer::new();
        for _ in 0..29 {
            assert!(!timer.tick());
            assert!(!timer.resend_enabled());
        }
        assert!(timer.tick());
        assert_eq!(timer.phase(), TimerPhase::Expired);
        assert!(timer.resend_enabled());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_tick_past_zero_is_ignored() {
        let mut timer = ResendTimer::new();
        for _ in 0..40 {
            timer.tick();
        }
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.tick());
    }

    #[test]
    fn test_resend_while_running_is_noop() {
        let mut timer = ResendTimer::new();
        timer.tick();
        timer.tick();
        assert!(!timer.try_resend());
        assert_eq!(timer.remaining(), 28);
        assert_eq!(timer.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_resend_after_expiry_resets() {
        let mut timer = ResendTimer::new();
        for _ in 0..30 {
            timer.tick();
        }
        assert!(timer.try_resend());
        assert_eq!(timer.remaining(), 30);
        assert!(!timer.resend_enabled());
    }

    #[test]
    fn test_advance_accumulates_partial_seconds() {
        let mut timer = ResendTimer::new();
        timer.advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), 30);
        timer.advance(Duration::from_millis(600));
        assert_eq!(timer.remaining(), 29);
        timer.advance(Duration::from_millis(800));
        assert_eq!(timer.remaining(), 28);
    }

    #[test]
    fn test_advance_applies_multiple_ticks() {
        let mut timer = ResendTimer::new();
        assert!(!timer.advance(Duration::from_secs(5)));
        assert_eq!(timer.remaining(), 25);
        assert!(timer.advance(Duration::from_secs(100)));
        assert_eq!(timer.remaining(), 0);
        assert!(!timer.advance(Duration::from_secs(1)));
    }

    #[test]
    fn test_label() {
        let mut timer = ResendTimer::new();
        assert_eq!(timer.label(), "Resend OTP (30s)");
        timer.advance(Duration::from_secs(30));
        assert_eq!(timer.label(), "Resend OTP");
    }
}
