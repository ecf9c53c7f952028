//! Time-based eased transitions shared by all screens
//!
//! Screens fade their title in when mounted, pulse a button when it is
//! pressed and fade the resend prompt in when the cooldown expires. All of
//! them are a [`Transition`] sampled on each frame.

use std::time::{Duration, Instant};

/// A single eased 0.0 → 1.0 transition
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    start: Instant,
    duration: Duration,
}

impl Transition {
    /// Screen fade-in
    pub const FADE_IN: Duration = Duration::from_millis(500);
    /// Button press pulse
    pub const PULSE: Duration = Duration::from_millis(200);
    /// Resend prompt fade
    pub const RESEND_FADE: Duration = Duration::from_millis(200);

    pub fn new(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    pub fn starting_at(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Eased progress in `[0.0, 1.0]` at `now`
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let linear = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        simple_easing::cubic_out(linear)
    }

    pub fn progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_at(Instant::now())
    }
}

/// Linear interpolation between two RGB colors, used to render fades
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_starts_at_zero() {
        let start = Instant::now();
        let t = Transition::starting_at(start, Transition::FADE_IN);
        assert_eq!(t.progress_at(start), 0.0);
        assert!(!t.is_complete_at(start));
    }

    #[test]
    fn test_progress_reaches_one() {
        let start = Instant::now();
        let t = Transition::starting_at(start, Transition::PULSE);
        let end = start + Duration::from_millis(250);
        assert_eq!(t.progress_at(end), 1.0);
        assert!(t.is_complete_at(end));
    }

    #[test]
    fn test_progress_is_eased_ahead_of_linear() {
        let start = Instant::now();
        let t = Transition::starting_at(start, Duration::from_millis(1000));
        let half = t.progress_at(start + Duration::from_millis(500));
        assert!(half > 0.5 && half < 1.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let t = Transition::new(Duration::ZERO);
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_complete());
    }

    #[test]
    fn test_blend() {
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.0), (0, 0, 0));
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 1.0), (200, 100, 50));
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
        assert_eq!(blend((10, 10, 10), (20, 20, 20), 7.0), (20, 20, 20));
    }
}
