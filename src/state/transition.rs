//! Slide animation between the login and register panels

use std::time::{Duration, Instant};

/// Columns the panels travel during the slide
pub const SLIDE_DISTANCE: f32 = 20.0;

/// Which credential panel is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

impl AuthView {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Sign Up",
        }
    }
}

/// Eased horizontal slide toward `target`
#[derive(Debug, Clone, PartialEq)]
pub struct SlideTransition {
    pub target: AuthView,
    pub started_at: Instant,
}

impl SlideTransition {
    /// Pause before the panel starts moving
    const DELAY: Duration = Duration::from_millis(300);
    /// Duration of the movement itself
    const DURATION: Duration = Duration::from_millis(500);

    pub fn new(target: AuthView, now: Instant) -> Self {
        Self {
            target,
            started_at: now,
        }
    }

    /// Eased progress in 0.0..=1.0 after `elapsed`
    pub fn progress_at(elapsed: Duration) -> f32 {
        if elapsed <= Self::DELAY {
            return 0.0;
        }
        let moving = elapsed - Self::DELAY;
        if moving >= Self::DURATION {
            return 1.0;
        }
        simple_easing::quad_out(moving.as_secs_f32() / Self::DURATION.as_secs_f32())
    }

    pub fn progress(&self, now: Instant) -> f32 {
        Self::progress_at(now.saturating_duration_since(self.started_at))
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= Self::DELAY + Self::DURATION
    }

    /// Horizontal offset of the incoming panel; it slides in from the
    /// right when moving to register and from the left otherwise
    pub fn offset(&self, now: Instant) -> i16 {
        let remaining = (1.0 - self.progress(now)) * SLIDE_DISTANCE;
        match self.target {
            AuthView::Register => remaining.round() as i16,
            AuthView::Login => -(remaining.round() as i16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_waits_for_delay() {
        assert_eq!(SlideTransition::progress_at(Duration::ZERO), 0.0);
        assert_eq!(
            SlideTransition::progress_at(Duration::from_millis(300)),
            0.0
        );
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_one() {
        let mut last = 0.0;
        for ms in (300..=800).step_by(50) {
            let p = SlideTransition::progress_at(Duration::from_millis(ms));
            assert!(p >= last, "progress went backwards at {ms}ms");
            last = p;
        }
        assert_eq!(last, 1.0);
        assert_eq!(SlideTransition::progress_at(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_quad_out_front_loads_motion() {
        let halfway = SlideTransition::progress_at(Duration::from_millis(550));
        assert!(halfway > 0.5);
    }

    #[test]
    fn test_offset_direction_follows_target() {
        let start = Instant::now();
        let to_register = SlideTransition::new(AuthView::Register, start);
        let to_login = SlideTransition::new(AuthView::Login, start);
        assert_eq!(to_register.offset(start), 20);
        assert_eq!(to_login.offset(start), -20);

        let done = start + Duration::from_millis(800);
        assert_eq!(to_register.offset(done), 0);
        assert!(to_register.is_complete(done));
        assert!(!to_register.is_complete(start + Duration::from_millis(799)));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(AuthView::Login.toggled(), AuthView::Register);
        assert_eq!(AuthView::Register.toggled(), AuthView::Login);
        assert_eq!(AuthView::default(), AuthView::Login);
    }
}
