//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(1300);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Phase and scroll offset after `elapsed` on a terminal `height` rows tall
    pub fn phase_at(elapsed: Duration, height: u16) -> (SplashPhase, f32) {
        if elapsed < Self::DISPLAY_DURATION {
            (SplashPhase::Display, 0.0)
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out, scrolled fully off the top
            let eased = simple_easing::cubic_out(progress);
            (SplashPhase::ScrollUp, eased * height as f32)
        } else {
            (SplashPhase::Complete, height as f32)
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        let (phase, offset) = Self::phase_at(elapsed, terminal_height);
        self.phase = phase;
        self.scroll_offset = offset;
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}
