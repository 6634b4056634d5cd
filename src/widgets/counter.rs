//! Count-up animation for the stats cards.
//!
//! The displayed value follows an ease-out quadratic curve:
//!
//! ```text
//! t     = min(elapsed / duration, 1)
//! value = floor(target * (1 - (1 - t)^2))
//! ```
//!
//! The animation runs once, the first time the card scrolls into view.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    duration: Duration,
    reduced_motion: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            reduced_motion: false,
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value shown `elapsed` after the animation started.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        if self.reduced_motion || self.duration.is_zero() {
            return self.target;
        }
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(2);
        (f64::from(self.target) * eased).floor() as u32
    }

    /// Values sampled every `step` from start to end, inclusive of both.
    ///
    /// Reduced motion yields the target alone.
    pub fn frames(&self, step: Duration) -> Vec<u32> {
        if self.reduced_motion || self.duration.is_zero() || step.is_zero() {
            return vec![self.target];
        }
        let mut frames = Vec::new();
        let mut elapsed = Duration::ZERO;
        while elapsed < self.duration {
            frames.push(self.value_at(elapsed));
            elapsed += step;
        }
        frames.push(self.value_at(self.duration));
        frames
    }
}
