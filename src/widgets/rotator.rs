//! Interval-driven index cycling.

use std::time::Duration;

/// Cycles an index over `len` slides, one step per interval.
///
/// Rotation is paused while the element is out of view or the user prefers
/// reduced motion. A single slide never rotates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotator {
    len: usize,
    index: usize,
    interval: Duration,
    reduced_motion: bool,
    visible: bool,
}

impl Rotator {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            interval,
            reduced_motion: false,
            visible: true,
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a tick would move the index.
    pub fn is_active(&self) -> bool {
        self.len > 1 && self.visible && !self.reduced_motion
    }

    /// One interval elapsed. Returns the index now showing.
    pub fn tick(&mut self) -> usize {
        if self.is_active() {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}
