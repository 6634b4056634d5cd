//! Paged carousel with a wrapping window.

/// Shows `page_size` consecutive items starting at `start`, wrapping past
/// the end of the list. Advancing moves the window by a whole page.
///
/// A list that fits on one page never moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    page_size: usize,
    start: usize,
    visible: bool,
}

impl Carousel {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size: page_size.max(1),
            start: 0,
            visible: true,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether there is more than one page to show.
    pub fn is_paged(&self) -> bool {
        self.len > self.page_size
    }

    /// Item indices currently on screen, in display order.
    pub fn visible(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..self.page_size.min(self.len))
            .map(|offset| (self.start + offset) % self.len)
            .collect()
    }

    pub fn advance(&mut self) {
        if self.is_paged() {
            self.start = (self.start + self.page_size) % self.len;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// One auto-advance interval elapsed. Ignored while out of view.
    pub fn tick(&mut self) {
        if self.visible {
            self.advance();
        }
    }
}

/// Previous and next indices around `index` in a list of `len`, wrapping at
/// both ends. Used by the gallery lightbox.
pub fn wrap_neighbors(index: usize, len: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    ((index + len - 1) % len, (index + 1) % len)
}
