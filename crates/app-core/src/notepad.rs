//! Slide state for the phrase notepad.

use crate::constants::SLIDE_LOCK;
use std::time::Duration;

/// Clamped, animation-locked cursor over a fixed deck of slides.
///
/// While a slide transition is running every navigation request is
/// ignored; the lock releases after [`SLIDE_LOCK`] of ticked time.
#[derive(Debug, Clone)]
pub struct PhraseDeck {
    index: usize,
    len: usize,
    lock_remaining: Option<Duration>,
}

impl PhraseDeck {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            lock_remaining: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.lock_remaining.is_some()
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Jump to a slide. Returns whether the cursor moved; same-slide,
    /// out-of-range and mid-animation requests are dropped.
    pub fn select(&mut self, index: usize) -> bool {
        if index == self.index || index >= self.len || self.is_animating() {
            return false;
        }
        self.index = index;
        self.lock_remaining = Some(SLIDE_LOCK);
        true
    }

    pub fn next(&mut self) -> bool {
        self.has_next() && self.select(self.index + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.has_previous() && self.select(self.index - 1)
    }

    /// Wind down the animation lock.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = &mut self.lock_remaining {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.lock_remaining = None;
            }
        }
    }
}
