//! Sticky header visibility and the per-frame scroll gate.
//!
//! The sticky header is shown once the page has scrolled past the bottom edge
//! of the primary header. [`StickyHeader`] reports only transitions, so the
//! class list is touched once per crossing no matter how many scroll events
//! land on the same side. [`FrameGate`] keeps at most one evaluation queued
//! per animation frame.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// A visibility transition the host must apply to the sticky header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderChange {
    /// Add the visible class.
    Show,
    /// Remove the visible class.
    Hide,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StickyHeader {
    visible: bool,
}

impl StickyHeader {
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Evaluate a scroll position against the primary header's bottom edge.
    ///
    /// Shown strictly below the edge (`scroll_top > header_bottom`), hidden at
    /// or above it. Returns `None` when the state does not change.
    pub fn on_scroll(&mut self, scroll_top: f64, header_bottom: f64) -> Option<HeaderChange> {
        let past = scroll_top > header_bottom;
        match (past, self.visible) {
            (true, false) => {
                self.visible = true;
                Some(HeaderChange::Show)
            }
            (false, true) => {
                self.visible = false;
                Some(HeaderChange::Hide)
            }
            _ => None,
        }
    }
}

/// The "ticking" flag: admits one scheduled evaluation until it is released.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should schedule a frame callback.
    pub fn try_schedule(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called from the frame callback once the evaluation has run.
    pub fn release(&mut self) {
        self.ticking = false;
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}
