//! Scroll reveal: headings and tables fade and slide in the first time they
//! enter the viewport.
//!
//! Elements start hidden via [`hidden_patch`]. The host feeds every observer
//! entry through [`on_entry`]; an intersecting entry yields the reveal patch and
//! the host stops observing that element, so it never goes back to hidden.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::style::StylePatch;

/// Options handed to the intersection observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin shrinking the effective viewport.
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN }
    }
}

#[must_use]
pub fn hidden_patch() -> StylePatch {
    StylePatch::new()
        .set("opacity", "0")
        .set("transform", "translateY(10px)")
        .set("transition", "all 0.3s ease")
}

#[must_use]
pub fn revealed_patch() -> StylePatch {
    StylePatch::new().set("opacity", "1").set("transform", "translateY(0)")
}

/// Patch for an observer entry; `None` while the element is still off-screen.
#[must_use]
pub fn on_entry(is_intersecting: bool) -> Option<StylePatch> {
    is_intersecting.then(revealed_patch)
}

/// Hide each target and start observing it; returns how many were armed.
///
/// A target whose hide fails is left alone and never observed, so nothing is
/// hidden without an observer able to reveal it. The failure goes to `on_error`.
pub fn arm<T, E>(
    targets: &[T],
    mut hide: impl FnMut(&T) -> Result<(), E>,
    mut observe: impl FnMut(&T),
    mut on_error: impl FnMut(E),
) -> usize {
    let mut armed = 0;
    for target in targets {
        match hide(target) {
            Ok(()) => {
                observe(target);
                armed += 1;
            }
            Err(e) => on_error(e),
        }
    }
    armed
}
