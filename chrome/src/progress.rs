//! Scroll progress percentage for the top-of-page bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::style::{StylePatch, pct};

/// How far the document has been scrolled, in percent.
///
/// `100 * scroll_top / (doc_height - viewport_height)`, clamped to `[0, 100]`.
/// A document that fits inside the viewport has nothing to scroll and reports
/// 0, as do non-finite inputs.
#[must_use]
pub fn scroll_percent(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if !scroll_top.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[must_use]
pub fn width_patch(percent: f64) -> StylePatch {
    StylePatch::new().set("width", pct(percent))
}
