//! Hover and press micro-interactions.
//!
//! Each interactive element has a [`Role`], and every pointer event it receives
//! is reduced to a [`Phase`]. [`patch_for`] maps the pair to the inline style
//! the element should carry. Patches assign absolute values, so entering twice
//! in a row leaves the same style as entering once.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::consts::{HEADING_SELECTOR, TABLE_ROW_SELECTOR, WEBRING_BUTTON_SELECTOR};
use crate::style::StylePatch;

pub const HEADING_HOVER_SHADOW: &str = "2px 2px 0 #78BEBA, 4px 4px 0 #2069af";
pub const HEADING_REST_SHADOW: &str = "1px 1px 0 #111111";
pub const BUTTON_REST_SHADOW: &str = "2px 2px 0 #888888";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `h1`–`h3` inside the manual content.
    Heading,
    /// Any row of a table inside the manual content.
    TableRow,
    /// A webring button (retro 88x31 badge).
    WebringButton,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Heading, Self::TableRow, Self::WebringButton];

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Heading => HEADING_SELECTOR,
            Self::TableRow => TABLE_ROW_SELECTOR,
            Self::WebringButton => WEBRING_BUTTON_SELECTOR,
        }
    }

    /// DOM events this role listens to.
    #[must_use]
    pub fn phases(self) -> &'static [Phase] {
        match self {
            Self::Heading | Self::TableRow => &[Phase::Enter, Phase::Leave],
            Self::WebringButton => &[Phase::Enter, Phase::Leave, Phase::Press, Phase::Release],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Leave,
    Press,
    Release,
}

impl Phase {
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
            Self::Press => "mousedown",
            Self::Release => "mouseup",
        }
    }
}

/// Style the element itself should take for this event, if any.
#[must_use]
pub fn patch_for(role: Role, phase: Phase) -> Option<StylePatch> {
    match (role, phase) {
        (Role::Heading, Phase::Enter) => Some(
            StylePatch::new()
                .set("text-shadow", HEADING_HOVER_SHADOW)
                .set("transition", "text-shadow 0.1s ease"),
        ),
        (Role::Heading, Phase::Leave) => Some(StylePatch::new().set("text-shadow", HEADING_REST_SHADOW)),
        (Role::TableRow, Phase::Enter) => Some(
            StylePatch::new()
                .set("transform", "translateX(2px)")
                .set("transition", "transform 0.1s ease"),
        ),
        (Role::TableRow, Phase::Leave) => Some(StylePatch::new().clear("transform")),
        (Role::WebringButton, Phase::Press) => Some(
            StylePatch::new()
                .set("transform", "translate(2px, 2px)")
                .set("box-shadow", "none"),
        ),
        (Role::WebringButton, Phase::Release | Phase::Leave) => Some(
            StylePatch::new()
                .clear("transform")
                .set("box-shadow", BUTTON_REST_SHADOW),
        ),
        _ => None,
    }
}

/// Style for `.sparkle` children of the element, if any.
#[must_use]
pub fn sparkle_patch(role: Role, phase: Phase) -> Option<StylePatch> {
    match (role, phase) {
        (Role::WebringButton, Phase::Enter) => Some(StylePatch::new().set("animation-play-state", "running")),
        _ => None,
    }
}

/// Inline animation played on the logo when clicked.
#[must_use]
pub fn glitch_start() -> StylePatch {
    StylePatch::new().set("animation", "retroGlitch 0.3s ease")
}

#[must_use]
pub fn glitch_clear() -> StylePatch {
    StylePatch::new().clear("animation")
}
