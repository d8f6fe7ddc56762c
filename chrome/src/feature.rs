//! The features the controller installs and the anchors each one needs.
//!
//! A feature whose anchors are not all on the page is skipped before it
//! touches the document. Features with no anchors always install; their
//! selectors may match nothing, which wires nothing.

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;

use crate::consts::{BACKGROUND_ID, LOGO_SELECTOR, MAIN_HEADER_SELECTOR, REVEAL_SELECTOR, STICKY_HEADER_ID, YEAR_ID};

/// An element a feature looks up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Id(&'static str),
    Selector(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Stylesheet,
    StickyHeader,
    LogoLinks,
    HoverEffects,
    LogoGlitch,
    ScrollReveal,
    ProgressBar,
    ScrollSettle,
    KeyboardShortcuts,
    Background,
    Parallax,
    YearStamp,
}

impl Feature {
    /// Install order.
    pub const ALL: [Self; 12] = [
        Self::Stylesheet,
        Self::StickyHeader,
        Self::LogoLinks,
        Self::HoverEffects,
        Self::LogoGlitch,
        Self::ScrollReveal,
        Self::ProgressBar,
        Self::ScrollSettle,
        Self::KeyboardShortcuts,
        Self::Background,
        Self::Parallax,
        Self::YearStamp,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Stylesheet => "stylesheet",
            Self::StickyHeader => "sticky header",
            Self::LogoLinks => "logo links",
            Self::HoverEffects => "hover effects",
            Self::LogoGlitch => "logo glitch",
            Self::ScrollReveal => "scroll reveal",
            Self::ProgressBar => "progress bar",
            Self::ScrollSettle => "scroll settle",
            Self::KeyboardShortcuts => "keyboard shortcuts",
            Self::Background => "background",
            Self::Parallax => "parallax",
            Self::YearStamp => "year stamp",
        }
    }

    /// Anchors that must all be present.
    #[must_use]
    pub fn anchors(self) -> &'static [Anchor] {
        match self {
            Self::StickyHeader => &[Anchor::Id(STICKY_HEADER_ID), Anchor::Selector(MAIN_HEADER_SELECTOR)],
            Self::LogoGlitch => &[Anchor::Selector(LOGO_SELECTOR)],
            Self::ScrollReveal => &[Anchor::Selector(REVEAL_SELECTOR)],
            Self::Background | Self::Parallax => &[Anchor::Id(BACKGROUND_ID)],
            Self::YearStamp => &[Anchor::Id(YEAR_ID)],
            Self::Stylesheet
            | Self::LogoLinks
            | Self::HoverEffects
            | Self::ProgressBar
            | Self::ScrollSettle
            | Self::KeyboardShortcuts => &[],
        }
    }

    /// First required anchor `present` reports absent.
    pub fn missing_anchor(self, present: impl Fn(Anchor) -> bool) -> Option<Anchor> {
        self.anchors().iter().copied().find(|&anchor| !present(anchor))
    }
}
