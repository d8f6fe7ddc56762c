//! Keyboard shortcuts: `Ctrl+↑` jumps to the top, `Ctrl+↓` to the bottom.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ScrollTop,
    ScrollBottom,
}

impl Shortcut {
    /// Match a `keydown` by its `key` value and Control state.
    #[must_use]
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key {
            "ArrowUp" => Some(Self::ScrollTop),
            "ArrowDown" => Some(Self::ScrollBottom),
            _ => None,
        }
    }

    /// Vertical offset to smooth-scroll to.
    #[must_use]
    pub fn target(self, doc_height: f64) -> f64 {
        match self {
            Self::ScrollTop => 0.0,
            Self::ScrollBottom => doc_height.max(0.0),
        }
    }
}
