//! Style patches: the unit of every inline style mutation.
//!
//! Handlers never touch `element.style` directly. They compute a
//! [`StylePatch`] from the event and current state, and [`crate::dom::apply`]
//! writes it. That keeps the event → style mapping testable without a document.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// A single property change within a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// Set the property to this value.
    Set(String),
    /// Remove the inline property so the stylesheet value applies again.
    Clear,
}

/// Ordered set of CSS property changes for one element.
///
/// Property names are CSS (kebab-case) names. Setting the same property twice
/// replaces the earlier entry in place, so a patch never carries duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    entries: Vec<(&'static str, StyleValue)>,
}

impl StylePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.put(property, StyleValue::Set(value.into()));
        self
    }

    #[must_use]
    pub fn clear(mut self, property: &'static str) -> Self {
        self.put(property, StyleValue::Clear);
        self
    }

    fn put(&mut self, property: &'static str, value: StyleValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == property) {
            slot.1 = value;
        } else {
            self.entries.push((property, value));
        }
    }

    /// Look up the change recorded for a property.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// The value a property is set to, or `None` when it is cleared or untouched.
    #[must_use]
    pub fn value(&self, property: &str) -> Option<&str> {
        match self.get(property)? {
            StyleValue::Set(v) => Some(v.as_str()),
            StyleValue::Clear => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a pixel length the way the page expects (`12.5px`).
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[must_use]
pub fn pct(value: f64) -> String {
    format!("{value}%")
}

#[must_use]
pub fn secs(value: f64) -> String {
    format!("{value}s")
}
