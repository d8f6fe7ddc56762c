//! Error type for the browser-facing half of the crate.
//!
//! Missing anchors are not errors; initializers skip them. These variants cover
//! the cases where the browser itself refused an operation.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid chrome config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for ChromeError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
