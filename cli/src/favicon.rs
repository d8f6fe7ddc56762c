//! Inline favicon SVG for the logo slots.

#[cfg(test)]
#[path = "favicon_test.rs"]
mod favicon_test;

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::BuildError;

/// Logo text used when no usable favicon exists.
pub const FALLBACK: &str = "LUFS";

/// Favicon markup ready for the template, and whether the file was used.
#[derive(Debug, PartialEq, Eq)]
pub struct Favicon {
    pub markup: String,
    pub from_file: bool,
}

impl Favicon {
    fn fallback() -> Self {
        Self { markup: FALLBACK.to_owned(), from_file: false }
    }
}

pub fn load(path: &Path) -> Result<Favicon, BuildError> {
    if !path.exists() {
        tracing::warn!(file = %path.display(), "favicon not found; using fallback text logo");
        return Ok(Favicon::fallback());
    }
    match fs::read_to_string(path) {
        Ok(svg) => Ok(Favicon { markup: prepare(&svg)?, from_file: true }),
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "could not read favicon; using fallback text logo");
            Ok(Favicon::fallback())
        }
    }
}

/// Strip the XML declaration and give the root `<svg>` a `viewBox` when it
/// only carries `width`/`height`, so it scales inside the logo box.
pub fn prepare(svg: &str) -> Result<String, BuildError> {
    let declaration = Regex::new(r"<\?xml[^>]*\?>")?;
    let svg = declaration.replace_all(svg, "");
    let svg = svg.trim();

    let open_tag = Regex::new(r"(?i)<svg\b[^>]*")?;
    let Some(tag) = open_tag.find(svg) else {
        return Ok(svg.to_owned());
    };
    if tag.as_str().contains("viewBox") {
        return Ok(svg.to_owned());
    }
    let (Some(width), Some(height)) = (dimension(tag.as_str(), "width")?, dimension(tag.as_str(), "height")?) else {
        return Ok(svg.to_owned());
    };

    let insert_at = tag.start() + "<svg".len();
    Ok(format!(r#"{} viewBox="0 0 {width} {height}"{}"#, &svg[..insert_at], &svg[insert_at..]))
}

/// Attribute value with any unit suffix (`px`, `%`, `em`) removed.
fn dimension(tag: &str, attribute: &str) -> Result<Option<String>, BuildError> {
    let pattern = Regex::new(&format!(r#"\s{attribute}\s*=\s*["']([^"']+)["']"#))?;
    Ok(pattern
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().chars().filter(|c| !c.is_ascii_alphabetic() && *c != '%').collect()))
}
