//! Webring buttons, collected from standalone `*button*.html` files.
//!
//! Each file is a self-contained preview page for one button. Only the first
//! `<a class="webring-button">` and the page's `<style>` blocks are lifted
//! into the manual; everything else in the file is ignored.

#[cfg(test)]
#[path = "buttons_test.rs"]
mod buttons_test;

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::BuildError;

/// Pages that live next to the buttons but are not buttons.
const NOT_BUTTONS: [&str; 2] = ["index.html", "template.html"];

const BUTTON_SEPARATOR: &str = "\n                ";

/// Combined markup and styles for every button file found.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ButtonBundle {
    pub html: String,
    pub styles: String,
    pub files: Vec<String>,
}

/// What one button file contributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extracted {
    pub button: Option<String>,
    pub styles: String,
}

pub struct Extractor {
    button: Regex,
    style: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self, BuildError> {
        Ok(Self {
            button: Regex::new(r#"(?is)<a[^>]*class=["']webring-button["'][^>]*>.*?</a>"#)?,
            style: Regex::new(r"(?is)<style[^>]*>(.*?)</style>")?,
        })
    }

    #[must_use]
    pub fn extract(&self, file_name: &str, content: &str) -> Extracted {
        let button = self.button.find(content).map(|m| m.as_str().to_owned());
        let styles = self
            .style
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|body| format!("\n/* Styles from {file_name} */\n{}", body.as_str()))
            .collect();
        Extracted { button, styles }
    }
}

#[must_use]
pub fn is_button_file(name: &str) -> bool {
    name.contains("button")
        && Path::new(name).extension().is_some_and(|ext| ext == "html")
        && !NOT_BUTTONS.contains(&name)
}

/// Button files in `dir`, sorted by name.
fn button_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "could not list button directory");
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.file_name().and_then(|n| n.to_str()).is_some_and(is_button_file))
        .collect();
    files.sort();
    files
}

pub fn collect(dir: &Path) -> Result<ButtonBundle, BuildError> {
    let files = button_files(dir);
    if files.is_empty() {
        tracing::info!(dir = %dir.display(), "no button files found (looking for *button*.html)");
        return Ok(ButtonBundle::default());
    }

    let extractor = Extractor::new()?;
    let mut buttons = Vec::new();
    let mut styles = Vec::new();
    let mut names = Vec::new();
    for path in &files {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "could not read button file");
                continue;
            }
        };
        let extracted = extractor.extract(&name, &content);
        match extracted.button {
            Some(button) => buttons.push(button),
            None => tracing::warn!(file = %path.display(), "no webring-button found"),
        }
        if !extracted.styles.is_empty() {
            styles.push(extracted.styles);
        }
        names.push(name);
    }
    tracing::info!(files = ?names, "collected buttons");

    Ok(ButtonBundle { html: buttons.join(BUTTON_SEPARATOR), styles: styles.join("\n"), files: names })
}
