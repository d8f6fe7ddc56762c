//! Manual build pipeline.
//!
//! ARCHITECTURE
//! ============
//! Inputs are checked up front: the Markdown source and the template are
//! required, the stylesheet is only looked for so a missing one can be
//! reported. The body, the button bundle, and the favicon are then produced
//! independently and meet in [`template::fill`]. Button styles go in last so
//! they land in the filled document's `<head>`.

#[cfg(test)]
#[path = "manual_test.rs"]
mod manual_test;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::buttons;
use crate::error::BuildError;
use crate::favicon;
use crate::markdown;
use crate::template::{self, Fill};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub markdown: PathBuf,
    pub output: PathBuf,
    pub template: PathBuf,
    pub css: PathBuf,
    pub favicon: PathBuf,
    pub buttons_dir: PathBuf,
}

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub markdown: PathBuf,
    pub output: PathBuf,
    pub css: PathBuf,
    pub css_found: bool,
    pub buttons: Vec<String>,
    pub favicon: Option<PathBuf>,
    pub bytes: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "manual built")?;
        writeln!(f, "  markdown: {}", self.markdown.display())?;
        writeln!(f, "  output:   {} ({} bytes)", self.output.display(), self.bytes)?;
        let css_note = if self.css_found { "" } else { " (missing)" };
        write!(f, "  styling:  {}{css_note}", self.css.display())?;
        if !self.buttons.is_empty() {
            write!(f, "\n  buttons:  {}", self.buttons.join(", "))?;
        }
        if let Some(favicon) = &self.favicon {
            write!(f, "\n  favicon:  {}", favicon.display())?;
        }
        Ok(())
    }
}

fn require(path: &Path) -> Result<(), BuildError> {
    if path.exists() { Ok(()) } else { Err(BuildError::MissingInput { path: path.to_path_buf() }) }
}

fn read(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Read { path: path.to_path_buf(), source })
}

pub fn build(options: &BuildOptions) -> Result<BuildReport, BuildError> {
    require(&options.markdown)?;
    require(&options.template)?;
    let css_found = options.css.exists();
    if !css_found {
        tracing::warn!(file = %options.css.display(), "stylesheet not found; the manual will render unstyled");
    }

    tracing::info!(source = %options.markdown.display(), output = %options.output.display(), "building manual");
    let body = markdown::render(&read(&options.markdown)?);
    let template = read(&options.template)?;
    let bundle = buttons::collect(&options.buttons_dir)?;
    let favicon = favicon::load(&options.favicon)?;

    let filled = template::fill(
        &template,
        Fill { markdown: &body, buttons: &bundle.html, favicon: &favicon.markup },
    );
    let html = template::inject_styles(&filled, &bundle.styles);

    fs::write(&options.output, &html)
        .map_err(|source| BuildError::Write { path: options.output.clone(), source })?;

    Ok(BuildReport {
        markdown: options.markdown.clone(),
        output: options.output.clone(),
        css: options.css.clone(),
        css_found,
        buttons: if bundle.html.is_empty() { Vec::new() } else { bundle.files },
        favicon: favicon.from_file.then(|| options.favicon.clone()),
        bytes: html.len(),
    })
}
