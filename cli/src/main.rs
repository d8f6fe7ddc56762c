//! `manual-cli` builds the manual page from Markdown, a template, button
//! snippets, and a favicon.

mod buttons;
mod error;
mod favicon;
mod manual;
mod markdown;
mod template;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use clap::Parser;

use crate::error::BuildError;
use crate::manual::BuildOptions;

#[derive(Parser, Debug)]
#[command(name = "manual-cli", about = "Build the manual HTML page from Markdown")]
struct Cli {
    /// Markdown source.
    #[arg(default_value = "Echo-Bridge.md")]
    markdown: PathBuf,

    /// Generated page.
    #[arg(default_value = "index.html")]
    output: PathBuf,

    #[arg(long, env = "MANUAL_TEMPLATE", default_value = "template.html")]
    template: PathBuf,

    /// Checked for existence only; the template links it.
    #[arg(long, env = "MANUAL_CSS", default_value = "styles.css")]
    css: PathBuf,

    #[arg(long, env = "MANUAL_FAVICON", default_value = "favicon.svg")]
    favicon: PathBuf,

    /// Directory searched for `*button*.html` files.
    #[arg(long, env = "MANUAL_BUTTONS_DIR", default_value = ".")]
    buttons_dir: PathBuf,
}

impl From<Cli> for BuildOptions {
    fn from(cli: Cli) -> Self {
        Self {
            markdown: cli.markdown,
            output: cli.output,
            template: cli.template,
            css: cli.css,
            favicon: cli.favicon,
            buttons_dir: cli.buttons_dir,
        }
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt::init();

    let options = BuildOptions::from(Cli::parse());
    match manual::build(&options) {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "manual build failed");
            Err(e)
        }
    }
}
