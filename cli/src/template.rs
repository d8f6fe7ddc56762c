//! Template filling and style injection.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

pub const MARKDOWN_PLACEHOLDER: &str = "{{MARKDOWN_CONTENT}}";
pub const BUTTON_PLACEHOLDER: &str = "{{BUTTON_CONTENT}}";
pub const FAVICON_PLACEHOLDER: &str = "{{FAVICON_SVG}}";

/// Values substituted into the template.
#[derive(Debug, Clone, Copy)]
pub struct Fill<'a> {
    pub markdown: &'a str,
    pub buttons: &'a str,
    pub favicon: &'a str,
}

/// Replace every occurrence of each placeholder.
#[must_use]
pub fn fill(template: &str, values: Fill<'_>) -> String {
    template
        .replace(MARKDOWN_PLACEHOLDER, values.markdown)
        .replace(BUTTON_PLACEHOLDER, values.buttons)
        .replace(FAVICON_PLACEHOLDER, values.favicon)
}

/// Insert a `<style>` block before the last `</head>`.
///
/// Empty `styles` and documents without `</head>` come back unchanged; the
/// latter is logged since the buttons will render unstyled.
#[must_use]
pub fn inject_styles(html: &str, styles: &str) -> String {
    if styles.is_empty() {
        return html.to_owned();
    }
    let Some(at) = html.rfind("</head>") else {
        tracing::warn!("no </head> tag in template; button styles not injected");
        return html.to_owned();
    };
    let block = format!("\n    <!-- Button Styles -->\n    <style>\n{styles}\n    </style>\n");
    let mut out = String::with_capacity(html.len() + block.len());
    out.push_str(&html[..at]);
    out.push_str(&block);
    out.push_str(&html[at..]);
    out
}
