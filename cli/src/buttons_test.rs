use super::*;
use crate::test_support::TempDir;

const BUTTON_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
.webring-button { color: lime; }
</style>
</head>
<body>
<a href="https://example.net" class="webring-button"><span class="sparkle"></span>Echo</a>
<a href="https://example.org" class="webring-button">Second</a>
<style>.sparkle { opacity: 0; }</style>
</body>
</html>
"#;

#[test]
fn button_file_names() {
    assert!(is_button_file("echo-button.html"));
    assert!(is_button_file("button.html"));
    assert!(!is_button_file("index.html"));
    assert!(!is_button_file("template.html"));
    assert!(!is_button_file("button.css"));
    assert!(!is_button_file("page.html"));
}

#[test]
fn extract_takes_first_button_only() {
    let extractor = Extractor::new().unwrap();
    let extracted = extractor.extract("echo-button.html", BUTTON_PAGE);
    assert_eq!(
        extracted.button.as_deref(),
        Some(r#"<a href="https://example.net" class="webring-button"><span class="sparkle"></span>Echo</a>"#)
    );
}

#[test]
fn extract_collects_every_style_block() {
    let extractor = Extractor::new().unwrap();
    let extracted = extractor.extract("echo-button.html", BUTTON_PAGE);
    assert_eq!(extracted.styles.matches("/* Styles from echo-button.html */").count(), 2);
    assert!(extracted.styles.contains(".webring-button { color: lime; }"));
    assert!(extracted.styles.contains(".sparkle { opacity: 0; }"));
}

#[test]
fn extract_is_case_insensitive_and_spans_lines() {
    let extractor = Extractor::new().unwrap();
    let page = "<A class='webring-button' href='#'>\nMulti\nLine\n</A>";
    let extracted = extractor.extract("b-button.html", page);
    assert_eq!(extracted.button.as_deref(), Some(page));
    assert!(extracted.styles.is_empty());
}

#[test]
fn extract_without_button() {
    let extractor = Extractor::new().unwrap();
    let extracted = extractor.extract("empty-button.html", "<p>nothing here</p>");
    assert_eq!(extracted, Extracted::default());
}

#[test]
fn collect_sorts_and_joins() {
    let dir = TempDir::new();
    dir.write("b-button.html", r#"<a class="webring-button">B</a>"#);
    dir.write("a-button.html", r#"<a class="webring-button">A</a><style>.a{}</style>"#);
    dir.write("index.html", r#"<a class="webring-button">index</a>"#);
    dir.write("notes.html", r#"<a class="webring-button">notes</a>"#);

    let bundle = collect(dir.path()).unwrap();
    assert_eq!(bundle.files, vec!["a-button.html", "b-button.html"]);
    assert_eq!(
        bundle.html,
        "<a class=\"webring-button\">A</a>\n                <a class=\"webring-button\">B</a>"
    );
    assert_eq!(bundle.styles, "\n/* Styles from a-button.html */\n.a{}");
}

#[test]
fn collect_joins_styles_from_several_files() {
    let dir = TempDir::new();
    dir.write("a-button.html", "<style>.a{}</style>");
    dir.write("b-button.html", "<style>.b{}</style>");

    let bundle = collect(dir.path()).unwrap();
    assert!(bundle.html.is_empty());
    assert_eq!(
        bundle.styles,
        "\n/* Styles from a-button.html */\n.a{}\n\n/* Styles from b-button.html */\n.b{}"
    );
}

#[test]
fn collect_empty_directory() {
    let dir = TempDir::new();
    assert_eq!(collect(dir.path()).unwrap(), ButtonBundle::default());
}

#[test]
fn collect_missing_directory_is_empty() {
    let dir = TempDir::new();
    assert_eq!(collect(&dir.path().join("absent")).unwrap(), ButtonBundle::default());
}
