use super::*;
use crate::test_support::TempDir;

const TEMPLATE: &str = "<html>\n<head>\n<title>Manual</title>\n</head>\n<body>\n<div class=\"logo\">{{FAVICON_SVG}}</div>\n<main class=\"manual-content\">{{MARKDOWN_CONTENT}}</main>\n<footer>{{BUTTON_CONTENT}}</footer>\n</body>\n</html>\n";

fn options(dir: &TempDir) -> BuildOptions {
    BuildOptions {
        markdown: dir.path().join("Echo-Bridge.md"),
        output: dir.path().join("index.html"),
        template: dir.path().join("template.html"),
        css: dir.path().join("styles.css"),
        favicon: dir.path().join("favicon.svg"),
        buttons_dir: dir.path().to_path_buf(),
    }
}

#[test]
fn full_build() {
    let dir = TempDir::new();
    dir.write("Echo-Bridge.md", "# Echo Bridge\n\n## Controls\n\n| Knob | Use |\n|---|---|\n| Mix | Blend |\n");
    dir.write("template.html", TEMPLATE);
    dir.write("styles.css", "body {}");
    dir.write("favicon.svg", "<svg width=\"16\" height=\"16\"></svg>");
    dir.write("echo-button.html", "<style>.webring-button{}</style><a class=\"webring-button\">Echo</a>");

    let report = build(&options(&dir)).unwrap();
    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();

    assert!(html.contains(r#"<h2 id="controls">Controls</h2>"#));
    assert!(html.contains("<td>Blend</td>"));
    assert!(html.contains(r#"<div class="logo"><svg viewBox="0 0 16 16" width="16" height="16"></svg></div>"#));
    assert!(html.contains(r#"<footer><a class="webring-button">Echo</a></footer>"#));
    assert!(html.contains("<!-- Button Styles -->"));
    assert!(html.find("/* Styles from echo-button.html */").unwrap() < html.find("</head>").unwrap());
    assert!(!html.contains("{{"));

    assert!(report.css_found);
    assert_eq!(report.buttons, vec!["echo-button.html"]);
    assert_eq!(report.favicon, Some(dir.path().join("favicon.svg")));
    assert_eq!(report.bytes, html.len());
}

#[test]
fn optional_inputs_missing() {
    let dir = TempDir::new();
    dir.write("Echo-Bridge.md", "Hello\n");
    dir.write("template.html", TEMPLATE);

    let report = build(&options(&dir)).unwrap();
    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();

    assert!(html.contains(r#"<div class="logo">LUFS</div>"#));
    assert!(html.contains("<footer></footer>"));
    assert!(!html.contains("Button Styles"));
    assert!(!report.css_found);
    assert!(report.buttons.is_empty());
    assert_eq!(report.favicon, None);
}

#[test]
fn missing_markdown_is_an_error() {
    let dir = TempDir::new();
    dir.write("template.html", TEMPLATE);
    let err = build(&options(&dir)).unwrap_err();
    assert!(matches!(err, BuildError::MissingInput { ref path } if path.ends_with("Echo-Bridge.md")));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn missing_template_is_an_error() {
    let dir = TempDir::new();
    dir.write("Echo-Bridge.md", "Hello\n");
    let err = build(&options(&dir)).unwrap_err();
    assert!(matches!(err, BuildError::MissingInput { ref path } if path.ends_with("template.html")));
}

#[test]
fn unwritable_output_is_a_write_error() {
    let dir = TempDir::new();
    dir.write("Echo-Bridge.md", "Hello\n");
    dir.write("template.html", TEMPLATE);
    let mut opts = options(&dir);
    opts.output = dir.path().join("no-such-dir").join("index.html");
    assert!(matches!(build(&opts), Err(BuildError::Write { .. })));
}

#[test]
fn report_summary_mentions_missing_css() {
    let report = BuildReport {
        markdown: PathBuf::from("Echo-Bridge.md"),
        output: PathBuf::from("index.html"),
        css: PathBuf::from("styles.css"),
        css_found: false,
        buttons: vec!["a-button.html".into()],
        favicon: None,
        bytes: 42,
    };
    let text = report.to_string();
    assert!(text.contains("index.html (42 bytes)"));
    assert!(text.contains("styles.css (missing)"));
    assert!(text.contains("buttons:  a-button.html"));
    assert!(!text.contains("favicon"));
}
