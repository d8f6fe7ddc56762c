#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn ctrl_up_scrolls_top() {
    assert_eq!(Shortcut::from_key("ArrowUp", true), Some(Shortcut::ScrollTop));
}

#[test]
fn ctrl_down_scrolls_bottom() {
    assert_eq!(Shortcut::from_key("ArrowDown", true), Some(Shortcut::ScrollBottom));
}

#[test]
fn arrows_without_ctrl_are_ignored() {
    assert_eq!(Shortcut::from_key("ArrowUp", false), None);
    assert_eq!(Shortcut::from_key("ArrowDown", false), None);
}

#[test]
fn other_keys_are_ignored() {
    for key in ["ArrowLeft", "ArrowRight", "Home", "End", "PageUp", "a", ""] {
        assert_eq!(Shortcut::from_key(key, true), None, "{key}");
    }
}

#[test]
fn key_names_are_case_sensitive() {
    assert_eq!(Shortcut::from_key("arrowup", true), None);
}

#[test]
fn top_target_is_zero() {
    assert_eq!(Shortcut::ScrollTop.target(4200.0), 0.0);
}

#[test]
fn bottom_target_is_document_height() {
    assert_eq!(Shortcut::ScrollBottom.target(4200.0), 4200.0);
}

#[test]
fn bottom_target_never_negative() {
    assert_eq!(Shortcut::ScrollBottom.target(-1.0), 0.0);
}
