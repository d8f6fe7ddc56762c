use super::*;

#[test]
fn new_patch_is_empty() {
    let patch = StylePatch::new();
    assert!(patch.is_empty());
    assert_eq!(patch.len(), 0);
}

#[test]
fn set_records_value() {
    let patch = StylePatch::new().set("opacity", "1");
    assert_eq!(patch.value("opacity"), Some("1"));
    assert_eq!(patch.get("opacity"), Some(&StyleValue::Set("1".into())));
}

#[test]
fn clear_records_removal() {
    let patch = StylePatch::new().clear("transform");
    assert_eq!(patch.get("transform"), Some(&StyleValue::Clear));
    assert_eq!(patch.value("transform"), None);
}

#[test]
fn untouched_property_is_none() {
    let patch = StylePatch::new().set("opacity", "0");
    assert_eq!(patch.get("transform"), None);
}

#[test]
fn setting_twice_replaces_in_place() {
    let patch = StylePatch::new()
        .set("transform", "translateX(2px)")
        .set("opacity", "1")
        .clear("transform");
    assert_eq!(patch.len(), 2);
    let names: Vec<_> = patch.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["transform", "opacity"]);
    assert_eq!(patch.get("transform"), Some(&StyleValue::Clear));
}

#[test]
fn iteration_preserves_insertion_order() {
    let patch = StylePatch::new().set("width", "1px").set("height", "2px").set("left", "3%");
    let names: Vec<_> = patch.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["width", "height", "left"]);
}

#[test]
fn unit_formatters() {
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(8.0), "8px");
    assert_eq!(pct(50.0), "50%");
    assert_eq!(secs(0.25), "0.25s");
}
