use super::*;

#[test]
fn missing_attribute_is_default() {
    let cfg = ChromeConfig::from_attribute(None).unwrap();
    assert_eq!(cfg, ChromeConfig::default());
    assert_eq!(cfg.seed, None);
    assert!(!cfg.parallax);
    assert!(cfg.banner);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn blank_attribute_is_default() {
    assert_eq!(ChromeConfig::from_attribute(Some("   ")).unwrap(), ChromeConfig::default());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ChromeConfig::from_attribute(Some("{}")).unwrap(), ChromeConfig::default());
}

#[test]
fn partial_object_keeps_other_defaults() {
    let cfg = ChromeConfig::from_attribute(Some(r#"{"seed": 7}"#)).unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert!(!cfg.parallax);
    assert!(cfg.banner);
}

#[test]
fn full_object() {
    let cfg = ChromeConfig::from_attribute(Some(
        r#"{"seed": 99, "parallax": true, "log_level": "debug", "banner": false}"#,
    ))
    .unwrap();
    assert_eq!(cfg.seed, Some(99));
    assert!(cfg.parallax);
    assert!(!cfg.banner);
    assert_eq!(cfg.level(), log::Level::Debug);
}

#[test]
fn malformed_json_is_config_error() {
    let err = ChromeConfig::from_attribute(Some("{seed:")).unwrap_err();
    assert!(matches!(err, ChromeError::Config(_)));
    assert!(err.to_string().starts_with("invalid chrome config"));
}

#[test]
fn wrong_type_is_config_error() {
    let err = ChromeConfig::from_attribute(Some(r#"{"parallax": "yes"}"#)).unwrap_err();
    assert!(matches!(err, ChromeError::Config(_)));
}

#[test]
fn level_names_are_case_insensitive() {
    let cfg = ChromeConfig { log_level: "WARN".into(), ..ChromeConfig::default() };
    assert_eq!(cfg.level(), log::Level::Warn);
}

#[test]
fn unknown_level_falls_back_to_info() {
    let cfg = ChromeConfig { log_level: "chatty".into(), ..ChromeConfig::default() };
    assert_eq!(cfg.level(), log::Level::Info);
}
