use cookie_consent::config::{Config, ConfigError, Easing, DEFAULT_PROMPT};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.categories.len(), 3);
    assert!(config.host.dismiss_on_commit);
    assert_eq!(config.dialog.collapsed_text(), DEFAULT_PROMPT);
}

#[test]
fn full_config_parses() {
    let (_dir, path) = write_config(
        r#"[dialog]
app_id = "shop"
small_text = "We use cookies"
large_text = "Choose which cookies we may use"
image = "assets/cookie.png"
privacy_policy_url = "https://example.com/privacy"

[[categories]]
id = "analytics"
label = "Analytics"
description = "Usage statistics"

[[categories]]
id = "marketing"
label = "Marketing"

[storage]
path = "/tmp/consents.json"

[transition]
duration_ms = 200
easing = "linear"

[host]
dismiss_on_commit = false
tick_rate_ms = 20
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.dialog.app_id, "shop");
    assert_eq!(config.dialog.collapsed_text(), "We use cookies");
    assert_eq!(config.dialog.expanded_text(), "Choose which cookies we may use");
    assert_eq!(config.categories.len(), 2);
    assert_eq!(
        config.cookie_categories()[0].description.as_deref(),
        Some("Usage statistics")
    );
    assert_eq!(config.transition.easing, Easing::Linear);
    assert!(!config.host.dismiss_on_commit);
    assert_eq!(config.host.tick_rate(), Duration::from_millis(20));
}

#[test]
fn omitted_sections_use_defaults() {
    let (_dir, path) = write_config(
        r#"[dialog]
app_id = "blog"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.categories.len(), 3);
    assert_eq!(config.transition.duration_ms, 400);
    assert_eq!(config.transition.easing, Easing::EaseOut);
    assert!(config.storage.path.is_none());
}

#[test]
fn duplicate_category_ids_are_rejected() {
    let (_dir, path) = write_config(
        r#"[dialog]
app_id = "shop"

[[categories]]
id = "analytics"
label = "Analytics"

[[categories]]
id = "analytics"
label = "Analytics again"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Duplicate category id 'analytics'"));
}

#[test]
fn blank_app_id_is_rejected() {
    let (_dir, path) = write_config(
        r#"[dialog]
app_id = "  "
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn empty_category_list_is_rejected() {
    let (_dir, path) = write_config(
        r#"categories = []

[dialog]
app_id = "shop"
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn malformed_toml_reports_path() {
    let (_dir, path) = write_config("[dialog\napp_id = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn transition_progress_is_clamped_and_eased() {
    let (_dir, path) = write_config(
        r#"[dialog]
app_id = "shop"

[transition]
duration_ms = 100
easing = "ease_out"
"#,
    );
    let transition = Config::load_from(&path).unwrap().transition;
    assert_eq!(transition.progress(Duration::ZERO), 0.0);
    assert_eq!(transition.progress(Duration::from_secs(5)), 1.0);
    let half = transition.progress(Duration::from_millis(50));
    assert!(half > 0.5 && half < 1.0, "ease-out is ahead of linear: {half}");
}

#[test]
fn missing_dialog_section_uses_default_app_id() {
    let (_dir, path) = write_config(
        r#"[[categories]]
id = "analytics"
label = "Analytics"

[host]
dismiss_on_commit = false
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.dialog.app_id, "default");
    assert_eq!(config.dialog.collapsed_text(), DEFAULT_PROMPT);
    assert_eq!(config.categories.len(), 1);
    assert!(!config.host.dismiss_on_commit);
}

#[test]
fn dialog_section_without_app_id_uses_default() {
    let (_dir, path) = write_config(
        r#"[dialog]
small_text = "We use cookies"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.dialog.app_id, "default");
    assert_eq!(config.dialog.collapsed_text(), "We use cookies");
}
