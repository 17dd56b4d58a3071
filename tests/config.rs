use zenboard::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.icon_theme, "ascii");
    assert!(config.ui.confirm_delete);
    assert_eq!(config.remote.table, "tasks");
    assert_eq!(config.remote.api_key_env, "ZENBOARD_STORE_KEY");
    assert_eq!(config.ai.model, "gemini-3-flash-preview");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid icon theme should fail
    config.ui.icon_theme = "nerdfont".to_string();
    assert!(config.validate().is_err());

    // Reset and test a bad remote URL
    config.ui.icon_theme = "unicode".to_string();
    config.remote.url = "ftp://example".to_string();
    assert!(config.validate().is_err());

    // Reset and test an empty table name
    config.remote.url = "https://example.supabase.co".to_string();
    config.remote.table = String::new();
    assert!(config.validate().is_err());

    config.remote.table = "tasks".to_string();
    config.ai.model = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("icon_theme = \"ascii\""));
    assert!(toml_str.contains("api_key_env = \"ZENBOARD_STORE_KEY\""));
    assert!(toml_str.contains("model = \"gemini-3-flash-preview\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[remote]
url = "https://myproject.supabase.co"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Specified values are used
    assert_eq!(config.remote.url, "https://myproject.supabase.co");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.remote.table, "tasks");
    assert_eq!(config.ui.icon_theme, "ascii");
    assert!(config.ui.confirm_delete);
    assert_eq!(config.ai.api_key_env, "ZENBOARD_AI_KEY");
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.icon_theme, default_config.ui.icon_theme);
    assert_eq!(config.remote.api_key_env, default_config.remote.api_key_env);
    assert_eq!(config.ai.model, default_config.ai.model);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}
