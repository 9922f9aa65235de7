// SPDX-License-Identifier: MPL-2.0
use faktura_lens::app::config::{self, Config, GeneralConfig};
use faktura_lens::i18n::fluent::I18n;
use faktura_lens::i18n::format;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to cs
    let czech_config = Config {
        general: GeneralConfig {
            language: Some("cs".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&czech_config, &temp_config_file_path)
        .expect("Failed to write czech config file");

    // Load i18n with czech config
    let loaded_czech_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load czech config from path");
    let i18n_cs = I18n::new(None, &loaded_czech_config);
    assert_eq!(i18n_cs.current_locale().to_string(), "cs");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("cs".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_request_error_message_localizes_status_code() {
    let mut i18n = I18n::default();

    i18n.set_locale("en-US".parse().expect("valid locale"));
    let english = i18n.tr_with_args("notification-request-error", &[("status", "502")]);
    assert!(english.contains("502"));

    i18n.set_locale("cs".parse().expect("valid locale"));
    let czech = i18n.tr_with_args("notification-request-error", &[("status", "502")]);
    assert!(czech.contains("502"));
    assert_ne!(english, czech, "locales should produce different text");
}

#[test]
fn test_formatters_match_czech_conventions_end_to_end() {
    // Amounts and dates as they arrive from the service's JSON
    assert_eq!(
        format::format_currency(Some(1234.5), "CZK"),
        "1\u{a0}234,50\u{a0}Kč"
    );
    assert_eq!(format::format_currency(None, "CZK"), "N/A");
    assert_eq!(format::format_date(Some("2024-03-05T00:00:00Z")), "5. 3. 2024");
    assert_eq!(format::format_date(None), "N/A");
}
