//! Unit tests for settings files.

use jrk_g2::{load_settings, save_settings, settings_from_str, settings_to_string, Product, Settings};
use proptest::prelude::*;

use super::arb_settings;

proptest! {
    /// Writing settings and reading them back loses nothing.
    #[test]
    fn prop_text_round_trip(settings in arb_settings()) {
        let text = settings_to_string(&settings).unwrap();
        prop_assert_eq!(settings_from_str(&text).unwrap(), settings);
    }

    /// Parsing never panics on arbitrary input.
    #[test]
    fn prop_parse_garbage(text in "\\PC*") {
        let _ = settings_from_str(&text);
    }
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("jrk-g2-settings-{}.toml", std::process::id()));

    let mut settings = Settings::with_defaults(Product::Umc06a);
    settings.set_soft_current_limit_forward(1500);
    settings.set_pid_period(15);
    save_settings(&path, &settings).unwrap();

    let loaded = load_settings(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("jrk-g2-no-such-settings.toml");
    let err = load_settings(&path).unwrap_err();
    assert!(matches!(
        err,
        jrk_g2::Error::Settings(jrk_g2::error::SettingsError::Io(_))
    ));
}

#[test]
fn test_comments_and_order_ignored() {
    let text = "# hand edited\npid_period = 30\nproduct = \"umc04a_40v\"\n";
    let settings = settings_from_str(text).unwrap();
    assert_eq!(settings.product(), Some(Product::Umc04a40v));
    assert_eq!(settings.pid_period(), 30);
    assert_eq!(settings.input_maximum(), 0);
}
