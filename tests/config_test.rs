//! Integration tests for Settings loading.
//!
//! These run with whatever global config exists on the machine; the assertions
//! only cover fields set by the explicit file.

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use pricetree::config::{RenderStyle, Settings};

#[rstest]
#[case("style = \"tree\"\nindent = 3\n", RenderStyle::Tree, 3)]
#[case("style = \"plain\"\nindent = 0\n", RenderStyle::Plain, 0)]
fn given_explicit_config_when_load_then_values_applied(
    #[case] content: &str,
    #[case] style: RenderStyle,
    #[case] indent: usize,
) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pricetree.toml");
    fs::write(&path, content).unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.style, style);
    assert_eq!(settings.indent, indent);
}

#[test]
fn given_missing_explicit_config_when_load_then_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(result.is_err());
}

#[test]
fn given_malformed_config_when_load_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "style = \"sideways\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_settings_when_serializing_then_toml_round_trips() {
    let settings = Settings {
        style: RenderStyle::Tree,
        indent: 2,
    };

    let text = settings.to_toml().unwrap();
    let parsed: Settings = toml::from_str(&text).unwrap();

    assert!(text.contains("style = \"tree\""));
    assert_eq!(parsed, settings);
}
