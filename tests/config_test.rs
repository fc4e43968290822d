// tests/config_test.rs
use release_level::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.artifact.name, "artifact");
    assert_eq!(config.artifact.pattern, "{name}-{version}-{template}");
    assert!(config.behavior.warnings);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[artifact]
name = "nucleus"
pattern = "{name}-{version}-{suffix}-{template}"

[behavior]
warnings = false
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.artifact.name, "nucleus");
    assert_eq!(config.artifact.pattern, "{name}-{version}-{suffix}-{template}");
    assert!(!config.behavior.warnings);
}

#[test]
fn test_load_missing_custom_path_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_config(Some(missing.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_load_invalid_pattern_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[artifact]\npattern = \"{name}-{build}\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Pattern error"));
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[artifact]\nname = \"local\"\n",
    )
    .unwrap();

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().artifact.name, "local");
}
