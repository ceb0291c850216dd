use chatpane::credentials::{self, CredentialError};
use chatpane::{Config, LlmConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_api_key_from_empty_home() {
    // Home dir with no config folder at all
    let home = TempDir::new().unwrap();

    let result = credentials::read_api_key(home.path());

    assert!(
        matches!(result, Err(CredentialError::NotFound { .. })),
        "missing key file should be a distinguishable NotFound error"
    );
}

#[test]
fn test_read_api_key_end_to_end() {
    let home = TempDir::new().unwrap();
    let conf = home.path().join(".config").join("chatpane");
    fs::create_dir_all(&conf).unwrap();
    fs::write(conf.join("apikey.txt"), "secret").unwrap();

    let key = credentials::read_api_key(home.path()).unwrap();

    assert_eq!(key, "secret");
}

#[test]
fn test_read_api_key_is_not_cached() {
    // The key is read fresh on every call, so a changed file is picked up
    let home = TempDir::new().unwrap();
    let conf = home.path().join(".config").join("chatpane");
    fs::create_dir_all(&conf).unwrap();

    fs::write(conf.join("apikey.txt"), "first-key").unwrap();
    assert_eq!(credentials::read_api_key(home.path()).unwrap(), "first-key");

    fs::write(conf.join("apikey.txt"), "second-key").unwrap();
    assert_eq!(credentials::read_api_key(home.path()).unwrap(), "second-key");
}

#[test]
fn test_error_distinguishes_missing_from_empty() {
    let home = TempDir::new().unwrap();

    // No key configured
    assert!(credentials::read_api_key(home.path()).is_err());

    // Empty key configured
    let conf = home.path().join(".config").join("chatpane");
    fs::create_dir_all(&conf).unwrap();
    fs::write(conf.join("apikey.txt"), "\n").unwrap();

    assert_eq!(credentials::read_api_key(home.path()).unwrap(), "");
}

#[test]
fn test_resolve_api_key_config_precedence() {
    let home = TempDir::new().unwrap();
    let conf = home.path().join(".config").join("chatpane");
    fs::create_dir_all(&conf).unwrap();
    fs::write(conf.join("apikey.txt"), "file-key").unwrap();

    let config: Config = serde_json::from_str(r#"{"llm": {"api_key": "config-key"}}"#).unwrap();
    let llm = config.llm.unwrap();

    let key = credentials::resolve_api_key(&llm, home.path()).unwrap();

    assert_eq!(key, "config-key");
}

#[test]
fn test_resolve_api_key_reports_not_configured() {
    if std::env::var("OPENAI_API_KEY").is_ok() {
        // Environment provides a key; the exhausted-chain case is unreachable here
        return;
    }

    let home = TempDir::new().unwrap();

    let result = credentials::resolve_api_key(&LlmConfig::default(), home.path());

    assert!(matches!(result, Err(CredentialError::NotConfigured)));
}
