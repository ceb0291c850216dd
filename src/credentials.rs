use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::LlmConfig;

/// File name of the per-user API key under `<home>/.config/chatpane/`.
pub const API_KEY_FILE: &str = "apikey.txt";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("API key file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read API key file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("no API key configured")]
    NotConfigured,
}

/// Location of the key file under the given home directory.
pub fn api_key_path(home: &Path) -> PathBuf {
    home.join(".config").join("chatpane").join(API_KEY_FILE)
}

/// Read the API key from `<home>/.config/chatpane/apikey.txt`.
///
/// The file content is trimmed of surrounding whitespace so an
/// editor-appended trailing newline does not end up inside the key. The key
/// is read fresh on every call and never cached. An empty file yields
/// `Ok("")`, which callers can tell apart from a missing file.
pub fn read_api_key(home: &Path) -> Result<String, CredentialError> {
    let path = api_key_path(home);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(content.trim().to_string()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CredentialError::NotFound { path })
        }
        Err(source) => Err(CredentialError::Io { path, source }),
    }
}

/// Read the API key from the current user's home directory.
pub fn read_api_key_from_home() -> Result<String, CredentialError> {
    let home = dirs::home_dir().ok_or(CredentialError::NoHomeDir)?;
    read_api_key(&home)
}

/// Resolve the API key for the chat service.
///
/// Precedence: explicit config value, then the `OPENAI_API_KEY` environment
/// variable, then the key file under `home`. An exhausted chain reports
/// `NotConfigured` so the host can fall back to prompting the user.
pub fn resolve_api_key(config: &LlmConfig, home: &Path) -> Result<String, CredentialError> {
    if let Some(key) = &config.api_key {
        debug!("using API key from config");
        return Ok(key.clone());
    }

    if let Ok(key) = env::var("OPENAI_API_KEY") {
        debug!("using API key from environment");
        return Ok(key);
    }

    match read_api_key(home) {
        Ok(key) => Ok(key),
        Err(CredentialError::NotFound { .. }) => Err(CredentialError::NotConfigured),
        Err(err) => Err(err),
    }
}
