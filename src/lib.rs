// Library interface for chatpane
// This exposes modules for the host driver and integration testing

pub mod config;
pub mod credentials;
pub mod history;
pub mod logging;
pub mod panel;
pub mod properties;

// Re-export commonly used types for easier testing
pub use config::{Config, LlmConfig, LlmProvider};
pub use credentials::{CredentialError, api_key_path, read_api_key, resolve_api_key};
pub use history::{ChatRecord, MessageRole, Transcript};
pub use panel::{ChatPanel, PROP_MODEL};
pub use properties::PropertyBag;
