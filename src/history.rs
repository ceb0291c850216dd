use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
            MessageRole::System => write!(f, "system"),
        }
    }
}

/// One entry of a panel's chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: SystemTime,
}

impl ChatRecord {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// In-memory transcript of one panel, optionally bounded by a record limit.
///
/// When the limit is exceeded the oldest records are dropped first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    records: Vec<ChatRecord>,
    limit: Option<usize>,
}

impl Transcript {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.enforce_limit();
        self
    }

    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ChatRecord) {
        self.records.push(record);
        self.enforce_limit();
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit
            && self.records.len() > limit
        {
            let excess = self.records.len() - limit;
            self.records.drain(..excess);
        }
    }

    /// Load a transcript from disk. A missing file or blank content is an
    /// empty transcript.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let records = serde_json::from_str(&content)?;
        Ok(Self {
            records,
            limit: None,
        })
    }

    /// Write the transcript records as pretty JSON, creating parent
    /// directories as needed.
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Delete the transcript file if it exists.
    pub fn remove(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Default on-disk location of the transcript.
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chatpane")
        .join("history.json")
}
