use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum LlmProvider {
    #[default]
    OpenAI,
}

impl FromStr for LlmProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LlmProvider::OpenAI),
            _ => Err(format!("Invalid LLM provider: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LlmConfig {
    pub provider: Option<LlmProvider>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl LlmConfig {
    /// Get the chat model to use, falling back to the stock default
    pub fn get_model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| "gpt-3.5-turbo".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub debug: Option<bool>,
    pub history_limit: Option<usize>,
    pub llm: Option<LlmConfig>,
}

impl Config {
    pub fn load() -> color_eyre::eyre::Result<Self> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the chat model to use for new panels
    pub fn get_model(&self) -> String {
        self.llm
            .as_ref()
            .map(LlmConfig::get_model)
            .unwrap_or_else(|| "gpt-3.5-turbo".to_string())
    }

    /// Get the transcript record limit with a sensible default
    pub fn get_history_limit(&self) -> usize {
        self.history_limit.unwrap_or(100)
    }

    fn get_config_path() -> PathBuf {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatpane")
            .join("config.json")
    }

    pub fn merge_with_args(&self, args: &Args) -> Self {
        let llm_config = self.llm.clone().unwrap_or_default();
        Self {
            debug: if args.debug { Some(true) } else { self.debug },
            history_limit: args.history_limit.or(self.history_limit),
            llm: Some(LlmConfig {
                provider: llm_config.provider,
                model: args.model.clone().or(llm_config.model),
                api_key: args.api_key.clone().or(llm_config.api_key),
                base_url: args.base_url.clone().or(llm_config.base_url),
            }),
        }
    }
}

#[derive(Debug, Clone, clap::Parser)]
pub struct Args {
    #[arg(short, long, help = "Print version information and exit")]
    pub version: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, help = "Chat model to select in the panel")]
    pub model: Option<String>,

    #[arg(long, help = "API key for the chat service")]
    pub api_key: Option<String>,

    #[arg(long, help = "Base URL for the chat service")]
    pub base_url: Option<String>,

    #[arg(
        long,
        help = "Maximum number of transcript records to keep (default: 100)"
    )]
    pub history_limit: Option<usize>,

    #[arg(long, help = "Print the saved transcript and exit")]
    pub history: bool,

    #[arg(long, help = "Delete the saved transcript and exit")]
    pub clear_history: bool,

    #[arg(long, help = "Report whether an API key is configured and exit")]
    pub key_status: bool,
}
