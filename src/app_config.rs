use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API settings
    #[serde(default)]
    pub youtube: YouTubeConfig,

    /// Title generation config
    #[serde(default)]
    pub titles: TitleConfig,

    /// Chapter segmentation config
    #[serde(default)]
    pub chapters: ChapterConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Title generation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitleProvider {
    // @provider: Ollama
    #[default]
    Ollama,
    // @provider: OpenAI
    OpenAI,
    // @provider: Anthropic
    Anthropic,
    // @provider: LM Studio (OpenAI-compatible local server)
    LMStudio,
}

impl TitleProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Ollama => "Ollama",
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::LMStudio => "LM Studio",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Ollama => "ollama".to_string(),
            Self::OpenAI => "openai".to_string(),
            Self::Anthropic => "anthropic".to_string(),
            Self::LMStudio => "lmstudio".to_string(),
        }
    }
}

// Implement Display trait for TitleProvider
impl std::fmt::Display for TitleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TitleProvider
impl std::str::FromStr for TitleProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "lmstudio" => Ok(Self::LMStudio),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    // @field: Provider type identifier
    #[serde(rename = "type")]
    pub provider_type: String,

    // @field: Model name
    #[serde(default = "String::new")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    // @field: Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: Token budget per generated title
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ProviderConfig {
    // @param provider_type: Provider enum
    // @returns: Provider config with defaults
    pub fn new(provider_type: TitleProvider) -> Self {
        match provider_type {
            TitleProvider::Ollama => Self {
                provider_type: "ollama".to_string(),
                model: default_ollama_model(),
                api_key: String::new(),
                endpoint: default_ollama_endpoint(),
                timeout_secs: default_timeout_secs(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
            },
            TitleProvider::OpenAI => Self {
                provider_type: "openai".to_string(),
                model: default_openai_model(),
                api_key: String::new(),
                endpoint: default_openai_endpoint(),
                timeout_secs: default_timeout_secs(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
            },
            TitleProvider::Anthropic => Self {
                provider_type: "anthropic".to_string(),
                model: default_anthropic_model(),
                api_key: String::new(),
                endpoint: default_anthropic_endpoint(),
                timeout_secs: default_anthropic_timeout_secs(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
            },
            TitleProvider::LMStudio => Self {
                provider_type: "lmstudio".to_string(),
                model: default_lmstudio_model(),
                api_key: String::new(),
                endpoint: default_lmstudio_endpoint(),
                timeout_secs: default_timeout_secs(),
                temperature: default_temperature(),
                max_tokens: default_max_tokens(),
            },
        }
    }
}

/// YouTube Data API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct YouTubeConfig {
    /// API key for the YouTube Data API
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for test servers)
    #[serde(default = "default_youtube_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_youtube_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Title generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TitleConfig {
    /// Title provider to use
    #[serde(default)]
    pub provider: TitleProvider,

    /// Available title providers
    #[serde(default)]
    pub available_providers: Vec<ProviderConfig>,
}

impl TitleConfig {
    /// Get the active provider configuration from the available_providers array
    pub fn get_active_provider_config(&self) -> Option<&ProviderConfig> {
        let provider_str = self.provider.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get a specific provider configuration by type for testing
    pub fn get_provider_config(&self, provider_type: &TitleProvider) -> Option<&ProviderConfig> {
        let provider_str = provider_type.to_lowercase_string();
        self.available_providers
            .iter()
            .find(|p| p.provider_type == provider_str)
    }

    /// Get the model for the active provider
    pub fn get_model(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.model.is_empty() {
                return provider_config.model.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TitleProvider::Ollama => default_ollama_model(),
            TitleProvider::OpenAI => default_openai_model(),
            TitleProvider::Anthropic => default_anthropic_model(),
            TitleProvider::LMStudio => default_lmstudio_model(),
        }
    }

    /// Get the API key for the active provider
    pub fn get_api_key(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.api_key.is_empty() {
                return provider_config.api_key.clone();
            }
        }

        // Default fallback - Ollama doesn't use API keys
        String::new()
    }

    /// Get the endpoint for the active provider
    pub fn get_endpoint(&self) -> String {
        if let Some(provider_config) = self.get_active_provider_config() {
            if !provider_config.endpoint.is_empty() {
                return provider_config.endpoint.clone();
            }
        }

        // Default fallback based on provider type
        match self.provider {
            TitleProvider::Ollama => default_ollama_endpoint(),
            TitleProvider::OpenAI => default_openai_endpoint(),
            TitleProvider::Anthropic => default_anthropic_endpoint(),
            TitleProvider::LMStudio => default_lmstudio_endpoint(),
        }
    }
}

impl Default for TitleConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: TitleProvider::default(),
            available_providers: Vec::new(),
        };

        // Add default providers
        config.available_providers.push(ProviderConfig::new(TitleProvider::Ollama));
        config.available_providers.push(ProviderConfig::new(TitleProvider::OpenAI));
        config.available_providers.push(ProviderConfig::new(TitleProvider::Anthropic));
        config.available_providers.push(ProviderConfig::new(TitleProvider::LMStudio));

        config
    }
}

/// Chapter segmentation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChapterConfig {
    /// Length of each chapter window in seconds
    #[serde(default = "default_segment_secs")]
    pub segment_secs: f64,

    /// Minimum length of the final window; shorter tails merge into the
    /// previous chapter
    #[serde(default = "default_min_segment_secs")]
    pub min_segment_secs: f64,
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            segment_secs: default_segment_secs(),
            min_segment_secs: default_min_segment_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_anthropic_timeout_secs() -> u64 {
    60
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    64
}

fn default_segment_secs() -> f64 {
    180.0
}

fn default_min_segment_secs() -> f64 {
    30.0
}

fn default_youtube_endpoint() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_lmstudio_endpoint() -> String {
    // LM Studio default server (OpenAI compatible) runs on port 1234 under /v1
    "http://localhost:1234/v1".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_lmstudio_model() -> String {
    // Placeholder; users should set to the loaded model name in LM Studio
    "local-model".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.youtube.api_key.is_empty() {
            return Err(anyhow!("A YouTube Data API key is required"));
        }

        // Validate API key for all providers except local ones
        match self.titles.provider {
            TitleProvider::OpenAI => {
                if self.titles.get_api_key().is_empty() {
                    return Err(anyhow!("Title API key is required for OpenAI provider"));
                }
            }
            TitleProvider::Anthropic => {
                if self.titles.get_api_key().is_empty() {
                    return Err(anyhow!("Title API key is required for Anthropic provider"));
                }
            }
            _ => {}
        }

        if !self.chapters.segment_secs.is_finite() || self.chapters.segment_secs <= 0.0 {
            return Err(anyhow!(
                "Chapter segment length must be positive, got {}",
                self.chapters.segment_secs
            ));
        }

        if self.chapters.min_segment_secs < 0.0
            || self.chapters.min_segment_secs > self.chapters.segment_secs
        {
            return Err(anyhow!(
                "Minimum segment length {} must be between 0 and the segment length {}",
                self.chapters.min_segment_secs,
                self.chapters.segment_secs
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            youtube: YouTubeConfig::default(),
            titles: TitleConfig::default(),
            chapters: ChapterConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
