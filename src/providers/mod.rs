/*!
 * Provider implementations for chapter title generation.
 *
 * This module contains client implementations for various LLM providers:
 * - Ollama: Local LLM server
 * - OpenAI: OpenAI API integration (also serves OpenAI-compatible local servers)
 * - Anthropic: Anthropic API integration
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single title-generation request, provider-agnostic.
#[derive(Debug, Clone)]
pub struct TitleRequest {
    /// Model name to use for generation
    pub model: String,

    /// The full prompt text
    pub prompt: String,

    /// Temperature for generation
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl TitleRequest {
    /// Create a new title request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: None,
            max_tokens: 64,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Common trait for all title-generation providers.
///
/// The generation call is injected as this capability so the titling core
/// can be exercised without network access. Implementations perform exactly
/// one outbound request per `generate` call; retry policy belongs to the
/// caller, not here.
#[async_trait]
pub trait TitleGenerator: Send + Sync + Debug {
    /// Generate text for the given request and return it as-is
    async fn generate(&self, request: TitleRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self, model: &str) -> Result<(), ProviderError>;
}

pub mod ollama;
pub mod openai;
pub mod anthropic;
