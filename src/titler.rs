/*!
 * Chapter title generation.
 *
 * Builds the fixed title prompt around a transcript section and defers the
 * actual generation to an injected `TitleGenerator` provider.
 */

use anyhow::{Result, anyhow};
use log::debug;

use crate::app_config::{ProviderConfig, TitleProvider};
use crate::errors::TitleError;
use crate::providers::anthropic::Anthropic;
use crate::providers::ollama::Ollama;
use crate::providers::openai::OpenAI;
use crate::providers::{TitleGenerator, TitleRequest};
use crate::transcript::{TimeWindow, TranscriptCollection};

/// Prompt template for chapter title generation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The fixed prompt wrapped around each transcript section.
    pub const CHAPTER_TITLE: &'static str =
        "Create a concise, engaging chapter title (5-7 words) for this video section:\n{section_text}";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default chapter title template.
    pub fn chapter_title() -> Self {
        Self::new(Self::CHAPTER_TITLE)
    }

    /// Render the template around a transcript section.
    ///
    /// An empty section renders to a prompt wrapping an empty string; the
    /// provider, not this core, decides how to respond to that.
    pub fn render(&self, section_text: &str) -> String {
        self.template.replace("{section_text}", section_text)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::chapter_title()
    }
}

/// Title generation service.
///
/// Owns an injected provider port plus the model and sampling parameters to
/// use with it. One outbound call per chapter window, no caching.
pub struct TitleService {
    /// The injected generation provider
    generator: Box<dyn TitleGenerator>,
    /// Model name passed to the provider
    model: String,
    /// Temperature passed to the provider
    temperature: Option<f32>,
    /// Token budget for the generated title
    max_tokens: u32,
    /// Prompt template
    template: PromptTemplate,
}

impl TitleService {
    /// Create a title service around an injected generator
    pub fn with_generator(generator: Box<dyn TitleGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            temperature: None,
            max_tokens: 64,
            template: PromptTemplate::chapter_title(),
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the token budget for generated titles
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build a title service from a provider configuration
    pub fn from_config(provider: &TitleProvider, config: &ProviderConfig) -> Result<Self> {
        if config.model.is_empty() {
            return Err(anyhow!(
                "No model configured for provider {}",
                provider.display_name()
            ));
        }

        let generator: Box<dyn TitleGenerator> = match provider {
            TitleProvider::Ollama => {
                Box::new(Ollama::new(&config.endpoint, config.timeout_secs))
            }
            TitleProvider::OpenAI | TitleProvider::LMStudio => Box::new(OpenAI::new(
                &config.api_key,
                &config.endpoint,
                config.timeout_secs,
            )),
            TitleProvider::Anthropic => Box::new(Anthropic::new(
                &config.api_key,
                &config.endpoint,
                config.timeout_secs,
            )),
        };

        Ok(Self::with_generator(generator, &config.model)
            .temperature(config.temperature)
            .max_tokens(config.max_tokens))
    }

    /// Generate a chapter title for one time window of the transcript.
    ///
    /// Selects the transcript section for the window, wraps it in the fixed
    /// prompt and forwards it to the provider. The provider's output is
    /// returned verbatim; empty or whitespace-only output is an error, never
    /// silently defaulted.
    pub async fn generate_chapter_title(
        &self,
        window: &TimeWindow,
        transcript: &TranscriptCollection,
    ) -> Result<String, TitleError> {
        let section_text = transcript.section_text(window);
        let prompt = self.template.render(&section_text);

        debug!(
            "Titling window {} from {} transcript chars",
            window,
            section_text.len()
        );

        let mut request = TitleRequest::new(&self.model, prompt).max_tokens(self.max_tokens);
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }

        let title = self.generator.generate(request).await?;
        if title.trim().is_empty() {
            return Err(TitleError::EmptyTitle);
        }

        Ok(title)
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<(), TitleError> {
        self.generator
            .test_connection(&self.model)
            .await
            .map_err(TitleError::Generation)
    }
}
