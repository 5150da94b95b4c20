/*!
 * Tests for application configuration
 */

use std::str::FromStr;

use ytchapters::app_config::{Config, LogLevel, ProviderConfig, TitleProvider};

#[test]
fn test_config_default_shouldIncludeAllProviders() {
    let config = Config::default();

    assert_eq!(config.titles.available_providers.len(), 4);
    assert_eq!(config.titles.provider, TitleProvider::Ollama);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_default_shouldHaveSaneChapterSettings() {
    let config = Config::default();

    assert_eq!(config.chapters.segment_secs, 180.0);
    assert_eq!(config.chapters.min_segment_secs, 30.0);
}

#[test]
fn test_titleConfig_getActiveProviderConfig_shouldMatchSelectedProvider() {
    let mut config = Config::default();
    config.titles.provider = TitleProvider::Anthropic;

    let provider_config = config.titles.get_active_provider_config().unwrap();

    assert_eq!(provider_config.provider_type, "anthropic");
    assert!(!provider_config.model.is_empty());
}

#[test]
fn test_titleConfig_getModel_shouldFallBackToProviderDefault() {
    let mut config = Config::default();
    config.titles.available_providers.clear();

    // No configured providers left, so the provider-specific default applies
    assert_eq!(config.titles.get_model(), "llama3.2:3b");
}

#[test]
fn test_titleProvider_fromStr_shouldParseKnownProviders() {
    assert_eq!(TitleProvider::from_str("ollama").unwrap(), TitleProvider::Ollama);
    assert_eq!(TitleProvider::from_str("OpenAI").unwrap(), TitleProvider::OpenAI);
    assert_eq!(
        TitleProvider::from_str("ANTHROPIC").unwrap(),
        TitleProvider::Anthropic
    );
    assert_eq!(
        TitleProvider::from_str("lmstudio").unwrap(),
        TitleProvider::LMStudio
    );
    assert!(TitleProvider::from_str("bard").is_err());
}

#[test]
fn test_titleProvider_display_shouldRoundTripThroughFromStr() {
    for provider in [
        TitleProvider::Ollama,
        TitleProvider::OpenAI,
        TitleProvider::Anthropic,
        TitleProvider::LMStudio,
    ] {
        let parsed = TitleProvider::from_str(&provider.to_string()).unwrap();
        assert_eq!(parsed, provider);
    }
}

#[test]
fn test_config_validate_missingYoutubeKey_shouldFail() {
    let config = Config::default();

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_ollamaWithYoutubeKey_shouldPass() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_openaiWithoutApiKey_shouldFail() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();
    config.titles.provider = TitleProvider::OpenAI;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_openaiWithApiKey_shouldPass() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();
    config.titles.provider = TitleProvider::OpenAI;
    if let Some(provider_config) = config
        .titles
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "openai")
    {
        provider_config.api_key = "sk-test".to_string();
    }

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_badSegmentLength_shouldFail() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();
    config.chapters.segment_secs = 0.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_minSegmentAboveSegment_shouldFail() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();
    config.chapters.segment_secs = 60.0;
    config.chapters.min_segment_secs = 120.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_config_serde_shouldRoundTrip() {
    let mut config = Config::default();
    config.youtube.api_key = "yt-key".to_string();
    config.titles.provider = TitleProvider::Anthropic;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.titles.provider, TitleProvider::Anthropic);
    assert_eq!(parsed.youtube.api_key, "yt-key");
    assert_eq!(parsed.chapters.segment_secs, config.chapters.segment_secs);
}

#[test]
fn test_config_deserialize_emptyObject_shouldApplyDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.titles.provider, TitleProvider::Ollama);
    assert_eq!(config.chapters.segment_secs, 180.0);
    assert_eq!(config.youtube.endpoint, "https://www.googleapis.com/youtube/v3");
}

#[test]
fn test_providerConfig_new_shouldApplyProviderDefaults() {
    let ollama = ProviderConfig::new(TitleProvider::Ollama);
    assert_eq!(ollama.endpoint, "http://localhost:11434");
    assert!(ollama.api_key.is_empty());

    let anthropic = ProviderConfig::new(TitleProvider::Anthropic);
    assert_eq!(anthropic.endpoint, "https://api.anthropic.com");
    assert_eq!(anthropic.timeout_secs, 60);
}

#[test]
fn test_providerConfig_deserialize_shouldApplyFieldDefaults() {
    let json = r#"{"type": "openai", "model": "gpt-4o"}"#;
    let config: ProviderConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.provider_type, "openai");
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.max_tokens, 64);
}
