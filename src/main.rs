// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, TitleProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod chapters;
mod errors;
mod file_utils;
mod providers;
mod timecode;
mod titler;
mod transcript;
mod youtube;

/// CLI Wrapper for TitleProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTitleProvider {
    Ollama,
    OpenAI,
    Anthropic,
    LMStudio,
}

impl From<CliTitleProvider> for TitleProvider {
    fn from(cli_provider: CliTitleProvider) -> Self {
        match cli_provider {
            CliTitleProvider::Ollama => TitleProvider::Ollama,
            CliTitleProvider::OpenAI => TitleProvider::OpenAI,
            CliTitleProvider::Anthropic => TitleProvider::Anthropic,
            CliTitleProvider::LMStudio => TitleProvider::LMStudio,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate AI chapter timestamps for a video (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions for ytchapters
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Video id or YouTube URL to process
    #[arg(value_name = "VIDEO")]
    video: String,

    /// Transcript JSON file (array of {start, text} records)
    #[arg(short, long)]
    transcript: PathBuf,

    /// Output file for the chapter listing (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTitleProvider>,

    /// Model name to use for title generation
    #[arg(short, long)]
    model: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: Option<String>,

    /// API key for the title provider
    #[arg(long, env = "TITLE_API_KEY")]
    api_key: Option<String>,

    /// Chapter window length in seconds
    #[arg(short, long)]
    segment_secs: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytchapters - AI chapter timestamps for YouTube videos
///
/// Fetches a video's duration from the YouTube Data API, cuts it into
/// chapter windows, titles each window from the transcript with an AI
/// provider (Ollama, OpenAI, Anthropic) and prints the chapter listing.
#[derive(Parser, Debug)]
#[command(name = "ytchapters")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered YouTube chapter timestamp generator")]
#[command(long_about = "ytchapters generates a YouTube chapter listing for a video: it fetches the
video duration, cuts it into fixed-length windows, and asks an AI provider
for a concise title for each window's transcript section.

EXAMPLES:
    ytchapters dQw4w9WgXcQ -t transcript.json        # Default config, listing to stdout
    ytchapters 'https://youtu.be/dQw4w9WgXcQ' -t transcript.json
    ytchapters dQw4w9WgXcQ -t t.json -o chapters.txt # Write the listing to a file
    ytchapters -p openai -m gpt-4o dQw4w9WgXcQ -t t.json
    ytchapters -s 300 dQw4w9WgXcQ -t t.json          # 5-minute chapters
    ytchapters --log-level debug dQw4w9WgXcQ -t t.json
    ytchapters completions bash > ytchapters.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.

SUPPORTED PROVIDERS:
    ollama    - Local Ollama server (default: llama3.2:3b)
    openai    - OpenAI API (requires API key)
    anthropic - Anthropic Claude API (requires API key)
    lmstudio  - LM Studio local server (OpenAI-compatible on http://localhost:1234/v1)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video id or YouTube URL to process
    #[arg(value_name = "VIDEO")]
    video: Option<String>,

    /// Transcript JSON file (array of {start, text} records)
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Output file for the chapter listing (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTitleProvider>,

    /// Model name to use for title generation
    #[arg(short, long)]
    model: Option<String>,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY")]
    youtube_api_key: Option<String>,

    /// API key for the title provider
    #[arg(long, env = "TITLE_API_KEY")]
    api_key: Option<String>,

    /// Chapter window length in seconds
    #[arg(short, long)]
    segment_secs: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytchapters", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let video = cli
                .video
                .ok_or_else(|| anyhow!("VIDEO is required when no subcommand is specified"))?;
            let transcript = cli
                .transcript
                .ok_or_else(|| anyhow!("--transcript is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                video,
                transcript,
                output: cli.output,
                provider: cli.provider,
                model: cli.model,
                youtube_api_key: cli.youtube_api_key,
                api_key: cli.api_key,
                segment_secs: cli.segment_secs,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args).await
        }
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.titles.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        // Find the provider config and update the model
        let provider_str = config.titles.provider.to_lowercase_string();
        if let Some(provider_config) = config
            .titles
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.model = model.clone();
        }
    }

    if let Some(api_key) = &options.api_key {
        let provider_str = config.titles.provider.to_lowercase_string();
        if let Some(provider_config) = config
            .titles
            .available_providers
            .iter_mut()
            .find(|p| p.provider_type == provider_str)
        {
            provider_config.api_key = api_key.clone();
        }
    }

    if let Some(youtube_api_key) = &options.youtube_api_key {
        config.youtube.api_key = youtube_api_key.clone();
    }

    if let Some(segment_secs) = options.segment_secs {
        config.chapters.segment_secs = segment_secs;
    }

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the workflow
    let controller = Controller::with_config(config)?;
    controller
        .run(
            &options.video,
            &options.transcript,
            options.output.as_deref(),
        )
        .await
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
