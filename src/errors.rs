/*!
 * Error types for the ytchapters application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when working with outbound service APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while fetching video metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The outbound metadata request failed (network, auth, quota)
    #[error("Metadata service error: {0}")]
    Service(#[from] ProviderError),

    /// The response contained no item for the requested video
    #[error("Video not found: {0}")]
    VideoNotFound(String),

    /// The duration field could not be parsed as an ISO-8601 duration
    #[error("Malformed duration string: {0}")]
    MalformedDuration(String),
}

/// Errors that can occur when formatting timecodes
#[derive(Error, Debug)]
pub enum TimecodeError {
    /// Seconds value outside the formatter's accepted domain
    #[error("Invalid seconds value for timestamp: {0}")]
    InvalidSeconds(f64),
}

/// Errors that can occur during chapter title generation
#[derive(Error, Debug)]
pub enum TitleError {
    /// Error from the generation provider
    #[error("Title generation failed: {0}")]
    Generation(#[from] ProviderError),

    /// The provider returned empty or whitespace-only output
    #[error("Title generation returned empty output")]
    EmptyTitle,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from video metadata lookup
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Error from timecode handling
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from title generation
    #[error("Title error: {0}")]
    Title(#[from] TitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
