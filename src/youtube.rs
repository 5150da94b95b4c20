use std::time::Duration;

use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::errors::{MetadataError, ProviderError};
use crate::timecode;

/// Default base URL of the YouTube Data API v3
pub const DEFAULT_API_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client used to fetch video metadata.
///
/// The client is constructed from configuration and passed explicitly into
/// every operation that needs it; there is no ambient/global service object.
#[derive(Debug)]
pub struct YouTube {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// videos.list response envelope
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    /// Matching videos; empty when the id is unknown or inaccessible
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// One video resource in a videos.list response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// contentDetails part of the resource
    pub content_details: ContentDetails,
}

/// The contentDetails part of a video resource
#[derive(Debug, Deserialize)]
pub struct ContentDetails {
    /// Video length as an ISO-8601 duration string (e.g. "PT1H2M3S")
    pub duration: String,
}

impl YouTube {
    /// Create a new YouTube Data API client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch a video's duration in seconds.
    ///
    /// Issues one videos.list request with `part=contentDetails` and parses
    /// the returned ISO-8601 duration. The `items` array is checked
    /// explicitly: an unknown or inaccessible video id yields
    /// `MetadataError::VideoNotFound` rather than an index panic.
    pub async fn video_duration(&self, video_id: &str) -> Result<f64, MetadataError> {
        let api_url = if self.endpoint.is_empty() {
            format!("{}/videos", DEFAULT_API_ENDPOINT)
        } else {
            format!("{}/videos", self.endpoint.trim_end_matches('/'))
        };

        debug!("Requesting contentDetails for video {}", video_id);

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("part", "contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!("YouTube API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("YouTube API error ({}): {}", status, error_text);
            let provider_error = if status.as_u16() == 401 || status.as_u16() == 403 {
                ProviderError::AuthenticationError(error_text)
            } else {
                ProviderError::ApiError {
                    status_code: status.as_u16(),
                    message: error_text,
                }
            };
            return Err(provider_error.into());
        }

        let video_list = response.json::<VideoListResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("YouTube videos.list response: {}", e))
        })?;

        let item = video_list
            .items
            .first()
            .ok_or_else(|| MetadataError::VideoNotFound(video_id.to_string()))?;

        timecode::parse_iso8601_duration(&item.content_details.duration)
    }
}

/// Extract a video id from user input.
///
/// Accepts a bare video id or any of the usual YouTube URL shapes:
/// `youtube.com/watch?v=<id>`, `youtu.be/<id>`, `youtube.com/shorts/<id>`,
/// `youtube.com/embed/<id>`.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Url::parse(trimmed).ok();
    let url = match parsed {
        Some(url) => url,
        // Not a URL at all - treat the input as a bare id
        None => return Some(trimmed.to_string()),
    };

    let host = url.host_str()?.to_ascii_lowercase();
    let is_youtube = host == "youtu.be"
        || host == "youtube.com"
        || host.ends_with(".youtube.com");
    if !is_youtube {
        return None;
    }

    if host == "youtu.be" {
        let seg = url.path_segments()?.next()?.trim();
        if !seg.is_empty() {
            return Some(seg.to_string());
        }
    }

    if url.path().starts_with("/watch") {
        for (key, value) in url.query_pairs() {
            if key == "v" && !value.trim().is_empty() {
                return Some(value.trim().to_string());
            }
        }
    }

    if let Some(mut segments) = url.path_segments() {
        let first = segments.next().unwrap_or("");
        let second = segments.next().unwrap_or("");
        if (first == "shorts" || first == "embed") && !second.trim().is_empty() {
            return Some(second.to_string());
        }
    }

    None
}
