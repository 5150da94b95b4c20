/*!
 * Tests for the YouTube Data API client types and video id extraction
 */

use ytchapters::youtube::{VideoListResponse, extract_video_id};

#[test]
fn test_extractVideoId_bareId_shouldPassThrough() {
    assert_eq!(
        extract_video_id("dQw4w9WgXcQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
}

#[test]
fn test_extractVideoId_watchUrl_shouldExtractQueryParam() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(
        extract_video_id("https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42").as_deref(),
        Some("dQw4w9WgXcQ")
    );
}

#[test]
fn test_extractVideoId_shortUrl_shouldExtractPathSegment() {
    assert_eq!(
        extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
}

#[test]
fn test_extractVideoId_shortsAndEmbed_shouldExtractPathSegment() {
    assert_eq!(
        extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
    assert_eq!(
        extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
        Some("dQw4w9WgXcQ")
    );
}

#[test]
fn test_extractVideoId_nonYoutubeUrl_shouldReturnNone() {
    assert_eq!(extract_video_id("https://vimeo.com/12345"), None);
}

#[test]
fn test_extractVideoId_emptyInput_shouldReturnNone() {
    assert_eq!(extract_video_id(""), None);
    assert_eq!(extract_video_id("   "), None);
}

#[test]
fn test_videoListResponse_deserialize_shouldExposeDuration() {
    let json = r#"{
        "kind": "youtube#videoListResponse",
        "items": [
            {
                "id": "dQw4w9WgXcQ",
                "contentDetails": {
                    "duration": "PT3M33S",
                    "definition": "hd"
                }
            }
        ]
    }"#;

    let response: VideoListResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].content_details.duration, "PT3M33S");
}

#[test]
fn test_videoListResponse_deserializeNoItems_shouldYieldEmptyList() {
    // Unknown video ids come back as an empty items array, not an error
    let response: VideoListResponse =
        serde_json::from_str(r#"{"kind": "youtube#videoListResponse", "items": []}"#).unwrap();
    assert!(response.items.is_empty());

    // A response with the items key missing entirely is treated the same
    let response: VideoListResponse = serde_json::from_str("{}").unwrap();
    assert!(response.items.is_empty());
}
