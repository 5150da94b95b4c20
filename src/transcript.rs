use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::file_utils::FileManager;

// @module: Timed transcript entries and window selection

/// One transcript fragment with a start offset in seconds.
///
/// Transcripts are fetched externally (caption track dumps, ASR output) and
/// consumed here as an ordered JSON array of these records. Extra fields in
/// the source JSON, such as a per-fragment duration, are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Start offset of the fragment, in seconds
    pub start: f64,

    /// Text content of the fragment
    pub text: String,
}

impl TranscriptEntry {
    /// Creates a new transcript entry
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        TranscriptEntry {
            start,
            text: text.into(),
        }
    }
}

/// A half-open time window [start, end) in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start of the window
    pub start: f64,

    /// Exclusive end of the window
    pub end: f64,
}

impl TimeWindow {
    // @creates: Validated window
    // @validates: Finite bounds, non-negative start, start < end
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(anyhow!("Window bounds must be finite: [{}, {})", start, end));
        }
        if start < 0.0 {
            return Err(anyhow!("Window start must be non-negative: {}", start));
        }
        if start >= end {
            return Err(anyhow!(
                "Invalid window: start {} must be before end {}",
                start, end
            ));
        }
        Ok(TimeWindow { start, end })
    }

    /// Whether an offset falls inside this window.
    ///
    /// The window is half-open: the start is included, the end is not, so
    /// adjacent windows never both claim the entry sitting on their shared
    /// boundary.
    pub fn contains(&self, offset: f64) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}s, {}s)", self.start, self.end)
    }
}

/// An ordered collection of transcript entries for one video.
#[derive(Debug, Clone, Default)]
pub struct TranscriptCollection {
    /// Transcript entries, in source order
    pub entries: Vec<TranscriptEntry>,
}

impl TranscriptCollection {
    /// Creates a collection from already-fetched entries
    pub fn new(entries: Vec<TranscriptEntry>) -> Self {
        TranscriptCollection { entries }
    }

    /// Parse a JSON array of `{start, text}` records into a collection.
    pub fn parse_json_string(content: &str) -> Result<Self> {
        let entries: Vec<TranscriptEntry> =
            serde_json::from_str(content).context("Failed to parse transcript JSON")?;
        Ok(TranscriptCollection { entries })
    }

    /// Load a transcript from a JSON file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        Self::parse_json_string(&content)
            .with_context(|| format!("Invalid transcript file: {}", path.display()))
    }

    /// Concatenate the text of every entry whose start falls in the window.
    ///
    /// Selection is by value, not position: entries are kept iff
    /// `window.start <= entry.start < window.end`, in the collection's
    /// original relative order, joined by single spaces. Duplicates and
    /// empty texts are preserved. An empty selection yields an empty string.
    pub fn section_text(&self, window: &TimeWindow) -> String {
        self.entries
            .iter()
            .filter(|entry| window.contains(entry.start))
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of entries in the collection
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
