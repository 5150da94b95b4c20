use std::fmt;

use serde::Serialize;

use crate::errors::TimecodeError;
use crate::timecode;
use crate::transcript::TimeWindow;

// @module: Window segmentation and chapter listing

/// Cut a video of the given duration into contiguous fixed-length windows.
///
/// Windows cover `[0, duration)` back to back; the final window is truncated
/// at the duration. A trailing sliver shorter than `min_segment_secs` is
/// merged into the previous window so the last chapter never degenerates to
/// a few seconds. A zero-length video produces no windows.
pub fn segment_windows(
    duration_secs: f64,
    segment_secs: f64,
    min_segment_secs: f64,
) -> Result<Vec<TimeWindow>, TimecodeError> {
    if !duration_secs.is_finite() || duration_secs < 0.0 {
        return Err(TimecodeError::InvalidSeconds(duration_secs));
    }
    if !segment_secs.is_finite() || segment_secs <= 0.0 {
        return Err(TimecodeError::InvalidSeconds(segment_secs));
    }

    let mut windows = Vec::new();
    let mut start = 0.0;
    while start < duration_secs {
        let end = (start + segment_secs).min(duration_secs);
        windows.push(TimeWindow { start, end });
        start = end;
    }

    // Merge a short tail into its predecessor
    if windows.len() >= 2 {
        let tail = windows[windows.len() - 1];
        if tail.end - tail.start < min_segment_secs {
            windows.pop();
            if let Some(previous) = windows.last_mut() {
                previous.end = tail.end;
            }
        }
    }

    Ok(windows)
}

/// One generated chapter: a time window and its title.
#[derive(Debug, Clone, Serialize)]
pub struct Chapter {
    /// The window this chapter covers
    pub window: TimeWindow,

    /// Generated chapter title
    pub title: String,
}

/// An ordered list of generated chapters for one video.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChapterList {
    /// Chapters in playback order
    chapters: Vec<Chapter>,
}

impl ChapterList {
    /// Creates an empty chapter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter
    pub fn push(&mut self, window: TimeWindow, title: impl Into<String>) {
        self.chapters.push(Chapter {
            window,
            title: title.into(),
        });
    }

    /// The chapters in playback order
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Number of chapters
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the list has no chapters
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Render the list as YouTube-description chapter lines.
    ///
    /// One `TIMESTAMP TITLE` line per chapter, timestamps in the start
    /// window's format ("MM:SS" or "HH:MM:SS"). Titles are trimmed so each
    /// chapter stays on a single line.
    pub fn render(&self) -> Result<String, TimecodeError> {
        let mut lines = Vec::with_capacity(self.chapters.len());
        for chapter in &self.chapters {
            let timestamp = timecode::format_timestamp(chapter.window.start)?;
            lines.push(format!("{} {}", timestamp, chapter.title.trim()));
        }
        Ok(lines.join("\n"))
    }
}

impl fmt::Display for ChapterList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.render() {
            Ok(rendered) => write!(f, "{}", rendered),
            Err(_) => Err(fmt::Error),
        }
    }
}
