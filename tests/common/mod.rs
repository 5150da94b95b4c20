/*!
 * Common test utilities for the ytchapters test suite
 */

pub mod mock_providers;

use ytchapters::transcript::{TranscriptCollection, TranscriptEntry};

/// Build the three-entry transcript used across the suite
pub fn sample_transcript() -> TranscriptCollection {
    TranscriptCollection::new(vec![
        TranscriptEntry::new(0.0, "Hello"),
        TranscriptEntry::new(5.0, "world"),
        TranscriptEntry::new(10.0, "bye"),
    ])
}
