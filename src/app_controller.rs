use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::chapters::{self, ChapterList};
use crate::file_utils::FileManager;
use crate::timecode;
use crate::titler::TitleService;
use crate::transcript::TranscriptCollection;
use crate::youtube::{self, YouTube};

// @module: Application controller for chapter generation

/// Main application controller for chapter timestamp generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.youtube.api_key.is_empty()
    }

    /// Run the main workflow: duration fetch, segmentation, titling, output.
    ///
    /// Titling is sequential on purpose; parallelising across windows is an
    /// orchestration decision that lives with the caller, not here.
    pub async fn run(
        &self,
        video_input: &str,
        transcript_path: &Path,
        output_path: Option<&Path>,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        let video_id = youtube::extract_video_id(video_input)
            .ok_or_else(|| anyhow!("Could not extract a video id from: {}", video_input))?;

        let youtube_client = YouTube::new(
            &self.config.youtube.api_key,
            &self.config.youtube.endpoint,
            self.config.youtube.timeout_secs,
        );

        let duration_secs = youtube_client
            .video_duration(&video_id)
            .await
            .with_context(|| format!("Failed to fetch duration for video {}", video_id))?;
        info!(
            "Video {} runs {}",
            video_id,
            timecode::format_timestamp(duration_secs)?
        );

        let transcript = TranscriptCollection::load_from_file(transcript_path)?;
        if transcript.is_empty() {
            warn!(
                "Transcript {} has no entries; titles will be generated from empty sections",
                transcript_path.display()
            );
        } else {
            debug!("Loaded {} transcript entries", transcript.len());
        }

        let windows = chapters::segment_windows(
            duration_secs,
            self.config.chapters.segment_secs,
            self.config.chapters.min_segment_secs,
        )?;
        if windows.is_empty() {
            warn!("Video {} has zero length, nothing to chapter", video_id);
            self.write_output(&ChapterList::new(), output_path)?;
            return Ok(());
        }
        info!("Cut video into {} chapter windows", windows.len());

        let provider_config = self
            .config
            .titles
            .get_active_provider_config()
            .ok_or_else(|| {
                anyhow!(
                    "Provider {} is not present in available_providers",
                    self.config.titles.provider
                )
            })?;
        let title_service = TitleService::from_config(&self.config.titles.provider, provider_config)?;

        let mut chapter_list = ChapterList::new();
        for (index, window) in windows.iter().enumerate() {
            let title = title_service
                .generate_chapter_title(window, &transcript)
                .await
                .with_context(|| format!("Failed to title chapter {} at {}", index + 1, window))?;
            info!(
                "{} {}",
                timecode::format_timestamp(window.start)?,
                title.trim()
            );
            chapter_list.push(*window, title);
        }

        self.write_output(&chapter_list, output_path)?;

        info!(
            "Generated {} chapters in {:.1}s",
            chapter_list.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Write the rendered chapter listing to a file, or stdout when no path
    /// is given.
    fn write_output(&self, chapter_list: &ChapterList, output_path: Option<&Path>) -> Result<()> {
        let rendered = chapter_list.render()?;
        match output_path {
            Some(path) => {
                FileManager::write_to_file(path, &rendered)?;
                info!("Wrote chapter listing to {}", path.display());
            }
            None => {
                println!("{}", rendered);
            }
        }
        Ok(())
    }
}
