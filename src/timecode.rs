use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MetadataError, TimecodeError};

// @module: Duration parsing and timestamp formatting

// @const: ISO-8601 duration regex (the subset the YouTube API emits)
static ISO8601_DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$").unwrap()
});

/// Parse an ISO-8601 duration string (e.g. "PT1H2M3S") into total seconds.
///
/// The YouTube Data API encodes video durations in this format. Day
/// components appear for very long videos ("P1DT2H"), fractional seconds
/// are accepted, and "P0D" (zero-length live archives) parses to 0.
pub fn parse_iso8601_duration(duration: &str) -> Result<f64, MetadataError> {
    let caps = ISO8601_DURATION_REGEX
        .captures(duration)
        .ok_or_else(|| MetadataError::MalformedDuration(duration.to_string()))?;

    // "P" or "PT" with no components is not a duration
    if caps
        .iter()
        .skip(1)
        .all(|component| component.is_none())
    {
        return Err(MetadataError::MalformedDuration(duration.to_string()));
    }

    let component = |idx: usize| -> Result<f64, MetadataError> {
        match caps.get(idx) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| MetadataError::MalformedDuration(duration.to_string())),
            None => Ok(0.0),
        }
    };

    let days = component(1)?;
    let hours = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    Ok(days * 86_400.0 + hours * 3_600.0 + minutes * 60.0 + seconds)
}

/// Format a seconds offset into a YouTube timestamp string.
///
/// Renders "MM:SS" below one hour and "HH:MM:SS" from one hour up, every
/// field zero-padded to two digits (hours grow wider past 99). Fractional
/// seconds are truncated. Negative or non-finite input is rejected rather
/// than producing a malformed string.
pub fn format_timestamp(seconds: f64) -> Result<String, TimecodeError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(TimecodeError::InvalidSeconds(seconds));
    }

    let total = seconds.trunc() as u64;
    let hours = total / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    if hours > 0 {
        Ok(format!("{:02}:{:02}:{:02}", hours, minutes, secs))
    } else {
        Ok(format!("{:02}:{:02}", minutes, secs))
    }
}

/// Parse a formatted timestamp ("MM:SS" or "HH:MM:SS") back to whole seconds - used by tests
#[allow(dead_code)]
pub fn parse_timestamp(timestamp: &str) -> Result<u64> {
    let parts: Vec<&str> = timestamp.split(':').collect();

    let (hours, minutes, seconds) = match parts.as_slice() {
        [m, s] => (0u64, m.parse::<u64>().context("Failed to parse minutes")?, s.parse::<u64>().context("Failed to parse seconds")?),
        [h, m, s] => (
            h.parse::<u64>().context("Failed to parse hours")?,
            m.parse::<u64>().context("Failed to parse minutes")?,
            s.parse::<u64>().context("Failed to parse seconds")?,
        ),
        _ => return Err(anyhow!("Invalid timestamp format: {}", timestamp)),
    };

    if minutes >= 60 || seconds >= 60 {
        return Err(anyhow!("Invalid time components in timestamp: {}", timestamp));
    }

    Ok(hours * 3_600 + minutes * 60 + seconds)
}
