//! Typed errors for track loading and validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("segment {index} has fewer than 2 coordinates")]
    ShortSegment { index: usize },
}
