//! Start options carried by chapter callback steps.
//!
//! These deserialize straight from the `options` payload of a configured
//! `trackAnimation.start` step, so field names use the configuration's
//! camelCase spelling.

use serde::{Deserialize, Serialize};

/// Camera coupling applied when a track animation starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// Defer to the chapter's own camera controller (default).
    #[default]
    Chapter,
    /// Keep whatever camera state exists.
    Static,
    /// Fly to the first coordinate of the track before drawing.
    Start,
    /// Fit the viewport to the whole track before drawing.
    Fit,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOptions {
    /// Track document source (URL or path). Required; a start step without it
    /// warns and does nothing.
    #[serde(default)]
    pub track_file: Option<String>,
    /// Points revealed per frame; falls back to the animator config default.
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub camera: CameraMode,
    /// Padding (px) used by camera mode "fit"; falls back to the config default.
    #[serde(default)]
    pub camera_padding: Option<f64>,
    /// Manual override for the "start" camera inference.
    #[serde(default)]
    pub fly_to_start: Option<bool>,
    /// Force reloading and restart from the beginning.
    #[serde(default)]
    pub restart: bool,
}

impl StartOptions {
    /// Convenience constructor for the common source-plus-defaults case.
    pub fn for_source(track_file: impl Into<String>) -> Self {
        Self {
            track_file: Some(track_file.into()),
            ..Self::default()
        }
    }
}
