//! Animator tuning knobs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatorConfig {
    /// Points revealed per frame when a start step does not say otherwise.
    pub default_speed: f32,
    /// A partial segment is always drawn with at least this many points so a
    /// line is drawable from the first frame.
    pub min_visible_points: usize,
    /// Padding (px) for camera mode "fit".
    pub fit_padding: f64,
    /// Duration (ms) of fit and fly-to-start transitions.
    pub camera_duration_ms: u32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            default_speed: 2.0,
            min_visible_points: 2,
            fit_padding: 80.0,
            camera_duration_ms: 1200,
        }
    }
}
