//! Camera viewpoints and transition commands.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geo::{Bounds, LngLat};

/// A chapter's declared camera pose.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewpoint {
    pub center: LngLat,
    #[serde(default)]
    pub zoom: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub bearing: f64,
}

/// How a chapter moves the camera to its viewpoint.
///
/// Deserialization accepts any string; unrecognized keywords fall back to
/// `FlyTo`, matching the configuration contract.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransitionMode {
    /// Animated flight (default).
    #[default]
    FlyTo,
    /// Smooth ease.
    EaseTo,
    /// Instant update, no animation.
    JumpTo,
}

impl TransitionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionMode::FlyTo => "flyTo",
            TransitionMode::EaseTo => "easeTo",
            TransitionMode::JumpTo => "jumpTo",
        }
    }
}

impl Serialize for TransitionMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransitionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "easeTo" => TransitionMode::EaseTo,
            "jumpTo" => TransitionMode::JumpTo,
            _ => TransitionMode::FlyTo,
        })
    }
}

/// A single camera request handed to the host adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CameraCommand {
    FlyTo { view: Viewpoint },
    EaseTo { view: Viewpoint },
    JumpTo { view: Viewpoint },
    /// Fit the viewport to a bounding box, preserving bearing and pitch.
    FitBounds {
        bounds: Bounds,
        padding: f64,
        duration_ms: u32,
    },
    /// Fly to a bare coordinate keeping the current zoom (track-start framing).
    FlyToPoint { center: LngLat, duration_ms: u32 },
}

impl CameraCommand {
    /// Build the command for a viewpoint under a transition mode.
    pub fn for_viewpoint(view: Viewpoint, mode: TransitionMode) -> Self {
        match mode {
            TransitionMode::FlyTo => CameraCommand::FlyTo { view },
            TransitionMode::EaseTo => CameraCommand::EaseTo { view },
            TransitionMode::JumpTo => CameraCommand::JumpTo { view },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// it should fall back to flyTo for unrecognized transition keywords
    #[test]
    fn transition_mode_fallback() {
        let m: TransitionMode = serde_json::from_str("\"easeTo\"").unwrap();
        assert_eq!(m, TransitionMode::EaseTo);
        let m: TransitionMode = serde_json::from_str("\"jumpTo\"").unwrap();
        assert_eq!(m, TransitionMode::JumpTo);
        let m: TransitionMode = serde_json::from_str("\"spinTo\"").unwrap();
        assert_eq!(m, TransitionMode::FlyTo);
    }

    /// it should parse a camelCase viewpoint with defaulted pose fields
    #[test]
    fn viewpoint_defaults() {
        let v: Viewpoint = serde_json::from_str(r#"{"center":[-56.5,-10.5],"zoom":1.25}"#).unwrap();
        assert_eq!(v.center, LngLat::new(-56.5, -10.5));
        assert_eq!(v.zoom, 1.25);
        assert_eq!(v.pitch, 0.0);
        assert_eq!(v.bearing, 0.0);
    }
}
