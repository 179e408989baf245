//! scrollstory-track-core (host-agnostic)
//!
//! Track data model, GeoJSON track parsing, and the frame-stepped animator
//! that reveals a track segment by segment while producing line features and
//! a head marker for the host to render.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod geojson;
pub mod inputs;
pub mod outputs;
pub mod source;

pub use config::AnimatorConfig;
pub use data::{Segment, Track};
pub use engine::{Animator, Playback, StartOutcome};
pub use error::TrackError;
pub use geojson::parse_track_geojson;
pub use inputs::{CameraMode, StartOptions};
pub use outputs::{AnimatorEvent, Frame};
pub use source::{FileTrackSource, HttpTrackSource, MemoryTrackSource, TrackSource};
