//! Per-frame animator outputs.
//!
//! The animator never draws; it produces a `Frame` (line features plus head
//! marker plus events) that the host pushes through its map adapter.

use serde::{Deserialize, Serialize};

use scrollstory_api_core::{LineFeature, LngLat};

/// Discrete signals emitted on control transitions and while stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimatorEvent {
    Started { source: String },
    Resumed,
    Paused,
    Reset,
    SegmentFinished { index: usize },
    Finished,
}

/// Geometry and events produced for one rendered frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Fully completed segments plus the partial active segment.
    #[serde(default)]
    pub features: Vec<LineFeature>,
    /// Most recently revealed coordinate.
    #[serde(default)]
    pub head: Option<LngLat>,
    #[serde(default)]
    pub events: Vec<AnimatorEvent>,
}

impl Frame {
    #[inline]
    pub fn clear(&mut self) {
        self.features.clear();
        self.head = None;
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: AnimatorEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.head.is_none() && self.events.is_empty()
    }
}
