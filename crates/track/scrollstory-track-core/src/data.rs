//! Canonical track model: an ordered list of segments, each an ordered run of
//! at least two coordinates rendered as a line.

use serde::{Deserialize, Serialize};

use scrollstory_api_core::{Bounds, LngLat};

use crate::error::TrackError;

/// One contiguous coordinate run within a track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub coordinates: Vec<LngLat>,
}

impl Segment {
    pub fn new(coordinates: Vec<LngLat>) -> Self {
        Self { coordinates }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// An ordered collection of segments loaded from one track source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub segments: Vec<Segment>,
}

impl Track {
    /// Build a track, dropping runs too short to draw.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into_iter().filter(|s| s.len() >= 2).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_points(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// First coordinate of the first segment, if any.
    pub fn first_coordinate(&self) -> Option<LngLat> {
        self.segments.first()?.coordinates.first().copied()
    }

    /// Axis-aligned bounding box over every coordinate; `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(
            self.segments
                .iter()
                .flat_map(|s| s.coordinates.iter().copied()),
        )
    }

    /// Check the segment-length invariant (every segment has >= 2 points).
    pub fn validate(&self) -> Result<(), TrackError> {
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.len() < 2 {
                return Err(TrackError::ShortSegment { index });
            }
        }
        Ok(())
    }
}
