//! GeoJSON track documents.
//!
//! Only `LineString` features become segments; every other geometry is
//! ignored. Positions keep their raw longitude/latitude values (elevation
//! components are discarded, short runs dropped). A document with zero usable
//! line features parses to an empty track, which simply never animates.

use serde::Deserialize;

use scrollstory_api_core::LngLat;

use crate::data::{Segment, Track};
use crate::error::TrackError;

pub fn parse_track_geojson(s: &str) -> Result<Track, TrackError> {
    let doc: RawCollection = serde_json::from_str(s)?;

    let mut segments = Vec::new();
    for feature in doc.features {
        let Some(RawGeometry::LineString { coordinates }) = feature.geometry else {
            continue;
        };
        let run: Vec<LngLat> = coordinates
            .into_iter()
            .filter(|p| p.len() >= 2)
            .map(|p| LngLat::new(p[0], p[1]))
            .collect();
        if run.len() >= 2 {
            segments.push(Segment::new(run));
        }
    }
    Ok(Track { segments })
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    LineString { coordinates: Vec<Vec<f64>> },
    #[serde(other)]
    Other,
}
