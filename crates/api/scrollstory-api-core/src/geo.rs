//! Geographic primitives shared by the track and story crates.

use serde::{Deserialize, Serialize};

/// A longitude/latitude pair, serialized as a `[lon, lat]` array to match
/// GeoJSON positions and chapter `center` fields.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from(p: [f64; 2]) -> Self {
        Self { lng: p[0], lat: p[1] }
    }
}

impl From<LngLat> for [f64; 2] {
    fn from(p: LngLat) -> Self {
        [p.lng, p.lat]
    }
}

/// Axis-aligned bounding box in raw longitude/latitude space.
/// Coordinates are not unwrapped across the antimeridian.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub sw: LngLat,
    pub ne: LngLat,
}

impl Bounds {
    /// Degenerate box containing a single point.
    pub fn from_point(p: LngLat) -> Self {
        Self { sw: p, ne: p }
    }

    /// Grow the box to contain `p`.
    pub fn extend(&mut self, p: LngLat) {
        if p.lng < self.sw.lng {
            self.sw.lng = p.lng;
        }
        if p.lat < self.sw.lat {
            self.sw.lat = p.lat;
        }
        if p.lng > self.ne.lng {
            self.ne.lng = p.lng;
        }
        if p.lat > self.ne.lat {
            self.ne.lat = p.lat;
        }
    }

    /// Bounding box over an iterator of points; `None` when the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LngLat>,
    {
        let mut it = points.into_iter();
        let mut bounds = Self::from_point(it.next()?);
        for p in it {
            bounds.extend(p);
        }
        Some(bounds)
    }
}

/// One rendered run of track coordinates. `segment` is the 1-based part
/// number; `complete` distinguishes finished parts from the active partial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    pub segment: usize,
    pub complete: bool,
    pub coordinates: Vec<LngLat>,
}
