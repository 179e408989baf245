//! Shared fixture documents for scrollstory tests.
//!
//! Raw strings only; the consuming crates parse them with their own types so
//! the fixtures stay free of dependency cycles.

/// A story configuration with four chapters: a camera-overriding track start,
/// an opacity-only chapter, a stage chapter without a viewpoint, and a
/// chapter-camera track start.
pub fn chapters_json() -> &'static str {
    include_str!("../fixtures/chapters.json")
}

/// A survey vessel track: two usable line legs (4 and 3 points), one point
/// feature, and one degenerate single-point line.
pub fn survey_track_geojson() -> &'static str {
    include_str!("../fixtures/survey_track.geojson")
}

/// A document with zero usable line features (polygon and point only).
pub fn empty_track_geojson() -> &'static str {
    include_str!("../fixtures/empty_track.geojson")
}

/// A layer-catalog lookup response with two layer definitions; resolution
/// should take the first.
pub fn catalog_layers_json() -> &'static str {
    include_str!("../fixtures/catalog_layers.json")
}
