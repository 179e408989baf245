//! Host map seam.
//!
//! The core crates never touch a mapping library directly. The host wraps its
//! live map in this trait: a capability query for layer kinds plus command
//! sinks for camera motion, paint writes, track geometry, and markers. All
//! calls happen on the host's UI thread; implementations need no locking.

use crate::camera::CameraCommand;
use crate::geo::{LineFeature, LngLat};
use crate::layer::LayerKind;

pub trait MapAdapter {
    /// Rendering kind of a live layer, or `None` when the layer is absent
    /// from the current style.
    fn layer_kind(&self, layer_id: &str) -> Option<LayerKind>;

    /// Set a single paint property on a live layer.
    fn set_paint_property(&mut self, layer_id: &str, property: &str, value: f64);

    /// Apply a camera transition.
    fn apply_camera(&mut self, command: &CameraCommand);

    /// Replace the rendered track geometry wholesale.
    fn set_track_features(&mut self, features: &[LineFeature]);

    /// Move the animated head marker, or clear it with `None`.
    fn set_head_marker(&mut self, coordinate: Option<LngLat>);

    /// Move the chapter marker.
    fn move_marker(&mut self, coordinate: LngLat);
}
