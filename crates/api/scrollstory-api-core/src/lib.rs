//! scrollstory-api-core: shared map vocabulary (core, host-agnostic)

pub mod adapter;
pub mod camera;
pub mod geo;
pub mod layer;

pub use adapter::MapAdapter;
pub use camera::{CameraCommand, TransitionMode, Viewpoint};
pub use geo::{Bounds, LineFeature, LngLat};
pub use layer::LayerKind;
