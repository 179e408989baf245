//! Scroll-driven story orchestration.
//!
//! This crate turns a declarative chapter configuration plus raw scroll
//! geometry into map commands: camera transitions, layer opacity writes,
//! track animation control, and host callbacks. It is host-agnostic; the
//! embedding application supplies a `MapAdapter` and a `TrackSource` and
//! forwards scroll and animation-frame events.

pub mod callbacks;
pub mod camera;
pub mod chapters;
pub mod external;
pub mod opacity;
pub mod scroll;
pub mod storyboard;

pub use callbacks::{AnimatorMethod, CallbackRegistry};
pub use camera::chapter_camera_command;
pub use chapters::{ActionPhase, Chapter, ChapterStep, LegendEntry, StoryConfig};
pub use external::{
    resolve_external_layers, CatalogClient, CatalogLookup, ExternalLayer, ExternalLayerDescriptor,
    ExternalLayerRegistry, LayerOrigin,
};
pub use opacity::apply_opacity_steps;
pub use scroll::{ScrollEdge, ScrollEvent, ScrollObserver, ScrollOffsets, TriggerRegion};
pub use storyboard::Storyboard;
