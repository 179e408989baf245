//! Opacity step application.
//!
//! One configured opacity value fans out to every opacity-like paint property
//! of the target layer's kind. External-registry keys win over live map
//! layers; a layer known to neither is a logged no-op.

use log::debug;

use scrollstory_api_core::MapAdapter;

use crate::chapters::{ActionPhase, Chapter, ChapterStep};
use crate::external::ExternalLayerRegistry;

pub fn apply_opacity_steps(
    chapter: &Chapter,
    phase: ActionPhase,
    map: &mut dyn MapAdapter,
    external: &mut ExternalLayerRegistry,
) {
    for step in chapter.steps(phase) {
        let ChapterStep::LayerOpacity { layer, opacity } = step else {
            continue;
        };
        if external.contains(layer) {
            external.set_opacity(layer, *opacity);
        } else if let Some(kind) = map.layer_kind(layer) {
            for property in kind.opacity_properties() {
                map.set_paint_property(layer, property, *opacity);
            }
        } else {
            debug!("opacity step: layer {layer} not found, skipping");
        }
    }
}
