//! Layer rendering kinds and their opacity paint channels.

use serde::{Deserialize, Serialize};

/// Rendering kind of a styled map layer. Each kind carries one or two opacity
/// paint channels; a chapter opacity action sets all of them to the same value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    Fill,
    Line,
    Circle,
    Symbol,
    Raster,
    Heatmap,
    FillExtrusion,
}

impl LayerKind {
    /// Opacity-bearing paint property names for this kind.
    pub fn opacity_properties(self) -> &'static [&'static str] {
        match self {
            LayerKind::Fill => &["fill-opacity"],
            LayerKind::Line => &["line-opacity"],
            LayerKind::Circle => &["circle-opacity", "circle-stroke-opacity"],
            LayerKind::Symbol => &["icon-opacity", "text-opacity"],
            LayerKind::Raster => &["raster-opacity"],
            LayerKind::Heatmap => &["heatmap-opacity"],
            LayerKind::FillExtrusion => &["fill-extrusion-opacity"],
        }
    }
}
