//! Scroll position to chapter edge events.
//!
//! The host reports raw scroll geometry; the observer keeps per-chapter
//! active flags and emits enter/leave edges on transitions. A chapter is
//! active while its trigger region overlaps the viewport's trigger band.

use serde::{Deserialize, Serialize};

/// Trigger band, as fractions of the viewport height.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOffsets {
    /// Top of the band.
    pub enter: f64,
    /// Bottom of the band.
    pub exit: f64,
}

impl Default for ScrollOffsets {
    fn default() -> Self {
        Self {
            enter: 0.25,
            exit: 0.75,
        }
    }
}

/// Document-space extent of one chapter's trigger element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerRegion {
    pub chapter_id: String,
    /// Distance from document top to the region's top, in pixels.
    pub top: f64,
    pub height: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollEdge {
    Enter,
    Leave,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollEvent {
    pub chapter_id: String,
    pub edge: ScrollEdge,
}

/// Tracks which trigger regions are active and reports edges.
#[derive(Debug, Default)]
pub struct ScrollObserver {
    offsets: ScrollOffsets,
    regions: Vec<TriggerRegion>,
    active: Vec<bool>,
}

impl ScrollObserver {
    pub fn new(offsets: ScrollOffsets) -> Self {
        Self {
            offsets,
            regions: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Append a trigger region. Regions are evaluated in insertion order,
    /// which should match document order.
    pub fn add_region(&mut self, region: TriggerRegion) {
        self.regions.push(region);
        self.active.push(false);
    }

    pub fn active_chapters(&self) -> impl Iterator<Item = &str> {
        self.regions
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| **active)
            .map(|(region, _)| region.chapter_id.as_str())
    }

    /// Recompute active flags for a scroll position and emit transitions.
    /// Leaves are reported before enters so handlers tear down the outgoing
    /// chapter first.
    pub fn update(&mut self, scroll_top: f64, viewport_height: f64) -> Vec<ScrollEvent> {
        let band_top = scroll_top + viewport_height * self.offsets.enter;
        let band_bottom = scroll_top + viewport_height * self.offsets.exit;

        let mut leaves = Vec::new();
        let mut enters = Vec::new();
        for (region, active) in self.regions.iter().zip(self.active.iter_mut()) {
            let bottom = region.top + region.height;
            let now = region.top <= band_bottom && bottom >= band_top;
            if now != *active {
                *active = now;
                let edge = if now { ScrollEdge::Enter } else { ScrollEdge::Leave };
                let event = ScrollEvent {
                    chapter_id: region.chapter_id.clone(),
                    edge,
                };
                match edge {
                    ScrollEdge::Enter => enters.push(event),
                    ScrollEdge::Leave => leaves.push(event),
                }
            }
        }
        leaves.extend(enters);
        leaves
    }
}
