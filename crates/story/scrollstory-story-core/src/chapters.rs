//! Story configuration: the chapter list and its per-chapter actions.
//!
//! The configuration is authored as JSON; field names keep its camelCase
//! spelling. Everything here is plain data. Interpretation (camera, opacity,
//! callbacks) lives in the storyboard.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use scrollstory_api_core::{TransitionMode, Viewpoint};

fn default_true() -> bool {
    true
}

/// Top-level story document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryConfig {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    /// Whether chapters with a location move the story marker on enter.
    #[serde(default = "default_true")]
    pub show_markers: bool,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl StoryConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Viewpoint of the first located chapter, used as the initial camera.
    pub fn first_viewpoint(&self) -> Option<Viewpoint> {
        self.chapters.iter().find_map(|c| c.location)
    }
}

/// One scroll-triggered story section.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: String,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Camera pose for this chapter. Stage chapters (no map change) omit it.
    #[serde(default)]
    pub location: Option<Viewpoint>,
    /// Transition used to reach `location`; absent means flyTo.
    #[serde(default)]
    pub map_animation: Option<TransitionMode>,
    #[serde(default)]
    pub legend: Vec<LegendEntry>,
    #[serde(default)]
    pub on_chapter_enter: Vec<ChapterStep>,
    #[serde(default)]
    pub on_chapter_exit: Vec<ChapterStep>,
}

impl Chapter {
    pub fn steps(&self, phase: ActionPhase) -> &[ChapterStep] {
        match phase {
            ActionPhase::Enter => &self.on_chapter_enter,
            ActionPhase::Leave => &self.on_chapter_exit,
        }
    }
}

/// Which edge of a chapter is being acted on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionPhase {
    Enter,
    Leave,
}

/// Legend swatch shown alongside a chapter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LegendEntry {
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A single enter/exit action.
///
/// Untagged: a step with `layer`/`opacity` keys is an opacity write, a step
/// with a `callback` key is a named callback invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChapterStep {
    LayerOpacity {
        layer: String,
        opacity: f64,
    },
    Callback {
        callback: String,
        #[serde(default)]
        options: Value,
    },
}
