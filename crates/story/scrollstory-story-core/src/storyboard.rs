//! The storyboard: chapter edges in, map commands out.
//!
//! `dispatch` interprets one chapter enter/leave against the live map and the
//! track animator; `tick` advances the animator once per rendered frame.
//! Every unknown id or malformed payload degrades to a log line, never a
//! panic, so a broken chapter cannot take the story down.

use log::{debug, warn};
use serde_json::Value;

use scrollstory_api_core::MapAdapter;
use scrollstory_track_core::{Animator, Playback, StartOptions, TrackSource};

use crate::callbacks::{AnimatorMethod, CallbackRegistry};
use crate::camera::chapter_camera_command;
use crate::chapters::{ActionPhase, Chapter, ChapterStep, StoryConfig};
use crate::external::ExternalLayerRegistry;
use crate::opacity::apply_opacity_steps;
use crate::scroll::ScrollEdge;

#[derive(Debug)]
pub struct Storyboard {
    config: StoryConfig,
    registry: CallbackRegistry,
    external: ExternalLayerRegistry,
    animator: Animator,
}

impl Storyboard {
    pub fn new(config: StoryConfig) -> Self {
        Self {
            config,
            registry: CallbackRegistry::new(),
            external: ExternalLayerRegistry::new(),
            animator: Animator::default(),
        }
    }

    pub fn with_external(mut self, external: ExternalLayerRegistry) -> Self {
        self.external = external;
        self
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn registry_mut(&mut self) -> &mut CallbackRegistry {
        &mut self.registry
    }

    pub fn external(&self) -> &ExternalLayerRegistry {
        &self.external
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Handle one chapter edge.
    ///
    /// Unknown chapter ids are a logged no-op. On enter: camera (unless a
    /// track start claims it), marker, opacity steps, callbacks, in that
    /// order. On leave: opacity steps and callbacks only.
    pub fn dispatch(
        &mut self,
        chapter_id: &str,
        edge: ScrollEdge,
        map: &mut dyn MapAdapter,
        tracks: &mut dyn TrackSource,
    ) {
        let Some(chapter) = self.config.chapter(chapter_id).cloned() else {
            debug!("dispatch: unknown chapter {chapter_id}, ignoring");
            return;
        };

        match edge {
            ScrollEdge::Enter => {
                if self.chapter_controls_camera(&chapter) {
                    if let Some(command) = chapter_camera_command(&chapter) {
                        map.apply_camera(&command);
                    }
                }
                if self.config.show_markers {
                    if let Some(view) = chapter.location {
                        map.move_marker(view.center);
                    }
                }
                apply_opacity_steps(&chapter, ActionPhase::Enter, map, &mut self.external);
                self.run_callbacks(&chapter, ActionPhase::Enter, map, tracks);
            }
            ScrollEdge::Leave => {
                apply_opacity_steps(&chapter, ActionPhase::Leave, map, &mut self.external);
                self.run_callbacks(&chapter, ActionPhase::Leave, map, tracks);
            }
        }
    }

    /// A chapter keeps its own camera unless one of its enter steps starts a
    /// track animation that claims the camera itself.
    fn chapter_controls_camera(&self, chapter: &Chapter) -> bool {
        for step in chapter.steps(ActionPhase::Enter) {
            let ChapterStep::Callback { callback, options } = step else {
                continue;
            };
            if self.registry.animator_method(callback) != Some(AnimatorMethod::Start) {
                continue;
            }
            let opts = parse_start_options(options);
            if opts.camera != scrollstory_track_core::CameraMode::Chapter {
                return false;
            }
        }
        true
    }

    fn run_callbacks(
        &mut self,
        chapter: &Chapter,
        phase: ActionPhase,
        map: &mut dyn MapAdapter,
        tracks: &mut dyn TrackSource,
    ) {
        for step in chapter.steps(phase) {
            let ChapterStep::Callback { callback, options } = step else {
                continue;
            };
            if self.registry.invoke_custom(callback, options) {
                continue;
            }
            if let Some(method) = self.registry.animator_method(callback) {
                self.run_animator(method, options, map, tracks);
            } else {
                debug!("callback {callback} is not registered, ignoring");
            }
        }
    }

    fn run_animator(
        &mut self,
        method: AnimatorMethod,
        options: &Value,
        map: &mut dyn MapAdapter,
        tracks: &mut dyn TrackSource,
    ) {
        match method {
            AnimatorMethod::Start => {
                let opts = parse_start_options(options);
                let outcome = self.animator.start(&opts, tracks);
                if let Some(command) = outcome.camera {
                    map.apply_camera(&command);
                }
                // A fresh start clears the drawn track; push that through.
                if !outcome.resumed {
                    self.apply_frame(map);
                }
            }
            AnimatorMethod::Pause => self.animator.pause(),
            AnimatorMethod::Resume => self.animator.resume(),
            AnimatorMethod::Reset => {
                self.animator.reset();
                self.apply_frame(map);
            }
        }
    }

    fn apply_frame(&self, map: &mut dyn MapAdapter) {
        let frame = self.animator.frame();
        map.set_track_features(&frame.features);
        map.set_head_marker(frame.head);
    }

    /// Advance the animator one frame and render the result. Call once per
    /// host animation frame; does nothing unless a track is playing.
    pub fn tick(&mut self, map: &mut dyn MapAdapter) -> Playback {
        if self.animator.status() == Playback::Playing {
            self.animator.step();
            self.apply_frame(map);
        }
        self.animator.status()
    }
}

fn parse_start_options(options: &Value) -> StartOptions {
    if options.is_null() {
        return StartOptions::default();
    }
    match serde_json::from_value(options.clone()) {
        Ok(opts) => opts,
        Err(err) => {
            warn!("track start options did not parse, using defaults: {err}");
            StartOptions::default()
        }
    }
}
