//! Animator: the single-slot track animation session.
//!
//! `start`/`pause`/`resume`/`reset` mirror the chapter callback surface;
//! `step()` advances the playhead by `speed` points per call and rebuilds the
//! frame geometry (completed segments, partial active segment, head marker).
//! Every failure path degrades to a logged warning and an idle animator.

use log::warn;
use serde::{Deserialize, Serialize};

use scrollstory_api_core::{CameraCommand, LineFeature};

use crate::config::AnimatorConfig;
use crate::data::Track;
use crate::geojson::parse_track_geojson;
use crate::inputs::{CameraMode, StartOptions};
use crate::outputs::{AnimatorEvent, Frame};
use crate::source::TrackSource;

/// Playback status of the animation session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// No track loaded, or progress cleared and not yet playing.
    #[default]
    Idle,
    Playing,
    Paused,
    /// All segments consumed; progress retained, not reset.
    Finished,
}

/// Outcome of a start request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartOutcome {
    /// Camera request implied by the start step's camera mode, if any.
    pub camera: Option<CameraCommand>,
    /// True when an existing session was resumed instead of reloaded.
    pub resumed: bool,
}

#[derive(Debug)]
struct Session {
    source: String,
    track: Track,
    segment_idx: usize,
    /// Points revealed within the current segment. Fractional speeds
    /// accumulate here; the revealed count is the floor.
    progress: f32,
    speed: f32,
}

#[derive(Debug)]
pub struct Animator {
    cfg: AnimatorConfig,
    session: Option<Session>,
    status: Playback,
    frame: Frame,
    pending_events: Vec<AnimatorEvent>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}

impl Animator {
    pub fn new(cfg: AnimatorConfig) -> Self {
        Self {
            cfg,
            session: None,
            status: Playback::Idle,
            frame: Frame::default(),
            pending_events: Vec::new(),
        }
    }

    pub fn status(&self) -> Playback {
        self.status
    }

    /// The most recently produced frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Source string of the live session, if one is loaded.
    pub fn current_source(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.source.as_str())
    }

    /// Start (or resume) a track animation.
    ///
    /// The same source with `restart == false` keeps progress and only updates
    /// speed. Anything else loads the source, replacing the previous session
    /// wholesale, resets progress to segment 0 / point 0, and reports the
    /// camera request implied by the start step's camera mode. Missing source,
    /// fetch failure, parse failure, and zero-line documents all degrade to a
    /// warning with the animator left idle.
    pub fn start(&mut self, opts: &StartOptions, source: &mut dyn TrackSource) -> StartOutcome {
        let Some(track_file) = opts.track_file.as_deref().filter(|s| !s.is_empty()) else {
            warn!("track start: missing trackFile");
            return StartOutcome::default();
        };
        let speed = opts.speed.unwrap_or(self.cfg.default_speed);

        if !opts.restart {
            if let Some(session) = self.session.as_mut() {
                if session.source == track_file && !session.track.is_empty() {
                    session.speed = speed;
                    self.resume();
                    return StartOutcome {
                        camera: None,
                        resumed: true,
                    };
                }
            }
        }

        let raw = match source.fetch(track_file) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("track start: fetch of {track_file} failed: {err:#}");
                return StartOutcome::default();
            }
        };
        let track = match parse_track_geojson(&raw) {
            Ok(track) => track,
            Err(err) => {
                warn!("track start: {track_file} did not parse: {err}");
                return StartOutcome::default();
            }
        };
        if track.is_empty() {
            warn!("track start: {track_file} contains no line features");
            self.session = None;
            self.status = Playback::Idle;
            self.frame.clear();
            return StartOutcome::default();
        }

        let camera = self.camera_for_start(&track, opts);

        // Clear drawn geometry before the new track starts revealing.
        self.frame.clear();
        self.pending_events.push(AnimatorEvent::Started {
            source: track_file.to_string(),
        });
        self.session = Some(Session {
            source: track_file.to_string(),
            track,
            segment_idx: 0,
            progress: 0.0,
            speed,
        });
        self.status = Playback::Playing;
        StartOutcome {
            camera,
            resumed: false,
        }
    }

    /// Camera request for a freshly started track, by camera mode. "fit" wins
    /// over a flyToStart override; "chapter" and "static" request nothing.
    fn camera_for_start(&self, track: &Track, opts: &StartOptions) -> Option<CameraCommand> {
        let fly_to_start = opts
            .fly_to_start
            .unwrap_or(opts.camera == CameraMode::Start);
        if opts.camera == CameraMode::Fit {
            return track.bounds().map(|bounds| CameraCommand::FitBounds {
                bounds,
                padding: opts.camera_padding.unwrap_or(self.cfg.fit_padding),
                duration_ms: self.cfg.camera_duration_ms,
            });
        }
        if fly_to_start {
            return track
                .first_coordinate()
                .map(|center| CameraCommand::FlyToPoint {
                    center,
                    duration_ms: self.cfg.camera_duration_ms,
                });
        }
        None
    }

    /// Halt stepping, keep position.
    pub fn pause(&mut self) {
        if self.status == Playback::Playing {
            self.status = Playback::Paused;
            self.pending_events.push(AnimatorEvent::Paused);
        }
    }

    /// Continue from the kept position. No-op without a loaded track or when
    /// the track already finished.
    pub fn resume(&mut self) {
        if self.session.is_none() {
            return;
        }
        if matches!(self.status, Playback::Paused | Playback::Idle) {
            self.status = Playback::Playing;
            self.pending_events.push(AnimatorEvent::Resumed);
        }
    }

    /// Halt stepping, clear progress to segment 0 / point 0, and clear any
    /// rendered geometry. The loaded track is kept so resume replays it.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.segment_idx = 0;
            session.progress = 0.0;
        }
        self.status = Playback::Idle;
        self.frame.clear();
        self.pending_events.push(AnimatorEvent::Reset);
    }

    /// Advance one animation frame and rebuild the frame geometry.
    ///
    /// When not playing, the last geometry is left intact and only pending
    /// control events are surfaced.
    pub fn step(&mut self) -> &Frame {
        if self.status != Playback::Playing {
            self.frame.events = std::mem::take(&mut self.pending_events);
            return &self.frame;
        }

        self.frame.clear();
        self.frame.events = std::mem::take(&mut self.pending_events);

        let Some(session) = self.session.as_mut() else {
            // Playing without a session cannot happen via the public API.
            self.status = Playback::Idle;
            return &self.frame;
        };

        let Some(segment) = session.track.segments.get(session.segment_idx) else {
            self.status = Playback::Finished;
            return &self.frame;
        };
        let len = segment.len();

        session.progress = (session.progress + session.speed).min(len as f32);
        let revealed = session.progress.floor() as usize;

        for (i, done) in session.track.segments[..session.segment_idx]
            .iter()
            .enumerate()
        {
            self.frame.features.push(LineFeature {
                segment: i + 1,
                complete: true,
                coordinates: done.coordinates.clone(),
            });
        }

        let visible = revealed.max(self.cfg.min_visible_points).min(len);
        if visible >= 2 {
            self.frame.features.push(LineFeature {
                segment: session.segment_idx + 1,
                complete: false,
                coordinates: segment.coordinates[..visible].to_vec(),
            });
        }

        let head_idx = revealed.saturating_sub(1).min(len - 1);
        self.frame.head = Some(segment.coordinates[head_idx]);

        if revealed >= len {
            self.frame.push_event(AnimatorEvent::SegmentFinished {
                index: session.segment_idx,
            });
            session.segment_idx += 1;
            session.progress = 0.0;
            if session.segment_idx >= session.track.segments.len() {
                self.status = Playback::Finished;
                self.frame.push_event(AnimatorEvent::Finished);
            }
        }

        &self.frame
    }
}
