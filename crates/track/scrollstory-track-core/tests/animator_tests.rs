use scrollstory_api_core::{CameraCommand, LngLat};
use scrollstory_track_core::{
    Animator, AnimatorEvent, CameraMode, MemoryTrackSource, Playback, StartOptions,
};

const DIAGONAL: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "geometry": {"type": "LineString",
            "coordinates": [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]}}
    ]
}"#;

fn source_with(name: &str, doc: &str) -> MemoryTrackSource {
    let mut source = MemoryTrackSource::new();
    source.insert(name, doc);
    source
}

fn start_opts(name: &str) -> StartOptions {
    StartOptions {
        speed: Some(2.0),
        ..StartOptions::for_source(name)
    }
}

/// it should reveal exactly speed points per step and track the head marker
#[test]
fn stepping_determinism() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    let outcome = animator.start(&start_opts("diag"), &mut source);
    assert!(!outcome.resumed);
    assert_eq!(animator.status(), Playback::Playing);

    let frame = animator.step();
    let active = frame.features.last().expect("active feature");
    assert!(!active.complete);
    assert_eq!(
        active.coordinates,
        vec![LngLat::new(0.0, 0.0), LngLat::new(1.0, 1.0)]
    );
    assert_eq!(frame.head, Some(LngLat::new(1.0, 1.0)));

    let frame = animator.step();
    let active = frame.features.last().expect("active feature");
    assert_eq!(active.coordinates.len(), 4);
    assert_eq!(frame.head, Some(LngLat::new(3.0, 3.0)));
    assert!(frame.events.contains(&AnimatorEvent::Finished));
    assert_eq!(animator.status(), Playback::Finished);
}

/// it should not reset progress when started twice with the same source
#[test]
fn start_is_idempotent_without_restart() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    animator.start(&start_opts("diag"), &mut source);
    animator.step();
    let head_before = animator.frame().head;

    let outcome = animator.start(
        &StartOptions {
            speed: Some(1.0),
            ..StartOptions::for_source("diag")
        },
        &mut source,
    );
    assert!(outcome.resumed);
    assert_eq!(outcome.camera, None);

    // Progress picks up where it left off, now at one point per frame.
    let frame = animator.step();
    assert_eq!(
        frame.head,
        Some(LngLat::new(2.0, 2.0)),
        "head before resume was {head_before:?}"
    );
}

/// it should reload from the beginning when restart is forced
#[test]
fn restart_reloads_and_resets() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    animator.start(&start_opts("diag"), &mut source);
    animator.step();

    let outcome = animator.start(
        &StartOptions {
            restart: true,
            ..start_opts("diag")
        },
        &mut source,
    );
    assert!(!outcome.resumed);
    let frame = animator.step();
    assert_eq!(frame.head, Some(LngLat::new(1.0, 1.0)));
}

/// it should compute the fit bounds over all segment coordinates
#[test]
fn fit_mode_bounding_box() {
    let doc = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "LineString",
                "coordinates": [[0.0, 0.0], [2.0, 2.0]]}}
        ]
    }"#;
    let mut source = source_with("box", doc);
    let mut animator = Animator::default();
    let outcome = animator.start(
        &StartOptions {
            camera: CameraMode::Fit,
            ..StartOptions::for_source("box")
        },
        &mut source,
    );
    match outcome.camera {
        Some(CameraCommand::FitBounds {
            bounds, padding, ..
        }) => {
            assert_eq!(bounds.sw, LngLat::new(0.0, 0.0));
            assert_eq!(bounds.ne, LngLat::new(2.0, 2.0));
            assert_eq!(padding, 80.0);
        }
        other => panic!("expected FitBounds, got {other:?}"),
    }
}

/// it should fly to the first coordinate in start mode
#[test]
fn start_mode_flies_to_first_coordinate() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    let outcome = animator.start(
        &StartOptions {
            camera: CameraMode::Start,
            ..StartOptions::for_source("diag")
        },
        &mut source,
    );
    assert_eq!(
        outcome.camera,
        Some(CameraCommand::FlyToPoint {
            center: LngLat::new(0.0, 0.0),
            duration_ms: 1200
        })
    );
}

/// it should request no camera motion in chapter and static modes
#[test]
fn chapter_and_static_modes_leave_camera_alone() {
    for camera in [CameraMode::Chapter, CameraMode::Static] {
        let mut source = source_with("diag", DIAGONAL);
        let mut animator = Animator::default();
        let outcome = animator.start(
            &StartOptions {
                camera,
                ..StartOptions::for_source("diag")
            },
            &mut source,
        );
        assert_eq!(outcome.camera, None, "mode {camera:?}");
    }
}

/// it should honor a flyToStart override even outside start mode
#[test]
fn fly_to_start_override() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    let outcome = animator.start(
        &StartOptions {
            camera: CameraMode::Static,
            fly_to_start: Some(true),
            ..StartOptions::for_source("diag")
        },
        &mut source,
    );
    assert!(matches!(
        outcome.camera,
        Some(CameraCommand::FlyToPoint { .. })
    ));
}

/// it should stay idle on a document with zero line features
#[test]
fn zero_line_document_is_idle() {
    let mut source = source_with(
        "empty",
        scrollstory_test_fixtures::empty_track_geojson(),
    );
    let mut animator = Animator::default();
    let outcome = animator.start(&StartOptions::for_source("empty"), &mut source);
    assert_eq!(outcome, Default::default());
    assert_eq!(animator.status(), Playback::Idle);
    assert!(animator.frame().is_empty());
}

/// it should treat a missing trackFile and a failed fetch as silent no-ops
#[test]
fn missing_source_and_fetch_failure_degrade() {
    let mut source = MemoryTrackSource::new();
    let mut animator = Animator::default();

    let outcome = animator.start(&StartOptions::default(), &mut source);
    assert_eq!(animator.status(), Playback::Idle);
    assert_eq!(outcome, Default::default());

    let outcome = animator.start(&StartOptions::for_source("nowhere"), &mut source);
    assert_eq!(animator.status(), Playback::Idle);
    assert_eq!(outcome, Default::default());
}

/// it should preserve position across pause and resume
#[test]
fn pause_preserves_position() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    animator.start(&start_opts("diag"), &mut source);
    animator.step();
    animator.pause();
    assert_eq!(animator.status(), Playback::Paused);

    // Stepping while paused keeps the last geometry.
    let head_paused = animator.step().head;
    assert_eq!(head_paused, Some(LngLat::new(1.0, 1.0)));

    animator.resume();
    let frame = animator.step();
    assert_eq!(frame.head, Some(LngLat::new(3.0, 3.0)));
}

/// it should clear geometry on reset and replay from the start on resume
#[test]
fn reset_clears_and_replays() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    animator.start(&start_opts("diag"), &mut source);
    animator.step();
    animator.reset();
    assert_eq!(animator.status(), Playback::Idle);
    assert!(animator.frame().features.is_empty());
    assert_eq!(animator.frame().head, None);

    animator.resume();
    let frame = animator.step();
    assert_eq!(frame.head, Some(LngLat::new(1.0, 1.0)));
}

/// it should advance across segments, keeping finished parts as complete features
#[test]
fn multi_segment_progression() {
    let mut source = source_with(
        "/data/tracks/survey_track.geojson",
        scrollstory_test_fixtures::survey_track_geojson(),
    );
    let mut animator = Animator::default();
    animator.start(
        &StartOptions {
            speed: Some(4.0),
            ..StartOptions::for_source("/data/tracks/survey_track.geojson")
        },
        &mut source,
    );

    // First step consumes leg 1 (4 points).
    let frame = animator.step();
    assert!(frame
        .events
        .contains(&AnimatorEvent::SegmentFinished { index: 0 }));
    assert_eq!(animator.status(), Playback::Playing);

    // Second step reveals leg 2 (3 points) and finishes the track.
    let frame = animator.step();
    assert_eq!(frame.features.len(), 2);
    assert!(frame.features[0].complete);
    assert!(!frame.features[1].complete);
    assert!(frame.events.contains(&AnimatorEvent::Finished));
    assert_eq!(animator.status(), Playback::Finished);
}

/// it should accumulate fractional speeds across frames
#[test]
fn fractional_speed_accumulates() {
    let mut source = source_with("diag", DIAGONAL);
    let mut animator = Animator::default();
    animator.start(
        &StartOptions {
            speed: Some(1.5),
            ..StartOptions::for_source("diag")
        },
        &mut source,
    );

    // 1.5 revealed -> floor 1, clamped to the 2-point minimum for drawing.
    let frame = animator.step();
    assert_eq!(
        frame.features.last().unwrap().coordinates.len(),
        2,
        "minimum visible points"
    );
    assert_eq!(frame.head, Some(LngLat::new(0.0, 0.0)));

    // 3.0 revealed -> three points visible.
    let frame = animator.step();
    assert_eq!(frame.features.last().unwrap().coordinates.len(), 3);
    assert_eq!(frame.head, Some(LngLat::new(2.0, 2.0)));
}
