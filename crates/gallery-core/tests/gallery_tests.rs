mod common;

use common::{Recorder, VIEWPORT};
use gallery_core::{
    Artifact, ArtifactKind, CameraKey, Gallery, GalleryError, GalleryEvent, RefreshOutcome,
    SessionContext, StrokePoint, StrokeRecord, DETAIL_OPEN_FALLBACK_TICKS,
};
use glam::{DVec2, DVec3};

const CENTER: DVec2 = DVec2::new(400.0, 300.0);
const SESSION: SessionContext = SessionContext {
    session_id: 4,
    user_id: 9,
};

fn gallery() -> Gallery {
    let mut g = Gallery::new("Studio");
    g.set_viewport(VIEWPORT);
    let mut ar = Artifact::new(2, "far", ArtifactKind::WebApplication, DVec3::new(0.0, 2.0, 0.0));
    ar.ar_enabled = true;
    g.set_artifacts(vec![
        Artifact::new(1, "near", ArtifactKind::Image, DVec3::new(0.0, 2.0, 5.0)),
        ar,
    ]);
    g
}

fn frame(g: &mut Gallery) {
    let mut surface = Recorder::default();
    g.render(&mut surface);
}

fn stroke_record(id: i64, data: &str) -> StrokeRecord {
    StrokeRecord {
        id,
        session_id: SESSION.session_id,
        user_id: 1,
        stroke_data: data.to_owned(),
        color: "#4ecdc4".to_owned(),
        width: 3.0,
    }
}

#[test]
fn pick_selects_topmost_and_opens_detail_once_after_fly_to() {
    let mut g = gallery();
    frame(&mut g);
    assert!(g.pointer_down(CENTER).is_empty());
    assert_eq!(g.selected(), Some(1));

    let mut opened = Vec::new();
    let mut ticks: u32 = 0;
    while ticks < 500 {
        ticks += 1;
        for ev in g.tick() {
            opened.push((ticks, ev));
        }
    }
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].1, GalleryEvent::ArtifactSelected(1));
    assert!(opened[0].0 < DETAIL_OPEN_FALLBACK_TICKS);
    // settled at the focus pose in front of the artifact
    let p = g.camera().position;
    assert!((p - DVec3::new(0.0, 3.0, 8.0)).length() < 0.1);
}

#[test]
fn without_fly_to_detail_opens_immediately() {
    let mut g = gallery().with_fly_to_on_select(false);
    frame(&mut g);
    let events = g.pointer_down(CENTER);
    assert_eq!(events, vec![GalleryEvent::ArtifactSelected(1)]);
    for _ in 0..200 {
        assert!(g.tick().is_empty());
    }
}

#[test]
fn superseding_pick_flushes_the_earlier_open() {
    let mut g = gallery();
    frame(&mut g);
    g.pointer_down(CENTER);
    g.pointer_up();
    let events = g.select(2);
    assert_eq!(events, vec![GalleryEvent::ArtifactSelected(1)]);
    let later: Vec<_> = (0..500).flat_map(|_| g.tick()).collect();
    assert_eq!(later, vec![GalleryEvent::ArtifactSelected(2)]);
}

#[test]
fn empty_space_starts_a_camera_drag() {
    let mut g = gallery();
    frame(&mut g);
    assert!(g.pointer_down(DVec2::new(20.0, 500.0)).is_empty());
    assert_eq!(g.selected(), None);
    g.pointer_move(DVec2::new(70.0, 500.0));
    assert!((g.camera().rotation_y - 0.5).abs() < 1e-9);
    g.pointer_up();
    g.pointer_move(DVec2::new(170.0, 500.0));
    assert!((g.camera().rotation_y - 0.5).abs() < 1e-9);
}

#[test]
fn regions_come_from_the_latest_frame_only() {
    let mut g = gallery();
    // nothing rendered yet: nothing pickable
    g.pointer_down(CENTER);
    assert_eq!(g.selected(), None);
    g.pointer_up();

    frame(&mut g);
    // walk past both artifacts; the next frame drops their regions
    for _ in 0..60 {
        g.key_down(CameraKey::Forward);
        g.tick();
    }
    g.key_up(CameraKey::Forward);
    frame(&mut g);
    assert!(g.click_regions().is_empty());
    g.pointer_down(CENTER);
    assert_eq!(g.selected(), None);
}

#[test]
fn drawing_requires_a_session() {
    let mut g = gallery();
    assert!(!g.set_drawing_mode(true));
    g.set_session(Some(SESSION));
    assert!(g.toggle_drawing_mode());
    g.set_session(None);
    assert!(!g.drawing_mode());
}

#[test]
fn drawing_a_stroke_emits_it_for_storage_and_keeps_it_visible() {
    let mut g = gallery();
    g.set_session(Some(SESSION));
    g.set_drawing_mode(true);
    g.set_stroke_color("#45b7d1");
    frame(&mut g);

    // drawing mode wins over picking even on top of an artifact
    assert!(g.pointer_down(CENTER).is_empty());
    assert_eq!(g.selected(), None);
    assert!(g.is_drawing());
    g.pointer_move(DVec2::new(410.0, 305.0));
    g.pointer_move(DVec2::new(420.0, 310.0));
    let events = g.pointer_up();
    assert!(!g.is_drawing());

    let [GalleryEvent::StrokeCompleted { token, stroke }] = events.as_slice() else {
        panic!("expected one stroke event, got {events:?}");
    };
    assert_eq!(stroke.session_id, 4);
    assert_eq!(stroke.user_id, 9);
    assert_eq!(stroke.color, "#45b7d1");
    assert_eq!(stroke.width, 3.0);
    let points: Vec<StrokePoint> = serde_json::from_str(&stroke.stroke_data).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[2], StrokePoint { x: 420.0, y: 310.0 });

    // the save fails: the stroke stays on screen
    g.stroke_save_failed(*token);
    assert_eq!(g.annotations().failed_count(), 1);
    assert_eq!(g.annotations().frozen().count(), 1);
}

#[test]
fn refresh_waits_while_drawing_and_keeps_unacknowledged_strokes() {
    let mut g = gallery();
    g.set_session(Some(SESSION));
    g.set_drawing_mode(true);

    g.pointer_down(DVec2::new(1.0, 1.0));
    g.pointer_move(DVec2::new(2.0, 2.0));
    let remote = vec![stroke_record(1, r#"[{"x":5,"y":5},{"x":6,"y":7}]"#)];
    assert_eq!(g.apply_remote_strokes(&remote), RefreshOutcome::Deferred);
    assert_eq!(g.annotations().current().map(|s| s.points.len()), Some(2));

    let events = g.pointer_up();
    let token = match &events[0] {
        GalleryEvent::StrokeCompleted { token, .. } => *token,
        other => panic!("unexpected {other:?}"),
    };

    // refresh lands before the save is acknowledged: local stroke survives
    assert_eq!(
        g.apply_remote_strokes(&remote),
        RefreshOutcome::Applied { skipped: 0 }
    );
    assert_eq!(g.annotations().frozen().count(), 2);
    assert_eq!(g.annotations().pending_count(), 1);

    g.stroke_saved(token, 2);
    assert_eq!(g.annotations().pending_count(), 0);
    assert_eq!(g.annotations().frozen().count(), 2);
}

fn draw_one_stroke(g: &mut Gallery) -> gallery_core::StrokeToken {
    g.pointer_down(DVec2::new(30.0, 30.0));
    g.pointer_move(DVec2::new(40.0, 45.0));
    match g.pointer_up().as_slice() {
        [GalleryEvent::StrokeCompleted { token, .. }] => *token,
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn saved_stroke_survives_a_refresh_fetched_before_the_save() {
    let mut g = gallery();
    g.set_session(Some(SESSION));
    g.set_drawing_mode(true);
    let token = draw_one_stroke(&mut g);
    g.stroke_saved(token, 50);

    // stale response: the new row is not in it yet
    let stale = vec![stroke_record(7, r#"[{"x":1,"y":1}]"#)];
    assert_eq!(
        g.apply_remote_strokes(&stale),
        RefreshOutcome::Applied { skipped: 0 }
    );
    assert_eq!(g.annotations().frozen().count(), 2);
    assert_eq!(g.annotations().acknowledged_count(), 1);
    assert_eq!(g.apply_remote_strokes(&[]), RefreshOutcome::Applied { skipped: 0 });
    assert_eq!(g.annotations().frozen().count(), 1);

    // the row shows up: the server copy takes over, no duplicate
    let fresh = vec![stale[0].clone(), stroke_record(50, r#"[{"x":30,"y":30},{"x":40,"y":45}]"#)];
    g.apply_remote_strokes(&fresh);
    assert_eq!(g.annotations().acknowledged_count(), 0);
    assert_eq!(g.annotations().frozen().count(), 2);
}

#[test]
fn second_press_does_not_replace_the_stroke_in_progress() {
    let mut g = gallery();
    g.set_session(Some(SESSION));
    g.set_drawing_mode(true);
    g.pointer_down(DVec2::new(1.0, 1.0));
    g.pointer_move(DVec2::new(2.0, 2.0));
    g.pointer_down(DVec2::new(90.0, 90.0));
    g.pointer_move(DVec2::new(3.0, 3.0));
    let stroke = g.annotations().current().cloned().unwrap();
    assert_eq!(
        stroke.points,
        vec![DVec2::new(1.0, 1.0), DVec2::new(2.0, 2.0), DVec2::new(3.0, 3.0)]
    );
    assert_eq!(g.pointer_up().len(), 1);
}

#[test]
fn malformed_remote_strokes_are_skipped() {
    let mut g = gallery();
    let remote = vec![
        stroke_record(1, r#"[{"x":1,"y":2}]"#),
        stroke_record(2, "not json"),
        stroke_record(3, r#"[{"x":"a"}]"#),
        stroke_record(4, "[]"),
    ];
    assert_eq!(
        g.apply_remote_strokes(&remote),
        RefreshOutcome::Applied { skipped: 2 }
    );
    assert_eq!(g.annotations().frozen().count(), 2);
}

#[test]
fn back_to_gallery_clears_selection_and_flies_home() {
    let mut g = gallery();
    frame(&mut g);
    g.pointer_down(CENTER);
    g.pointer_up();
    g.tick();
    g.enter_ar(2).unwrap();
    let events = g.back_to_gallery();
    assert_eq!(
        events,
        vec![
            GalleryEvent::ArtifactSelected(1),
            GalleryEvent::ExitedAr,
            GalleryEvent::BackToGallery
        ]
    );
    assert_eq!(g.selected(), None);
    for _ in 0..200 {
        assert!(g.tick().is_empty());
    }
    assert!((g.camera().position - DVec3::new(0.0, 2.0, 10.0)).length() < 0.1);
}

#[test]
fn ar_mode_needs_an_ar_enabled_artifact() {
    let mut g = gallery();
    assert!(matches!(g.enter_ar(1), Err(GalleryError::ArUnavailable(1))));
    assert!(matches!(g.enter_ar(99), Err(GalleryError::UnknownArtifact(99))));
    assert_eq!(g.enter_ar(2).unwrap(), GalleryEvent::EnteredAr(2));
    assert_eq!(g.ar_artifact(), Some(2));
    assert_eq!(g.exit_ar(), Some(GalleryEvent::ExitedAr));
    assert_eq!(g.exit_ar(), None);
}

#[test]
fn placing_an_artifact_updates_it_and_emits_the_edit() {
    let mut g = gallery();
    let ev = g
        .place_artifact(1, DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.5, 0.0), 2.0)
        .unwrap();
    match ev {
        GalleryEvent::ArtifactPlaced(p) => {
            assert_eq!(p.id, 1);
            assert_eq!((p.position_x, p.position_y, p.position_z), (1.0, 2.0, 3.0));
            assert_eq!(p.rotation_y, 0.5);
            assert_eq!(p.scale, 2.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(g.artifacts()[0].scale, 2.0);

    assert!(matches!(
        g.place_artifact(1, DVec3::ZERO, DVec3::ZERO, 0.0),
        Err(GalleryError::InvalidScale(_))
    ));
    assert!(matches!(
        g.place_artifact(42, DVec3::ZERO, DVec3::ZERO, 1.0),
        Err(GalleryError::UnknownArtifact(42))
    ));
}

#[test]
fn replacing_artifacts_drops_a_vanished_selection() {
    let mut g = gallery();
    g.select(2);
    g.set_artifacts(vec![Artifact::new(1, "near", ArtifactKind::Image, DVec3::ZERO)]);
    assert_eq!(g.selected(), None);
}
