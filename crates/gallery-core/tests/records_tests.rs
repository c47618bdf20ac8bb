use gallery_core::{
    Artifact, ArtifactKind, ArtifactPlacement, ArtifactRecord, GalleryError, NewStroke,
    SessionContext, Stroke, StrokeRecord,
};
use glam::{DVec2, DVec3};

#[test]
fn artifact_row_converts_with_defaults() {
    let json = r#"{
        "id": 12,
        "portfolio_id": 3,
        "title": "Churn model",
        "type": "ml_notebook",
        "file_url": "https://cdn.example.org/churn.ipynb",
        "thumbnail_url": "",
        "position_x": -2.0,
        "position_y": 1.5,
        "position_z": 4,
        "scale": 1.25
    }"#;
    let record: ArtifactRecord = serde_json::from_str(json).unwrap();
    let artifact = Artifact::from(record);
    assert_eq!(artifact.id, 12);
    assert_eq!(artifact.kind, ArtifactKind::MlNotebook);
    assert_eq!(artifact.position, DVec3::new(-2.0, 1.5, 4.0));
    assert_eq!(artifact.rotation, DVec3::ZERO);
    assert_eq!(artifact.scale, 1.25);
    // empty thumbnail means none
    assert_eq!(artifact.thumbnail_url, None);
    assert!(!artifact.ar_enabled);
}

#[test]
fn unknown_artifact_kind_is_rejected() {
    let json = r#"{"id":1,"portfolio_id":1,"title":"x","type":"video","file_url":"",
        "position_x":0,"position_y":0,"position_z":0,"scale":1}"#;
    assert!(serde_json::from_str::<ArtifactRecord>(json).is_err());
}

#[test]
fn stroke_row_decodes_points() {
    let record = StrokeRecord {
        id: 5,
        session_id: 2,
        user_id: 8,
        stroke_data: r#"[{"x":10,"y":20},{"x":11.5,"y":21}]"#.to_owned(),
        color: "#ff6b6b".to_owned(),
        width: 4.0,
    };
    let stroke = record.to_stroke().unwrap();
    assert_eq!(stroke.points, vec![DVec2::new(10.0, 20.0), DVec2::new(11.5, 21.0)]);
    assert_eq!(stroke.color, "#ff6b6b");
    assert_eq!(stroke.width, 4.0);
}

#[test]
fn malformed_stroke_row_names_the_stroke() {
    let record = StrokeRecord {
        id: 77,
        session_id: 2,
        user_id: 8,
        stroke_data: "{broken".to_owned(),
        color: "#ff6b6b".to_owned(),
        width: 4.0,
    };
    let err = record.to_stroke().unwrap_err();
    assert!(matches!(err, GalleryError::MalformedStroke { id: 77, .. }));
    assert!(err.to_string().contains("stroke 77"));
}

#[test]
fn new_stroke_payload_matches_the_stored_shape() {
    let mut stroke = Stroke::new("#96ceb4", 3.0);
    stroke.points.push(DVec2::new(1.0, 2.0));
    stroke.points.push(DVec2::new(3.5, 4.0));
    let payload = NewStroke::from_stroke(
        SessionContext {
            session_id: 1,
            user_id: 2,
        },
        &stroke,
    );
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["session_id"], 1);
    assert_eq!(value["user_id"], 2);
    assert_eq!(value["color"], "#96ceb4");
    assert_eq!(
        payload.stroke_data,
        r#"[{"x":1.0,"y":2.0},{"x":3.5,"y":4.0}]"#
    );

    // a stored payload replays to the same points
    let replayed = StrokeRecord {
        id: 1,
        session_id: payload.session_id,
        user_id: payload.user_id,
        stroke_data: payload.stroke_data.clone(),
        color: payload.color.clone(),
        width: payload.width,
    }
    .to_stroke()
    .unwrap();
    assert_eq!(replayed, stroke);
}

#[test]
fn placement_carries_every_transform_field() {
    let mut artifact = Artifact::new(4, "Deck", ArtifactKind::Document, DVec3::new(1.0, 0.0, -3.0));
    artifact.rotation = DVec3::new(0.0, 1.0, 0.0);
    artifact.scale = 0.5;
    let placement = ArtifactPlacement::from(&artifact);
    let value = serde_json::to_value(&placement).unwrap();
    assert_eq!(value["id"], 4);
    assert_eq!(value["position_z"], -3.0);
    assert_eq!(value["rotation_y"], 1.0);
    assert_eq!(value["scale"], 0.5);
}
