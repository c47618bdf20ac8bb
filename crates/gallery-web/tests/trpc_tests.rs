// Host-side tests for the tRPC envelope.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod trpc {
    include!("../src/trpc.rs");
}

use gallery_core::{Artifact, ArtifactKind, ArtifactRecord, StrokeRecord};
use serde_json::json;
use trpc::*;

#[test]
fn input_is_wrapped_in_json_key() {
    let body = envelope(&json!({ "session_id": 4 })).unwrap();
    assert_eq!(body, r#"{"json":{"session_id":4}}"#);
    assert_eq!(procedure_url("/api", "getPortfolioArtifacts"), "/api/getPortfolioArtifacts");
}

#[test]
fn result_is_unwrapped_from_data_json() {
    let body = r#"{"result":{"data":{"json":[
        {"id":1,"portfolio_id":2,"title":"Sales","description":null,"type":"data_visualization",
         "file_url":"/f/1","thumbnail_url":null,"position_x":1,"position_y":0,"position_z":-2,
         "rotation_x":0,"rotation_y":0,"rotation_z":0,"scale":1,"ar_enabled":true,
         "created_at":"2024-01-01T00:00:00.000Z"}
    ]},"meta":{"values":{"0.created_at":["Date"]}}}}"#;
    let rows: Vec<ArtifactRecord> = decode("getPortfolioArtifacts", body).unwrap();
    let artifact = Artifact::from(rows[0].clone());
    assert_eq!(artifact.kind, ArtifactKind::DataVisualization);
    assert!(artifact.ar_enabled);
    assert_eq!(artifact.position.z, -2.0);
}

#[test]
fn server_error_message_is_surfaced() {
    let body = r#"{"error":{"json":{"message":"Session not found","code":-32004}}}"#;
    let err = decode::<Vec<StrokeRecord>>("getSessionDrawingStrokes", body).unwrap_err();
    assert_eq!(err.to_string(), "getSessionDrawingStrokes: Session not found");
}

#[test]
fn malformed_bodies_fail() {
    assert!(decode::<Vec<StrokeRecord>>("p", "<html>").is_err());
    assert!(decode::<Vec<StrokeRecord>>("p", r#"{"result":{}}"#).is_err());
    assert!(decode::<Vec<StrokeRecord>>("p", r#"{"result":{"data":{"json":{"id":1}}}}"#).is_err());
}
