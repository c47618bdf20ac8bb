//! Plain records exchanged with the data layer.
//!
//! Incoming rows are converted into render-side types here; nothing in this
//! module knows how the rows were fetched or where outgoing payloads go.

use crate::annotation::Stroke;
use crate::artifact::{Artifact, ArtifactId, ArtifactKind};
use crate::error::{GalleryError, Result};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Artifact row as served by `getPortfolioArtifacts`.
#[derive(Clone, Debug, Deserialize)]
pub struct ArtifactRecord {
    pub id: ArtifactId,
    pub portfolio_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub file_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    #[serde(default)]
    pub rotation_x: f64,
    #[serde(default)]
    pub rotation_y: f64,
    #[serde(default)]
    pub rotation_z: f64,
    pub scale: f64,
    #[serde(default)]
    pub ar_enabled: bool,
}

impl From<ArtifactRecord> for Artifact {
    fn from(r: ArtifactRecord) -> Self {
        Artifact {
            id: r.id,
            title: r.title,
            kind: r.kind,
            position: DVec3::new(r.position_x, r.position_y, r.position_z),
            rotation: DVec3::new(r.rotation_x, r.rotation_y, r.rotation_z),
            scale: r.scale,
            thumbnail_url: r.thumbnail_url.filter(|u| !u.is_empty()),
            file_url: r.file_url,
            ar_enabled: r.ar_enabled,
        }
    }
}

/// One point of a stroke as stored inside `stroke_data`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
}

impl From<StrokePoint> for DVec2 {
    fn from(p: StrokePoint) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for StrokePoint {
    fn from(p: DVec2) -> Self {
        StrokePoint { x: p.x, y: p.y }
    }
}

/// Stroke row as served by `getSessionDrawingStrokes`.
#[derive(Clone, Debug, Deserialize)]
pub struct StrokeRecord {
    pub id: i64,
    pub session_id: i64,
    pub user_id: i64,
    /// JSON array of `{x, y}` screen points.
    pub stroke_data: String,
    pub color: String,
    pub width: f64,
}

impl StrokeRecord {
    pub fn to_stroke(&self) -> Result<Stroke> {
        let points: Vec<StrokePoint> = serde_json::from_str(&self.stroke_data)
            .map_err(|source| GalleryError::MalformedStroke {
                id: self.id,
                source,
            })?;
        Ok(Stroke {
            points: points.into_iter().map(DVec2::from).collect(),
            color: self.color.clone(),
            width: self.width,
        })
    }
}

/// Payload for `createDrawingStroke`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStroke {
    pub session_id: i64,
    pub user_id: i64,
    pub stroke_data: String,
    pub color: String,
    pub width: f64,
}

impl NewStroke {
    pub fn from_stroke(session: SessionContext, stroke: &Stroke) -> Self {
        let points: Vec<StrokePoint> = stroke.points.iter().copied().map(StrokePoint::from).collect();
        // A Vec of plain f64 pairs always serializes.
        let stroke_data = serde_json::to_string(&points).unwrap_or_else(|_| "[]".to_owned());
        NewStroke {
            session_id: session.session_id,
            user_id: session.user_id,
            stroke_data,
            color: stroke.color.clone(),
            width: stroke.width,
        }
    }
}

/// Payload for `updateArtifactPosition`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtifactPlacement {
    pub id: ArtifactId,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
    pub scale: f64,
}

impl From<&Artifact> for ArtifactPlacement {
    fn from(a: &Artifact) -> Self {
        ArtifactPlacement {
            id: a.id,
            position_x: a.position.x,
            position_y: a.position.y,
            position_z: a.position.z,
            rotation_x: a.rotation.x,
            rotation_y: a.rotation.y,
            rotation_z: a.rotation.z,
            scale: a.scale,
        }
    }
}

/// The collaboration session the local user is drawing in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: i64,
    pub user_id: i64,
}
