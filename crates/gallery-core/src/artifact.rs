//! Artifacts as the renderer sees them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

pub type ArtifactId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    DataVisualization,
    MlNotebook,
    WebApplication,
    Image,
    Document,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::DataVisualization,
        ArtifactKind::MlNotebook,
        ArtifactKind::WebApplication,
        ArtifactKind::Image,
        ArtifactKind::Document,
    ];

    /// Glyph drawn in the panel when there is no thumbnail.
    pub fn icon(self) -> &'static str {
        match self {
            ArtifactKind::DataVisualization => "📊",
            ArtifactKind::MlNotebook => "🤖",
            ArtifactKind::WebApplication => "🌐",
            ArtifactKind::Image => "🖼️",
            ArtifactKind::Document => "📄",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::DataVisualization => "Data Visualization",
            ArtifactKind::MlNotebook => "ML Notebook",
            ArtifactKind::WebApplication => "Web Application",
            ArtifactKind::Image => "Image",
            ArtifactKind::Document => "Document",
        }
    }

    /// Accent colour for the kind label under the title.
    pub fn accent(self) -> &'static str {
        match self {
            ArtifactKind::DataVisualization => "#4ecdc4",
            ArtifactKind::MlNotebook => "#ffeaa7",
            ArtifactKind::WebApplication => "#45b7d1",
            ArtifactKind::Image => "#ff6b6b",
            ArtifactKind::Document => "#dda0dd",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Render view of an artifact. Owned by the data layer; read-only during a
/// render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub title: String,
    pub kind: ArtifactKind,
    pub position: DVec3,
    pub rotation: DVec3,
    /// Expected to be positive; the renderer does not enforce it.
    pub scale: f64,
    pub thumbnail_url: Option<String>,
    pub file_url: String,
    pub ar_enabled: bool,
}

impl Artifact {
    /// Convenience constructor with unit scale and no media.
    pub fn new(id: ArtifactId, title: impl Into<String>, kind: ArtifactKind, position: DVec3) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            position,
            rotation: DVec3::ZERO,
            scale: 1.0,
            thumbnail_url: None,
            file_url: String::new(),
            ar_enabled: false,
        }
    }
}
