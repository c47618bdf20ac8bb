use crate::artifact::ArtifactId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("stroke {id} has malformed point data: {source}")]
    MalformedStroke {
        id: i64,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown artifact {0}")]
    UnknownArtifact(ArtifactId),
    #[error("artifact {0} has no AR view")]
    ArUnavailable(ArtifactId),
    #[error("scale must be positive, got {0}")]
    InvalidScale(f64),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
