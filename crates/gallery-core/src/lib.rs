//! Platform-independent core of the 3D gallery viewer: projection, camera
//! control, scene rendering against an abstract surface, picking and the
//! annotation overlay.

pub mod annotation;
pub mod artifact;
pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod picking;
pub mod projection;
pub mod records;
pub mod scene;

pub use annotation::*;
pub use artifact::*;
pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::{GalleryError, Result};
pub use gallery::*;
pub use picking::*;
pub use projection::*;
pub use records::*;
pub use scene::*;
