pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_camera_keys;
pub use pointer::wire_pointer;
