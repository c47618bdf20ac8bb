use gallery_core::CameraKey;

/// Camera binding for a `KeyboardEvent.key` value, if any.
#[inline]
pub fn camera_key(key: &str) -> Option<CameraKey> {
    match key.to_ascii_lowercase().as_str() {
        "w" => Some(CameraKey::Forward),
        "s" => Some(CameraKey::Back),
        "a" => Some(CameraKey::StrafeLeft),
        "d" => Some(CameraKey::StrafeRight),
        " " | "spacebar" => Some(CameraKey::Up),
        "shift" => Some(CameraKey::Down),
        "arrowleft" => Some(CameraKey::LookLeft),
        "arrowright" => Some(CameraKey::LookRight),
        "arrowup" => Some(CameraKey::LookUp),
        "arrowdown" => Some(CameraKey::LookDown),
        _ => None,
    }
}

/// Keys whose browser default (scrolling) must be suppressed while the
/// gallery has them bound.
#[inline]
pub fn scrolls_page(key: &str) -> bool {
    matches!(key, " " | "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight")
}
