// Host-side tests for the pure key mapping.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use gallery_core::CameraKey;
use keys::*;

#[test]
fn movement_keys_map_case_insensitively() {
    assert_eq!(camera_key("w"), Some(CameraKey::Forward));
    assert_eq!(camera_key("W"), Some(CameraKey::Forward));
    assert_eq!(camera_key("S"), Some(CameraKey::Back));
    assert_eq!(camera_key("a"), Some(CameraKey::StrafeLeft));
    assert_eq!(camera_key("D"), Some(CameraKey::StrafeRight));
    assert_eq!(camera_key(" "), Some(CameraKey::Up));
    assert_eq!(camera_key("Shift"), Some(CameraKey::Down));
}

#[test]
fn arrow_keys_look_around() {
    assert_eq!(camera_key("ArrowLeft"), Some(CameraKey::LookLeft));
    assert_eq!(camera_key("ArrowRight"), Some(CameraKey::LookRight));
    assert_eq!(camera_key("ArrowUp"), Some(CameraKey::LookUp));
    assert_eq!(camera_key("ArrowDown"), Some(CameraKey::LookDown));
}

#[test]
fn every_camera_key_has_a_binding() {
    let bound: Vec<CameraKey> = ["w", "s", "a", "d", " ", "Shift", "ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown"]
        .iter()
        .filter_map(|k| camera_key(k))
        .collect();
    for key in CameraKey::ALL {
        assert!(bound.contains(&key), "{key:?} unbound");
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    for k in ["q", "Enter", "Escape", "1", "Control", ""] {
        assert_eq!(camera_key(k), None, "{k:?}");
    }
    assert!(scrolls_page(" "));
    assert!(scrolls_page("ArrowDown"));
    assert!(!scrolls_page("w"));
}
