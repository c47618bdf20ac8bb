// Sanity checks on tuning constants and their relationships.

use gallery_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fly_to_settles_before_the_detail_fallback() {
    assert!(FLY_BLEND > 0.0 && FLY_BLEND < 1.0);
    // Ticks needed for the overview -> focus fly-to to come within
    // FLY_EPSILON of an artifact at the origin.
    let start = OVERVIEW_POSITION.distance(FOCUS_OFFSET);
    let ticks = ((FLY_EPSILON / start).ln() / (1.0 - FLY_BLEND).ln()).ceil() as u32;
    assert!(ticks < DETAIL_OPEN_FALLBACK_TICKS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn control_rates_are_positive() {
    assert!(MOVE_SPEED > 0.0);
    assert!(ROTATE_SPEED > 0.0);
    assert!(DRAG_SENSITIVITY > 0.0);
    assert!(CAMERA_TICK_MS > 0);
    assert!(FOCUS_PITCH.abs() < PITCH_LIMIT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_steps_line_up() {
    assert_eq!(GRID_EXTENT % GRID_MINOR_STEP as i32, 0);
    assert_eq!(GRID_MAJOR_STEP % GRID_MINOR_STEP as i32, 0);
    assert!(GRID_EXTENT >= GRID_MAJOR_STEP);
}

#[test]
fn background_stops_are_ordered() {
    assert_eq!(BACKGROUND_STOPS.first().map(|s| s.0), Some(0.0));
    assert_eq!(BACKGROUND_STOPS.last().map(|s| s.0), Some(1.0));
    assert!(BACKGROUND_STOPS.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn palette_colours_are_hex() {
    assert!(!STROKE_PALETTE.is_empty());
    for c in STROKE_PALETTE {
        assert!(c.starts_with('#') && c.len() == 7, "{c}");
    }
    assert!(STROKE_DEFAULT_WIDTH > 0.0);
}
