// Shared projection/navigation/rendering tuning constants.

use glam::DVec3;

// Projection
pub const FOCAL_LENGTH: f64 = 800.0; // world-to-screen scale of the pinhole projection
pub const NEAR_EPSILON: f64 = 0.1; // camera-space depth at or below which a point is hidden

// Direct camera control, per 16 ms tick
pub const CAMERA_TICK_MS: i32 = 16;
pub const MOVE_SPEED: f64 = 0.2; // world units per tick
pub const ROTATE_SPEED: f64 = 0.03; // radians per tick
pub const DRAG_SENSITIVITY: f64 = 0.01; // radians per pointer pixel
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2;

// Fly-to animation
pub const FLY_BLEND: f64 = 0.1; // fraction of the remaining gap closed per tick
pub const FLY_EPSILON: f64 = 0.1; // positional distance treated as arrived
pub const FOCUS_OFFSET: DVec3 = DVec3::new(0.0, 1.0, 3.0);
pub const FOCUS_PITCH: f64 = 0.15; // slight downward look when framing an artifact
pub const OVERVIEW_POSITION: DVec3 = DVec3::new(0.0, 2.0, 10.0);
// Ticks to wait for a fly-to before opening the detail view anyway (~1.5 s)
pub const DETAIL_OPEN_FALLBACK_TICKS: u32 = 90;

// Floor grid
pub const GRID_EXTENT: i32 = 20;
pub const GRID_MINOR_STEP: usize = 2;
pub const GRID_MAJOR_STEP: i32 = 10;
pub const GRID_MINOR_COLOR: &str = "rgba(255, 255, 255, 0.08)";
pub const GRID_MAJOR_COLOR: &str = "rgba(255, 255, 255, 0.18)";
pub const GRID_ZERO_COLOR: &str = "rgba(255, 255, 255, 0.35)";

// Background gradient stops (offset, css colour)
pub const BACKGROUND_STOPS: [(f64, &str); 3] =
    [(0.0, "#1a1a2e"), (0.5, "#16213e"), (1.0, "#0f3460")];

// Artifact panels
pub const PANEL_BASE_SIZE: f64 = 100.0; // on-screen side length at scale 1
pub const PANEL_INSET: f64 = 5.0;
pub const PANEL_FRAME_COLOR: &str = "rgba(255, 255, 255, 0.9)";
pub const PANEL_SELECTED_FRAME_COLOR: &str = "rgba(138, 43, 226, 0.8)";
pub const PANEL_CONTENT_COLOR: &str = "rgba(0, 0, 0, 0.8)";
pub const PANEL_TEXT_COLOR: &str = "white";
pub const SELECTION_BORDER_COLOR: &str = "#8a2be2";
pub const SELECTION_BORDER_WIDTH: f64 = 3.0;

// Annotation strokes
pub const STROKE_DEFAULT_WIDTH: f64 = 3.0;
pub const STROKE_PALETTE: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd",
];

// HUD
pub const HUD_ORIGIN: (f64, f64) = (10.0, 10.0);
pub const HUD_SIZE: (f64, f64) = (250.0, 80.0);
pub const HUD_BACKGROUND: &str = "rgba(0, 0, 0, 0.7)";
pub const HUD_FONT_PX: f64 = 14.0;
pub const HUD_LINE_HEIGHT: f64 = 20.0;
