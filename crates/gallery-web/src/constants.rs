// Page wiring and timing constants for the browser front end

// Canvas the gallery draws into; runtime config lives in its data-* attributes
pub const CANVAS_ID: &str = "gallery-canvas";

// Optional controls; any of them may be absent from the page
pub const DRAW_TOGGLE_ID: &str = "draw-toggle";
pub const BACK_BUTTON_ID: &str = "back-to-gallery";
pub const AR_BUTTON_ID: &str = "enter-ar";
pub const PALETTE_ID: &str = "stroke-palette"; // container of swatches with data-color
pub const NOTICE_ID: &str = "gallery-notice";

// Session stroke refresh period (ms)
pub const STROKE_POLL_MS: i32 = 3000;

// How long a notification stays up (ms)
pub const NOTICE_MS: i32 = 4000;

// DOM events dispatched on the canvas for the host page
pub const EVENT_ARTIFACT_SELECTED: &str = "gallery:artifact-selected";
pub const EVENT_AR_ENTERED: &str = "gallery:ar-entered";
pub const EVENT_AR_EXITED: &str = "gallery:ar-exited";
pub const EVENT_BACK: &str = "gallery:back";

// Class toggled on the canvas and the draw button while drawing mode is on
pub const DRAWING_CLASS: &str = "drawing";
