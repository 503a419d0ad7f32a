/// Header carrying the planner session id in both directions
pub const SESSION_HEADER: &str = "x-session-id";

/// Attribution shown for the satellite base layer
pub const TILE_ATTRIBUTION: &str = "Google";

// =============================================================================
// MAP STYLE
// =============================================================================

pub const MARKER_COLOR: &str = "red";
pub const MARKER_SIZE: u32 = 10;

pub const OVERLAY_LINE_COLOR: &str = "blue";
pub const OVERLAY_LINE_WIDTH: u32 = 2;
pub const OVERLAY_FILL_COLOR: &str = "rgba(0, 0, 255, 0.2)";
