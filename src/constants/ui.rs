//! UI and window constants.

/// Logical screen width
pub const SCREEN_WIDTH: u32 = 800;
/// Logical screen height
pub const SCREEN_HEIGHT: u32 = 600;
/// Window title
pub const WINDOW_TITLE: &str = "2D Diablo-Like";

/// Width of the HP bar in the top-left corner
pub const HP_BAR_WIDTH: f32 = 180.0;
