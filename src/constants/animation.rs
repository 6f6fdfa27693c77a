//! Animation-related constants.

/// Width of one player animation frame in pixels
pub const PLAYER_FRAME_WIDTH: u32 = 96;
/// Height of one player animation frame in pixels
pub const PLAYER_FRAME_HEIGHT: u32 = 80;
/// Frames in each idle sheet
pub const PLAYER_IDLE_FRAMES: u32 = 8;
/// Frames in each run sheet
pub const PLAYER_RUN_FRAMES: u32 = 8;
/// Frames in each attack sheet
pub const PLAYER_ATTACK_FRAMES: u32 = 6;
/// Ticks each player frame stays on screen
pub const PLAYER_FRAME_DELAY: u32 = 5;

/// Ticks each frame of a spawned enemy stays on screen
pub const ENEMY_FRAME_DELAY: u32 = 7;
