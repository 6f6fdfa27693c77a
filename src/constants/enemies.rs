//! Enemy catalog constants.

/// Movement per tick of spawned enemies
pub const SPAWNED_ENEMY_SPEED: f32 = 1.0;

/// Green slime health
pub const GREEN_SLIME_HP: i32 = 1;
/// Red slime health
pub const RED_SLIME_HP: i32 = 2;
/// Bat health
pub const BAT_HP: i32 = 5;

/// Slime sheets: frame count and frame size
pub const SLIME_FRAMES: u32 = 11;
pub const SLIME_FRAME_WIDTH: u32 = 16;
pub const SLIME_FRAME_HEIGHT: u32 = 32;

/// Bat sheet: frame count and frame size
pub const BAT_FRAMES: u32 = 4;
pub const BAT_FRAME_WIDTH: u32 = 32;
pub const BAT_FRAME_HEIGHT: u32 = 32;

/// The bat placed in the world at startup
pub const STARTING_BAT_POSITION: (f32, f32) = (100.0, 100.0);
pub const STARTING_BAT_SPEED: f32 = 1.2;
pub const STARTING_BAT_HP: i32 = 3;
pub const STARTING_BAT_FRAME_DELAY: u32 = 10;
