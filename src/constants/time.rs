//! Simulation timing constants.

/// Fixed simulation rate
pub const TICKS_PER_SECOND: u32 = 60;
/// Upper bound on ticks run in one redraw (avoids a catch-up spiral)
pub const MAX_TICKS_PER_FRAME: u32 = 5;
