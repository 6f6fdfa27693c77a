//! Spawner constants.

/// Ticks between two spawns
pub const SPAWN_INTERVAL: u32 = 180;
/// Enemies a spawner produces before going inert
pub const SPAWN_MAX_ENEMIES: u32 = 10;
/// Spawn position jitter; offsets are drawn from `-SPAWN_JITTER..SPAWN_JITTER`
pub const SPAWN_JITTER: i32 = 20;
/// Spawners placed at startup
pub const DEFAULT_SPAWNER_POSITIONS: &[(f32, f32)] = &[(300.0, 300.0)];
