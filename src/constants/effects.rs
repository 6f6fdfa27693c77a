//! Floating text constants.

/// Lifetime of a damage number in ticks
pub const FLOATING_TEXT_LIFETIME: u32 = 60;
/// How far a damage number rises per tick (world units)
pub const FLOATING_TEXT_RISE: f32 = 0.5;
/// Vertical offset of the player's damage numbers above the player
pub const PLAYER_DAMAGE_TEXT_OFFSET: f32 = 10.0;

/// Ticks the attack reach ring stays visible after a swing starts
pub const ATTACK_RING_TICKS: u32 = 6;
