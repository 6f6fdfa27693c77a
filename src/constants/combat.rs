//! Combat and player tuning constants.

/// Player movement per tick while a direction key is held
pub const PLAYER_SPEED: f32 = 2.5;
/// Player's starting and maximum health
pub const PLAYER_MAX_HP: i32 = 10;
/// Ticks between two attacks
pub const PLAYER_ATTACK_COOLDOWN: u32 = 20;
/// Melee reach in world units (inclusive)
pub const PLAYER_ATTACK_RANGE: f32 = 40.0;
/// Damage dealt to every enemy inside the melee reach
pub const PLAYER_ATTACK_DAMAGE: i32 = 1;

/// Enemies closer than this hurt the player on contact
pub const CONTACT_DAMAGE_RANGE: f32 = 20.0;
/// Damage taken per enemy contact
pub const CONTACT_DAMAGE: i32 = 1;
/// Ticks of invulnerability after a contact hit
pub const PLAYER_DAMAGE_COOLDOWN: u32 = 30;

/// Enemies stop seeking once this close to their target
pub const ENEMY_ARRIVE_DISTANCE: f32 = 1.0;
