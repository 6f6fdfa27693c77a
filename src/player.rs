//! The player: movement, the attack state machine and health.

use crate::animation::{FrameCursor, OneShot};
use crate::config::PlayerConfig;
use crate::enemy::Enemy;
use crate::input::{GameKey, InputSnapshot};
use crate::sprites::{SpriteFrame, SpriteLibrary};
use anyhow::Result;
use glam::Vec2;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Down,
    Up,
    Left,
    Right,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Up, Facing::Left, Facing::Right];

    fn asset_name(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Up => "up",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Idle,
    Running,
    Attacking,
}

impl PlayerState {
    pub const ALL: [PlayerState; 3] = [PlayerState::Idle, PlayerState::Running, PlayerState::Attacking];

    fn asset_name(self) -> &'static str {
        match self {
            PlayerState::Idle => "idle",
            PlayerState::Running => "run",
            PlayerState::Attacking => "attack",
        }
    }
}

/// Frame sequences keyed by what the player is doing and where they face
pub type PlayerAnimations = HashMap<(PlayerState, Facing), Vec<SpriteFrame>>;

/// Load `assets/player/<state>_<facing>.png` for every state and facing
pub fn load_player_animations(library: &mut SpriteLibrary, config: &PlayerConfig) -> Result<PlayerAnimations> {
    let mut animations = HashMap::new();
    for state in PlayerState::ALL {
        let frame_count = match state {
            PlayerState::Idle => config.idle_frames,
            PlayerState::Running => config.run_frames,
            PlayerState::Attacking => config.attack_frames,
        };
        for facing in Facing::ALL {
            let path = PathBuf::from(format!(
                "assets/player/{}_{}.png",
                state.asset_name(),
                facing.asset_name()
            ));
            let frames = library.load_strip(&path, frame_count, config.frame_width, config.frame_height)?;
            animations.insert((state, facing), frames);
        }
    }
    Ok(animations)
}

/// One enemy caught by a melee swing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackHit {
    pub enemy_index: usize,
    pub position: Vec2,
    pub killed: bool,
}

pub struct Player {
    pub position: Vec2,
    pub speed: f32,
    pub facing: Facing,
    pub state: PlayerState,
    pub cursor: FrameCursor,
    /// Ticks until the next attack is allowed
    pub attack_timer: u32,
    pub attack_cooldown: u32,
    pub attack_range: f32,
    pub attack_damage: i32,
    pub hp: i32,
    pub max_hp: i32,
    /// Ticks of invulnerability left after being hurt
    pub damage_timer: u32,
    pub damage_cooldown: u32,
    animations: PlayerAnimations,
}

impl Player {
    pub fn new(config: &PlayerConfig, animations: PlayerAnimations) -> Self {
        Self {
            position: Vec2::new(config.start.0, config.start.1),
            speed: config.speed,
            facing: Facing::Down,
            state: PlayerState::Idle,
            cursor: FrameCursor::new(config.frame_delay),
            attack_timer: 0,
            attack_cooldown: config.attack_cooldown,
            attack_range: config.attack_range,
            attack_damage: config.attack_damage,
            hp: config.max_hp,
            max_hp: config.max_hp,
            damage_timer: 0,
            damage_cooldown: config.damage_cooldown,
            animations,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Frames for the current state and facing, if any were loaded
    pub fn current_animation(&self) -> Option<&[SpriteFrame]> {
        self.animations
            .get(&(self.state, self.facing))
            .map(Vec::as_slice)
            .filter(|frames| !frames.is_empty())
    }

    pub fn current_frame(&self) -> Option<&SpriteFrame> {
        self.current_animation()?.get(self.cursor.index)
    }

    fn frame_count(&self) -> usize {
        self.current_animation().map_or(0, <[SpriteFrame]>::len)
    }

    /// Switch pose, restarting the animation when it actually changes
    fn set_pose(&mut self, state: PlayerState, facing: Facing) {
        if self.state != state || self.facing != facing {
            self.state = state;
            self.facing = facing;
            self.cursor.reset();
        }
    }

    /// One tick of timers, movement and animation
    pub fn update(&mut self, input: &InputSnapshot) {
        self.attack_timer = self.attack_timer.saturating_sub(1);
        self.damage_timer = self.damage_timer.saturating_sub(1);

        if self.state == PlayerState::Attacking {
            if self.cursor.advance_once(self.frame_count()) == OneShot::Finished {
                self.set_pose(PlayerState::Idle, self.facing);
            }
            return;
        }

        let mut facing = self.facing;
        let mut moved = false;
        if !self.is_dead() {
            // Checked in this order; the last held key decides the facing
            for (key, dir, delta) in [
                (GameKey::Up, Facing::Up, Vec2::new(0.0, -1.0)),
                (GameKey::Down, Facing::Down, Vec2::new(0.0, 1.0)),
                (GameKey::Left, Facing::Left, Vec2::new(-1.0, 0.0)),
                (GameKey::Right, Facing::Right, Vec2::new(1.0, 0.0)),
            ] {
                if input.is_held(key) {
                    self.position += delta * self.speed;
                    facing = dir;
                    moved = true;
                }
            }
        }

        let state = if moved { PlayerState::Running } else { PlayerState::Idle };
        self.set_pose(state, facing);
        self.cursor.advance_looping(self.frame_count());
    }

    pub fn can_attack(&self) -> bool {
        !self.is_dead() && self.attack_timer == 0 && self.state != PlayerState::Attacking
    }

    /// Start a swing if allowed and damage every live enemy within reach.
    /// Returns `None` when the swing could not start.
    pub fn try_attack(&mut self, enemies: &mut [Enemy]) -> Option<Vec<AttackHit>> {
        if !self.can_attack() {
            return None;
        }
        self.set_pose(PlayerState::Attacking, self.facing);
        self.cursor.reset();
        self.attack_timer = self.attack_cooldown;

        let hits = enemies
            .iter_mut()
            .enumerate()
            .filter(|(_, enemy)| !enemy.dead && enemy.position.distance(self.position) <= self.attack_range)
            .map(|(enemy_index, enemy)| AttackHit {
                enemy_index,
                position: enemy.position,
                killed: enemy.take_damage(self.attack_damage),
            })
            .collect();
        Some(hits)
    }

    /// Ticks since the last swing started, while its cooldown is running
    pub fn ticks_since_attack(&self) -> Option<u32> {
        (self.attack_timer > 0).then(|| self.attack_cooldown.saturating_sub(self.attack_timer))
    }

    pub fn is_invulnerable(&self) -> bool {
        self.damage_timer > 0
    }

    /// Lose HP, never below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Contact hit: damage plus a window of invulnerability
    pub fn hurt(&mut self, amount: i32) {
        self.take_damage(amount);
        self.damage_timer = self.damage_cooldown;
    }
}
