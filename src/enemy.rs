//! Enemies and the catalog they are spawned from.
//!
//! Enemy kinds are data: adding a new one means adding a variant and its
//! sheet description, not touching the spawning code.

use crate::animation::FrameCursor;
use crate::constants::*;
use crate::sprites::{SpriteFrame, SpriteLibrary};
use anyhow::Result;
use glam::Vec2;
use rand::Rng;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    GreenSlime,
    RedSlime,
    Bat,
}

/// Where a kind's frames live and how they are laid out
pub struct SheetLayout {
    pub path: &'static str,
    pub frame_count: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::GreenSlime, EnemyKind::RedSlime, EnemyKind::Bat];

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::GreenSlime => "green slime",
            EnemyKind::RedSlime => "red slime",
            EnemyKind::Bat => "bat",
        }
    }

    pub fn base_hp(self) -> i32 {
        match self {
            EnemyKind::GreenSlime => GREEN_SLIME_HP,
            EnemyKind::RedSlime => RED_SLIME_HP,
            EnemyKind::Bat => BAT_HP,
        }
    }

    pub fn sheet(self) -> SheetLayout {
        match self {
            EnemyKind::GreenSlime => SheetLayout {
                path: "assets/slime/green.png",
                frame_count: SLIME_FRAMES,
                frame_width: SLIME_FRAME_WIDTH,
                frame_height: SLIME_FRAME_HEIGHT,
            },
            EnemyKind::RedSlime => SheetLayout {
                path: "assets/slime/red.png",
                frame_count: SLIME_FRAMES,
                frame_width: SLIME_FRAME_WIDTH,
                frame_height: SLIME_FRAME_HEIGHT,
            },
            EnemyKind::Bat => SheetLayout {
                path: "assets/bat/default.png",
                frame_count: BAT_FRAMES,
                frame_width: BAT_FRAME_WIDTH,
                frame_height: BAT_FRAME_HEIGHT,
            },
        }
    }
}

/// Everything needed to stamp out one kind of enemy
#[derive(Debug, Clone)]
pub struct EnemyTemplate {
    pub kind: EnemyKind,
    pub hp: i32,
    pub frames: Rc<[SpriteFrame]>,
}

/// The enemy kinds a spawner chooses from
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    templates: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    /// Load the frames of every kind. A missing sheet is a startup error.
    pub fn load(library: &mut SpriteLibrary) -> Result<Self> {
        let mut templates = Vec::with_capacity(EnemyKind::ALL.len());
        for kind in EnemyKind::ALL {
            let layout = kind.sheet();
            let frames = library.load_strip(
                Path::new(layout.path),
                layout.frame_count,
                layout.frame_width,
                layout.frame_height,
            )?;
            templates.push(EnemyTemplate {
                kind,
                hp: kind.base_hp(),
                frames: frames.into(),
            });
        }
        Ok(Self { templates })
    }

    #[cfg(test)]
    pub fn from_templates(templates: Vec<EnemyTemplate>) -> Self {
        Self { templates }
    }

    pub fn get(&self, kind: EnemyKind) -> Option<&EnemyTemplate> {
        self.templates.iter().find(|t| t.kind == kind)
    }

    /// Pick a template uniformly at random
    pub fn choose(&self, rng: &mut impl Rng) -> Option<&EnemyTemplate> {
        if self.templates.is_empty() {
            return None;
        }
        Some(&self.templates[rng.gen_range(0..self.templates.len())])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub speed: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub frames: Rc<[SpriteFrame]>,
    pub cursor: FrameCursor,
    pub dead: bool,
}

impl Enemy {
    pub fn from_template(template: &EnemyTemplate, position: Vec2, speed: f32, frame_delay: u32) -> Self {
        Self {
            kind: template.kind,
            position,
            speed,
            hp: template.hp,
            max_hp: template.hp,
            frames: Rc::clone(&template.frames),
            cursor: FrameCursor::new(frame_delay),
            dead: false,
        }
    }

    /// Seek `target` in a straight line and advance the animation
    pub fn update(&mut self, target: Vec2) {
        let to_target = target - self.position;
        let distance = to_target.length();
        if distance > ENEMY_ARRIVE_DISTANCE {
            self.position += to_target / distance * self.speed;
        }

        self.cursor.advance_looping(self.frames.len());
    }

    /// Apply damage. Returns true only for the hit that kills.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.dead {
            return false;
        }
        self.hp -= amount;
        if self.hp <= 0 {
            self.dead = true;
            return true;
        }
        false
    }

    pub fn current_frame(&self) -> Option<&SpriteFrame> {
        self.frames.get(self.cursor.index)
    }
}
