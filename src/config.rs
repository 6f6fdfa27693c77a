//! Game configuration.
//!
//! Every tunable defaults to the value in `constants`. A JSON file can
//! override any subset of them; fields it leaves out keep their defaults.

use crate::constants::*;
use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Where the game looks for overrides
pub const CONFIG_PATH: &str = "assets/game.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub spawners: Vec<SpawnerConfig>,
    pub inventory: InventoryConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub start: (f32, f32),
    pub speed: f32,
    pub max_hp: i32,
    pub attack_cooldown: u32,
    pub attack_range: f32,
    pub attack_damage: i32,
    pub damage_cooldown: u32,
    pub frame_delay: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub idle_frames: u32,
    pub run_frames: u32,
    pub attack_frames: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Speed of spawned enemies
    pub speed: f32,
    pub frame_delay: u32,
    pub contact_range: f32,
    pub contact_damage: i32,
    /// Place the starting bat in the world
    pub starting_bat: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub position: (f32, f32),
    pub interval: u32,
    pub max_enemies: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub rows: usize,
    pub cols: usize,
    pub toggle_cooldown: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            spawners: DEFAULT_SPAWNER_POSITIONS
                .iter()
                .map(|&position| SpawnerConfig {
                    position,
                    ..SpawnerConfig::default()
                })
                .collect(),
            inventory: InventoryConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: (SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0),
            speed: PLAYER_SPEED,
            max_hp: PLAYER_MAX_HP,
            attack_cooldown: PLAYER_ATTACK_COOLDOWN,
            attack_range: PLAYER_ATTACK_RANGE,
            attack_damage: PLAYER_ATTACK_DAMAGE,
            damage_cooldown: PLAYER_DAMAGE_COOLDOWN,
            frame_delay: PLAYER_FRAME_DELAY,
            frame_width: PLAYER_FRAME_WIDTH,
            frame_height: PLAYER_FRAME_HEIGHT,
            idle_frames: PLAYER_IDLE_FRAMES,
            run_frames: PLAYER_RUN_FRAMES,
            attack_frames: PLAYER_ATTACK_FRAMES,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: SPAWNED_ENEMY_SPEED,
            frame_delay: ENEMY_FRAME_DELAY,
            contact_range: CONTACT_DAMAGE_RANGE,
            contact_damage: CONTACT_DAMAGE,
            starting_bat: true,
        }
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            position: (0.0, 0.0),
            interval: SPAWN_INTERVAL,
            max_enemies: SPAWN_MAX_ENEMIES,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            rows: INVENTORY_ROWS,
            cols: INVENTORY_COLS,
            toggle_cooldown: INVENTORY_TOGGLE_COOLDOWN,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom: CAMERA_DEFAULT_ZOOM,
            min_zoom: CAMERA_MIN_ZOOM,
            max_zoom: CAMERA_MAX_ZOOM,
            zoom_step: CAMERA_ZOOM_STEP,
        }
    }
}

impl GameConfig {
    /// Load overrides from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_json(&json).with_context(|| format!("invalid config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.inventory.rows > 0 && self.inventory.cols > 0,
            "inventory must have at least one slot"
        );
        ensure!(self.player.max_hp > 0, "player.max_hp must be positive");
        ensure!(self.player.attack_range >= 0.0, "player.attack_range must not be negative");
        ensure!(
            self.camera.min_zoom >= CAMERA_MIN_ZOOM && self.camera.min_zoom <= self.camera.max_zoom,
            "camera zoom limits must satisfy {} <= min_zoom <= max_zoom",
            CAMERA_MIN_ZOOM
        );
        for spawner in &self.spawners {
            ensure!(spawner.interval > 0, "spawner interval must be at least one tick");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.spawners.len(), DEFAULT_SPAWNER_POSITIONS.len());
    }

    #[test]
    fn test_partial_override_keeps_other_fields() {
        let config = GameConfig::from_json(r#"{ "player": { "attack_range": 55.0 }, "inventory": { "rows": 2 } }"#)
            .unwrap();
        assert_eq!(config.player.attack_range, 55.0);
        assert_eq!(config.player.speed, PLAYER_SPEED);
        assert_eq!(config.inventory.rows, 2);
        assert_eq!(config.inventory.cols, INVENTORY_COLS);
    }

    #[test]
    fn test_spawner_list_override() {
        let config = GameConfig::from_json(
            r#"{ "spawners": [ { "position": [10.0, 20.0], "interval": 30 }, { "position": [0.0, 0.0] } ] }"#,
        )
        .unwrap();
        assert_eq!(config.spawners.len(), 2);
        assert_eq!(config.spawners[0].position, (10.0, 20.0));
        assert_eq!(config.spawners[0].max_enemies, SPAWN_MAX_ENEMIES);
        assert_eq!(config.spawners[1].interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(GameConfig::from_json(r#"{ "inventory": { "cols": 0 } }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "camera": { "min_zoom": 0.0 } }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "camera": { "min_zoom": 0.01 } }"#).is_err());
        assert!(GameConfig::from_json(r#"{ "spawners": [ { "interval": 0 } ] }"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_zoom_floor_is_accepted() {
        let config = GameConfig::from_json(r#"{ "camera": { "min_zoom": 0.1, "max_zoom": 4.0 } }"#).unwrap();
        assert_eq!(config.camera.min_zoom, CAMERA_MIN_ZOOM);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load(Path::new("no/such/dir/game.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
