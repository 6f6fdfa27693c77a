//! The game world and its fixed-rate update.
//!
//! `World` owns every entity collection. Nothing else adds or removes
//! enemies, texts or spawners; the shell only reads the world to draw it.

use crate::camera::Camera;
use crate::config::{EnemyConfig, GameConfig};
use crate::constants::*;
use crate::enemy::{Enemy, EnemyCatalog, EnemyKind};
use crate::events::{EventQueue, GameEvent};
use crate::floating_text::{FloatingText, DAMAGE_RED, HIT_WHITE};
use crate::input::{GameKey, InputSnapshot};
use crate::inventory::{Inventory, Item};
use crate::player::{load_player_animations, Player, PlayerAnimations};
use crate::spawner::Spawner;
use crate::sprites::SpriteLibrary;
use anyhow::Result;
use glam::Vec2;
use rand::Rng;

pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub spawners: Vec<Spawner>,
    pub catalog: EnemyCatalog,
    pub floating_texts: Vec<FloatingText>,
    pub inventory: Inventory,
    pub camera: Camera,
    pub events: EventQueue,
    enemy_config: EnemyConfig,
    zoom_step: f32,
}

impl World {
    /// Load every sprite the world needs and build it from `config`
    pub fn load(config: &GameConfig, library: &mut SpriteLibrary) -> Result<Self> {
        let animations = load_player_animations(library, &config.player)?;
        let catalog = EnemyCatalog::load(library)?;
        log::info!(
            "loaded {} sprite sheets, {} enemy kinds",
            library.len(),
            catalog.len()
        );
        Ok(Self::new(config, animations, catalog))
    }

    pub fn new(config: &GameConfig, animations: PlayerAnimations, catalog: EnemyCatalog) -> Self {
        let player = Player::new(&config.player, animations);
        let mut camera = Camera::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32).with_zoom_limits(
            config.camera.zoom,
            config.camera.min_zoom,
            config.camera.max_zoom,
        );
        camera.center_on(player.position);

        let mut enemies = Vec::new();
        if config.enemy.starting_bat {
            if let Some(template) = catalog.get(EnemyKind::Bat) {
                let mut bat = Enemy::from_template(
                    template,
                    Vec2::new(STARTING_BAT_POSITION.0, STARTING_BAT_POSITION.1),
                    STARTING_BAT_SPEED,
                    STARTING_BAT_FRAME_DELAY,
                );
                bat.hp = STARTING_BAT_HP;
                bat.max_hp = STARTING_BAT_HP;
                enemies.push(bat);
            }
        }

        Self {
            player,
            enemies,
            spawners: config.spawners.iter().map(Spawner::from_config).collect(),
            catalog,
            floating_texts: Vec::new(),
            inventory: Inventory::new(
                config.inventory.rows,
                config.inventory.cols,
                config.inventory.toggle_cooldown,
            ),
            camera,
            events: EventQueue::new(),
            enemy_config: config.enemy.clone(),
            zoom_step: config.camera.zoom_step,
        }
    }

    /// Run one tick
    pub fn update(&mut self, input: &InputSnapshot, rng: &mut impl Rng) {
        puffin::profile_function!();

        self.tick_spawners(rng);
        self.update_enemies();
        self.apply_contact_damage();

        if input.is_held(GameKey::ZoomIn) {
            self.camera.adjust_zoom(self.zoom_step);
        }
        if input.is_held(GameKey::ZoomOut) {
            self.camera.adjust_zoom(-self.zoom_step);
        }

        self.update_floating_texts();

        self.player.update(input);
        if input.is_held(GameKey::Attack) {
            self.attack();
        }

        self.camera.center_on(self.player.position);

        let was_open = self.inventory.open;
        self.inventory.update(input);
        if self.inventory.open != was_open {
            self.events.push(GameEvent::InventoryToggled {
                open: self.inventory.open,
            });
        }

        self.handle_debug_keys(input, rng);
    }

    fn tick_spawners(&mut self, rng: &mut impl Rng) {
        for spawner in &mut self.spawners {
            if let Some(enemy) = spawner.tick(
                &self.catalog,
                self.enemy_config.speed,
                self.enemy_config.frame_delay,
                rng,
            ) {
                self.events.push(GameEvent::EnemySpawned {
                    kind: enemy.kind,
                    position: enemy.position,
                });
                self.enemies.push(enemy);
            }
        }
    }

    /// Drop the dead, then let survivors seek the player
    fn update_enemies(&mut self) {
        let target = self.player.position;
        self.enemies = std::mem::take(&mut self.enemies)
            .into_iter()
            .filter(|enemy| !enemy.dead)
            .map(|mut enemy| {
                enemy.update(target);
                enemy
            })
            .collect();
    }

    fn apply_contact_damage(&mut self) {
        let range = self.enemy_config.contact_range;
        let player_pos = self.player.position;
        let touching = self
            .enemies
            .iter()
            .filter(|enemy| !enemy.dead && enemy.position.distance(player_pos) < range)
            .count();
        for _ in 0..touching {
            if self.player.is_invulnerable() {
                break;
            }
            self.hurt_player(self.enemy_config.contact_damage);
        }
    }

    fn hurt_player(&mut self, damage: i32) {
        let was_dead = self.player.is_dead();
        self.player.hurt(damage);
        self.floating_texts.push(FloatingText::damage(
            self.player.position - Vec2::new(0.0, PLAYER_DAMAGE_TEXT_OFFSET),
            damage,
            DAMAGE_RED,
        ));
        self.events.push(GameEvent::PlayerHurt {
            damage,
            hp_left: self.player.hp,
        });
        if !was_dead && self.player.is_dead() {
            self.events.push(GameEvent::PlayerDefeated);
        }
    }

    fn update_floating_texts(&mut self) {
        self.floating_texts = std::mem::take(&mut self.floating_texts)
            .into_iter()
            .filter_map(|mut text| {
                text.update();
                (!text.is_expired()).then_some(text)
            })
            .collect();
    }

    fn attack(&mut self) {
        let Some(hits) = self.player.try_attack(&mut self.enemies) else {
            return;
        };
        let damage = self.player.attack_damage;
        for hit in hits {
            let enemy = &self.enemies[hit.enemy_index];
            self.floating_texts
                .push(FloatingText::damage(hit.position, damage, HIT_WHITE));
            self.events.push(GameEvent::EnemyHit {
                kind: enemy.kind,
                position: hit.position,
                damage,
                hp_left: enemy.hp.max(0),
            });
            if hit.killed {
                self.events.push(GameEvent::EnemyDied {
                    kind: enemy.kind,
                    position: hit.position,
                });
            }
        }
    }

    fn handle_debug_keys(&mut self, input: &InputSnapshot, rng: &mut impl Rng) {
        if input.was_pressed(GameKey::SpawnTestItem) {
            let item = Item::test_potion(rng);
            let id = item.id.clone();
            if self.inventory.add_item(item) {
                self.events.push(GameEvent::ItemAdded { id });
            } else {
                self.events.push(GameEvent::InventoryFull { id });
            }
        }

        if input.was_pressed(GameKey::SelfDamage) {
            let was_dead = self.player.is_dead();
            self.player.take_damage(1);
            self.events.push(GameEvent::PlayerHurt {
                damage: 1,
                hp_left: self.player.hp,
            });
            if !was_dead && self.player.is_dead() {
                self.events.push(GameEvent::PlayerDefeated);
            }
        }
    }

    /// Enemies still on the field
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| !e.dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyTemplate;
    use crate::player::PlayerState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use std::rc::Rc;

    fn catalog() -> EnemyCatalog {
        EnemyCatalog::from_templates(
            EnemyKind::ALL
                .iter()
                .map(|&kind| EnemyTemplate {
                    kind,
                    hp: kind.base_hp(),
                    frames: Rc::from(Vec::new()),
                })
                .collect(),
        )
    }

    /// A world with no spawners and no starting bat
    fn empty_world() -> World {
        let mut config = GameConfig::default();
        config.spawners.clear();
        config.enemy.starting_bat = false;
        World::new(&config, HashMap::new(), catalog())
    }

    fn enemy_at(world: &World, kind: EnemyKind, position: Vec2) -> Enemy {
        let template = world.catalog.get(kind).unwrap();
        // Stationary, so positions stay put across updates
        Enemy::from_template(template, position, 0.0, 7)
    }

    #[test]
    fn test_default_world_has_starting_bat_and_spawner() {
        let world = World::new(&GameConfig::default(), HashMap::new(), catalog());
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].kind, EnemyKind::Bat);
        assert_eq!(world.enemies[0].hp, STARTING_BAT_HP);
        assert_eq!(world.spawners.len(), 1);
        assert_eq!(world.player.position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_attack_hits_enemy_in_reach() {
        let mut world = empty_world();
        let enemy = enemy_at(&world, EnemyKind::Bat, Vec2::new(410.0, 300.0));
        world.enemies.push(enemy);
        // Keep contact damage out of the picture
        world.player.damage_timer = 100;

        let mut rng = StdRng::seed_from_u64(1);
        world.update(&InputSnapshot::holding(&[GameKey::Attack]), &mut rng);

        assert_eq!(world.enemies[0].hp, BAT_HP - 1);
        let texts: Vec<_> = world.floating_texts.iter().filter(|t| t.color == HIT_WHITE).collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "-1");
        assert_eq!(texts[0].position, Vec2::new(410.0, 300.0));
        assert_eq!(world.player.state, PlayerState::Attacking);
        assert_eq!(world.player.ticks_since_attack(), Some(0));
    }

    #[test]
    fn test_slain_enemy_removed_next_update() {
        let mut world = empty_world();
        let slime = enemy_at(&world, EnemyKind::GreenSlime, Vec2::new(400.0, 330.0));
        world.enemies.push(slime);

        let mut rng = StdRng::seed_from_u64(2);
        world.update(&InputSnapshot::holding(&[GameKey::Attack]), &mut rng);
        assert!(world.enemies[0].dead);
        assert_eq!(world.live_enemies().count(), 0);

        let events: Vec<_> = world.events.drain().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDied { kind: EnemyKind::GreenSlime, .. })));

        world.update(&InputSnapshot::default(), &mut rng);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_contact_damage_has_cooldown() {
        let mut world = empty_world();
        let enemy = enemy_at(&world, EnemyKind::RedSlime, Vec2::new(405.0, 300.0));
        world.enemies.push(enemy);
        let mut rng = StdRng::seed_from_u64(3);

        world.update(&InputSnapshot::default(), &mut rng);
        assert_eq!(world.player.hp, PLAYER_MAX_HP - 1);
        let text = world
            .floating_texts
            .iter()
            .find(|t| t.color == DAMAGE_RED)
            .expect("damage text");
        // Spawned 10 above the player, then risen once
        assert_eq!(text.position.y, 300.0 - PLAYER_DAMAGE_TEXT_OFFSET - FLOATING_TEXT_RISE);

        for _ in 0..PLAYER_DAMAGE_COOLDOWN - 1 {
            world.update(&InputSnapshot::default(), &mut rng);
        }
        assert_eq!(world.player.hp, PLAYER_MAX_HP - 1);
        world.update(&InputSnapshot::default(), &mut rng);
        assert_eq!(world.player.hp, PLAYER_MAX_HP - 2);
    }

    #[test]
    fn test_spawner_feeds_enemy_list() {
        let mut config = GameConfig::default();
        config.enemy.starting_bat = false;
        config.spawners[0].interval = 3;
        let mut world = World::new(&config, HashMap::new(), catalog());
        let mut rng = StdRng::seed_from_u64(4);

        world.update(&InputSnapshot::default(), &mut rng);
        world.update(&InputSnapshot::default(), &mut rng);
        assert!(world.enemies.is_empty());
        world.update(&InputSnapshot::default(), &mut rng);
        assert_eq!(world.enemies.len(), 1);
        assert!(world
            .events
            .drain()
            .any(|e| matches!(e, GameEvent::EnemySpawned { .. })));
    }

    #[test]
    fn test_floating_texts_expire() {
        let mut world = empty_world();
        world
            .floating_texts
            .push(FloatingText::with_lifetime(Vec2::ZERO, "-1", HIT_WHITE, 2));
        let mut rng = StdRng::seed_from_u64(5);
        world.update(&InputSnapshot::default(), &mut rng);
        assert_eq!(world.floating_texts.len(), 1);
        world.update(&InputSnapshot::default(), &mut rng);
        assert!(world.floating_texts.is_empty());
    }

    #[test]
    fn test_zoom_keys_and_camera_follow() {
        let mut world = empty_world();
        let mut rng = StdRng::seed_from_u64(6);
        let zoom = world.camera.zoom;

        world.update(&InputSnapshot::holding(&[GameKey::ZoomIn, GameKey::Right]), &mut rng);
        assert!((world.camera.zoom - (zoom + CAMERA_ZOOM_STEP)).abs() < 1e-6);

        let center = world.camera.world_to_screen(world.player.position);
        assert!((center - Vec2::new(400.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_debug_keys_add_item_and_hurt() {
        let mut world = empty_world();
        let mut rng = StdRng::seed_from_u64(7);

        world.update(
            &InputSnapshot::holding(&[GameKey::SpawnTestItem, GameKey::SelfDamage]),
            &mut rng,
        );
        assert_eq!(world.inventory.slots().iter().flatten().count(), 1);
        assert_eq!(world.player.hp, PLAYER_MAX_HP - 1);

        // Held keys do not repeat
        let mut held = InputSnapshot::holding(&[GameKey::SpawnTestItem]);
        held.pressed.clear();
        world.update(&held, &mut rng);
        assert_eq!(world.inventory.slots().iter().flatten().count(), 1);
    }

    #[test]
    fn test_defeat_reported_once() {
        let mut world = empty_world();
        let mut rng = StdRng::seed_from_u64(8);
        world.player.hp = 1;

        let hurt = InputSnapshot::holding(&[GameKey::SelfDamage]);
        world.update(&hurt, &mut rng);
        world.update(&hurt, &mut rng);
        assert_eq!(world.player.hp, 0);

        let defeats = world
            .events
            .drain()
            .filter(|e| *e == GameEvent::PlayerDefeated)
            .count();
        assert_eq!(defeats, 1);
    }

    #[test]
    fn test_inventory_toggle_event() {
        let mut world = empty_world();
        let mut rng = StdRng::seed_from_u64(9);
        world.update(&InputSnapshot::holding(&[GameKey::ToggleInventory]), &mut rng);
        assert!(world.inventory.open);
        assert!(world
            .events
            .drain()
            .any(|e| e == GameEvent::InventoryToggled { open: true }));
    }
}
