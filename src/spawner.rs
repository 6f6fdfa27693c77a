//! Time-gated enemy spawning.

use crate::config::SpawnerConfig;
use crate::constants::SPAWN_JITTER;
use crate::enemy::{Enemy, EnemyCatalog};
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Spawner {
    pub position: Vec2,
    /// Ticks between spawns
    pub interval: u32,
    pub timer: u32,
    pub max_enemies: u32,
    pub spawned: u32,
}

impl Spawner {
    pub fn new(position: Vec2, interval: u32, max_enemies: u32) -> Self {
        Self {
            position,
            interval,
            timer: 0,
            max_enemies,
            spawned: 0,
        }
    }

    pub fn from_config(config: &SpawnerConfig) -> Self {
        Self::new(
            Vec2::new(config.position.0, config.position.1),
            config.interval,
            config.max_enemies,
        )
    }

    /// Spawned its last enemy; never produces again
    pub fn is_exhausted(&self) -> bool {
        self.spawned >= self.max_enemies
    }

    /// Count one tick and emit an enemy when the interval has elapsed.
    pub fn tick(
        &mut self,
        catalog: &EnemyCatalog,
        speed: f32,
        frame_delay: u32,
        rng: &mut impl Rng,
    ) -> Option<Enemy> {
        if self.is_exhausted() {
            return None;
        }
        self.timer = self.timer.saturating_add(1);
        if self.timer < self.interval {
            return None;
        }

        let template = catalog.choose(rng)?;
        self.timer = 0;
        self.spawned += 1;

        let jitter = Vec2::new(
            rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER) as f32,
            rng.gen_range(-SPAWN_JITTER..SPAWN_JITTER) as f32,
        );
        Some(Enemy::from_template(template, self.position + jitter, speed, frame_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyKind, EnemyTemplate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
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

    #[test]
    fn test_first_spawn_on_interval_tick() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawner = Spawner::new(Vec2::new(300.0, 300.0), 180, 10);

        for _ in 0..179 {
            assert!(spawner.tick(&catalog, 1.0, 7, &mut rng).is_none());
        }
        assert_eq!(spawner.spawned, 0);

        let enemy = spawner.tick(&catalog, 1.0, 7, &mut rng).expect("spawn on tick 180");
        assert_eq!(spawner.spawned, 1);
        assert_eq!(spawner.timer, 0);
        assert!((enemy.position.x - 300.0).abs() <= 20.0);
        assert!((enemy.position.y - 300.0).abs() <= 20.0);
        assert_eq!(enemy.hp, enemy.kind.base_hp());
    }

    #[test]
    fn test_inert_after_cap() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(2);
        let mut spawner = Spawner::new(Vec2::ZERO, 1, 3);

        let spawned: usize = (0..100)
            .filter_map(|_| spawner.tick(&catalog, 1.0, 7, &mut rng))
            .count();
        assert_eq!(spawned, 3);
        assert!(spawner.is_exhausted());
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawner = Spawner::new(Vec2::new(-50.0, 75.0), 1, 500);
        for _ in 0..500 {
            let enemy = spawner.tick(&catalog, 1.0, 7, &mut rng).unwrap();
            let offset = enemy.position - spawner.position;
            assert!(offset.x >= -20.0 && offset.x < 20.0);
            assert!(offset.y >= -20.0 && offset.y < 20.0);
        }
    }

    #[test]
    fn test_empty_catalog_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut spawner = Spawner::new(Vec2::ZERO, 1, 3);
        assert!(spawner.tick(&EnemyCatalog::default(), 1.0, 7, &mut rng).is_none());
        assert_eq!(spawner.spawned, 0);
    }

    #[test]
    fn test_timer_stops_once_exhausted() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = Spawner::new(Vec2::ZERO, 2, 1);
        for _ in 0..2 {
            spawner.tick(&catalog, 1.0, 7, &mut rng);
        }
        assert!(spawner.is_exhausted());
        for _ in 0..50 {
            assert!(spawner.tick(&catalog, 1.0, 7, &mut rng).is_none());
        }
        assert_eq!(spawner.timer, 0);
    }

    #[test]
    fn test_timer_saturates_without_templates() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut spawner = Spawner::new(Vec2::ZERO, 1, 3);
        spawner.timer = u32::MAX - 1;
        for _ in 0..3 {
            assert!(spawner.tick(&EnemyCatalog::default(), 1.0, 7, &mut rng).is_none());
        }
        assert_eq!(spawner.timer, u32::MAX);
    }
}
