//! Gameplay events.
//!
//! The world pushes events while it ticks; the shell drains them afterwards
//! and reports them, so gameplay code stays free of logging policy.

use crate::enemy::EnemyKind;
use glam::Vec2;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemySpawned {
        kind: EnemyKind,
        position: Vec2,
    },
    /// A melee swing hit an enemy
    EnemyHit {
        kind: EnemyKind,
        position: Vec2,
        damage: i32,
        hp_left: i32,
    },
    EnemyDied {
        kind: EnemyKind,
        position: Vec2,
    },
    PlayerHurt {
        damage: i32,
        hp_left: i32,
    },
    PlayerDefeated,
    ItemAdded {
        id: String,
    },
    /// An item was rejected for lack of space
    InventoryFull {
        id: String,
    },
    InventoryToggled {
        open: bool,
    },
}

impl GameEvent {
    /// Routine events are logged at debug level, the rest at info
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            GameEvent::EnemyHit { .. } | GameEvent::PlayerHurt { .. } | GameEvent::InventoryToggled { .. }
        )
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::EnemySpawned { kind, position } => {
                write!(f, "{} spawned at ({:.0}, {:.0})", kind.name(), position.x, position.y)
            }
            GameEvent::EnemyHit {
                kind,
                damage,
                hp_left,
                ..
            } => write!(f, "hit {} for {} ({} hp left)", kind.name(), damage, hp_left),
            GameEvent::EnemyDied { kind, position } => {
                write!(f, "{} slain at ({:.0}, {:.0})", kind.name(), position.x, position.y)
            }
            GameEvent::PlayerHurt { damage, hp_left } => {
                write!(f, "player took {} damage ({} hp left)", damage, hp_left)
            }
            GameEvent::PlayerDefeated => write!(f, "player defeated"),
            GameEvent::ItemAdded { id } => write!(f, "picked up {}", id),
            GameEvent::InventoryFull { id } => write!(f, "inventory full, {} discarded", id),
            GameEvent::InventoryToggled { open } => {
                write!(f, "inventory {}", if *open { "opened" } else { "closed" })
            }
        }
    }
}

/// Events are pushed during update and drained once per frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayerDefeated);
        queue.push(GameEvent::InventoryToggled { open: true });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained[0], GameEvent::PlayerDefeated);
        assert!(drained[1].is_routine());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_display_names_the_enemy() {
        let event = GameEvent::EnemyDied {
            kind: EnemyKind::RedSlime,
            position: Vec2::new(12.4, 7.6),
        };
        assert_eq!(event.to_string(), "red slime slain at (12, 8)");
        assert!(!event.is_routine());
    }
}
