//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.
//! Most of them are only defaults: `GameConfig` can override them at startup.

mod animation;
mod camera;
mod combat;
mod effects;
mod enemies;
mod inventory;
mod spawning;
mod time;
mod ui;

pub use animation::*;
pub use camera::*;
pub use combat::*;
pub use effects::*;
pub use enemies::*;
pub use inventory::*;
pub use spawning::*;
pub use time::*;
pub use ui::*;
