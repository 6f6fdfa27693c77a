//! UI rendering using egui.
//!
//! Overlays drawn on top of the sprite pass: damage numbers, the attack
//! ring, the inventory with its tooltip, and the HUD.

mod inventory;
mod status_bar;
pub mod style;
mod vfx;

pub use inventory::{draw_inventory, draw_tooltip};
pub use status_bar::{draw_status_bar, get_status_bar_data};
pub use vfx::{draw_attack_ring, draw_floating_texts};

use crate::world::World;
use glam::Vec2;

/// Draw every overlay for the current world state, back to front
pub fn draw_game_ui(ctx: &egui::Context, world: &World, pointer: Vec2) {
    puffin::profile_function!();

    draw_attack_ring(ctx, &world.player, &world.camera);
    draw_floating_texts(ctx, &world.floating_texts, &world.camera);

    draw_inventory(ctx, &world.inventory, pointer);
    draw_tooltip(ctx, &world.inventory, pointer);

    let status = get_status_bar_data(world);
    draw_status_bar(ctx, &status);
}
