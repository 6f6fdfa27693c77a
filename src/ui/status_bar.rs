//! Status bar UI component.
//!
//! Player health plus a debug readout of position and zoom.

use super::style;
use crate::constants::HP_BAR_WIDTH;
use crate::world::World;

/// Data needed to render the status bar
pub struct StatusBarData {
    pub health_current: i32,
    pub health_max: i32,
    pub x: f32,
    pub y: f32,
    pub zoom: f32,
    pub enemies: usize,
}

pub fn get_status_bar_data(world: &World) -> StatusBarData {
    StatusBarData {
        health_current: world.player.hp,
        health_max: world.player.max_hp,
        x: world.player.position.x,
        y: world.player.position.y,
        zoom: world.camera.zoom,
        enemies: world.live_enemies().count(),
    }
}

/// Bottom-left HUD panel; the top-left corner belongs to the inventory
pub fn draw_status_bar(ctx: &egui::Context, data: &StatusBarData) {
    egui::Window::new("Status")
        .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
        .title_bar(false)
        .resizable(false)
        .frame(style::hud_frame())
        .show(ctx, |ui| {
            let health_percent = if data.health_max > 0 {
                data.health_current as f32 / data.health_max as f32
            } else {
                0.0
            };

            let hp_text = if data.health_current <= 0 {
                "DEFEATED".to_string()
            } else {
                format!("HP {}/{}", data.health_current, data.health_max)
            };
            ui.add_sized(
                [HP_BAR_WIDTH, 16.0],
                egui::ProgressBar::new(health_percent)
                    .fill(style::colors::HP_BAR)
                    .text(hp_text),
            );

            ui.label(
                egui::RichText::new(format!(
                    "X: {:.2} Y: {:.2} Zoom: {:.2}",
                    data.x, data.y, data.zoom
                ))
                .monospace()
                .small(),
            );
            ui.label(
                egui::RichText::new(format!("Enemies: {}", data.enemies))
                    .color(style::colors::TEXT_MUTED)
                    .small(),
            );
        });
}
