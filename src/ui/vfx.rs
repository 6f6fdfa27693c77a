//! World-anchored overlays: floating damage numbers and the attack ring.

use super::style;
use crate::camera::Camera;
use crate::constants::ATTACK_RING_TICKS;
use crate::floating_text::FloatingText;
use crate::player::Player;

/// Offsets of the outline copies drawn under each text
const OUTLINE_OFFSETS: [egui::Vec2; 4] = [
    egui::vec2(-1.0, 0.0),
    egui::vec2(1.0, 0.0),
    egui::vec2(0.0, -1.0),
    egui::vec2(0.0, 1.0),
];

/// Floating texts, faded by their alpha and outlined so light colors
/// stay readable on the white background
pub fn draw_floating_texts(ctx: &egui::Context, texts: &[FloatingText], camera: &Camera) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("floating_texts"),
    ));
    let font_id = egui::FontId::monospace(14.0);

    for text in texts {
        let screen = camera.world_to_screen(text.position);
        let pos = egui::pos2(screen.x, screen.y);
        let outline = style::text_outline(text.alpha);
        for offset in OUTLINE_OFFSETS {
            painter.text(
                pos + offset,
                egui::Align2::CENTER_CENTER,
                &text.text,
                font_id.clone(),
                outline,
            );
        }
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            &text.text,
            font_id.clone(),
            style::rgb_with_alpha(text.color, text.alpha),
        );
    }
}

/// Reach of a swing that just started
pub fn draw_attack_ring(ctx: &egui::Context, player: &Player, camera: &Camera) {
    let recent = player
        .ticks_since_attack()
        .is_some_and(|ticks| ticks < ATTACK_RING_TICKS);
    if !recent {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("attack_ring"),
    ));
    let center = camera.world_to_screen(player.position);
    painter.circle_filled(
        egui::pos2(center.x, center.y),
        player.attack_range * camera.zoom,
        style::colors::ATTACK_RING,
    );
}
