//! Inventory grid, carried item and tooltip.
//!
//! Everything is painted at fixed screen positions taken from the inventory
//! model, so what is drawn always matches what a click would hit.

use super::style;
use crate::constants::TOOLTIP_LINE_HEIGHT;
use crate::inventory::{Inventory, Item};
use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect};
use glam::Vec2;

fn to_pos(v: Vec2) -> egui::Pos2 {
    pos2(v.x, v.y)
}

fn draw_icon(painter: &Painter, item: &Item, min: Vec2, size: f32) {
    let rect = Rect::from_min_size(to_pos(min), vec2(size, size));
    painter.rect_filled(rect, 0.0, style::rgb_with_alpha(item.icon, 1.0));
}

/// Slots, stack sizes and the item following the pointer
pub fn draw_inventory(ctx: &egui::Context, inventory: &Inventory, pointer: Vec2) {
    if !inventory.open {
        return;
    }

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Middle,
        egui::Id::new("inventory_grid"),
    ));
    let hovered = inventory.slot_at(pointer);
    let font_id = FontId::monospace(12.0);

    for (index, slot) in inventory.slots().iter().enumerate() {
        let rect = inventory.slot_rect(index);
        let bg = if hovered == Some(index) {
            style::colors::SLOT_HOVER
        } else {
            style::colors::SLOT_BG
        };
        painter.rect_filled(
            Rect::from_min_size(to_pos(rect.min), vec2(rect.size, rect.size)),
            0.0,
            bg,
        );

        let Some(item) = slot else {
            continue;
        };
        draw_icon(&painter, item, rect.min, rect.size);
        if item.quantity > 1 {
            painter.text(
                to_pos(rect.min + Vec2::new(rect.size / 2.0, rect.size - 2.0)),
                Align2::LEFT_BOTTOM,
                item.quantity.to_string(),
                font_id.clone(),
                Color32::WHITE,
            );
        }
    }

    if let Some(carried) = &inventory.carried {
        let carry_painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("inventory_carry"),
        ));
        let size = inventory.slot_rect(0).size;
        draw_icon(&carry_painter, &carried.item, pointer - carried.offset, size);
    }
}

/// Name and wrapped description of the hovered item
pub fn draw_tooltip(ctx: &egui::Context, inventory: &Inventory, pointer: Vec2) {
    let Some(tooltip) = inventory.tooltip(pointer) else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("inventory_tooltip"),
    ));
    painter.rect_filled(
        Rect::from_min_size(to_pos(tooltip.origin), vec2(tooltip.width, tooltip.height)),
        0.0,
        style::colors::TOOLTIP_BG,
    );

    let font_id = FontId::monospace(12.0);
    let text_origin = tooltip.origin + Vec2::new(4.0, 4.0);
    painter.text(
        to_pos(text_origin),
        Align2::LEFT_TOP,
        &tooltip.title,
        font_id.clone(),
        Color32::WHITE,
    );
    for (i, line) in tooltip.lines.iter().enumerate() {
        painter.text(
            to_pos(text_origin + Vec2::new(0.0, TOOLTIP_LINE_HEIGHT * (i + 1) as f32)),
            Align2::LEFT_TOP,
            line,
            font_id.clone(),
            style::colors::TEXT_MUTED,
        );
    }
}
