//! egui styling for the HUD and inventory.
//!
//! Flat panels with hard borders and no shadows, so the overlays read as
//! part of the game screen rather than as desktop windows.

use egui::epaint::Shadow;
use egui::{Color32, Frame, Margin, Rounding, Stroke, Style, Visuals};

/// HUD color palette
pub mod colors {
    use egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgb(25, 22, 20);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 52, 45);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 210, 195);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(180, 180, 180);

    pub const HP_BAR: Color32 = Color32::from_rgb(140, 35, 35);

    // Inventory
    pub const SLOT_BG: Color32 = Color32::from_rgb(40, 40, 40);
    pub const SLOT_HOVER: Color32 = Color32::from_rgb(60, 60, 60);
    pub const TOOLTIP_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 200);

    pub const ATTACK_RING: Color32 = Color32::from_rgba_premultiplied(100, 0, 0, 100);

    /// Outline behind floating text
    pub const TEXT_OUTLINE: [u8; 3] = [0, 0, 0];
}

/// Clear color behind the world
pub const BACKGROUND: [f32; 3] = [1.0, 1.0, 1.0];

pub const BORDER_WIDTH: f32 = 1.0;

fn game_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

pub fn game_style() -> Style {
    Style {
        visuals: game_visuals(),
        ..Style::default()
    }
}

/// Frame of the HUD panel in the bottom-left corner
pub fn hud_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(6.0))
}

/// Straight RGB plus a 0..1 alpha as an egui color
pub fn rgb_with_alpha(rgb: [u8; 3], alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

/// Outline color for floating text, fading with the text
pub fn text_outline(alpha: f32) -> Color32 {
    rgb_with_alpha(colors::TEXT_OUTLINE, alpha)
}
