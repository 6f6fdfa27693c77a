//! Floating damage numbers.
//!
//! Spawned by combat, drift upward and fade out, then get dropped by the
//! world. They never affect game logic.

use crate::constants::*;
use glam::Vec2;

/// Text color as straight RGB
pub type Rgb = [u8; 3];

pub const DAMAGE_RED: Rgb = [255, 0, 0];
pub const HIT_WHITE: Rgb = [255, 255, 255];

/// A short-lived piece of text anchored in world space
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingText {
    pub position: Vec2,
    pub text: String,
    pub color: Rgb,
    pub alpha: f32,
    pub lifetime: u32,
    pub max_lifetime: u32,
}

impl FloatingText {
    pub fn new(position: Vec2, text: impl Into<String>, color: Rgb) -> Self {
        Self::with_lifetime(position, text, color, FLOATING_TEXT_LIFETIME)
    }

    pub fn with_lifetime(position: Vec2, text: impl Into<String>, color: Rgb, max_lifetime: u32) -> Self {
        Self {
            position,
            text: text.into(),
            color,
            alpha: 1.0,
            lifetime: 0,
            max_lifetime: max_lifetime.max(1),
        }
    }

    /// Damage number for `amount` points
    pub fn damage(position: Vec2, amount: i32, color: Rgb) -> Self {
        Self::new(position, format!("-{}", amount), color)
    }

    /// Rise, age and fade by one tick
    pub fn update(&mut self) {
        self.position.y -= FLOATING_TEXT_RISE;
        self.lifetime += 1;
        self.alpha = 1.0 - self.lifetime as f32 / self.max_lifetime as f32;
    }

    /// Returns true once the text should be removed
    pub fn is_expired(&self) -> bool {
        self.lifetime >= self.max_lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_linear_in_lifetime() {
        let mut text = FloatingText::with_lifetime(Vec2::ZERO, "-1", DAMAGE_RED, 4);
        let mut alphas = Vec::new();
        for _ in 0..4 {
            text.update();
            alphas.push(text.alpha);
        }
        assert_eq!(alphas, vec![0.75, 0.5, 0.25, 0.0]);
    }

    #[test]
    fn test_expires_exactly_at_max_lifetime() {
        let mut text = FloatingText::with_lifetime(Vec2::ZERO, "-1", DAMAGE_RED, 3);
        text.update();
        text.update();
        assert!(!text.is_expired());
        text.update();
        assert!(text.is_expired());
        assert!(text.alpha <= 0.0);
    }

    #[test]
    fn test_rises_each_tick() {
        let mut text = FloatingText::new(Vec2::new(10.0, 100.0), "-1", DAMAGE_RED);
        text.update();
        text.update();
        assert_eq!(text.position, Vec2::new(10.0, 100.0 - 2.0 * FLOATING_TEXT_RISE));
    }

    #[test]
    fn test_damage_text_format() {
        let text = FloatingText::damage(Vec2::ZERO, 1, HIT_WHITE);
        assert_eq!(text.text, "-1");
        assert_eq!(text.max_lifetime, FLOATING_TEXT_LIFETIME);
    }
}
