use crate::constants::*;
use glam::{Mat4, Vec2};

/// Maps world coordinates to screen pixels.
///
/// `position` is the world point shown at the top-left corner of the screen.
/// World and screen both grow rightward and downward.
pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: CAMERA_DEFAULT_ZOOM,
            viewport_width,
            viewport_height,
            min_zoom: CAMERA_MIN_ZOOM,
            max_zoom: CAMERA_MAX_ZOOM,
        }
    }

    /// Limits below the global floor are raised to it
    pub fn with_zoom_limits(mut self, zoom: f32, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom.max(CAMERA_MIN_ZOOM);
        self.max_zoom = max_zoom.max(min_zoom);
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }

    /// Place `target` in the middle of the viewport
    pub fn center_on(&mut self, target: Vec2) {
        self.position.x = target.x - self.viewport_width / (2.0 * self.zoom);
        self.position.y = target.y - self.viewport_height / (2.0 * self.zoom);
    }

    /// Change zoom by `delta`, keeping it inside the configured limits
    pub fn adjust_zoom(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.position) * self.zoom
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen / self.zoom + self.position
    }

    /// Orthographic projection over the screen in pixels, origin top-left
    pub fn screen_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.viewport_width, self.viewport_height, 0.0, -1.0, 1.0)
    }
}
