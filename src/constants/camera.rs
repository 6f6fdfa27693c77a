//! Camera-related constants.

/// Default zoom level (screen pixels per world unit)
pub const CAMERA_DEFAULT_ZOOM: f32 = 2.0;
/// Minimum zoom level
pub const CAMERA_MIN_ZOOM: f32 = 0.1;
/// Maximum zoom level
pub const CAMERA_MAX_ZOOM: f32 = 8.0;
/// Zoom change per tick while a zoom key is held
pub const CAMERA_ZOOM_STEP: f32 = 0.01;
