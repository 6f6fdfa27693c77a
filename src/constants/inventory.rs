//! Inventory layout and behavior constants.

/// Default grid size
pub const INVENTORY_ROWS: usize = 4;
pub const INVENTORY_COLS: usize = 5;

/// Screen position of the top-left slot
pub const INVENTORY_ORIGIN: (f32, f32) = (50.0, 50.0);
/// Distance between the top-left corners of neighbouring slots
pub const INVENTORY_SLOT_PITCH: f32 = 36.0;
/// Side of a slot square
pub const INVENTORY_SLOT_SIZE: f32 = 32.0;
/// Ticks before the toggle key can flip the inventory again
pub const INVENTORY_TOGGLE_COOLDOWN: u32 = 15;

/// Tooltip text wraps at this many pixels
pub const TOOLTIP_WRAP_WIDTH: f32 = 140.0;
/// Tooltip box width
pub const TOOLTIP_WIDTH: f32 = 150.0;
/// Tooltip height before description lines
pub const TOOLTIP_BASE_HEIGHT: f32 = 20.0;
/// Height of one description line
pub const TOOLTIP_LINE_HEIGHT: f32 = 14.0;
/// Tooltip offset from the pointer
pub const TOOLTIP_POINTER_OFFSET: f32 = 10.0;
/// Advance of one glyph in the fixed-width tooltip font
pub const TOOLTIP_GLYPH_WIDTH: f32 = 7.0;

/// Stack limit of the debug potions
pub const TEST_POTION_MAX_STACK: u32 = 5;
