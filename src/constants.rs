//! Default sizes, colors and thresholds for the seek bar.
//!
//! Sizes are Floem logical pixels; one "dp" maps to one logical pixel.

use floem::peniko::Color;

/// Thumb diameter
pub const THUMB_SIZE: f64 = 20.0;

/// Track thickness
pub const SEEK_BAR_HEIGHT: f64 = 8.0;

/// Upper bound of the value range
pub const MAX: f64 = 100.0;

/// Digits after the decimal point for the float indicator format
pub const DECIMAL_PLACES: u32 = 1;

/// Horizontal movement before a press turns into a drag
pub const TOUCH_SLOP: f64 = 8.0;

/// Glyph measured to reserve vertical room for the indicator
pub const REFERENCE_GLYPH: &str = "1";

pub const THUMB_COLOR: Color = Color::rgb8(0xFF, 0x00, 0x00);
pub const THUMB_STROKE_COLOR: Color = Color::rgb8(0x00, 0x00, 0xFF);
pub const SHADOW_COLOR: Color = Color::rgb8(0x00, 0x00, 0x00);
pub const TRACK_COLOR: Color = Color::rgb8(0x88, 0x88, 0x88);
pub const PROGRESS_COLOR: Color = Color::rgb8(0x00, 0x00, 0xFF);
pub const INDICATOR_COLOR: Color = Color::rgb8(0x00, 0x00, 0x00);
