//! Resolved, immutable style parameters for a seek bar.

use floem::peniko::Color;

use crate::constants;

/// When the value indicator above the thumb is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorMode {
    Hidden,
    /// Drawn only while the bar is pressed. Layout space is reserved either
    /// way. Older seek bars drew this mode exactly like `AlwaysShow`.
    OnlyOnFocus,
    #[default]
    AlwaysShow,
}

impl IndicatorMode {
    /// Map the numeric attribute code. Unknown codes show the indicator.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => IndicatorMode::Hidden,
            1 => IndicatorMode::OnlyOnFocus,
            _ => IndicatorMode::AlwaysShow,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hidden" => Some(IndicatorMode::Hidden),
            "only_on_focus" | "only_focus" => Some(IndicatorMode::OnlyOnFocus),
            "always_show" => Some(IndicatorMode::AlwaysShow),
            _ => None,
        }
    }

    pub fn is_visible(self, focused: bool) -> bool {
        match self {
            IndicatorMode::Hidden => false,
            IndicatorMode::OnlyOnFocus => focused,
            IndicatorMode::AlwaysShow => true,
        }
    }
}

/// How the indicator prints the progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorFormat {
    Integer,
    #[default]
    Float,
}

impl IndicatorFormat {
    /// Map the numeric attribute code. Anything but `0` is a float.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => IndicatorFormat::Integer,
            _ => IndicatorFormat::Float,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "integer" => Some(IndicatorFormat::Integer),
            "float" => Some(IndicatorFormat::Float),
            _ => None,
        }
    }
}

/// Style of a seek bar, fixed once the widget is built.
///
/// `thumb_color` fills the whole thumb disk and `thumb_stroke_color` fills
/// the smaller disk drawn on top of it, which leaves a ring of `thumb_color`.
/// See [`crate::SeekBarAttrs`] for how attribute names map onto these.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub(crate) thumb_size: f64,
    pub(crate) thumb_stroke_width: f64,
    pub(crate) thumb_shadow_radius: f64,
    pub(crate) thumb_color: Color,
    pub(crate) thumb_stroke_color: Color,
    pub(crate) thumb_shadow_color: Color,

    pub(crate) track_height: f64,
    pub(crate) track_color: Color,
    pub(crate) track_stroke_inset: f64,
    pub(crate) progress_color: Color,

    pub(crate) background_corner_radius: f64,
    pub(crate) progress_corner_radius: f64,

    pub(crate) indicator_text_size: f64,
    pub(crate) indicator_text_color: Color,
    pub(crate) indicator_bottom_margin: f64,
    pub(crate) indicator_mode: IndicatorMode,
    pub(crate) indicator_format: IndicatorFormat,
    pub(crate) indicator_decimal_places: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            thumb_size: constants::THUMB_SIZE,
            thumb_stroke_width: 0.0,
            thumb_shadow_radius: 0.0,
            thumb_color: constants::THUMB_COLOR,
            thumb_stroke_color: constants::THUMB_STROKE_COLOR,
            thumb_shadow_color: constants::SHADOW_COLOR,
            track_height: constants::SEEK_BAR_HEIGHT,
            track_color: constants::TRACK_COLOR,
            track_stroke_inset: 0.0,
            progress_color: constants::PROGRESS_COLOR,
            background_corner_radius: 0.0,
            progress_corner_radius: 0.0,
            indicator_text_size: 0.0,
            indicator_text_color: constants::INDICATOR_COLOR,
            indicator_bottom_margin: 0.0,
            indicator_mode: IndicatorMode::AlwaysShow,
            indicator_format: IndicatorFormat::Float,
            indicator_decimal_places: constants::DECIMAL_PLACES,
        }
    }
}

/// Clamp a size attribute to a usable, non-negative value.
fn size(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

impl StyleConfig {
    pub fn thumb_size(&self) -> f64 {
        self.thumb_size
    }
    /// Diameter of the inner stroke disk, `0.0` when there is no ring.
    pub fn thumb_stroke_width(&self) -> f64 {
        self.thumb_stroke_width
    }
    pub fn thumb_shadow_radius(&self) -> f64 {
        self.thumb_shadow_radius
    }
    pub fn thumb_color(&self) -> Color {
        self.thumb_color
    }
    pub fn thumb_stroke_color(&self) -> Color {
        self.thumb_stroke_color
    }
    pub fn thumb_shadow_color(&self) -> Color {
        self.thumb_shadow_color
    }
    pub fn track_height(&self) -> f64 {
        self.track_height
    }
    pub fn track_color(&self) -> Color {
        self.track_color
    }
    /// Thickness of the progress fill line.
    pub fn progress_track_height(&self) -> f64 {
        (self.track_height - self.track_stroke_inset).max(0.0)
    }
    pub fn progress_color(&self) -> Color {
        self.progress_color
    }
    pub fn background_corner_radius(&self) -> f64 {
        self.background_corner_radius
    }
    pub fn progress_corner_radius(&self) -> f64 {
        self.progress_corner_radius
    }
    pub fn indicator_text_size(&self) -> f64 {
        self.indicator_text_size
    }
    pub fn indicator_text_color(&self) -> Color {
        self.indicator_text_color
    }
    pub fn indicator_bottom_margin(&self) -> f64 {
        self.indicator_bottom_margin
    }
    pub fn indicator_mode(&self) -> IndicatorMode {
        self.indicator_mode
    }
    pub fn indicator_format(&self) -> IndicatorFormat {
        self.indicator_format
    }
    pub fn indicator_decimal_places(&self) -> u32 {
        self.indicator_decimal_places
    }

    /// The indicator takes part in layout: it has a text size and is not hidden.
    pub fn indicator_enabled(&self) -> bool {
        self.indicator_text_size > 0.0 && self.indicator_mode != IndicatorMode::Hidden
    }

    pub fn has_stroke_ring(&self) -> bool {
        self.thumb_stroke_width > 0.0
    }

    pub fn has_shadow(&self) -> bool {
        self.thumb_shadow_radius > 0.0
    }

    /// Vertical extent of the thumb including its shadow, or the track if
    /// that is taller.
    pub(crate) fn bar_extent(&self) -> f64 {
        (self.thumb_size + self.thumb_shadow_radius * 2.0).max(self.track_height)
    }

    pub fn with_thumb_size(mut self, thumb_size: f64) -> Self {
        let inset = self.thumb_size - self.thumb_stroke_width;
        self.thumb_size = size(thumb_size);
        if self.thumb_stroke_width > 0.0 {
            self.thumb_stroke_width = (self.thumb_size - inset).max(0.0);
        }
        self
    }

    /// Set the inset of the stroke ring. A non-positive inset removes it.
    pub fn with_thumb_stroke_inset(mut self, inset: f64) -> Self {
        self.thumb_stroke_width = if inset > 0.0 {
            (self.thumb_size - inset).max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn with_thumb_shadow(mut self, radius: f64, color: Color) -> Self {
        self.thumb_shadow_radius = size(radius);
        self.thumb_shadow_color = color;
        self
    }

    pub fn with_thumb_colors(mut self, thumb: Color, stroke: Color) -> Self {
        self.thumb_color = thumb;
        self.thumb_stroke_color = stroke;
        self
    }

    pub fn with_track(mut self, height: f64, color: Color) -> Self {
        self.track_height = size(height);
        self.track_color = color;
        self
    }

    pub fn with_track_stroke_inset(mut self, inset: f64) -> Self {
        self.track_stroke_inset = size(inset);
        self
    }

    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.progress_color = color;
        self
    }

    pub fn with_corner_radii(mut self, background: f64, progress: f64) -> Self {
        self.background_corner_radius = size(background);
        self.progress_corner_radius = size(progress);
        self
    }

    pub fn with_indicator(mut self, text_size: f64, color: Color, bottom_margin: f64) -> Self {
        self.indicator_text_size = size(text_size);
        self.indicator_text_color = color;
        self.indicator_bottom_margin = size(bottom_margin);
        self
    }

    pub fn with_indicator_mode(mut self, mode: IndicatorMode) -> Self {
        self.indicator_mode = mode;
        self
    }

    /// Set the value format. Negative decimal places fall back to one digit.
    pub fn with_indicator_format(mut self, format: IndicatorFormat, decimal_places: i64) -> Self {
        self.indicator_format = format;
        self.indicator_decimal_places = decimal_places_or_default(decimal_places);
        self
    }
}

pub(crate) fn decimal_places_or_default(value: i64) -> u32 {
    if value < 0 {
        constants::DECIMAL_PLACES
    } else {
        // f64 cannot print more meaningful digits than this
        value.min(17) as u32
    }
}

pub(crate) fn size_or(value: Option<f64>, default: f64) -> f64 {
    value.map(size).unwrap_or(default)
}
