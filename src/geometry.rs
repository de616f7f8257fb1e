//! Layout of the seek bar: every rectangle the renderer paints, derived from
//! the view bounds, the style and the current progress.
//!
//! A resize recomputes everything. A progress change only moves the thumb,
//! the end of the progress fill and the indicator.

use floem::kurbo::{Insets, Point, Rect, Size};

use crate::constants;
use crate::math;
use crate::model::ProgressState;
use crate::style::{IndicatorFormat, StyleConfig};

/// Measures text laid out at a font size. Implemented by the host toolkit.
pub trait TextMeasure {
    fn text_size(&self, text: &str, font_size: f64) -> Size;

    /// Distance from the top of the laid out text to its baseline. Defaults to
    /// the full height, i.e. no descent.
    fn baseline(&self, text: &str, font_size: f64) -> f64 {
        self.text_size(text, font_size).height
    }
}

/// Host measurement constraint for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The parent decided the size.
    Exactly(f64),
    /// Up to this size.
    AtMost(f64),
    Unspecified,
}

impl MeasureSpec {
    /// Pick the final size given the size the seek bar would like.
    pub fn resolve(self, desired: f64) -> f64 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// The drawable area of the widget: its size minus padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewBounds {
    rect: Rect,
}

impl ViewBounds {
    pub fn new(size: Size, padding: Insets) -> Self {
        let x0 = padding.x0;
        let y0 = padding.y0;
        let x1 = (size.width - padding.x1).max(x0);
        let y1 = (size.height - padding.y1).max(y0);
        Self {
            rect: Rect::new(x0, y0, x1, y1),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Rectangles derived from bounds, style and progress, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedGeometry {
    pub track: Rect,
    pub progress_fill: Rect,
    pub thumb: Rect,
    pub thumb_stroke: Rect,
    pub indicator_bounds: Rect,
}

/// Smallest height that fits the thumb (with shadow), the track and, when
/// enabled, the indicator text above them.
pub fn minimum_height(style: &StyleConfig, padding: Insets, measure: &dyn TextMeasure) -> f64 {
    let mut height = style.bar_extent().ceil() + padding.y0 + padding.y1;
    if style.indicator_enabled() {
        let glyph = measure.text_size(constants::REFERENCE_GLYPH, style.indicator_text_size());
        height += style.indicator_bottom_margin().ceil() + glyph.height;
    }
    height
}

/// Text shown by the indicator for `progress`.
pub fn format_indicator_value(progress: f64, style: &StyleConfig) -> String {
    math::format_value(
        progress,
        style.indicator_format() == IndicatorFormat::Integer,
        style.indicator_decimal_places(),
    )
}

/// Owns and updates the [`DerivedGeometry`] of one seek bar.
#[derive(Debug, Clone, Default)]
pub struct GeometryEngine {
    bounds: ViewBounds,
    geometry: DerivedGeometry,
    indicator_text: String,
}

impl GeometryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        &self.geometry
    }

    pub fn indicator_text(&self) -> &str {
        &self.indicator_text
    }

    /// Relayout for new bounds. The thumb position is recomputed too since
    /// it depends on the track width.
    pub fn on_resize(
        &mut self,
        bounds: ViewBounds,
        style: &StyleConfig,
        state: &ProgressState,
        measure: &dyn TextMeasure,
    ) {
        self.bounds = bounds;
        let view = bounds.rect();
        let half_thumb = style.thumb_size() / 2.0;

        let center_y = if style.indicator_enabled() {
            // Keep the thumb and its shadow inside the bottom edge and leave
            // everything above for the indicator.
            let space_below = if style.thumb_size() + style.thumb_shadow_radius() * 2.0
                > style.track_height()
            {
                half_thumb + style.thumb_shadow_radius()
            } else {
                style.track_height() / 2.0
            };
            view.y1 - space_below
        } else {
            view.center().y
        };

        let left = view.x0 + half_thumb;
        let right = view.x1 - half_thumb;
        if right < left {
            tracing::debug!(
                width = view.width(),
                thumb = style.thumb_size(),
                "seek bar narrower than its thumb, collapsing track"
            );
        }
        let half_track = style.track_height() / 2.0;
        let track = Rect::new(
            left,
            center_y - half_track,
            right.max(left),
            center_y + half_track,
        );

        let half_stroke = style.thumb_stroke_width() / 2.0;
        self.geometry = DerivedGeometry {
            track,
            progress_fill: track,
            thumb: Rect::new(0.0, center_y - half_thumb, 0.0, center_y + half_thumb),
            thumb_stroke: Rect::new(0.0, center_y - half_stroke, 0.0, center_y + half_stroke),
            indicator_bounds: Rect::ZERO,
        };
        tracing::debug!(?view, ?track, "seek bar relayout");

        self.on_progress_changed(state, style, measure);
    }

    /// Move the thumb, the end of the progress fill and the indicator to the
    /// current progress.
    pub fn on_progress_changed(
        &mut self,
        state: &ProgressState,
        style: &StyleConfig,
        measure: &dyn TextMeasure,
    ) {
        let x = self.progress_to_pixel(state.progress(), state.max());
        let geometry = &mut self.geometry;

        let half_thumb = style.thumb_size() / 2.0;
        geometry.thumb.x0 = x - half_thumb;
        geometry.thumb.x1 = x + half_thumb;

        let half_stroke = style.thumb_stroke_width() / 2.0;
        geometry.thumb_stroke.x0 = x - half_stroke;
        geometry.thumb_stroke.x1 = x + half_stroke;

        geometry.progress_fill.x0 = geometry.track.x0;
        geometry.progress_fill.x1 = x.max(geometry.track.x0);

        self.indicator_text = format_indicator_value(state.progress(), style);
        geometry.indicator_bounds = if style.indicator_enabled() {
            let font_size = style.indicator_text_size();
            let text = measure.text_size(&self.indicator_text, font_size);
            let top = indicator_anchor(&geometry.thumb, style).y
                - measure.baseline(&self.indicator_text, font_size);
            let x = geometry.thumb.center().x;
            Rect::new(
                x - text.width / 2.0,
                top,
                x + text.width / 2.0,
                top + text.height,
            )
        } else {
            Rect::ZERO
        };
        tracing::trace!(progress = state.progress(), x, "seek bar thumb moved");
    }

    /// Pixel x of `progress`. Values outside `0..=max` extrapolate past the
    /// track ends.
    pub fn progress_to_pixel(&self, progress: f64, max: f64) -> f64 {
        let track = self.geometry.track;
        math::progress_to_pixel(progress, max, track.x0, track.width())
    }

    /// Progress at pixel `x`, the inverse of [`Self::progress_to_pixel`].
    /// `None` while the track has no width.
    pub fn pixel_to_progress(&self, x: f64, max: f64) -> Option<f64> {
        let track = self.geometry.track;
        math::pixel_to_progress(x, max, track.x0, track.width())
    }
}

/// Center-x and baseline of the indicator text.
pub(crate) fn indicator_anchor(thumb: &Rect, style: &StyleConfig) -> Point {
    Point::new(
        thumb.center().x,
        thumb.y0 - style.indicator_bottom_margin() - style.thumb_shadow_radius(),
    )
}
