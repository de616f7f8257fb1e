//! Headless seek bar state: style, progress, geometry and paints together.

use floem::kurbo::{Insets, Size};

use crate::error::SeekBarError;
use crate::geometry::{self, DerivedGeometry, GeometryEngine, MeasureSpec, TextMeasure, ViewBounds};
use crate::render::{self, Canvas, DrawCommand, Paints};
use crate::style::StyleConfig;

/// Current progress and the top of its range.
///
/// `max` is always finite and positive. `progress` is finite but may lie
/// outside `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressState {
    progress: f64,
    max: f64,
}

impl ProgressState {
    pub fn new(progress: f64, max: f64) -> Result<Self, SeekBarError> {
        Ok(Self {
            progress: check_progress(progress)?,
            max: check_max(max)?,
        })
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_progress(&mut self, progress: f64) -> Result<(), SeekBarError> {
        self.progress = check_progress(progress)?;
        Ok(())
    }

    pub fn set_max(&mut self, max: f64) -> Result<(), SeekBarError> {
        self.max = check_max(max)?;
        Ok(())
    }

    /// `progress` limited to `0..=max`.
    pub fn clamp(&self, progress: f64) -> f64 {
        progress.clamp(0.0, self.max)
    }
}

fn check_max(max: f64) -> Result<f64, SeekBarError> {
    if max.is_finite() && max > 0.0 {
        Ok(max)
    } else {
        Err(SeekBarError::InvalidMax(max))
    }
}

fn check_progress(progress: f64) -> Result<f64, SeekBarError> {
    if progress.is_finite() {
        Ok(progress)
    } else {
        Err(SeekBarError::InvalidProgress(progress))
    }
}

/// A seek bar without a host toolkit.
///
/// Call [`SeekBarModel::resize`] whenever the widget size changes, then
/// [`SeekBarModel::draw`] to paint it.
pub struct SeekBarModel {
    style: StyleConfig,
    paints: Paints,
    state: ProgressState,
    engine: GeometryEngine,
    size: Size,
    padding: Insets,
}

impl SeekBarModel {
    pub fn new(style: StyleConfig, state: ProgressState) -> Self {
        let paints = Paints::new(&style);
        Self {
            style,
            paints,
            state,
            engine: GeometryEngine::new(),
            size: Size::ZERO,
            padding: Insets::ZERO,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn max(&self) -> f64 {
        self.state.max()
    }

    pub fn geometry(&self) -> &DerivedGeometry {
        self.engine.geometry()
    }

    pub fn engine(&self) -> &GeometryEngine {
        &self.engine
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Preferred height for the host layout pass.
    pub fn minimum_height(&self, padding: Insets, measure: &dyn TextMeasure) -> f64 {
        geometry::minimum_height(&self.style, padding, measure)
    }

    /// Answer a host measurement pass.
    ///
    /// Height follows `height_spec` against [`Self::minimum_height`]. An
    /// unspecified width falls back to the thumb footprint.
    pub fn measure(
        &self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        padding: Insets,
        measure: &dyn TextMeasure,
    ) -> Size {
        let min_width = (self.style.thumb_size() + self.style.thumb_shadow_radius() * 2.0).ceil()
            + padding.x0
            + padding.x1;
        let min_height = self.minimum_height(padding, measure);
        Size::new(width_spec.resolve(min_width), height_spec.resolve(min_height))
    }

    pub fn resize(&mut self, size: Size, padding: Insets, measure: &dyn TextMeasure) {
        self.size = size;
        self.padding = padding;
        self.engine.on_resize(
            ViewBounds::new(size, padding),
            &self.style,
            &self.state,
            measure,
        );
    }

    pub fn set_progress(
        &mut self,
        progress: f64,
        measure: &dyn TextMeasure,
    ) -> Result<(), SeekBarError> {
        self.state.set_progress(progress)?;
        self.engine
            .on_progress_changed(&self.state, &self.style, measure);
        Ok(())
    }

    pub fn set_max(&mut self, max: f64, measure: &dyn TextMeasure) -> Result<(), SeekBarError> {
        self.state.set_max(max)?;
        self.engine
            .on_progress_changed(&self.state, &self.style, measure);
        Ok(())
    }

    pub fn progress_to_pixel(&self, progress: f64) -> f64 {
        self.engine.progress_to_pixel(progress, self.state.max())
    }

    pub fn pixel_to_progress(&self, x: f64) -> Option<f64> {
        self.engine.pixel_to_progress(x, self.state.max())
    }

    /// Progress under pointer `x`, limited to the value range.
    pub fn progress_at(&self, x: f64) -> Option<f64> {
        self.pixel_to_progress(x).map(|p| self.state.clamp(p))
    }

    pub fn display_list(&self, focused: bool) -> Vec<DrawCommand> {
        render::display_list(
            self.engine.geometry(),
            self.engine.indicator_text(),
            &self.style,
            &self.paints,
            focused,
        )
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, focused: bool) {
        render::replay(&self.display_list(focused), canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unusable_max() {
        assert!(matches!(
            ProgressState::new(0.0, 0.0),
            Err(SeekBarError::InvalidMax(_))
        ));
        assert!(ProgressState::new(0.0, -5.0).is_err());
        assert!(ProgressState::new(0.0, f64::INFINITY).is_err());
        assert!(ProgressState::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn keeps_out_of_range_progress() {
        let mut state = ProgressState::new(150.0, 100.0).unwrap();
        assert_eq!(state.progress(), 150.0);
        state.set_progress(-10.0).unwrap();
        assert_eq!(state.progress(), -10.0);
        assert!(matches!(
            state.set_progress(f64::NAN),
            Err(SeekBarError::InvalidProgress(_))
        ));
        assert_eq!(state.progress(), -10.0);
    }

    #[test]
    fn failed_set_max_keeps_previous_value() {
        let mut state = ProgressState::new(10.0, 100.0).unwrap();
        assert!(state.set_max(0.0).is_err());
        assert_eq!(state.max(), 100.0);
        assert_eq!(state.clamp(140.0), 100.0);
        assert_eq!(state.clamp(-1.0), 0.0);
    }
}
