//! # floem-seekbar
//!
//! A material-style seek bar widget for [Floem](https://github.com/lapce/floem).
//!
//! Draws a rounded track, a progress fill, a circular thumb with an optional
//! ring and drop shadow, and an optional value indicator above the thumb.
//! Layout and drawing live in a headless [`SeekBarModel`]; [`seek_bar`] wraps
//! it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_seekbar::{seek_bar, SeekBarAttrs};
//!
//! let attrs = SeekBarAttrs::from_json(r#"{"text_indicator_size": 12}"#).unwrap();
//! let (style, state) = attrs.resolve().unwrap();
//! let progress = RwSignal::new(state.progress());
//! // Use `seek_bar(progress, style, state.max())` in your Floem view tree.
//! ```

mod attrs;
mod color;
mod constants;
mod drag;
mod error;
mod geometry;
mod math;
mod model;
mod render;
mod seek_bar;
mod style;

pub use attrs::{EnumAttr, SeekBarAttrs};
pub use color::parse_color;
pub use drag::{DragOutcome, DragState, DragTracker};
pub use error::SeekBarError;
pub use geometry::{
    format_indicator_value, minimum_height, DerivedGeometry, GeometryEngine, MeasureSpec,
    TextMeasure, ViewBounds,
};
pub use model::{ProgressState, SeekBarModel};
pub use render::{
    display_list, replay, Canvas, DrawCommand, LinePaint, OvalPaint, Paints, Shadow, TextPaint,
};
pub use seek_bar::{seek_bar, FloemTextMeasure, SeekBar};
pub use style::{IndicatorFormat, IndicatorMode, StyleConfig};
