//! Attribute source for building a seek bar from configuration data.
//!
//! Every attribute is optional. Missing or malformed values fall back to the
//! defaults in [`crate::constants`]; only an unusable `max` is an error.

use serde::Deserialize;

use crate::color::color_or;
use crate::constants;
use crate::error::SeekBarError;
use crate::model::ProgressState;
use crate::style::{
    decimal_places_or_default, size_or, IndicatorFormat, IndicatorMode, StyleConfig,
};

/// An enum attribute given either as its numeric code or as a name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumAttr {
    Code(i64),
    Name(String),
}

/// Raw seek bar attributes, as read from a JSON document.
///
/// Note the color attributes keep their historical names: `thumb_stroke_color`
/// fills the full thumb disk and `thumb_color` fills the inner disk drawn on
/// top of it when `thumb_stroke_size` is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeekBarAttrs {
    pub thumb_size: Option<f64>,
    pub thumb_stroke_size: Option<f64>,
    pub thumb_color: Option<String>,
    pub thumb_stroke_color: Option<String>,
    pub thumb_shadow_radius: Option<f64>,
    pub thumb_shadow_color: Option<String>,

    pub seek_bar_height: Option<f64>,
    pub seek_bar_background_color: Option<String>,
    pub seek_bar_stroke_size: Option<f64>,
    pub seek_bar_progress_color: Option<String>,
    pub seek_bar_corners: Option<f64>,
    pub seek_bar_progress_corners: Option<f64>,

    pub text_indicator_size: Option<f64>,
    pub text_indicator_color: Option<String>,
    pub text_indicator_bottom: Option<f64>,
    pub indicator_mode: Option<EnumAttr>,
    pub text_indicator_format: Option<EnumAttr>,
    pub text_indicator_float_scale_count: Option<i64>,

    pub max: Option<f64>,
    pub progress: Option<f64>,
}

impl SeekBarAttrs {
    pub fn from_json(json: &str) -> Result<Self, SeekBarError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the style. Never fails.
    pub fn style(&self) -> StyleConfig {
        let thumb_size = size_or(self.thumb_size, constants::THUMB_SIZE);
        let stroke_inset = size_or(self.thumb_stroke_size, 0.0);
        let background_corners = size_or(self.seek_bar_corners, 0.0);

        StyleConfig {
            thumb_size,
            thumb_stroke_width: if stroke_inset > 0.0 {
                (thumb_size - stroke_inset).max(0.0)
            } else {
                0.0
            },
            thumb_shadow_radius: size_or(self.thumb_shadow_radius, 0.0),
            thumb_color: color_or(
                self.thumb_stroke_color.as_deref(),
                constants::THUMB_COLOR,
                "thumb_stroke_color",
            ),
            thumb_stroke_color: color_or(
                self.thumb_color.as_deref(),
                constants::THUMB_STROKE_COLOR,
                "thumb_color",
            ),
            thumb_shadow_color: color_or(
                self.thumb_shadow_color.as_deref(),
                constants::SHADOW_COLOR,
                "thumb_shadow_color",
            ),
            track_height: size_or(self.seek_bar_height, constants::SEEK_BAR_HEIGHT),
            track_color: color_or(
                self.seek_bar_background_color.as_deref(),
                constants::TRACK_COLOR,
                "seek_bar_background_color",
            ),
            track_stroke_inset: size_or(self.seek_bar_stroke_size, 0.0),
            progress_color: color_or(
                self.seek_bar_progress_color.as_deref(),
                constants::PROGRESS_COLOR,
                "seek_bar_progress_color",
            ),
            background_corner_radius: background_corners,
            progress_corner_radius: size_or(self.seek_bar_progress_corners, background_corners),
            indicator_text_size: size_or(self.text_indicator_size, 0.0),
            indicator_text_color: color_or(
                self.text_indicator_color.as_deref(),
                constants::INDICATOR_COLOR,
                "text_indicator_color",
            ),
            indicator_bottom_margin: size_or(self.text_indicator_bottom, 0.0),
            indicator_mode: self.indicator_mode(),
            indicator_format: self.indicator_format(),
            indicator_decimal_places: decimal_places_or_default(
                self.text_indicator_float_scale_count
                    .unwrap_or(constants::DECIMAL_PLACES as i64),
            ),
        }
    }

    /// Resolve the initial progress state, rejecting an unusable `max`.
    pub fn progress_state(&self) -> Result<ProgressState, SeekBarError> {
        ProgressState::new(
            self.progress.unwrap_or(0.0),
            self.max.unwrap_or(constants::MAX),
        )
    }

    pub fn resolve(&self) -> Result<(StyleConfig, ProgressState), SeekBarError> {
        let state = self.progress_state()?;
        Ok((self.style(), state))
    }

    fn indicator_mode(&self) -> IndicatorMode {
        match &self.indicator_mode {
            None => IndicatorMode::default(),
            Some(EnumAttr::Code(code)) => IndicatorMode::from_code(*code),
            Some(EnumAttr::Name(name)) => IndicatorMode::from_name(name).unwrap_or_else(|| {
                tracing::warn!(value = %name, "unknown indicator_mode, showing indicator");
                IndicatorMode::default()
            }),
        }
    }

    fn indicator_format(&self) -> IndicatorFormat {
        match &self.text_indicator_format {
            None => IndicatorFormat::default(),
            Some(EnumAttr::Code(code)) => IndicatorFormat::from_code(*code),
            Some(EnumAttr::Name(name)) => IndicatorFormat::from_name(name).unwrap_or_else(|| {
                tracing::warn!(value = %name, "unknown text_indicator_format, using float");
                IndicatorFormat::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use floem::peniko::Color;

    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let attrs = SeekBarAttrs::from_json("{}").unwrap();
        let (style, state) = attrs.resolve().unwrap();
        assert_eq!(style, StyleConfig::default());
        assert_eq!(state.max(), 100.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn color_attribute_names_keep_their_historical_roles() {
        let attrs = SeekBarAttrs::from_json(
            r##"{"thumb_color": "#00FF00", "thumb_stroke_color": "#FFFF00"}"##,
        )
        .unwrap();
        let style = attrs.style();
        assert_eq!(style.thumb_color(), Color::rgb8(255, 255, 0));
        assert_eq!(style.thumb_stroke_color(), Color::rgb8(0, 255, 0));
    }

    #[test]
    fn enums_accept_codes_and_names() {
        let attrs = SeekBarAttrs::from_json(
            r#"{"indicator_mode": 1, "text_indicator_format": "integer"}"#,
        )
        .unwrap();
        let style = attrs.style();
        assert_eq!(style.indicator_mode(), IndicatorMode::OnlyOnFocus);
        assert_eq!(style.indicator_format(), IndicatorFormat::Integer);

        let attrs = SeekBarAttrs::from_json(r#"{"indicator_mode": "bogus"}"#).unwrap();
        assert_eq!(attrs.style().indicator_mode(), IndicatorMode::AlwaysShow);
    }

    #[test]
    fn progress_corners_default_to_background_corners() {
        let attrs = SeekBarAttrs::from_json(r#"{"seek_bar_corners": 4.0}"#).unwrap();
        let style = attrs.style();
        assert_eq!(style.background_corner_radius(), 4.0);
        assert_eq!(style.progress_corner_radius(), 4.0);
    }

    #[test]
    fn malformed_inputs_are_defaulted() {
        let attrs = SeekBarAttrs::from_json(
            r#"{
                "thumb_size": -5.0,
                "seek_bar_background_color": "grey",
                "text_indicator_float_scale_count": -2
            }"#,
        )
        .unwrap();
        let style = attrs.style();
        assert_eq!(style.thumb_size(), 0.0);
        assert_eq!(style.track_color(), constants::TRACK_COLOR);
        assert_eq!(style.indicator_decimal_places(), 1);
    }

    #[test]
    fn zero_max_is_rejected() {
        let attrs = SeekBarAttrs::from_json(r#"{"max": 0}"#).unwrap();
        assert!(matches!(attrs.resolve(), Err(SeekBarError::InvalidMax(_))));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            SeekBarAttrs::from_json("{thumb_size"),
            Err(SeekBarError::Attributes(_))
        ));
    }
}
