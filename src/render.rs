//! Turns the current geometry into an ordered list of draw commands.
//!
//! Order: track, progress fill, thumb, stroke ring, indicator text. The ring
//! is painted over the thumb, so it must be the smaller of the two.

use floem::kurbo::{Point, Rect};
use floem::peniko::Color;

use crate::geometry::{indicator_anchor, DerivedGeometry};
use crate::style::StyleConfig;

/// A line stroked with round caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePaint {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub radius: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvalPaint {
    pub color: Color,
    pub shadow: Option<Shadow>,
}

/// Text centered horizontally on its anchor, with the anchor on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub size: f64,
}

/// Paints for every part of the bar, built once from the style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paints {
    pub track: LinePaint,
    pub progress: LinePaint,
    pub thumb: OvalPaint,
    pub thumb_stroke: OvalPaint,
    pub indicator: TextPaint,
}

impl Paints {
    pub fn new(style: &StyleConfig) -> Self {
        let shadow = style.has_shadow().then(|| Shadow {
            radius: style.thumb_shadow_radius(),
            color: style.thumb_shadow_color(),
        });
        Self {
            track: LinePaint {
                color: style.track_color(),
                width: style.track_height(),
            },
            progress: LinePaint {
                color: style.progress_color(),
                width: style.progress_track_height(),
            },
            thumb: OvalPaint {
                color: style.thumb_color(),
                shadow,
            },
            thumb_stroke: OvalPaint {
                color: style.thumb_stroke_color(),
                shadow: None,
            },
            indicator: TextPaint {
                color: style.indicator_text_color(),
                size: style.indicator_text_size(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        paint: LinePaint,
    },
    Oval {
        rect: Rect,
        paint: OvalPaint,
    },
    Text {
        text: String,
        anchor: Point,
        paint: TextPaint,
    },
}

/// Drawing surface supplied by the host toolkit.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, paint: &LinePaint);
    fn draw_oval(&mut self, rect: Rect, paint: &OvalPaint);
    fn draw_text(&mut self, text: &str, anchor: Point, paint: &TextPaint);
}

/// Draw commands for `geometry`. `focused` (the bar is pressed) only matters
/// for [`crate::IndicatorMode::OnlyOnFocus`].
pub fn display_list(
    geometry: &DerivedGeometry,
    indicator_text: &str,
    style: &StyleConfig,
    paints: &Paints,
    focused: bool,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);
    let track = geometry.track;
    let y = track.center().y;

    commands.push(DrawCommand::Line {
        from: Point::new(track.x0, y),
        to: Point::new(track.x1, y),
        paint: paints.track,
    });
    commands.push(DrawCommand::Line {
        from: Point::new(track.x0, y),
        to: Point::new(geometry.progress_fill.x1, y),
        paint: paints.progress,
    });
    commands.push(DrawCommand::Oval {
        rect: geometry.thumb,
        paint: paints.thumb,
    });
    if style.has_stroke_ring() {
        commands.push(DrawCommand::Oval {
            rect: geometry.thumb_stroke,
            paint: paints.thumb_stroke,
        });
    }
    if style.indicator_enabled() && style.indicator_mode().is_visible(focused) {
        commands.push(DrawCommand::Text {
            text: indicator_text.to_string(),
            anchor: indicator_anchor(&geometry.thumb, style),
            paint: paints.indicator,
        });
    }
    commands
}

pub fn replay(commands: &[DrawCommand], canvas: &mut dyn Canvas) {
    for command in commands {
        match command {
            DrawCommand::Line { from, to, paint } => canvas.draw_line(*from, *to, paint),
            DrawCommand::Oval { rect, paint } => canvas.draw_oval(*rect, paint),
            DrawCommand::Text {
                text,
                anchor,
                paint,
            } => canvas.draw_text(text, *anchor, paint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::IndicatorMode;

    fn geometry() -> DerivedGeometry {
        DerivedGeometry {
            track: Rect::new(10.0, 36.0, 290.0, 44.0),
            progress_fill: Rect::new(10.0, 36.0, 150.0, 44.0),
            thumb: Rect::new(140.0, 30.0, 160.0, 50.0),
            thumb_stroke: Rect::new(143.0, 33.0, 157.0, 47.0),
            indicator_bounds: Rect::ZERO,
        }
    }

    #[test]
    fn plain_bar_draws_track_fill_and_thumb() {
        let style = StyleConfig::default();
        let commands = display_list(&geometry(), "50.0", &style, &Paints::new(&style), false);
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::Line {
                from: Point::new(10.0, 40.0),
                to: Point::new(290.0, 40.0),
                paint: LinePaint {
                    color: style.track_color(),
                    width: 8.0
                },
            }
        );
        match &commands[1] {
            DrawCommand::Line { to, .. } => assert_eq!(to.x, 150.0),
            other => panic!("expected progress line, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::Oval { rect, paint } => {
                assert_eq!(*rect, geometry().thumb);
                assert_eq!(paint.shadow, None);
            }
            other => panic!("expected thumb, got {other:?}"),
        }
    }

    #[test]
    fn ring_and_indicator_follow_the_thumb() {
        let style = StyleConfig::default()
            .with_thumb_stroke_inset(6.0)
            .with_thumb_shadow(2.0, Color::BLACK)
            .with_indicator(12.0, Color::BLACK, 4.0);
        let commands = display_list(&geometry(), "50.0", &style, &Paints::new(&style), false);
        assert_eq!(commands.len(), 5);
        match &commands[2] {
            DrawCommand::Oval { paint, .. } => {
                assert_eq!(paint.shadow.map(|s| s.radius), Some(2.0))
            }
            other => panic!("expected thumb, got {other:?}"),
        }
        assert!(matches!(
            &commands[3],
            DrawCommand::Oval { rect, .. } if *rect == geometry().thumb_stroke
        ));
        match &commands[4] {
            DrawCommand::Text { text, anchor, .. } => {
                assert_eq!(text, "50.0");
                assert_eq!(*anchor, Point::new(150.0, 30.0 - 4.0 - 2.0));
            }
            other => panic!("expected indicator, got {other:?}"),
        }
    }

    #[test]
    fn only_on_focus_indicator_waits_for_focus() {
        let style = StyleConfig::default()
            .with_indicator(12.0, Color::BLACK, 0.0)
            .with_indicator_mode(IndicatorMode::OnlyOnFocus);
        let paints = Paints::new(&style);
        assert_eq!(display_list(&geometry(), "1", &style, &paints, false).len(), 3);
        assert_eq!(display_list(&geometry(), "1", &style, &paints, true).len(), 4);
    }

    #[test]
    fn zero_text_size_never_draws_text() {
        let style = StyleConfig::default().with_indicator_mode(IndicatorMode::AlwaysShow);
        let paints = Paints::new(&style);
        let commands = display_list(&geometry(), "1", &style, &paints, true);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { .. })));
    }

    #[derive(Default)]
    struct Counter {
        lines: usize,
        ovals: usize,
        texts: Vec<String>,
    }

    impl Canvas for Counter {
        fn draw_line(&mut self, _from: Point, _to: Point, _paint: &LinePaint) {
            self.lines += 1;
        }
        fn draw_oval(&mut self, _rect: Rect, _paint: &OvalPaint) {
            self.ovals += 1;
        }
        fn draw_text(&mut self, text: &str, _anchor: Point, _paint: &TextPaint) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn replay_forwards_every_command() {
        let style = StyleConfig::default()
            .with_thumb_stroke_inset(6.0)
            .with_indicator(12.0, Color::BLACK, 0.0);
        let commands = display_list(&geometry(), "7.5", &style, &Paints::new(&style), false);
        let mut canvas = Counter::default();
        replay(&commands, &mut canvas);
        assert_eq!(canvas.lines, 2);
        assert_eq!(canvas.ovals, 2);
        assert_eq!(canvas.texts, vec!["7.5".to_string()]);
    }
}
