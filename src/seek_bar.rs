//! Floem view wrapping a [`SeekBarModel`].
//!
//! Layout comes from taffy: the bar asks for its minimum height through its
//! style, and any height set by the caller wins. Pointer events go through a
//! [`DragTracker`] and write the progress signal.

use floem::kurbo::{Cap, Ellipse, Insets, Line, Point, Rect, Size, Stroke};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::text::{Attrs, AttrsList, TextLayout};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::drag::{DragOutcome, DragTracker};
use crate::error::SeekBarError;
use crate::geometry::TextMeasure;
use crate::model::{ProgressState, SeekBarModel};
use crate::render::{Canvas, LinePaint, OvalPaint, TextPaint};
use crate::style::StyleConfig;

/// Text metrics from Floem's text system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloemTextMeasure;

impl FloemTextMeasure {
    fn layout(text: &str, paint: TextPaint) -> TextLayout {
        let mut layout = TextLayout::new();
        let attrs = Attrs::new()
            .font_size(paint.size as f32)
            .color(paint.color);
        layout.set_text(text, AttrsList::new(attrs));
        layout
    }

    /// Distance from the top of the first line to its baseline.
    fn first_baseline(layout: &TextLayout) -> f64 {
        layout
            .layout_runs()
            .next()
            .map(|run| run.line_y as f64)
            .unwrap_or_else(|| layout.size().height)
    }
}

impl TextMeasure for FloemTextMeasure {
    fn text_size(&self, text: &str, font_size: f64) -> Size {
        let paint = TextPaint {
            color: floem::peniko::Color::BLACK,
            size: font_size,
        };
        Self::layout(text, paint).size()
    }

    fn baseline(&self, text: &str, font_size: f64) -> f64 {
        let paint = TextPaint {
            color: floem::peniko::Color::BLACK,
            size: font_size,
        };
        Self::first_baseline(&Self::layout(text, paint))
    }
}

struct FloemCanvas<'a, 'b> {
    cx: &'a mut PaintCx<'b>,
}

impl Canvas for FloemCanvas<'_, '_> {
    fn draw_line(&mut self, from: Point, to: Point, paint: &LinePaint) {
        if paint.width <= 0.0 {
            return;
        }
        let stroke = Stroke::new(paint.width).with_caps(Cap::Round);
        self.cx.stroke(&Line::new(from, to), paint.color, &stroke);
    }

    fn draw_oval(&mut self, rect: Rect, paint: &OvalPaint) {
        let oval = Ellipse::from_rect(rect);
        if let Some(shadow) = paint.shadow {
            self.cx.fill(&oval, shadow.color, shadow.radius);
        }
        self.cx.fill(&oval, paint.color, 0.0);
    }

    fn draw_text(&mut self, text: &str, anchor: Point, paint: &TextPaint) {
        let layout = FloemTextMeasure::layout(text, *paint);
        let width = layout.size().width;
        let baseline = FloemTextMeasure::first_baseline(&layout);
        self.cx.draw_text(
            &layout,
            Point::new(anchor.x - width / 2.0, anchor.y - baseline),
        );
    }
}

enum SeekBarUpdate {
    Progress(f64),
}

pub struct SeekBar {
    id: ViewId,
    model: SeekBarModel,
    drag: DragTracker,
    measure: FloemTextMeasure,
    /// Border-box height floor fed to the style; follows the resolved padding.
    min_height: RwSignal<f64>,
    on_change: Option<Box<dyn Fn(f64)>>,
}

/// Creates a seek bar bound to `progress`.
///
/// Dragging or tapping writes the new value, limited to `0..=max`, back to
/// the signal. Values written from outside are shown as they are, even when
/// out of range.
pub fn seek_bar(
    progress: RwSignal<f64>,
    style: StyleConfig,
    max: f64,
) -> Result<SeekBar, SeekBarError> {
    let state = ProgressState::new(progress.get_untracked(), max)?;
    let id = ViewId::new();

    create_effect(move |_| {
        let p = progress.get();
        id.update_state(SeekBarUpdate::Progress(p));
    });

    let measure = FloemTextMeasure;
    let model = SeekBarModel::new(style, state);
    let min_height = RwSignal::new(model.minimum_height(Insets::ZERO, &measure));

    Ok(SeekBar {
        id,
        model,
        drag: DragTracker::default(),
        measure,
        min_height,
        on_change: Some(Box::new(move |val| {
            progress.set(val);
        })),
    }
    .style(move |s| {
        s.min_height(min_height.get())
            .width_full()
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl SeekBar {
    /// Replace the touch slop, in logical pixels.
    pub fn touch_slop(mut self, slop: f64) -> Self {
        self.drag = DragTracker::new(slop);
        self
    }

    pub fn model(&self) -> &SeekBarModel {
        &self.model
    }

    fn seek_to(&mut self, x: f64) {
        let Some(progress) = self.model.progress_at(x) else {
            return;
        };
        if progress == self.model.progress() {
            return;
        }
        if let Err(err) = self.model.set_progress(progress, &self.measure) {
            tracing::warn!(%err, "ignoring seek");
            return;
        }
        if let Some(cb) = &self.on_change {
            cb(progress);
        }
    }
}

impl View for SeekBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SeekBarUpdate>() {
            match *update {
                SeekBarUpdate::Progress(p) => {
                    if p != self.model.progress() {
                        if let Err(err) = self.model.set_progress(p, &self.measure) {
                            tracing::warn!(%err, "ignoring progress update");
                        }
                    }
                }
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let outcome = match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.pointer_down(e.pos)
            }
            Event::PointerMove(e) => self.drag.pointer_move(e.pos),
            Event::PointerUp(e) => self.drag.pointer_up(e.pos),
            Event::FocusLost => {
                self.drag.cancel();
                self.id.request_paint();
                return EventPropagation::Continue;
            }
            _ => return EventPropagation::Continue,
        };

        match outcome {
            DragOutcome::Ignored => EventPropagation::Continue,
            DragOutcome::Pressed => {
                self.id.request_paint();
                EventPropagation::Stop
            }
            DragOutcome::Seek(x) => {
                self.seek_to(x);
                self.id.request_paint();
                EventPropagation::Stop
            }
            DragOutcome::Released(tap) => {
                if let Some(x) = tap {
                    self.seek_to(x);
                }
                self.id.request_paint();
                EventPropagation::Continue
            }
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        let size = Size::new(layout.size.width as f64, layout.size.height as f64);
        let padding = Insets::new(
            layout.padding.left as f64,
            layout.padding.top as f64,
            layout.padding.right as f64,
            layout.padding.bottom as f64,
        );
        let floor = layout_floor(&self.model, padding, &self.measure);
        if floor != self.min_height.get_untracked() {
            // Reruns the style closure, which relayouts with the new floor.
            self.min_height.set(floor);
        }
        if size != self.model.size() || padding != self.model.padding() {
            self.model.resize(size, padding, &self.measure);
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let size = self.model.size();
        if size.width == 0.0 || size.height == 0.0 {
            return;
        }
        let focused = self.drag.is_pressed();
        let mut canvas = FloemCanvas { cx };
        self.model.draw(&mut canvas, focused);
    }
}

/// Minimum border-box height for the resolved `padding`. Taffy's
/// `min_height` includes padding, so the floor must too.
fn layout_floor(model: &SeekBarModel, padding: Insets, measure: &dyn TextMeasure) -> f64 {
    model.minimum_height(padding, measure)
}
