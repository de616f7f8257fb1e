//! Press/drag detection for the thumb.
//!
//! A press first arms the tracker. It only becomes a drag once the pointer
//! has moved further than the touch slop horizontally, so a slightly shaky
//! tap does not scrub the value.

use floem::kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Armed { origin: Point },
    Dragging,
}

/// What the view should do after feeding an event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Ignored,
    Pressed,
    /// Move the thumb to this pointer x.
    Seek(f64),
    /// The gesture ended; a tap carries the x to jump to.
    Released(Option<f64>),
}

#[derive(Debug, Clone)]
pub struct DragTracker {
    slop: f64,
    state: DragState,
}

impl DragTracker {
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn is_pressed(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn pointer_down(&mut self, pos: Point) -> DragOutcome {
        self.state = DragState::Armed { origin: pos };
        DragOutcome::Pressed
    }

    pub fn pointer_move(&mut self, pos: Point) -> DragOutcome {
        match self.state {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Armed { origin } => {
                if (pos.x - origin.x).abs() > self.slop {
                    tracing::trace!(x = pos.x, "seek bar drag started");
                    self.state = DragState::Dragging;
                    DragOutcome::Seek(pos.x)
                } else {
                    DragOutcome::Ignored
                }
            }
            DragState::Dragging => DragOutcome::Seek(pos.x),
        }
    }

    pub fn pointer_up(&mut self, pos: Point) -> DragOutcome {
        let outcome = match self.state {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Armed { .. } => DragOutcome::Released(Some(pos.x)),
            DragState::Dragging => DragOutcome::Released(None),
        };
        self.state = DragState::Idle;
        outcome
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(crate::constants::TOUCH_SLOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_stay_armed() {
        let mut drag = DragTracker::new(8.0);
        assert_eq!(drag.pointer_down(Point::new(100.0, 10.0)), DragOutcome::Pressed);
        assert_eq!(drag.pointer_move(Point::new(107.0, 30.0)), DragOutcome::Ignored);
        assert!(!drag.is_moving());
        assert!(drag.is_pressed());
    }

    #[test]
    fn crossing_slop_starts_drag() {
        let mut drag = DragTracker::new(8.0);
        drag.pointer_down(Point::new(100.0, 10.0));
        assert_eq!(drag.pointer_move(Point::new(91.0, 10.0)), DragOutcome::Seek(91.0));
        assert!(drag.is_moving());
        assert_eq!(drag.pointer_move(Point::new(95.0, 10.0)), DragOutcome::Seek(95.0));
        assert_eq!(drag.pointer_up(Point::new(95.0, 10.0)), DragOutcome::Released(None));
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn tap_seeks_on_release() {
        let mut drag = DragTracker::default();
        drag.pointer_down(Point::new(40.0, 10.0));
        assert_eq!(
            drag.pointer_up(Point::new(42.0, 10.0)),
            DragOutcome::Released(Some(42.0))
        );
    }

    #[test]
    fn idle_ignores_moves_and_cancel_resets() {
        let mut drag = DragTracker::new(8.0);
        assert_eq!(drag.pointer_move(Point::new(1.0, 1.0)), DragOutcome::Ignored);
        assert_eq!(drag.pointer_up(Point::new(1.0, 1.0)), DragOutcome::Ignored);
        drag.pointer_down(Point::new(0.0, 0.0));
        drag.pointer_move(Point::new(50.0, 0.0));
        drag.cancel();
        assert_eq!(drag.state(), DragState::Idle);
    }
}
