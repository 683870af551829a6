//! Input events and the press tracking shared by tappable surfaces.
use glam::Vec2;
use lucent_ui::{Point, Rect};

use crate::surface_animator::SurfaceAnimator;

/// A discrete pointer event routed to one surface, in surface-local
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch went down.
    PressBegin(Point),
    /// The active touch moved.
    PressMove(Point),
    /// The active touch lifted.
    PressEnd,
    /// The input layer cancelled the active touch.
    PressCancel,
}

/// A continuous drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    /// The drag started at a location.
    Began(Point),
    /// The drag moved. `delta` is the movement since the previous event.
    Changed {
        /// Current location.
        location: Point,
        /// Movement since the previous `Began` or `Changed`.
        delta: Vec2,
    },
    /// The drag finished.
    Ended,
    /// The input layer cancelled the drag.
    Cancelled,
}

/// What a pointer event did to the tracked press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The event did not apply to the current tracking state.
    Ignored,
    /// A press started.
    Began,
    /// The active press moved.
    Moved,
    /// The press ended; `inside` tells whether the last known location was
    /// within the surface bounds.
    Ended {
        /// Whether the touch lifted inside the bounds.
        inside: bool,
    },
    /// The press was cancelled.
    Cancelled,
}

/// Tracks one press at a time and drives a [`SurfaceAnimator`] from it.
#[derive(Debug, Clone, Default)]
pub struct TouchTrackingController {
    last_location: Option<Point>,
}

impl TouchTrackingController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a press is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.last_location.is_some()
    }

    /// Applies `event`. `bounds` are the surface-local bounds used to decide
    /// whether a press ended inside.
    ///
    /// Moves leaving the bounds keep tracking; only
    /// [`PointerEvent::PressCancel`] cancels.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        bounds: Rect,
        animator: &mut SurfaceAnimator,
    ) -> TouchOutcome {
        match event {
            PointerEvent::PressBegin(point) => {
                if self.is_tracking() {
                    return TouchOutcome::Ignored;
                }
                self.last_location = Some(point);
                animator.press(Some(point));
                TouchOutcome::Began
            }
            PointerEvent::PressMove(point) => match self.last_location.as_mut() {
                Some(location) => {
                    *location = point;
                    TouchOutcome::Moved
                }
                None => TouchOutcome::Ignored,
            },
            PointerEvent::PressEnd => match self.last_location.take() {
                Some(location) => {
                    animator.release();
                    TouchOutcome::Ended {
                        inside: bounds.contains(location),
                    }
                }
                None => TouchOutcome::Ignored,
            },
            PointerEvent::PressCancel => match self.last_location.take() {
                Some(_) => {
                    animator.release();
                    TouchOutcome::Cancelled
                }
                None => TouchOutcome::Ignored,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use lucent_ui::{ManualClock, Size};

    use super::*;

    fn setup() -> (TouchTrackingController, SurfaceAnimator, Rect) {
        let mut animator = SurfaceAnimator::new(ManualClock::shared());
        animator.set_size(Size::new(80.0, 40.0));
        (
            TouchTrackingController::new(),
            animator,
            Rect::new(0.0, 0.0, 80.0, 40.0),
        )
    }

    #[test]
    fn press_and_lift_inside() {
        let (mut touch, mut animator, bounds) = setup();
        let begin = touch.handle(
            PointerEvent::PressBegin(Point::new(10.0, 10.0)),
            bounds,
            &mut animator,
        );
        assert_eq!(begin, TouchOutcome::Began);
        assert!(animator.is_highlighted());
        let end = touch.handle(PointerEvent::PressEnd, bounds, &mut animator);
        assert_eq!(end, TouchOutcome::Ended { inside: true });
        assert!(!animator.is_highlighted());
    }

    #[test]
    fn drag_outside_keeps_tracking() {
        let (mut touch, mut animator, bounds) = setup();
        touch.handle(
            PointerEvent::PressBegin(Point::new(10.0, 10.0)),
            bounds,
            &mut animator,
        );
        let moved = touch.handle(
            PointerEvent::PressMove(Point::new(200.0, 10.0)),
            bounds,
            &mut animator,
        );
        assert_eq!(moved, TouchOutcome::Moved);
        assert!(touch.is_tracking());
        assert!(animator.is_highlighted());
        let end = touch.handle(PointerEvent::PressEnd, bounds, &mut animator);
        assert_eq!(end, TouchOutcome::Ended { inside: false });
    }

    #[test]
    fn cancel_releases() {
        let (mut touch, mut animator, bounds) = setup();
        touch.handle(
            PointerEvent::PressBegin(Point::new(1.0, 1.0)),
            bounds,
            &mut animator,
        );
        assert_eq!(
            touch.handle(PointerEvent::PressCancel, bounds, &mut animator),
            TouchOutcome::Cancelled
        );
        assert!(!animator.is_highlighted());
        assert_eq!(
            touch.handle(PointerEvent::PressEnd, bounds, &mut animator),
            TouchOutcome::Ignored
        );
    }
}
