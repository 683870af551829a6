//! A pressable glass button.
//!
//! ## Usage
//!
//! Route the button's pointer events to [`GlassButton::handle_pointer`]; the
//! `on_press` callback fires when a press lifts inside the bounds.
use lucent_ui::{Callback, OnComplete, Point, Rect, SharedClock};

use crate::{
    glass_surface::{GlassPanel, GlassSurface, GlassSurfaceArgs, RenderCapabilities},
    touch_tracking::{PointerEvent, TouchOutcome, TouchTrackingController},
};

/// A glass surface that reacts to presses.
#[derive(Debug)]
pub struct GlassButton {
    surface: GlassSurface,
    touch: TouchTrackingController,
    on_press: Option<Callback>,
}

impl GlassButton {
    /// Creates a button.
    pub fn new(args: GlassSurfaceArgs, clock: SharedClock) -> Self {
        Self {
            surface: GlassSurface::new(args, clock),
            touch: TouchTrackingController::new(),
            on_press: None,
        }
    }

    /// Sets the press handler.
    pub fn on_press<F>(mut self, on_press: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Callback::new(on_press));
        self
    }

    /// Sets the press handler using a shared callback.
    pub fn on_press_shared(mut self, on_press: impl Into<Callback>) -> Self {
        self.on_press = Some(on_press.into());
        self
    }

    /// The underlying surface.
    pub fn surface(&self) -> &GlassSurface {
        &self.surface
    }

    /// Mutable access to the underlying surface, for setters and layout.
    pub fn surface_mut(&mut self) -> &mut GlassSurface {
        &mut self.surface
    }

    /// Lays the button out.
    pub fn set_frame(&mut self, frame: Rect) {
        self.surface.set_frame(frame);
    }

    /// Handles a pointer event in button-local coordinates.
    ///
    /// Presses start at the touch point; releases always return to a centered
    /// transform.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> TouchOutcome {
        let bounds = Rect::from_origin_size(Point::ZERO, self.surface.frame().size());
        let outcome = self
            .touch
            .handle(event, bounds, self.surface.animator_mut());
        if let TouchOutcome::Ended { inside: true } = outcome {
            tracing::debug!("glass button pressed");
            if let Some(on_press) = &self.on_press {
                on_press.call();
            }
        }
        outcome
    }

    /// Plays the bounce pulse.
    pub fn bounce(&mut self, on_complete: Option<OnComplete>) {
        self.surface.animator_mut().bounce(on_complete);
    }

    /// Advances animations. Returns `true` while anything is animating.
    pub fn tick(&mut self) -> bool {
        self.surface.tick()
    }

    /// Describes the button at its current animation state.
    pub fn render(&self, capabilities: RenderCapabilities) -> GlassPanel {
        self.surface.render(capabilities)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use lucent_ui::ManualClock;

    use super::*;
    use crate::shape_def::GlassShape;

    fn button(presses: &Arc<AtomicUsize>) -> GlassButton {
        let sink = Arc::clone(presses);
        let mut button = GlassButton::new(
            GlassSurfaceArgs::default().shape(GlassShape::rounded(12.0)),
            ManualClock::shared(),
        )
        .on_press(move || {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        button.set_frame(Rect::new(20.0, 20.0, 100.0, 44.0));
        button
    }

    #[test]
    fn lift_inside_fires_on_press() {
        let presses = Arc::new(AtomicUsize::new(0));
        let mut button = button(&presses);
        button.handle_pointer(PointerEvent::PressBegin(Point::new(30.0, 20.0)));
        assert!(button.surface().animator().is_highlighted());
        button.handle_pointer(PointerEvent::PressEnd);
        assert_eq!(presses.load(Ordering::SeqCst), 1);
        assert!(!button.surface().animator().is_highlighted());
    }

    #[test]
    fn cancel_and_lift_outside_do_not_fire() {
        let presses = Arc::new(AtomicUsize::new(0));
        let mut button = button(&presses);
        button.handle_pointer(PointerEvent::PressBegin(Point::new(30.0, 20.0)));
        button.handle_pointer(PointerEvent::PressCancel);
        button.handle_pointer(PointerEvent::PressBegin(Point::new(30.0, 20.0)));
        button.handle_pointer(PointerEvent::PressMove(Point::new(300.0, 20.0)));
        button.handle_pointer(PointerEvent::PressEnd);
        assert_eq!(presses.load(Ordering::SeqCst), 0);
    }
}
