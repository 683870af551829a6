//! Drives every lucent component against a manual clock and logs the panels
//! a renderer would draw.
//!
//! Run with `RUST_LOG=debug` to also see state transitions.
mod log_renderer;

use std::{sync::Arc, time::Duration};

use lucent_components::{
    ConfigError, EstimatedContentMeasure, GlassButton, GlassRenderer, GlassShape, GlassSlider,
    GlassSliderArgs, GlassSurfaceArgs, GlassSwitch, GlassSwitchArgs, PanEvent, PointerEvent,
    RenderCapabilities, TabBar, TabBarArgs, TabBarItem, TabIcon, TapKind,
};
use lucent_ui::{ManualClock, Point, Rect, Size, glam::Vec2, init_tracing};

use crate::log_renderer::LogRenderer;

const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> Result<(), ConfigError> {
    init_tracing();
    let clock = ManualClock::shared();
    let mut renderer = LogRenderer::default();

    button(&clock, &mut renderer);
    switch(&clock, &mut renderer);
    slider(&clock, &mut renderer)?;
    tab_bar(&clock, &mut renderer);

    renderer.capabilities = RenderCapabilities {
        reduce_transparency: true,
    };
    tracing::info!("reduced transparency");
    switch(&clock, &mut renderer);

    tracing::info!(panels = renderer.drawn, "done");
    Ok(())
}

// Ticks until `tick` reports idle, at 60 fps.
fn run_frames(clock: &ManualClock, mut tick: impl FnMut() -> bool) -> usize {
    let mut frames = 0;
    loop {
        clock.advance(FRAME);
        frames += 1;
        if !tick() {
            return frames;
        }
    }
}

fn button(clock: &Arc<ManualClock>, renderer: &mut LogRenderer) {
    let _span = tracing::info_span!("button").entered();
    let mut button = GlassButton::new(
        GlassSurfaceArgs::default().shape(GlassShape::rounded(14.0)),
        clock.clone(),
    )
    .on_press(|| tracing::info!("button pressed"));
    button.set_frame(Rect::new(16.0, 16.0, 160.0, 48.0));

    button.handle_pointer(PointerEvent::PressBegin(Point::new(140.0, 30.0)));
    clock.advance(Duration::from_millis(100));
    button.tick();
    button.surface().draw(renderer);
    button.handle_pointer(PointerEvent::PressEnd);
    let frames = run_frames(clock, || button.tick());
    tracing::info!(frames, "button settled");
    button.surface().draw(renderer);
}

fn switch(clock: &Arc<ManualClock>, renderer: &mut LogRenderer) {
    let _span = tracing::info_span!("switch").entered();
    let mut switch = GlassSwitch::new(
        GlassSwitchArgs::default().on_value_updated(|on| tracing::info!(on, "switch value")),
        clock.clone(),
    );
    switch.handle_tap();
    let frames = run_frames(clock, || switch.tick());
    tracing::info!(frames, "switch settled");

    switch.handle_pan(PanEvent::Began(Point::new(35.0, 15.0)));
    switch.handle_pan(PanEvent::Changed {
        location: Point::new(20.0, 15.0),
        delta: Vec2::new(-15.0, 0.0),
    });
    switch.handle_pan(PanEvent::Ended);
    run_frames(clock, || switch.tick());

    let panels = switch.render(renderer.capabilities());
    renderer.draw_panel(&panels.track);
    renderer.draw_panel(&panels.thumb);
}

fn slider(clock: &Arc<ManualClock>, renderer: &mut LogRenderer) -> Result<(), ConfigError> {
    let _span = tracing::info_span!("slider").entered();
    let mut slider = GlassSlider::new(
        GlassSliderArgs::default()
            .max_value(100.0)
            .value(25.0)
            .on_value_updated(|value| tracing::debug!(value, "slider value"))
            .on_tracking_updated(|tracking| tracing::info!(tracking, "slider tracking")),
        clock.clone(),
    )?;
    slider.layout(320.0);

    slider.handle_tap(Point::new(160.0, 22.0));
    run_frames(clock, || slider.tick());

    let start = slider.current_layout().knob.center();
    slider.handle_pan(PanEvent::Began(start));
    for step in 1..=10 {
        slider.handle_pan(PanEvent::Changed {
            location: start.offset(step as f32 * 10.0, 0.0),
            delta: Vec2::new(10.0, 0.0),
        });
    }
    slider.handle_pan(PanEvent::Ended);
    run_frames(clock, || slider.tick());
    tracing::info!(value = slider.value(), "slider settled");

    let panels = slider.render(renderer.capabilities());
    renderer.draw_panel(&panels.track_background);
    renderer.draw_panel(&panels.track_foreground);
    renderer.draw_panel(&panels.knob);
    Ok(())
}

fn tab_bar(clock: &Arc<ManualClock>, renderer: &mut LogRenderer) {
    let _span = tracing::info_span!("tab_bar").entered();
    let icon = |name: &str| TabIcon::new(name, Size::square(30.0));
    let mut bar = TabBar::new(
        TabBarArgs::default()
            .bottom_inset(34.0)
            .selected_index(0)
            .on_item_selected(|(index, kind)| tracing::info!(index, ?kind, "tab picked")),
        clock.clone(),
        Box::new(EstimatedContentMeasure::default()),
    );
    bar.set_items(vec![
        TabBarItem::new("Contacts").image(icon("contacts")),
        TabBarItem::new("Calls").image(icon("calls")),
        TabBarItem::new("Chats")
            .image(icon("chats"))
            .badge("12"),
        TabBarItem::new("Settings").image(icon("settings")),
    ]);
    bar.update_layout(Size::new(390.0, 83.0));
    run_frames(clock, || bar.tick());

    for (x, kind) in [
        (300.0, TapKind::Tap),
        (60.0, TapKind::Tap),
        (40.0, TapKind::LongTap),
    ] {
        bar.handle_tap(Point::new(x, 20.0), kind);
        clock.advance(Duration::from_millis(140));
        bar.tick();
        if let Some(lens) = bar.render_lens(renderer.capabilities()) {
            renderer.draw_lens(lens);
        }
        let frames = run_frames(clock, || bar.tick());
        tracing::info!(frames, selected = ?bar.selected_index(), "tab bar settled");
    }

    bar.update_badge(2, "");
    if let Some(lens) = bar.render_lens(renderer.capabilities()) {
        renderer.draw_lens(lens);
    }
}
