use std::{sync::Arc, time::Duration};

use lucent_components::{
    AnimationConfig, GlassSwitch, GlassSwitchArgs, RenderCapabilities, TabBar, TabBarArgs,
    TabBarItem, TabContentMeasure, TapKind,
};
use lucent_ui::{ManualClock, Point, Rect, Size};
use parking_lot::Mutex;

struct FixedMeasure(f32);

impl TabContentMeasure for FixedMeasure {
    fn content_width(&self, _item: &TabBarItem, _selected: bool) -> f32 {
        self.0
    }

    fn badge_text_width(&self, text: &str) -> f32 {
        text.len() as f32 * 7.0
    }
}

fn tab_bar(clock: &Arc<ManualClock>) -> TabBar {
    let mut bar = TabBar::new(
        TabBarArgs::default().bottom_inset(34.0),
        clock.clone(),
        Box::new(FixedMeasure(40.0)),
    );
    bar.set_items(
        ["Contacts", "Calls", "Chats", "Settings"]
            .into_iter()
            .map(TabBarItem::new)
            .collect(),
    );
    bar.update_layout(Size::new(360.0, 83.0));
    bar
}

fn advance(clock: &ManualClock, bar: &mut TabBar, millis: u64) {
    clock.advance(Duration::from_millis(millis));
    bar.tick();
}

#[test]
fn lens_follows_selection_across_tabs() {
    let clock = ManualClock::shared();
    let mut bar = tab_bar(&clock);
    assert!(bar.render_lens(RenderCapabilities::default()).is_none());

    bar.set_selected_index(2);
    assert_eq!(bar.lens().current_frame(), Rect::new(189.0, 1.0, 72.0, 36.0));
    advance(&clock, &mut bar, 200);
    let (panel, _) = bar
        .render_lens(RenderCapabilities::default())
        .expect("lens is shown");
    assert_eq!(panel.opacity, 1.0);

    bar.set_selected_index(0);
    assert!(bar.lens().is_morphing());
    advance(&clock, &mut bar, 140);
    let bridge = bar.lens().current_frame();
    assert!(
        bridge.approx_eq(&Rect::new(9.0, 1.0, 252.0, 36.0 * 0.92), 1e-4),
        "{bridge:?}"
    );

    advance(&clock, &mut bar, 210);
    assert_eq!(bar.lens().current_frame(), Rect::new(9.0, 1.0, 72.0, 36.0));
    assert!(!bar.lens().is_morphing());

    advance(&clock, &mut bar, 1000);
    assert!(bar.lens().transform().is_identity(1e-6));
}

#[test]
fn reselecting_bounces_without_moving() {
    let clock = ManualClock::shared();
    let mut bar = tab_bar(&clock);
    bar.set_selected_index(0);
    advance(&clock, &mut bar, 1000);

    bar.set_selected_index(0);
    advance(&clock, &mut bar, 100);
    assert!((bar.lens().transform().scale.x - 1.08).abs() < 1e-5);
    assert_eq!(bar.lens().current_frame().x, 9.0);

    advance(&clock, &mut bar, 1000);
    assert_eq!(bar.lens().current_frame(), Rect::new(9.0, 1.0, 72.0, 36.0));
    assert!(bar.lens().transform().is_identity(1e-6));
}

#[test]
fn taps_drive_the_same_pipeline() {
    let clock = ManualClock::shared();
    let mut bar = tab_bar(&clock);
    bar.set_selected_index(2);
    assert_eq!(bar.handle_tap(Point::new(20.0, 10.0), TapKind::Tap), Some(0));
    assert_eq!(bar.selected_index(), Some(0));
    assert!(bar.lens().is_morphing());
    assert_eq!(bar.lens().applied_target().map(|frame| frame.x), Some(9.0));
}

#[test]
fn resize_mid_morph_snaps_to_new_target() {
    let clock = ManualClock::shared();
    let mut bar = tab_bar(&clock);
    bar.set_selected_index(3);
    bar.set_selected_index(1);
    advance(&clock, &mut bar, 100);
    bar.update_layout(Size::new(400.0, 83.0));
    assert!(!bar.lens().is_morphing());
    // Tab 1 of 4 over 400 is centered at 150.
    assert_eq!(bar.lens().current_frame(), Rect::new(114.0, 1.0, 72.0, 36.0));
}

#[test]
fn switch_tap_from_off() {
    let clock = ManualClock::shared();
    let updates = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&updates);
    let mut switch = GlassSwitch::new(
        GlassSwitchArgs::default().on_value_updated(move |on| sink.lock().push(on)),
        clock.clone(),
    );
    switch.handle_tap();
    assert_eq!(*updates.lock(), vec![true]);

    clock.advance(Duration::from_millis(100));
    assert!(switch.tick());
    clock.advance(Duration::from_secs(1));
    assert!(!switch.tick());
    assert_eq!(switch.thumb_frame().x, 51.0 - 27.0 - 2.0);
    assert!(!switch.thumb().animator().is_highlighted());
    assert_eq!(updates.lock().len(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn animation_config_loads_from_json() {
    let json = r#"{
        "highlight_scale": 0.97,
        "pressed_scale": 0.9,
        "bounce_scale": 1.05,
        "stretch_factor": 0.03,
        "highlight_duration": 0.1,
        "bounce_duration": 0.45,
        "spring_damping": 0.65,
        "spring_initial_velocity": 0.9
    }"#;
    let config: AnimationConfig = serde_json::from_str(json).expect("valid config json");
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.pressed_scale, 0.9);
}

#[cfg(not(feature = "serde"))]
#[test]
fn presets_validate() {
    for preset in [
        AnimationConfig::DEFAULT,
        AnimationConfig::SUBTLE,
        AnimationConfig::PROMINENT,
    ] {
        assert_eq!(preset.validate(), Ok(()));
    }
}
