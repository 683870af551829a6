//! A tab bar whose selection is tracked by a shared glass lens.
//!
//! ## Usage
//!
//! Give the bar its items, lay it out, then route taps to
//! [`TabBar::handle_tap`] or drive selection from the host with
//! [`TabBar::set_selected_index`]. Call [`TabBar::tick`] once per frame and
//! draw [`TabBar::render_lens`].
use derive_setters::Setters;
use lucent_ui::{CallbackWith, Point, Rect, SharedClock, Size, SurfaceTransform};

use crate::{
    animation_config::AnimationConfig,
    glass_surface::{GlassPanel, RenderCapabilities},
    lens_tracker::{LensConfig, LensDecoration, LensTracker, TabFrame},
    surface_animator::SurfaceAnimator,
    tab_item::{TabBarItem, TabContentMeasure, TabIcon, TapKind},
};

/// Badge geometry.
pub struct TabBarDefaults;

impl TabBarDefaults {
    /// Badge height, and width of single-character badges.
    pub const BADGE_SIZE: f32 = 18.0;
    /// Horizontal padding added around multi-character badge text.
    pub const BADGE_TEXT_PADDING: f32 = 11.0;
    /// Distance from the tab center to the badge's trailing edge.
    pub const BADGE_TRAILING_OFFSET: f32 = 20.0;
    /// Badge top edge.
    pub const BADGE_TOP: f32 = 2.0;
}

/// Arguments for [`TabBar`].
#[derive(Clone, PartialEq, Setters)]
pub struct TabBarArgs {
    /// Lens geometry and timing.
    pub lens: LensConfig,
    /// Timing of the per-tab selection pulse.
    pub animation_config: AnimationConfig,
    /// Height reserved below the tabs, e.g. for a home indicator. Taps there
    /// are ignored.
    pub bottom_inset: f32,
    /// Initially selected tab.
    #[setters(strip_option)]
    pub selected_index: Option<usize>,
    /// Called when a tap picks a tab, before the selection is applied.
    #[setters(skip)]
    pub on_item_selected: Option<CallbackWith<(usize, TapKind)>>,
    /// Called with the tab index and animation name when a newly selected
    /// tab has an animation to play.
    #[setters(skip)]
    pub on_animation_requested: Option<CallbackWith<(usize, String)>>,
}

impl TabBarArgs {
    /// Sets the tap handler.
    pub fn on_item_selected<F>(mut self, on_item_selected: F) -> Self
    where
        F: Fn((usize, TapKind)) + Send + Sync + 'static,
    {
        self.on_item_selected = Some(CallbackWith::new(on_item_selected));
        self
    }

    /// Sets the tap handler using a shared callback.
    pub fn on_item_selected_shared(
        mut self,
        on_item_selected: impl Into<CallbackWith<(usize, TapKind)>>,
    ) -> Self {
        self.on_item_selected = Some(on_item_selected.into());
        self
    }

    /// Sets the animation request handler.
    pub fn on_animation_requested<F>(mut self, on_animation_requested: F) -> Self
    where
        F: Fn((usize, String)) + Send + Sync + 'static,
    {
        self.on_animation_requested = Some(CallbackWith::new(on_animation_requested));
        self
    }
}

impl Default for TabBarArgs {
    fn default() -> Self {
        Self {
            lens: LensConfig::default(),
            animation_config: AnimationConfig::DEFAULT,
            bottom_inset: 0.0,
            selected_index: None,
            on_item_selected: None,
            on_animation_requested: None,
        }
    }
}

/// Layout of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TabLayout {
    /// Tab frame in bar-local coordinates.
    pub frame: Rect,
    /// Width of the visible content.
    pub content_width: f32,
    /// Badge frame, if the badge is visible.
    pub badge_frame: Option<Rect>,
}

struct TabSlot {
    item: TabBarItem,
    layout: TabLayout,
    animator: SurfaceAnimator,
}

/// Tab selection with a morphing lens.
pub struct TabBar {
    args: TabBarArgs,
    clock: SharedClock,
    measure: Box<dyn TabContentMeasure>,
    slots: Vec<TabSlot>,
    table: Vec<TabFrame>,
    valid_size: Option<Size>,
    selected_index: Option<usize>,
    lens: LensTracker,
}

impl TabBar {
    /// Creates an empty bar.
    pub fn new(args: TabBarArgs, clock: SharedClock, measure: Box<dyn TabContentMeasure>) -> Self {
        let lens = LensTracker::new(args.lens.clone(), clock.clone());
        let selected_index = args.selected_index;
        Self {
            args,
            clock,
            measure,
            slots: Vec::new(),
            table: Vec::new(),
            valid_size: None,
            selected_index,
            lens,
        }
    }

    /// Replaces every item and relayouts.
    pub fn set_items(&mut self, items: Vec<TabBarItem>) {
        self.slots = items
            .into_iter()
            .map(|item| TabSlot {
                item,
                layout: TabLayout::default(),
                animator: SurfaceAnimator::with_config(
                    self.clock.clone(),
                    self.args.animation_config,
                ),
            })
            .collect();
        tracing::debug!(count = self.slots.len(), "tab items reloaded");
        self.relayout();
    }

    /// Number of tabs.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the bar has no tabs.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<&TabBarItem> {
        self.slots.get(index).map(|slot| &slot.item)
    }

    /// Sets a tab's badge text. An empty string hides the badge.
    pub fn update_badge(&mut self, index: usize, badge: impl Into<String>) {
        let badge = badge.into();
        self.update_item(index, |item| {
            if item.badge == badge {
                return false;
            }
            item.badge = badge;
            true
        });
    }

    /// Sets a tab's title.
    pub fn update_title(&mut self, index: usize, title: impl Into<String>) {
        let title = title.into();
        self.update_item(index, |item| {
            if item.title == title {
                return false;
            }
            item.title = title;
            true
        });
    }

    /// Sets a tab's unselected icon.
    pub fn update_image(&mut self, index: usize, image: Option<TabIcon>) {
        self.update_item(index, |item| {
            if item.image == image {
                return false;
            }
            item.image = image;
            true
        });
    }

    /// Sets a tab's selected icon.
    pub fn update_selected_image(&mut self, index: usize, image: Option<TabIcon>) {
        self.update_item(index, |item| {
            if item.selected_image == image {
                return false;
            }
            item.selected_image = image;
            true
        });
    }

    /// Lays the tabs out across `size`, then re-syncs the lens.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_layout(&mut self, size: Size) {
        self.valid_size = Some(size);
        self.rebuild_table(size);
        if let Some(selected) = self.selected_index {
            self.lens.update_layout(selected, &self.table);
        }
    }

    /// Selects `index`.
    ///
    /// Selecting the current tab bounces the lens. Otherwise the new tab
    /// pulses and the lens moves there, morphing if a tab was selected before.
    pub fn set_selected_index(&mut self, index: usize) {
        if index >= self.slots.len() {
            tracing::debug!(index, "selection skipped: no such tab");
            return;
        }
        let previous = self.selected_index;
        if previous == Some(index) {
            self.lens.bounce();
            return;
        }
        self.selected_index = Some(index);
        tracing::debug!(?previous, index, "tab selected");

        if let Some(previous) = previous
            && let Some(slot) = self.slots.get_mut(previous)
        {
            slot.animator.selection_pulse(false);
        }
        self.slots[index].animator.selection_pulse(true);

        // Content widths depend on the selection; rebuild before moving.
        if let Some(size) = self.valid_size {
            self.rebuild_table(size);
            self.lens
                .move_to(index, previous, previous.is_some(), &self.table);
            self.lens.selection_pulse();
        }
    }

    /// Routes a tap in bar-local coordinates to the tab whose center is
    /// horizontally closest. Returns the picked index.
    pub fn handle_tap(&mut self, location: Point, kind: TapKind) -> Option<usize> {
        let size = self.valid_size?;
        if location.y > size.height - self.args.bottom_inset {
            return None;
        }
        let index = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (i, (location.x - slot.layout.frame.mid_x()).abs()))
            .fold(None, |closest: Option<(usize, f32)>, (i, distance)| {
                match closest {
                    Some((_, best)) if best <= distance => closest,
                    _ => Some((i, distance)),
                }
            })
            .map(|(i, _)| i)?;

        if let Some(on_item_selected) = &self.args.on_item_selected {
            on_item_selected.call((index, kind));
        }
        let changed = self.selected_index != Some(index);
        self.set_selected_index(index);
        if changed
            && let Some(name) = self.slots[index].item.animation_name.clone()
            && let Some(on_animation_requested) = &self.args.on_animation_requested
        {
            on_animation_requested.call((index, name));
        }
        Some(index)
    }

    /// Frame of tab `index` from the last layout pass.
    pub fn frame_for_tab(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).map(|slot| slot.layout.frame)
    }

    /// Full layout of tab `index` from the last layout pass.
    pub fn tab_layout(&self, index: usize) -> Option<TabLayout> {
        self.slots.get(index).map(|slot| slot.layout)
    }

    /// Current transform of tab `index`'s content.
    pub fn tab_transform(&self, index: usize) -> Option<SurfaceTransform> {
        self.slots.get(index).map(|slot| slot.animator.transform())
    }

    /// The selected tab.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// The lens.
    pub fn lens(&self) -> &LensTracker {
        &self.lens
    }

    /// Advances every animation. Returns `true` while anything is animating.
    pub fn tick(&mut self) -> bool {
        let mut animating = self.lens.tick();
        for slot in &mut self.slots {
            animating |= slot.animator.tick();
        }
        animating
    }

    /// Describes the lens, if it has appeared.
    pub fn render_lens(
        &self,
        capabilities: RenderCapabilities,
    ) -> Option<(GlassPanel, LensDecoration)> {
        self.lens
            .is_shown()
            .then(|| self.lens.render(capabilities))
    }

    fn update_item(&mut self, index: usize, apply: impl FnOnce(&mut TabBarItem) -> bool) {
        let Some(slot) = self.slots.get_mut(index) else {
            tracing::debug!(index, "tab update skipped: no such tab");
            return;
        };
        if apply(&mut slot.item) {
            self.relayout();
        }
    }

    fn relayout(&mut self) {
        if let Some(size) = self.valid_size {
            self.update_layout(size);
        }
    }

    fn rebuild_table(&mut self, size: Size) {
        self.table.clear();
        if self.slots.is_empty() {
            return;
        }
        let slot_width = size.width / self.slots.len() as f32;
        let content_height = (size.height - self.args.bottom_inset).max(0.0);
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let frame = Rect::new(i as f32 * slot_width, 0.0, slot_width, content_height);
            let selected = self.selected_index == Some(i);
            let content_width = self.measure.content_width(&slot.item, selected);
            let badge_frame = slot.item.has_badge().then(|| {
                let text_width = self.measure.badge_text_width(&slot.item.badge);
                layout_badge(frame, text_width, &slot.item.badge)
            });
            slot.layout = TabLayout {
                frame,
                content_width,
                badge_frame,
            };
            slot.animator.set_size(frame.size());
            self.table.push(TabFrame {
                frame,
                content_width,
            });
        }
    }
}

fn layout_badge(tab: Rect, text_width: f32, text: &str) -> Rect {
    let width = if text.chars().count() == 1 {
        TabBarDefaults::BADGE_SIZE
    } else {
        TabBarDefaults::BADGE_SIZE.max(text_width + TabBarDefaults::BADGE_TEXT_PADDING)
    };
    Rect::new(
        tab.x + (tab.width / 2.0).floor() + TabBarDefaults::BADGE_TRAILING_OFFSET - width,
        TabBarDefaults::BADGE_TOP,
        width,
        TabBarDefaults::BADGE_SIZE,
    )
}

impl std::fmt::Debug for TabBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBar")
            .field("tabs", &self.slots.len())
            .field("selected_index", &self.selected_index)
            .field("valid_size", &self.valid_size)
            .field("lens", &self.lens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lucent_ui::ManualClock;
    use parking_lot::Mutex;

    use super::*;
    use crate::tab_item::EstimatedContentMeasure;

    fn bar(args: TabBarArgs) -> TabBar {
        let mut bar = TabBar::new(
            args,
            ManualClock::shared(),
            Box::new(EstimatedContentMeasure::default()),
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

    #[test]
    fn slots_split_width_evenly() {
        let bar = bar(TabBarArgs::default().bottom_inset(34.0));
        assert_eq!(bar.frame_for_tab(1), Some(Rect::new(90.0, 0.0, 90.0, 49.0)));
        assert_eq!(bar.frame_for_tab(4), None);
        assert!(!bar.lens().is_shown());
    }

    #[test]
    fn badge_width_depends_on_text() {
        let mut bar = bar(TabBarArgs::default());
        bar.update_badge(0, "3");
        let single = bar.tab_layout(0).and_then(|layout| layout.badge_frame);
        assert_eq!(single, Some(Rect::new(47.0, 2.0, 18.0, 18.0)));

        bar.update_badge(0, "128");
        let wide = bar.tab_layout(0).and_then(|layout| layout.badge_frame);
        // 3 glyphs * 7 + 11
        assert_eq!(wide.map(|frame| frame.width), Some(32.0));

        bar.update_badge(0, "");
        assert_eq!(bar.tab_layout(0).and_then(|layout| layout.badge_frame), None);
    }

    #[test]
    fn title_update_relayouts_lens() {
        let mut bar = bar(TabBarArgs::default().selected_index(1));
        assert_eq!(bar.lens().current_frame().width, (5.0_f32 * 5.5).ceil() + 32.0);
        bar.update_title(1, "Recents");
        let expected = (7.0_f32 * 5.5).ceil() + 32.0;
        assert_eq!(bar.lens().current_frame().width, expected);
    }

    #[test]
    fn tap_in_bottom_inset_is_ignored() {
        let picked = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&picked);
        let mut bar = bar(
            TabBarArgs::default()
                .bottom_inset(34.0)
                .on_item_selected(move |event| sink.lock().push(event)),
        );
        assert_eq!(bar.handle_tap(Point::new(100.0, 60.0), TapKind::Tap), None);
        assert_eq!(
            bar.handle_tap(Point::new(100.0, 20.0), TapKind::LongTap),
            Some(1)
        );
        assert_eq!(*picked.lock(), vec![(1, TapKind::LongTap)]);
        assert_eq!(bar.selected_index(), Some(1));
    }

    #[test]
    fn tap_requests_animation_only_on_change() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&requests);
        let mut bar = TabBar::new(
            TabBarArgs::default()
                .on_animation_requested(move |request| sink.lock().push(request)),
            ManualClock::shared(),
            Box::new(EstimatedContentMeasure::default()),
        );
        bar.set_items(vec![
            TabBarItem::new("Home"),
            TabBarItem::new("Profile").animation_name("profile_wave".to_string()),
        ]);
        bar.update_layout(Size::new(200.0, 50.0));
        bar.handle_tap(Point::new(150.0, 10.0), TapKind::Tap);
        bar.handle_tap(Point::new(150.0, 10.0), TapKind::Tap);
        assert_eq!(*requests.lock(), vec![(1, "profile_wave".to_string())]);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut bar = bar(TabBarArgs::default().selected_index(0));
        bar.set_selected_index(9);
        bar.update_badge(9, "1");
        assert_eq!(bar.selected_index(), Some(0));
    }
}
