//! Tab descriptors and content measurement for [`crate::tab_bar::TabBar`].
use derive_setters::Setters;
use lucent_ui::Size;

/// A tab icon: an asset name and its intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct TabIcon {
    /// Asset name resolved by the host's rasterizer.
    pub name: String,
    /// Intrinsic size in points.
    pub size: Size,
}

impl TabIcon {
    /// Creates an icon reference.
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// One tab of a tab bar.
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct TabBarItem {
    /// Title under the icon.
    #[setters(into)]
    pub title: String,
    /// Icon shown while unselected.
    #[setters(strip_option)]
    pub image: Option<TabIcon>,
    /// Icon shown while selected. Falls back to `image`.
    #[setters(strip_option)]
    pub selected_image: Option<TabIcon>,
    /// Badge text. Empty hides the badge.
    #[setters(into)]
    pub badge: String,
    /// Draw a ring around the icon when selected instead of swapping icons.
    pub ring_selection: bool,
    /// Animation played when the tab becomes selected.
    #[setters(strip_option)]
    pub animation_name: Option<String>,
}

impl TabBarItem {
    /// Creates an item with a title and no icon.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: None,
            selected_image: None,
            badge: String::new(),
            ring_selection: false,
            animation_name: None,
        }
    }

    /// Icon for the given selection state.
    pub fn icon(&self, selected: bool) -> Option<&TabIcon> {
        if selected && !self.ring_selection {
            self.selected_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }

    /// Returns `true` if the badge is visible.
    pub fn has_badge(&self) -> bool {
        !self.badge.is_empty()
    }
}

impl Default for TabBarItem {
    fn default() -> Self {
        Self::new("")
    }
}

/// How a tab was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    /// A regular tap.
    Tap,
    /// A long press.
    LongTap,
}

/// Measures tab content for lens sizing and badge layout.
pub trait TabContentMeasure: Send + Sync {
    /// Width of the visible content of `item`.
    fn content_width(&self, item: &TabBarItem, selected: bool) -> f32;

    /// Width of rendered badge text.
    fn badge_text_width(&self, text: &str) -> f32;
}

/// Estimates widths from per-glyph advances. Useful headless and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct EstimatedContentMeasure {
    /// Average advance of a title glyph.
    pub title_glyph_width: f32,
    /// Average advance of a badge glyph.
    pub badge_glyph_width: f32,
}

impl Default for EstimatedContentMeasure {
    fn default() -> Self {
        Self {
            title_glyph_width: 5.5,
            badge_glyph_width: 7.0,
        }
    }
}

impl TabContentMeasure for EstimatedContentMeasure {
    fn content_width(&self, item: &TabBarItem, selected: bool) -> f32 {
        let width = match item.icon(selected) {
            Some(icon) => icon.size.width,
            None => (item.title.chars().count() as f32 * self.title_glyph_width).ceil(),
        };
        width.max(1.0)
    }

    fn badge_text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.badge_glyph_width
    }
}
