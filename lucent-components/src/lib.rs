//! Liquid glass components for lucent.
//!
//! Every component is a plain owned value: feed it input events, call
//! `tick()` once per frame and hand what `render()` returns to a
//! [`GlassRenderer`]. Each interactive surface owns one [`SurfaceAnimator`]
//! driving its press, release and pulse animations.
//!
//! ```
//! use std::time::Duration;
//! use lucent_components::{GlassSwitch, GlassSwitchArgs, RenderCapabilities};
//! use lucent_ui::ManualClock;
//!
//! let clock = ManualClock::shared();
//! let mut switch = GlassSwitch::new(GlassSwitchArgs::default(), clock.clone());
//! switch.handle_tap();
//! clock.advance(Duration::from_secs(1));
//! switch.tick();
//! assert!(switch.is_on());
//! let panels = switch.render(RenderCapabilities::default());
//! assert_eq!(panels.thumb.frame.x, 22.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation_config;
pub mod error;
pub mod glass_button;
pub mod glass_slider;
pub mod glass_surface;
pub mod glass_switch;
pub mod lens_tracker;
pub mod shape_def;
pub mod surface_animator;
pub mod tab_bar;
pub mod tab_item;
pub mod touch_tracking;

pub use crate::{
    animation_config::{AnimationConfig, PulseSpec},
    error::ConfigError,
    glass_button::GlassButton,
    glass_slider::{GlassSlider, GlassSliderArgs, SliderDefaults, SliderLayout, SliderPanels},
    glass_surface::{
        BlurStyle, GlassBorder, GlassPanel, GlassRenderer, GlassShadow, GlassSurface,
        GlassSurfaceArgs, GlassSurfaceDefaults, RenderCapabilities,
    },
    glass_switch::{GlassSwitch, GlassSwitchArgs, SwitchDefaults, SwitchPanels},
    lens_tracker::{LensConfig, LensDecoration, LensTracker, TabFrame},
    shape_def::GlassShape,
    surface_animator::{HighlightState, SurfaceAnimator},
    tab_bar::{TabBar, TabBarArgs, TabBarDefaults, TabLayout},
    tab_item::{EstimatedContentMeasure, TabBarItem, TabContentMeasure, TabIcon, TapKind},
    touch_tracking::{PanEvent, PointerEvent, TouchOutcome, TouchTrackingController},
};
