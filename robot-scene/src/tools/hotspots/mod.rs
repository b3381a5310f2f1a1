//! Hotspot markers on the robot model and their links into the document.
//!
//! ## Data Flow
//!
//! ```text
//! Cursor ray (pick_hotspot_under_cursor)
//!   └─> HotspotPointerEvent::{Enter, Leave, Click}
//!       └─> apply_pointer_events()
//!           ├─> HoverState (single hovered hotspot)
//!           ├─> HotspotHoverChanged { previous, current }
//!           │     └─> apply_section_links::<T>() moves the highlight
//!           └─> HotspotActivated { hotspot, section }
//!                 └─> apply_section_links::<T>() scrolls the section
//! ```
//!
//! Markers spawn under the model frame once the point cloud is running and
//! pulse until hovered. When hotspots are disabled in [`SceneConfig`] nothing
//! here runs and no markers appear.

/// Marker pulse and hover colour.
pub mod animation;

/// Cursor picking, pointer event folding and unmount cleanup.
pub mod interactions;

/// Floating label beside the hovered marker.
pub mod label;

/// Marker mesh, materials and spawning under the model frame.
pub mod markers;

/// Ray-sphere picking against marker bounds.
pub mod ray;

/// Section highlight and scroll driven by hover and activation.
pub mod sections;

/// Hover state, hotspot events and marker components.
pub mod state;

use std::marker::PhantomData;

use bevy::prelude::*;

use crate::document::SectionTarget;
use crate::engine::core::app_state::AppState;
use crate::engine::core::config::SceneConfig;

pub use animation::marker_scale;
pub use interactions::PickTracker;
pub use state::{
    HotspotActivated, HotspotHoverChanged, HotspotMarker, HotspotPointerEvent, HoverState,
};

use animation::animate_markers;
use interactions::{
    apply_pointer_events, clear_hover_on_unmount, pick_hotspot_under_cursor, reset_pick_tracker,
};
use label::{spawn_hotspot_label, update_hover_label};
use markers::{setup_marker_assets, spawn_hotspot_markers};
use sections::apply_section_links;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HotspotSystems {
    Pick,
    Pointer,
    Links,
    Visuals,
}

pub fn hotspots_enabled(config: Res<SceneConfig>) -> bool {
    config.hotspots.enabled
}

pub struct HotspotPlugin;

impl Plugin for HotspotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverState>()
            .init_resource::<PickTracker>()
            .add_event::<HotspotPointerEvent>()
            .add_event::<HotspotHoverChanged>()
            .add_event::<HotspotActivated>()
            .configure_sets(
                Update,
                (
                    HotspotSystems::Pick,
                    HotspotSystems::Pointer,
                    HotspotSystems::Links,
                    HotspotSystems::Visuals,
                )
                    .chain()
                    .run_if(hotspots_enabled),
            )
            .add_systems(Startup, (setup_marker_assets, spawn_hotspot_label))
            .add_systems(
                OnEnter(AppState::Running),
                (reset_pick_tracker, spawn_hotspot_markers.run_if(hotspots_enabled)),
            )
            .add_systems(
                Update,
                pick_hotspot_under_cursor
                    .in_set(HotspotSystems::Pick)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (clear_hover_on_unmount, apply_pointer_events)
                    .chain()
                    .in_set(HotspotSystems::Pointer),
            )
            .add_systems(
                Update,
                (animate_markers, update_hover_label).in_set(HotspotSystems::Visuals),
            );
    }
}

/// Drives a [`SectionTarget`] non-send resource from hotspot events.
///
/// The target itself is inserted by the caller: DOM-backed in the browser,
/// document-backed natively.
pub struct SectionLinkPlugin<T: SectionTarget> {
    _target: PhantomData<fn() -> T>,
}

impl<T: SectionTarget> Default for SectionLinkPlugin<T> {
    fn default() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T: SectionTarget> Plugin for SectionLinkPlugin<T> {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_section_links::<T>.in_set(HotspotSystems::Links),
        );
    }
}
