//! Interactive tools layered over the robot scene.
//!
//! ## Hotspots
//!
//! Labelled markers on the model, each linked to one section of the content
//! document:
//! - **Hover**: the marker grows and brightens, a label follows it on screen,
//!   and the linked section is highlighted
//! - **Click**: the linked section scrolls to the centre of the viewport
//! - **Exclusivity**: at most one hotspot is hovered; entering another
//!   replaces the previous hover in one step
//!
//! The whole tool is switched off by `HotspotConfig::enabled`, in which case
//! no markers spawn and none of its systems run.
//!
//! Hotspots can also be activated by the host page through the
//! `activate_hotspot` RPC method.

/// Hotspot markers, pointer handling, hover label and section links.
pub mod hotspots;
