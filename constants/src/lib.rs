//! Authored values shared across the robot scene workspace.

pub mod camera;
pub mod coordinate_system;
pub mod document;
pub mod hotspot;
pub mod path;
pub mod render_settings;
