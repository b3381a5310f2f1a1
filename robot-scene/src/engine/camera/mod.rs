//! Orbit camera around the model origin.
//!
//! Left-drag rotates, auto-rotate turns the view while idle. There is no pan
//! or zoom; the distance is fixed within its configured limits.

/// Orbit camera resource, the pure pose function and the controller system.
pub mod orbit_camera;

pub use orbit_camera::{OrbitCamera, orbit_camera_controller, orbit_transform};
