//! Runtime diagnostics shared with the host page.

/// FPS sampling and the periodic `fps_update` notification.
pub mod fps_tracking;
