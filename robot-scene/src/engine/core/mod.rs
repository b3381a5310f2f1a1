//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the point cloud material, the scene plugin,
/// hotspot tooling, the web RPC bridge and the section-link target.
pub mod app_setup;

/// Application state machine from loading through to running or failure.
pub mod app_state;

/// Immutable scene configuration: hotspots, model frame and orbit limits.
pub mod config;

/// Mount and unmount handling for the interactive scene.
///
/// Unmounting tears down every scene entity and drops the model handle so a
/// late load completion has nothing to attach to.
pub mod lifecycle;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
