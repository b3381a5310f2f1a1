use bevy::prelude::*;
use bevy::window::PresentMode;

#[cfg(target_arch = "wasm32")]
pub fn create_window_config() -> Window {
    use constants::path::CANVAS_SELECTOR;

    Window {
        canvas: Some(CANVAS_SELECTOR.into()),
        fit_canvas_to_parent: true,
        // Page scrolling must keep working over the canvas.
        prevent_default_event_handling: false,
        transparent: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn create_window_config() -> Window {
    use bevy::window::CompositeAlphaMode;

    Window {
        title: "Humanoid Robot".into(),
        transparent: true,
        composite_alpha_mode: CompositeAlphaMode::Auto,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
