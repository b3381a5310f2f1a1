use bevy::prelude::*;

use crate::engine::camera::OrbitCamera;
use crate::engine::core::app_state::{AppState, request_state};
use crate::engine::core::config::SceneConfig;
use crate::engine::loading::{ModelLoadState, ModelLoader};
use crate::engine::scene::placeholder::spawn_loading_placeholder;
use crate::engine::scene::root::spawn_scene_root;

/// Request to attach or detach the interactive scene.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLifecycleEvent {
    Mount,
    Unmount,
}

pub fn request_initial_mount(mut lifecycle: EventWriter<SceneLifecycleEvent>) {
    lifecycle.write(SceneLifecycleEvent::Mount);
}

pub fn handle_lifecycle_events(
    mut commands: Commands,
    mut events: EventReader<SceneLifecycleEvent>,
    mut loader: ResMut<ModelLoader>,
    mut load_state: ResMut<ModelLoadState>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut orbit: ResMut<OrbitCamera>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
    asset_server: Res<AssetServer>,
    // Tracked here so a mount and unmount in the same frame still pair up.
    mut current_root: Local<Option<Entity>>,
) {
    for event in events.read() {
        match event {
            SceneLifecycleEvent::Mount => {
                if loader.is_mounted() {
                    debug!("Scene already mounted");
                    continue;
                }

                *orbit = OrbitCamera::from_settings(&config.orbit);

                let (root, _frame) = spawn_scene_root(&mut commands, &config.model);
                spawn_loading_placeholder(&mut commands, root, &mut meshes, &mut materials);
                *current_root = Some(root);

                loader.mount(asset_server.load(config.model.asset_path.clone()));
                *load_state = ModelLoadState::Loading { attempt: 1 };
                request_state(&state, &mut next_state, AppState::Loading);
                info!("Scene mounted, loading {}", config.model.asset_path);
            }
            SceneLifecycleEvent::Unmount => {
                if !loader.is_mounted() {
                    debug!("Scene already unmounted");
                    continue;
                }

                if let Some(root) = current_root.take() {
                    commands.entity(root).despawn();
                }

                loader.unmount();
                *load_state = ModelLoadState::Idle;
                request_state(&state, &mut next_state, AppState::Unmounted);
                info!("Scene unmounted");
            }
        }
    }
}
