use bevy::prelude::*;

use crate::engine::core::config::ModelConfig;

/// Parent of every entity spawned for the current mount.
#[derive(Component)]
pub struct SceneRoot;

/// Model-space frame: rotated and scaled so the PLY's Z-up axes read Y-up.
#[derive(Component)]
pub struct ModelFrame;

/// Spawn the scene root and its model frame, returning `(root, frame)`.
pub fn spawn_scene_root(commands: &mut Commands, model: &ModelConfig) -> (Entity, Entity) {
    let frame = commands
        .spawn((
            Name::new("Model frame"),
            ModelFrame,
            model.frame_transform(),
            Visibility::default(),
        ))
        .id();

    let root = commands
        .spawn((
            Name::new("Scene root"),
            SceneRoot,
            Transform::default(),
            Visibility::default(),
        ))
        .add_child(frame)
        .id();

    (root, frame)
}
