use bevy::prelude::*;
use constants::hotspot::{MARKER_COLOUR, MARKER_HOVER_COLOUR, MARKER_RADIUS, MARKER_SEGMENTS};

use super::state::{HotspotMarker, MarkerAssets};
use crate::engine::core::config::SceneConfig;
use crate::engine::scene::root::ModelFrame;

pub fn setup_marker_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(
        Sphere::new(MARKER_RADIUS)
            .mesh()
            .uv(MARKER_SEGMENTS, MARKER_SEGMENTS),
    );

    let mut marker_material = |colour: Color| {
        materials.add(StandardMaterial {
            base_color: colour,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })
    };

    commands.insert_resource(MarkerAssets {
        mesh,
        idle: marker_material(MARKER_COLOUR),
        hovered: marker_material(MARKER_HOVER_COLOUR),
    });
}

/// Spawn one marker per configured hotspot under the model frame.
pub fn spawn_hotspot_markers(
    mut commands: Commands,
    config: Res<SceneConfig>,
    assets: Res<MarkerAssets>,
    frames: Query<Entity, With<ModelFrame>>,
) {
    let Ok(frame) = frames.single() else {
        warn!("No model frame to attach hotspots to");
        return;
    };

    commands.entity(frame).with_children(|parent| {
        for hotspot in &config.hotspots.hotspots {
            parent.spawn((
                Name::new(format!("Hotspot {}", hotspot.id)),
                HotspotMarker {
                    id: hotspot.id.clone(),
                },
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.idle.clone()),
                Transform::from_translation(hotspot.local_position()),
            ));
        }
    });

    info!("Spawned {} hotspot markers", config.hotspots.hotspots.len());
}
