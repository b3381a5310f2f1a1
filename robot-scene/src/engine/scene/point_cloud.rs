use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::assets::PointCloudGeometry;
use crate::engine::mesh::point_quad_mesh::create_point_quad_mesh;
use crate::engine::render::PointCloudMaterial;

#[derive(Component, Debug)]
pub struct PointCloud {
    pub point_count: usize,
}

/// Spawn the rendered point cloud under the model frame.
pub fn spawn_point_cloud(
    commands: &mut Commands,
    frame: Entity,
    geometry: &PointCloudGeometry,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<PointCloudMaterial>,
) -> Entity {
    let mesh = create_point_quad_mesh(&geometry.positions);

    let cloud = commands
        .spawn((
            Name::new("Point cloud"),
            PointCloud {
                point_count: geometry.vertex_count(),
            },
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(PointCloudMaterial::default())),
            Transform::default(),
            // Vertices sit at point centres; quads expand past the mesh AABB.
            NoFrustumCulling,
        ))
        .id();

    commands.entity(frame).add_child(cloud);
    cloud
}
