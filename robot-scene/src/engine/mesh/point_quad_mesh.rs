use bevy::prelude::*;
use bevy::{render::mesh::PrimitiveTopology, render::render_asset::RenderAssetUsages};

/// Corner offsets for the two triangles of a unit quad, in shader order.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Create a triangle list with 6 vertices per point.
///
/// Every vertex carries the point centre as its position and the quad corner
/// in `UV_0`. The vertex shader offsets the corner in clip space.
pub fn create_point_quad_mesh(points: &[Vec3]) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );

    let vertex_count = points.len() * QUAD_CORNERS.len();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut corners: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for point in points {
        for corner in QUAD_CORNERS {
            positions.push(point.to_array());
            corners.push(corner);
        }
    }

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn six_vertices_per_point() {
        let points = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let mesh = create_point_quad_mesh(&points);

        assert_eq!(mesh.count_vertices(), 24);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        assert!(positions[6..12].iter().all(|p| *p == [1.0, 0.0, 0.0]));
    }

    #[test]
    fn corners_cover_the_quad() {
        let mesh = create_point_quad_mesh(&[Vec3::ONE]);

        let Some(VertexAttributeValues::Float32x2(corners)) = mesh.attribute(Mesh::ATTRIBUTE_UV_0)
        else {
            panic!("corners missing");
        };
        assert_eq!(corners.as_slice(), QUAD_CORNERS.as_slice());
    }

    #[test]
    fn empty_cloud_gives_empty_mesh() {
        assert_eq!(create_point_quad_mesh(&[]).count_vertices(), 0);
    }
}
