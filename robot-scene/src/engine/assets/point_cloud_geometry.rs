use bevy::prelude::*;

/// Decoded point cloud. Immutable once loaded.
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct PointCloudGeometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl PointCloudGeometry {
    /// Build geometry and compute vertex normals.
    ///
    /// With `faces`, normals are area-weighted face normals averaged per
    /// vertex. Without, consecutive vertex triples are treated as triangles
    /// and share a flat normal; a trailing partial triple keeps zero normals.
    pub fn from_positions(positions: Vec<Vec3>, faces: Option<&[[u32; 3]]>) -> Self {
        let normals = match faces {
            Some(faces) => indexed_vertex_normals(&positions, faces),
            None => sequential_vertex_normals(&positions),
        };
        Self { positions, normals }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }
}

fn indexed_vertex_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for &[a, b, c] in faces {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };
        // Unnormalised cross product weights by face area.
        let face_normal = (pb - pa).cross(pc - pa);
        normals[a] += face_normal;
        normals[b] += face_normal;
        normals[c] += face_normal;
    }

    normals.iter().map(|n| n.normalize_or_zero()).collect()
}

fn sequential_vertex_normals(positions: &[Vec3]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for (triangle, chunk) in positions.chunks_exact(3).enumerate() {
        let face_normal = (chunk[1] - chunk[0])
            .cross(chunk[2] - chunk[0])
            .normalize_or_zero();
        normals[triangle * 3..triangle * 3 + 3].fill(face_normal);
    }

    normals
}
