//! Mesh generation for point cloud rendering primitives.
//!
//! Each point is expanded into a screen-aligned quad in the vertex shader, so
//! the CPU side only replicates the point centre and tags each copy with the
//! quad corner it represents.

/// Quad-per-point mesh construction for [`PointCloudMaterial`](crate::engine::render::PointCloudMaterial).
pub mod point_quad_mesh;
