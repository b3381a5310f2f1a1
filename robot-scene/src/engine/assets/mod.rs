//! Point cloud asset types and the PLY loader.
//!
//! The robot model ships as a single PLY file. Decoding runs on Bevy's asset
//! task pool and yields a [`PointCloudGeometry`] with computed vertex normals.

/// Errors raised while decoding a PLY file.
pub mod error;

/// Bevy asset loader decoding ASCII and binary PLY through `ply-rs`.
pub mod ply_loader;

/// In-memory point cloud with positions and per-vertex normals.
pub mod point_cloud_geometry;

pub use error::PlyLoadError;
pub use ply_loader::PlyPointCloudLoader;
pub use point_cloud_geometry::PointCloudGeometry;
