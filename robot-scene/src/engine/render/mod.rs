//! Point cloud material and its WGSL shader binding.
//!
//! Points are drawn as camera-facing quads with perspective size attenuation,
//! blended over a transparent clear colour.

/// Unlit, alpha-blended point material expanding quads in clip space.
pub mod point_cloud_material;

pub use point_cloud_material::PointCloudMaterial;
