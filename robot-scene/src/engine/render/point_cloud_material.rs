use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};
use constants::path::POINT_CLOUD_SHADER_PATH;
use constants::render_settings::{POINT_COLOUR, POINT_OPACITY, POINT_SIZE};

/// Flat-colour point material.
///
/// `params.x` is the world-space point size, `params.y` the opacity.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PointCloudMaterial {
    #[uniform(0)]
    pub colour: LinearRgba,

    #[uniform(1)]
    pub params: Vec4,
}

impl PointCloudMaterial {
    pub fn new(colour: Color, size: f32, opacity: f32) -> Self {
        Self {
            colour: colour.to_linear(),
            params: Vec4::new(size, opacity, 0.0, 0.0),
        }
    }

    pub fn size(&self) -> f32 {
        self.params.x
    }

    pub fn opacity(&self) -> f32 {
        self.params.y
    }
}

impl Default for PointCloudMaterial {
    fn default() -> Self {
        Self::new(POINT_COLOUR, POINT_SIZE, POINT_OPACITY)
    }
}

impl Material for PointCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        POINT_CLOUD_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        // Quads face the camera; winding flips with the view.
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_uses_page_ink() {
        let material = PointCloudMaterial::default();

        assert_relative_eq!(material.size(), 0.008);
        assert_relative_eq!(material.opacity(), 0.9);
        assert_eq!(material.colour, POINT_COLOUR.to_linear());
        assert_eq!(material.alpha_mode(), AlphaMode::Blend);
    }

    #[test]
    fn shader_rounds_the_point_quads() {
        let shader = include_str!("../../../assets/shaders/point_cloud.wgsl");

        assert!(shader.contains("dot(in.corner, in.corner) > 1.0"));
        assert!(shader.contains("discard"));
    }
}
