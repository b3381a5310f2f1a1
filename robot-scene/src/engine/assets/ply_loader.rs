use std::io::Cursor;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use super::error::{PlyLoadError, PlyResult};
use super::point_cloud_geometry::PointCloudGeometry;

const COORDINATES: [&str; 3] = ["x", "y", "z"];

/// Loads `.ply` files into [`PointCloudGeometry`] on the asset task pool.
#[derive(Default)]
pub struct PlyPointCloudLoader;

impl AssetLoader for PlyPointCloudLoader {
    type Asset = PointCloudGeometry;
    type Settings = ();
    type Error = PlyLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let geometry = parse_point_cloud(&bytes)?;
        debug!(
            "Decoded {} vertices from {}",
            geometry.vertex_count(),
            load_context.path().display()
        );
        Ok(geometry)
    }

    fn extensions(&self) -> &[&str] {
        &["ply"]
    }
}

/// Decode an ASCII or binary PLY buffer.
///
/// The `vertex` element must declare `x`, `y` and `z`. A `face` element, when
/// present, is fan-triangulated and drives normal computation.
pub fn parse_point_cloud(bytes: &[u8]) -> PlyResult<PointCloudGeometry> {
    let mut reader = Cursor::new(bytes);
    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(&mut reader)
        .map_err(|e| PlyLoadError::Header(e.to_string()))?;

    let vertex_def = header
        .elements
        .get("vertex")
        .ok_or(PlyLoadError::MissingVertexElement)?;
    for axis in COORDINATES {
        if !vertex_def.properties.contains_key(axis) {
            return Err(PlyLoadError::MissingProperty(axis));
        }
    }

    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| PlyLoadError::Payload(e.to_string()))?;

    let positions = match payload.get("vertex") {
        Some(vertices) => vertices
            .iter()
            .enumerate()
            .map(|(index, element)| read_position(index, element))
            .collect::<PlyResult<Vec<_>>>()?,
        None => Vec::new(),
    };

    let faces = match payload.get("face") {
        Some(elements) => Some(triangulate_faces(elements, positions.len())?),
        None => None,
    };

    Ok(PointCloudGeometry::from_positions(
        positions,
        faces.as_deref(),
    ))
}

fn read_position(index: usize, element: &DefaultElement) -> PlyResult<Vec3> {
    let mut coords = [0.0; 3];
    for (slot, axis) in coords.iter_mut().zip(COORDINATES) {
        *slot = element
            .get(axis)
            .and_then(scalar_as_f32)
            .ok_or(PlyLoadError::InvalidProperty {
                index,
                property: axis,
            })?;
    }
    Ok(Vec3::from_array(coords))
}

fn scalar_as_f32(property: &Property) -> Option<f32> {
    match *property {
        Property::Float(v) => Some(v),
        Property::Double(v) => Some(v as f32),
        Property::Char(v) => Some(f32::from(v)),
        Property::UChar(v) => Some(f32::from(v)),
        Property::Short(v) => Some(f32::from(v)),
        Property::UShort(v) => Some(f32::from(v)),
        Property::Int(v) => Some(v as f32),
        Property::UInt(v) => Some(v as f32),
        _ => None,
    }
}

fn index_list(element: &DefaultElement) -> Vec<i64> {
    for key in ["vertex_indices", "vertex_index"] {
        if let Some(property) = element.get(key) {
            return match property {
                Property::ListChar(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUChar(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListShort(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUShort(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListInt(v) => v.iter().map(|&i| i64::from(i)).collect(),
                Property::ListUInt(v) => v.iter().map(|&i| i64::from(i)).collect(),
                _ => continue,
            };
        }
    }
    Vec::new()
}

fn triangulate_faces(elements: &[DefaultElement], vertex_count: usize) -> PlyResult<Vec<[u32; 3]>> {
    let mut triangles = Vec::with_capacity(elements.len());

    for (face, element) in elements.iter().enumerate() {
        let indices = index_list(element);
        let mut checked = Vec::with_capacity(indices.len());
        for index in indices {
            match u32::try_from(index) {
                Ok(vertex) if (vertex as usize) < vertex_count => checked.push(vertex),
                _ => {
                    return Err(PlyLoadError::FaceIndexOutOfRange {
                        face,
                        vertex: index.max(0) as usize,
                        count: vertex_count,
                    });
                }
            }
        }
        // Fan triangulation; faces with fewer than three corners are skipped.
        for i in 1..checked.len().saturating_sub(1) {
            triangles.push([checked[0], checked[i], checked[i + 1]]);
        }
    }

    Ok(triangles)
}
