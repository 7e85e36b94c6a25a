use std::io::{Read, Seek};

use binrw::binread;
use serde_derive::Serialize;

use crate::{
    format::{
        error::{DecodeError, DecodeResult},
        ColorRgb, FixedString, Vector2, Vector3,
    },
    util::read::{verify_layout, FixedRecord, RecordReader},
};

pub const TEXTURE_NAME_LEN: usize = 20;

#[binread]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Vertex {
    pub position: Vector3,
    pub normal: Vector3,
    pub uv: Vector2,
    pub bone_indices: [u16; 2],
    /// Influence of `bone_indices[0]`, 0-100.
    pub bone_weight: u8,
    pub edge_flag: u8,
}

impl FixedRecord for Vertex {
    const NAME: &'static str = "vertex";
    const WIRE_SIZE: u64 = 38;
}

#[binread]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Material {
    pub diffuse: ColorRgb,
    pub alpha: f32,
    pub specularity: f32,
    pub specular: ColorRgb,
    pub ambient: ColorRgb,
    pub toon_index: u8,
    pub edge_flag: u8,
    /// Number of indices drawn with this material.
    pub vertex_count: u32,
    pub texture_name: FixedString<TEXTURE_NAME_LEN>,
}

impl FixedRecord for Material {
    const NAME: &'static str = "material";
    const WIRE_SIZE: u64 = 70;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub materials: Vec<Material>,
}

impl Geometry {
    pub fn read<R: Read + Seek>(reader: &mut RecordReader<R>) -> DecodeResult<Self> {
        verify_layout::<Vertex>()?;
        verify_layout::<Material>()?;

        let vertex_count = read_count(reader, "vertex")?;
        log::debug!("PMD vertices: {vertex_count}");
        let vertices = reader.read_records::<Vertex>(vertex_count)?;

        let index_count = read_count(reader, "index")?;
        log::debug!("PMD indices: {index_count}");
        let indices = reader.read_records::<u16>(index_count)?;
        validate_indices(&indices, vertices.len())?;

        let material_count = read_count(reader, "material")?;
        log::debug!("PMD materials: {material_count}");
        let materials = reader.read_records::<Material>(material_count)?;
        validate_materials(&materials, indices.len())?;

        Ok(Self { vertices, indices, materials })
    }
}

/// Table lengths in the geometry section are signed 32-bit.
fn read_count<R: Read + Seek>(
    reader: &mut RecordReader<R>,
    what: &'static str,
) -> DecodeResult<usize> {
    let count: i32 = reader.read_record()?;
    usize::try_from(count).map_err(|_| DecodeError::InvalidCount { what, count: count.into() })
}

pub fn validate_indices(indices: &[u16], vertex_count: usize) -> DecodeResult<()> {
    match indices.iter().position(|&i| i as usize >= vertex_count) {
        Some(position) => Err(DecodeError::IndexOutOfRange {
            position,
            index: indices[position],
            vertex_count,
        }),
        None => Ok(()),
    }
}

pub fn validate_materials(materials: &[Material], index_count: usize) -> DecodeResult<()> {
    let mut material_total = 0u64;
    for (material, m) in materials.iter().enumerate() {
        if m.vertex_count % 3 != 0 {
            return Err(DecodeError::MalformedMaterial { material, vertex_count: m.vertex_count });
        }
        material_total += m.vertex_count as u64;
    }
    if material_total != index_count as u64 {
        return Err(DecodeError::MaterialVertexCountMismatch { material_total, index_count });
    }
    Ok(())
}
