use std::io::{Read, Seek};

use binrw::binread;
use serde_derive::Serialize;

use crate::{
    format::{error::DecodeResult, FixedString, Vector3},
    util::read::{verify_layout, FixedRecord, RecordReader},
};

pub const MORPH_NAME_LEN: usize = 20;

#[binread]
#[derive(Clone, Debug)]
pub struct MorphHeader {
    pub name: FixedString<MORPH_NAME_LEN>,
    pub vertex_count: u32,
    pub kind: u8,
}

impl FixedRecord for MorphHeader {
    const NAME: &'static str = "morph";
    const WIRE_SIZE: u64 = 25;
}

#[binread]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MorphVertex {
    /// Vertex index; into the base mesh for the base morph, into the base morph otherwise.
    pub index: u32,
    pub offset: Vector3,
}

impl FixedRecord for MorphVertex {
    const NAME: &'static str = "morph vertex";
    const WIRE_SIZE: u64 = 16;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Morph {
    pub name: FixedString<MORPH_NAME_LEN>,
    /// 0 base, 1 eyebrow, 2 eye, 3 lip, 4 other.
    pub kind: u8,
    pub vertices: Vec<MorphVertex>,
}

pub fn read_morphs<R: Read + Seek>(reader: &mut RecordReader<R>) -> DecodeResult<Vec<Morph>> {
    verify_layout::<MorphHeader>()?;
    verify_layout::<MorphVertex>()?;
    let count: u16 = reader.read_record()?;
    log::debug!("PMD morphs: {count}");

    let mut morphs = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let header: MorphHeader = reader.read_record()?;
        let vertices = reader.read_records::<MorphVertex>(header.vertex_count as usize)?;
        morphs.push(Morph { name: header.name, kind: header.kind, vertices });
    }
    Ok(morphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morph_record_layouts() {
        verify_layout::<MorphHeader>().unwrap();
        verify_layout::<MorphVertex>().unwrap();
    }
}
