use std::io::{Read, Seek};

use binrw::binread;
use serde_derive::Serialize;

use crate::{
    format::error::DecodeResult,
    util::read::{verify_layout, FixedRecord, RecordReader},
};

#[binread]
#[derive(Clone, Debug)]
pub struct IkHeader {
    pub bone_index: u16,
    pub target_bone_index: u16,
    pub chain_length: u8,
    pub iterations: u16,
    pub weight: f32,
}

impl FixedRecord for IkHeader {
    const NAME: &'static str = "IK";
    const WIRE_SIZE: u64 = 11;
}

/// An IK chain. All indices refer to the file's bone table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ik {
    pub bone_index: u16,
    pub target_bone_index: u16,
    pub chain_length: u8,
    pub iterations: u16,
    /// Per-iteration rotation limit.
    pub weight: f32,
    pub child_bone_indices: Vec<u16>,
}

pub fn read_iks<R: Read + Seek>(reader: &mut RecordReader<R>) -> DecodeResult<Vec<Ik>> {
    verify_layout::<IkHeader>()?;
    let count: u16 = reader.read_record()?;
    log::debug!("PMD IKs: {count}");

    let mut iks = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let header: IkHeader = reader.read_record()?;
        let child_bone_indices = reader.read_records::<u16>(header.chain_length as usize)?;
        iks.push(Ik {
            bone_index: header.bone_index,
            target_bone_index: header.target_bone_index,
            chain_length: header.chain_length,
            iterations: header.iterations,
            weight: header.weight,
            child_bone_indices,
        });
    }
    Ok(iks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ik_header_layout() { verify_layout::<IkHeader>().unwrap(); }
}
