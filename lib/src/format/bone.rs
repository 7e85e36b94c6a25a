use std::{
    collections::BTreeSet,
    io::{Read, Seek},
};

use binrw::binread;
use serde_derive::Serialize;

use crate::{
    format::{error::DecodeResult, names::BoneNameTable, FixedString, Vector3},
    util::read::{verify_layout, FixedRecord, RecordReader},
};

pub const BONE_NAME_LEN: usize = 20;
/// Tail index of a terminal marker bone.
pub const TERMINAL_TAIL_INDEX: u16 = 0xFFFF;
/// Parent index of a root bone.
pub const NO_PARENT: u16 = 0xFFFF;
/// IK parent index of a bone no IK bone governs.
pub const NO_IK_PARENT: u16 = 0;
/// "ひざ" (knee) in CP932. Bones containing it are bent one way by IK solvers.
pub const KNEE_MARKER: &[u8] = b"\x82\xD0\x82\xB4";

#[binread]
#[derive(Clone, Debug)]
pub struct BoneRecord {
    pub name: FixedString<BONE_NAME_LEN>,
    pub parent_index: u16,
    pub tail_index: u16,
    pub kind: u8,
    pub ik_parent_index: u16,
    pub position: Vector3,
}

impl FixedRecord for BoneRecord {
    const NAME: &'static str = "bone";
    const WIRE_SIZE: u64 = 39;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bone {
    /// Position of this bone in the file's bone table.
    pub source_index: u16,
    pub parent_index: u16,
    pub tail_index: u16,
    pub kind: u8,
    pub ik_parent_index: u16,
    pub position: [f32; 4],
    pub name: FixedString<BONE_NAME_LEN>,
    pub canonical_name: Option<&'static str>,
    pub is_special_chain: bool,
}

impl Bone {
    #[inline]
    pub fn parent(&self) -> Option<u16> {
        (self.parent_index != NO_PARENT).then_some(self.parent_index)
    }

    #[inline]
    pub fn ik_parent(&self) -> Option<u16> {
        (self.ik_parent_index != NO_IK_PARENT).then_some(self.ik_parent_index)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoneGraph {
    pub bones: Vec<Bone>,
    /// Output position for each source bone; `None` for terminal markers.
    pub remap: Vec<Option<usize>>,
    /// Canonical names from the table no bone resolved to, in table order.
    pub missing: Vec<&'static str>,
}

impl BoneGraph {
    pub fn read<R: Read + Seek>(
        reader: &mut RecordReader<R>,
        names: &BoneNameTable,
    ) -> DecodeResult<Self> {
        verify_layout::<BoneRecord>()?;
        let count: u16 = reader.read_record()?;
        log::debug!("PMD bones: {count}");
        let records = reader.read_records::<BoneRecord>(count as usize)?;
        Ok(Self::resolve(records, names))
    }

    /// Builds the usable bone set from decoded records.
    pub fn resolve(records: Vec<BoneRecord>, names: &BoneNameTable) -> Self {
        let mut unresolved: BTreeSet<&'static str> = names.canonical_names().collect();
        let mut bones = Vec::with_capacity(records.len());
        let mut remap = Vec::with_capacity(records.len());

        for (i, record) in records.into_iter().enumerate() {
            // Counts are read as u16
            let source_index = i as u16;
            if record.tail_index == TERMINAL_TAIL_INDEX {
                log::debug!("Bone [{source_index}] {:?} is a terminal marker, skipping", record.name);
                remap.push(None);
                continue;
            }

            let is_special_chain = record.name.contains(KNEE_MARKER);
            if is_special_chain {
                log::debug!("Bone [{source_index}] {:?} is a knee", record.name);
            }
            let canonical_name = names.resolve(record.name.bytes());
            if let Some(canonical) = canonical_name {
                unresolved.remove(canonical);
            }

            remap.push(Some(bones.len()));
            bones.push(Bone {
                source_index,
                parent_index: record.parent_index,
                tail_index: record.tail_index,
                kind: record.kind,
                ik_parent_index: record.ik_parent_index,
                position: record.position.to_point(),
                name: record.name,
                canonical_name,
                is_special_chain,
            });
        }

        let missing: Vec<&'static str> =
            names.canonical_names().filter(|name| unresolved.contains(name)).collect();
        for name in &missing {
            log::info!("Standard bone [{name}] not found");
        }
        Self { bones, remap, missing }
    }
}
