use std::{
    io::{Cursor, Read, Seek},
    path::Path,
};

use serde_derive::Serialize;

use crate::{
    format::{
        bone::{Bone, BoneGraph},
        error::DecodeResult,
        geometry::{Geometry, Material, Vertex},
        header::{Header, MODEL_COMMENT_LEN, MODEL_NAME_LEN},
        ik::{read_iks, Ik},
        morph::{read_morphs, Morph},
        names::BoneNameTable,
        FixedString,
    },
    util::{file::map_file, read::RecordReader},
};

/// A fully decoded PMD model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PmdModel {
    pub version: f32,
    pub name: FixedString<MODEL_NAME_LEN>,
    pub comment: FixedString<MODEL_COMMENT_LEN>,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub materials: Vec<Material>,
    /// Usable bones; terminal markers are excluded.
    pub bones: Vec<Bone>,
    /// Position in `bones` for each bone of the file's bone table.
    pub bone_remap: Vec<Option<usize>>,
    /// Canonical names of the name table no bone resolved to, in table order.
    pub missing_bones: Vec<&'static str>,
    pub iks: Vec<Ik>,
    pub morphs: Vec<Morph>,
}

impl PmdModel {
    /// Resolves a file bone index (as used by parent, tail and IK indices).
    pub fn bone_by_source_index(&self, index: u16) -> Option<&Bone> {
        let position = (*self.bone_remap.get(index as usize)?)?;
        self.bones.get(position)
    }

    /// Number of bone records in the file, terminal markers included.
    #[inline]
    pub fn source_bone_count(&self) -> usize { self.bone_remap.len() }
}

/// Decodes PMD files, resolving bone names against a [`BoneNameTable`].
#[derive(Copy, Clone, Debug)]
pub struct PmdReader<'a> {
    names: &'a BoneNameTable,
}

impl Default for PmdReader<'static> {
    fn default() -> Self { Self::new() }
}

impl PmdReader<'static> {
    pub fn new() -> Self { Self { names: BoneNameTable::standard() } }
}

impl<'a> PmdReader<'a> {
    pub fn with_names(names: &'a BoneNameTable) -> Self { Self { names } }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> DecodeResult<PmdModel> {
        let mmap = map_file(path)?;
        self.read(Cursor::new(&*mmap))
    }

    pub fn read<R: Read + Seek>(&self, reader: R) -> DecodeResult<PmdModel> {
        let mut reader = RecordReader::new(reader)?;
        let header = Header::read(&mut reader)?;
        let geometry = Geometry::read(&mut reader)?;
        let graph = BoneGraph::read(&mut reader, self.names)?;
        let iks = read_iks(&mut reader)?;
        let morphs = read_morphs(&mut reader)?;

        let remain = reader.remaining();
        if remain > 0 {
            log::debug!("Remaining PMD data: {remain:#X}");
        }
        log::debug!("PMD load OK");

        Ok(PmdModel {
            version: header.version,
            name: header.name,
            comment: header.comment,
            vertices: geometry.vertices,
            indices: geometry.indices,
            materials: geometry.materials,
            bones: graph.bones,
            bone_remap: graph.remap,
            missing_bones: graph.missing,
            iks,
            morphs,
        })
    }
}

/// Loads a PMD file using the standard bone name table.
pub fn load_file<P: AsRef<Path>>(path: P) -> DecodeResult<PmdModel> {
    PmdReader::new().load_file(path)
}
