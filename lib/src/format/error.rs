use std::{io, path::PathBuf};

use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot read '{}'", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed at offset {offset:#X}")]
    Stream {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("truncated {what} at offset {offset:#X}")]
    Truncated { what: &'static str, offset: u64 },

    #[error("bad signature {found:02X?}, expected \"Pmd\"")]
    FormatMismatch { found: [u8; 3] },

    #[error("unsupported version {found}")]
    UnsupportedVersion { found: f32 },

    #[error("invalid {what} count {count}")]
    InvalidCount { what: &'static str, count: i64 },

    #[error("index {index} at position {position} out of range for {vertex_count} vertices")]
    IndexOutOfRange { position: usize, index: u16, vertex_count: usize },

    #[error("material {material} has vertex count {vertex_count}, not a multiple of 3")]
    MalformedMaterial { material: usize, vertex_count: u32 },

    #[error("materials cover {material_total} vertices but there are {index_count} indices")]
    MaterialVertexCountMismatch { material_total: u64, index_count: usize },

    #[error("{record} record decodes {actual} bytes, expected {expected}")]
    InternalLayoutError { record: &'static str, expected: u64, actual: u64 },
}

impl DecodeError {
    /// Maps a binrw failure for `what` read at `offset`.
    pub(crate) fn from_binrw(err: binrw::Error, what: &'static str, offset: u64) -> Self {
        if err.is_eof() {
            return Self::Truncated { what, offset };
        }
        match err {
            binrw::Error::Io(source) => Self::Stream { offset, source },
            other => Self::Stream {
                offset,
                source: io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
            },
        }
    }
}
