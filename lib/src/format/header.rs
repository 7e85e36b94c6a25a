use std::io::{Read, Seek};

use serde_derive::Serialize;

use crate::{
    format::{
        error::{DecodeError, DecodeResult},
        FixedString,
    },
    util::read::RecordReader,
};

pub const PMD_MAGIC: [u8; 3] = *b"Pmd";
pub const PMD_VERSION: f32 = 1.0;

pub const MODEL_NAME_LEN: usize = 20;
pub const MODEL_COMMENT_LEN: usize = 256;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Header {
    pub version: f32,
    pub name: FixedString<MODEL_NAME_LEN>,
    pub comment: FixedString<MODEL_COMMENT_LEN>,
}

impl Header {
    pub fn read<R: Read + Seek>(reader: &mut RecordReader<R>) -> DecodeResult<Self> {
        let signature = reader.read_bytes(PMD_MAGIC.len(), "signature")?;
        if signature != PMD_MAGIC {
            let mut found = [0u8; 3];
            found.copy_from_slice(&signature);
            return Err(DecodeError::FormatMismatch { found });
        }
        let version: f32 = reader.read_record()?;
        if version != PMD_VERSION {
            return Err(DecodeError::UnsupportedVersion { found: version });
        }

        let name: FixedString<MODEL_NAME_LEN> = reader.read_record()?;
        let comment: FixedString<MODEL_COMMENT_LEN> = reader.read_record()?;
        log::debug!("PMD name: {:?}", name);
        log::debug!("PMD comment: {:?}", comment);
        Ok(Self { version, name, comment })
    }
}
