use std::{fs::File, path::Path};

use memmap2::{Mmap, MmapOptions};

use crate::format::error::{DecodeError, DecodeResult};

/// Opens a memory mapped file.
pub fn map_file<P: AsRef<Path>>(path: P) -> DecodeResult<Mmap> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DecodeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let map = unsafe { MmapOptions::new().map(&file) }.map_err(|source| {
        DecodeError::SourceUnavailable { path: path.to_path_buf(), source }
    })?;
    Ok(map)
}
