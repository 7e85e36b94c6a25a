pub mod format;
pub mod util;

pub use format::{
    error::{DecodeError, DecodeResult},
    model::{load_file, PmdModel, PmdReader},
    names::BoneNameTable,
};
