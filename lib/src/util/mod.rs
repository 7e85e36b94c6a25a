pub mod file;
pub mod read;
