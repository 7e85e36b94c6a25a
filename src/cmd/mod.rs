pub mod bones;
pub mod dump;
pub mod info;

use std::path::Path;

use anyhow::{Context, Result};
use argh::FromArgs;
use pmdlib::PmdModel;

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum SubCommand {
    Bones(bones::Args),
    Dump(dump::Args),
    Info(info::Args),
}

fn load(path: &Path) -> Result<PmdModel> {
    log::debug!("Loading {}", path.display());
    pmdlib::load_file(path)
        .with_context(|| format!("Failed to load PMD file '{}'", path.display()))
}
