use std::{
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Result;
use argh::FromArgs;
use pmdlib::PmdModel;

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// prints a summary of a PMD file
#[argh(subcommand, name = "info")]
pub struct Args {
    #[argh(positional)]
    /// input PMD
    input: PathBuf,
}

fn write_summary<W: Write>(out: &mut W, model: &PmdModel) -> Result<()> {
    writeln!(out, "Name: {}", model.name.text())?;
    writeln!(out, "Comment: {}", model.comment.text())?;
    writeln!(out, "Version: {:.1}", model.version)?;
    writeln!(out, "Vertices: {}", model.vertices.len())?;
    writeln!(out, "Triangles: {}", model.indices.len() / 3)?;
    writeln!(out, "Materials: {}", model.materials.len())?;
    for (i, material) in model.materials.iter().enumerate() {
        let texture = material.texture_name.text();
        if texture.is_empty() {
            writeln!(out, "- [{i}] {} vertices", material.vertex_count)?;
        } else {
            writeln!(out, "- [{i}] {} vertices, texture '{texture}'", material.vertex_count)?;
        }
    }
    let terminal = model.source_bone_count() - model.bones.len();
    writeln!(out, "Bones: {} ({terminal} terminal)", model.bones.len())?;
    let special = model.bones.iter().filter(|b| b.is_special_chain).count();
    let named = model.bones.iter().filter(|b| b.canonical_name.is_some()).count();
    writeln!(out, "- {named} with standard names, {special} knees")?;
    if !model.missing_bones.is_empty() {
        writeln!(
            out,
            "- {} standard bones unmatched: {}",
            model.missing_bones.len(),
            model.missing_bones.join(", ")
        )?;
    }
    writeln!(out, "IK chains: {}", model.iks.len())?;
    writeln!(out, "Morphs: {}", model.morphs.len())?;
    for morph in &model.morphs {
        writeln!(out, "- {} ({} vertices)", morph.name.text(), morph.vertices.len())?;
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let model = super::load(&args.input)?;
    let mut out = BufWriter::new(stdout().lock());
    write_summary(&mut out, &model)?;
    out.flush()?;
    Ok(())
}
