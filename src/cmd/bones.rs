use std::{
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Result;
use argh::FromArgs;
use pmdlib::{format::bone::Bone, BoneNameTable, PmdModel};

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// lists the bone table of a PMD file
#[argh(subcommand, name = "bones")]
pub struct Args {
    #[argh(positional)]
    /// input PMD
    input: PathBuf,
    #[argh(switch, short = 'i')]
    /// also list IK chains
    iks: bool,
}

fn bone_label(model: &PmdModel, index: u16) -> String {
    match model.bone_by_source_index(index) {
        Some(bone) => match bone.canonical_name {
            Some(name) => format!("{index} ({name})"),
            None => format!("{index} ({})", bone.name.text()),
        },
        None => index.to_string(),
    }
}

fn canonical_label(bone: &Bone, names: &BoneNameTable) -> String {
    match names.entry(bone.name.bytes()) {
        Some(entry) => format!("{} ({})", entry.canonical, entry.unicode),
        None => bone.canonical_name.unwrap_or("?").to_string(),
    }
}

fn write_bones<W: Write>(out: &mut W, model: &PmdModel, iks: bool) -> Result<()> {
    let names = BoneNameTable::standard();
    for (source, slot) in model.bone_remap.iter().enumerate() {
        let Some((output, bone)) = slot.and_then(|i| Some((i, model.bones.get(i)?))) else {
            writeln!(out, "[{source}] terminal")?;
            continue;
        };
        let parent = match bone.parent() {
            Some(parent) => bone_label(model, parent),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "[{source}] -> {output} {} {:02X?} => {} parent {parent} tail {} kind {}{}",
            bone.name.text(),
            bone.name.bytes(),
            canonical_label(bone, names),
            bone.tail_index,
            bone.kind,
            if bone.is_special_chain { " knee" } else { "" },
        )?;
    }

    if iks {
        for (i, ik) in model.iks.iter().enumerate() {
            let chain: Vec<String> =
                ik.child_bone_indices.iter().map(|&c| bone_label(model, c)).collect();
            writeln!(
                out,
                "IK [{i}] {} -> {} iterations {} weight {} chain [{}]",
                bone_label(model, ik.bone_index),
                bone_label(model, ik.target_bone_index),
                ik.iterations,
                ik.weight,
                chain.join(", "),
            )?;
        }
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let model = super::load(&args.input)?;
    log::debug!("Listing {} bones", model.source_bone_count());
    let mut out = BufWriter::new(stdout().lock());
    write_bones(&mut out, &model, args.iks)?;
    out.flush()?;
    Ok(())
}
