use std::{
    fs::File,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use argh::FromArgs;

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// dumps a PMD file as JSON
#[argh(subcommand, name = "dump")]
pub struct Args {
    #[argh(positional)]
    /// input PMD
    input: PathBuf,
    #[argh(option, short = 'o')]
    /// output JSON (default: stdout)
    output: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<()> {
    let model = super::load(&args.input)?;
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?,
        )),
        None => Box::new(BufWriter::new(stdout().lock())),
    };
    serde_json::to_writer_pretty(&mut out, &model)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
