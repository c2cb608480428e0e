use crate::cli::FromPdbArgs;
use crate::error::Result;
use quiver::bridge;
use std::io::{self, BufWriter};
use tracing::info;

pub fn run(args: FromPdbArgs) -> Result<()> {
    let container = bridge::from_files(&args.pdb_files)?;
    info!("Bundled {} PDB files", container.len());

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);
    container.write_to(&mut writer)?;
    Ok(())
}
