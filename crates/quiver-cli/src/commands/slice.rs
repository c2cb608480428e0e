use super::parse_tags;
use crate::cli::SliceArgs;
use crate::error::{CliError, Result};
use quiver::ops;
use quiver::{Container, Tag};
use std::io::{self, BufWriter, Read};
use tracing::info;

pub fn run(args: SliceArgs) -> Result<()> {
    let tags = if args.tags.is_empty() {
        read_tags_from_stdin()?
    } else {
        parse_tags(&args.tags)?
    };
    if tags.is_empty() {
        return Err(CliError::Argument(
            "no tags provided; pass tags as arguments or via stdin".to_string(),
        ));
    }

    match args.output {
        Some(output) => {
            ops::slice_to_file(&args.quiver_file, &tags, &output)?;
            info!("Sliced {} tags into {}", tags.len(), output.display());
        }
        None => {
            let container = Container::read_from_path(&args.quiver_file)?;
            let sliced = ops::slice(&container, &tags)?;
            let stdout = io::stdout().lock();
            let mut writer = BufWriter::new(stdout);
            sliced.write_to(&mut writer)?;
        }
    }
    Ok(())
}

fn read_tags_from_stdin() -> Result<Vec<Tag>> {
    let mut raw = String::new();
    io::stdin().lock().read_to_string(&mut raw)?;
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    parse_tags(&tokens)
}
