use super::parse_tags;
use crate::cli::RenameArgs;
use crate::error::Result;
use quiver::ops;

pub fn run(args: RenameArgs) -> Result<()> {
    let new_tags = parse_tags(&args.new_tags)?;
    ops::rename_tags_in_file(&args.quiver_file, new_tags)?;
    println!(
        "✅ Successfully renamed tags in {}",
        args.quiver_file.display()
    );
    Ok(())
}
