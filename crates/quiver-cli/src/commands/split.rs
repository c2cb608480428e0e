use crate::cli::SplitArgs;
use crate::error::Result;
use quiver::ops;
use tracing::info;

pub fn run(args: SplitArgs) -> Result<()> {
    let written = ops::split_to_files(&args.quiver_file, args.ntags, &args.prefix, &args.outdir)?;
    for path in &written {
        info!("Wrote chunk {}", path.display());
    }
    println!(
        "✅ {} chunk files written to {} with prefix '{}'",
        written.len(),
        args.outdir.display(),
        args.prefix
    );
    Ok(())
}
