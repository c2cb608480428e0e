use crate::cli::ExtractArgs;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use quiver::bridge;
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} extracted | {msg}")
            .expect("valid progress template"),
    );
    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr_with_hz(10));

    let count = bridge::extract_to_files_with(&args.quiver_file, &args.outdir, |tag| {
        pb.set_message(tag.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    info!(
        "Extracted {} entries from {}",
        count,
        args.quiver_file.display()
    );
    println!(
        "✅ Extracted {} entries to {}",
        count,
        args.outdir.display()
    );
    Ok(())
}
