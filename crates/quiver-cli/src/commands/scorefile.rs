use crate::cli::ScorefileArgs;
use crate::error::Result;
use quiver::scorefile;

pub fn run(args: ScorefileArgs) -> Result<()> {
    let dest = scorefile::extract_score_file(&args.quiver_file)?;
    println!("✅ Scorefile written to: {}", dest.display());
    Ok(())
}
