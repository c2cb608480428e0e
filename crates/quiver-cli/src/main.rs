mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::debug;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::FromPdb(args) => commands::from_pdb::run(args),
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Ls(args) => commands::ls::run(args),
        Commands::Rename(args) => commands::rename::run(args),
        Commands::Slice(args) => commands::slice::run(args),
        Commands::Split(args) => commands::split::run(args),
        Commands::Scorefile(args) => commands::scorefile::run(args),
    }
}
