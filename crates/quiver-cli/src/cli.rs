use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Quiver Maintainers",
    version,
    about = "qv - tag-oriented tooling for Quiver container files: bundle, list, rename, slice, split, and extract PDB-like structure records.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle one or more PDB files into a container stream on stdout.
    FromPdb(FromPdbArgs),
    /// Materialize every entry of a container as an individual PDB file.
    Extract(ExtractArgs),
    /// List the tags of a container, one per line, in stream order.
    Ls(LsArgs),
    /// Rewrite a container's tags positionally, replacing the file atomically.
    Rename(RenameArgs),
    /// Produce a container holding only the requested tags.
    Slice(SliceArgs),
    /// Split a container into fixed-size chunk files.
    Split(SplitArgs),
    /// Extract the score side-channel into a tabular .sc report.
    Scorefile(ScorefileArgs),
}

#[derive(Args, Debug)]
pub struct FromPdbArgs {
    /// The PDB files to bundle; each file's base name becomes its tag.
    #[arg(required = true, value_name = "PDB")]
    pub pdb_files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the container file.
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,

    /// Directory to write the PDB files into (created if absent).
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,
}

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path to the container file.
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Path to the container file (rewritten in place).
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,

    /// Replacement tags, one per entry, in container order.
    #[arg(required = true, value_name = "TAG")]
    pub new_tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Path to the container file.
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,

    /// Tags to keep; read whitespace-separated from stdin when omitted.
    #[arg(value_name = "TAG")]
    pub tags: Vec<String>,

    /// Write the sliced container here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Path to the container file.
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,

    /// Number of entries per chunk.
    #[arg(short, long, value_name = "NUM")]
    pub ntags: usize,

    /// Stem of the chunk file names ("{prefix}_{n}.qv").
    #[arg(short, long, value_name = "NAME", default_value = "split")]
    pub prefix: String,

    /// Directory to write the chunk files into (created if absent).
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,
}

#[derive(Args, Debug)]
pub struct ScorefileArgs {
    /// Path to the container file; the report lands next to it as <stem>.sc.
    #[arg(value_name = "QUIVER")]
    pub quiver_file: PathBuf,
}
