use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate a filtered directory tree into a single snapshot document"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./.codesnapshot.json)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write the snapshot here instead of the configured output_file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the files that would be snapshotted, one per line
    #[arg(long)]
    pub list: bool,
}
