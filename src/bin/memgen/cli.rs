use std::path::PathBuf;

use clap::Parser;

/// Converts a raw ROM binary into a padded, line-oriented hex memory file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the raw binary image.
    pub input: PathBuf,

    /// Path of the memory file to write.
    pub output: PathBuf,

    /// Number of byte lines the target memory holds.
    pub capacity: usize,

    /// Print progress while converting.
    #[arg(short, long)]
    pub verbose: bool,
}
