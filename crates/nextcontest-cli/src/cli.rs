//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use nextcontest_core::Platform;

/// nextcontest - upcoming programming contests at a glance
#[derive(Debug, Parser)]
#[command(name = "nextcontest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Output options ---
    /// Directory the schedule artifacts are written into
    #[arg(long, default_value = ".", env = "NEXTCONTEST_OUT_DIR")]
    pub out_dir: PathBuf,

    /// README whose "Last updated:" line is refreshed after a run
    #[arg(long)]
    pub readme: Option<PathBuf>,

    // --- Fetch options ---
    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Only fetch the given platform (can be repeated; default: all)
    #[arg(long, action = clap::ArgAction::Append)]
    pub platform: Vec<Platform>,
}

impl Cli {
    /// Returns the platforms selected for this run.
    ///
    /// No `--platform` flag means every supported platform. Repeating a
    /// platform is harmless; selection is membership, not multiplicity.
    pub fn platforms(&self) -> Vec<Platform> {
        if self.platform.is_empty() {
            Platform::ALL.to_vec()
        } else {
            self.platform.clone()
        }
    }
}
