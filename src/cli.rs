use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::calculator::constants::DEFAULT_STEP_PERCENT;

/// BlendSavings — find cheaper ingredient ratios within allowed variance bounds.
#[derive(Parser, Debug)]
#[command(name = "blend_savings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the blend inputs file (JSON, or CSV by extension).
    #[arg(short, long, default_value = "blend.json")]
    pub file: String,
}

/// Options shared by every command that runs a sweep.
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Spacing between candidate ratios, in percentage points.
    #[arg(long, default_value_t = DEFAULT_STEP_PERCENT)]
    pub step: f64,

    /// Only show the N best candidates.
    #[arg(long)]
    pub top: Option<usize>,

    /// Write all candidates to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the report to a JSON file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl Default for SweepArgs {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP_PERCENT,
            top: None,
            csv: None,
            json: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter the two ingredients interactively, then sweep.
    Interactive,

    /// Load the blend from --file and sweep.
    Sweep {
        #[command(flatten)]
        sweep: SweepArgs,
    },

    /// Sweep a blend given inline, e.g. --ratios 65,35 --costs 0.12,0.39 --variances 20,20.
    Quick {
        /// Current ratios of A and B (comma-separated).
        #[arg(long)]
        ratios: String,

        /// Cost per pound of A and B (comma-separated).
        #[arg(long)]
        costs: String,

        /// Max variance of A and B (comma-separated).
        #[arg(long)]
        variances: String,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}
