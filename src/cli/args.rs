//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use clap_complete::Shell;

/// Command-line arithmetic calculator
#[derive(Parser, Debug)]
#[command(name = "rscalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to perform: add, subtract, multiply, divide, sqrt, power
    pub operation: Option<String>,

    /// Operands for the operation (sqrt takes one, all others take two)
    #[arg(allow_negative_numbers = true)]
    pub operands: Vec<String>,

    /// Enable debug output (-d, -dd, -ddd for more verbosity)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
