//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::OutputFormat;
use crate::domain::Fraction;

/// Stern-Brocot fractions, signature matrices, trees and series
#[derive(Parser, Debug)]
#[command(name = "sternbrocot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Explicit config file (overrides the global one)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a fraction as text, pair and normalized rational
    Fraction {
        /// Fraction written n/d
        fraction: Fraction,
    },

    /// Mediant of two fractions
    Mediant {
        a: Fraction,
        b: Fraction,
    },

    /// Map a signature over {L,R,I,0,1} to its matrix and fraction
    Signature {
        /// Path from the root, e.g. LRRL (omit for the root)
        signature: Option<String>,
    },

    /// Find the signature of a reduced positive fraction
    Locate {
        /// Fraction written n/d
        fraction: Fraction,
    },

    /// Expand and print the tree
    Tree {
        /// Number of mediant levels
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        depth: Option<i64>,
        /// Left boundary
        #[arg(long)]
        left: Option<Fraction>,
        /// Right boundary
        #[arg(long)]
        right: Option<Fraction>,
        /// Output layout
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the first fractions in level order
    Series {
        /// How many fractions
        #[arg(short = 'n', long, default_value_t = 15)]
        count: usize,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config template
    Template,
}
