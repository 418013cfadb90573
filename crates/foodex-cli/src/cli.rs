//! CLI argument definitions for the FoodEx2 validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Debug, Parser)]
#[command(
    name = "foodex",
    version,
    about = "FoodEx2 expression validator",
    long_about = "Validate FoodEx2 food-classification expressions against the MTX catalogue.\n\n\
                  Checks syntactic well-formedness, resolves every code, enforces the\n\
                  business rules and reports severity-tagged warnings plus the cleaned\n\
                  canonical form."
)]
pub struct Cli {
    /// Path to the catalogue directory (defaults to FOODEX_CATALOGUE_DIR
    /// or ./catalogue).
    #[arg(long, value_name = "DIR", global = true)]
    pub catalogue_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a single expression.
    Validate {
        /// The expression, e.g. A0B9Z#F28.A07JS$F01.A0F6E
        expression: String,

        /// Caller context (ict, dcf, internal, external).
        #[arg(long)]
        context: Option<String>,

        /// Write the machine-readable result to this path. Use '-' for stdout.
        #[arg(long, value_name = "PATH")]
        json: Option<String>,

        /// Treat HIGH warnings as non-blocking.
        #[arg(long)]
        allow_high: bool,
    },

    /// Validate expressions from a file, one per line.
    Batch {
        /// Input file with one expression per line; blank lines are skipped.
        #[arg(long, value_name = "PATH")]
        input: PathBuf,

        /// Write the machine-readable result list to this path. Use '-' for stdout.
        #[arg(long, value_name = "PATH")]
        json: Option<String>,

        /// Treat HIGH warnings as non-blocking.
        #[arg(long)]
        allow_high: bool,
    },

    /// Inspect the loaded catalogue.
    Catalogue {
        #[command(subcommand)]
        command: CatalogueCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogueCommand {
    /// Print term, hierarchy and reference-table counts.
    Summary,

    /// Show one term with its hierarchy path.
    Term {
        /// Five-character term code.
        code: String,

        /// Hierarchy to print the path for.
        #[arg(long, default_value = "report")]
        hierarchy: String,
    },

    /// Search terms by code or name substring.
    Search {
        query: String,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}
