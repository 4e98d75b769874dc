//! CLI argument definitions using clap derive API

use clap::{Args, Parser, ValueEnum};
use ms_core::SortMode;
use std::path::PathBuf;

/// migseq - scaffold the next sequentially numbered migration directory
#[derive(Parser, Debug)]
#[command(name = "migseq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the migrations directory
    pub migration_dir: Option<PathBuf>,

    /// Options controlling how the new migration is derived and created
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Load settings from a YAML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for scaffolding a migration
#[derive(Args, Debug, Clone, Default)]
pub struct ScaffoldArgs {
    /// Append a description to the directory name (<NNN>-<description>)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Print the next number without creating the directory
    #[arg(long)]
    pub dry_run: bool,

    /// Minimum number of digits in the migration number
    #[arg(long)]
    pub width: Option<usize>,

    /// How existing entries are ordered before picking the last one
    #[arg(long, value_enum)]
    pub ordering: Option<OrderingArg>,

    /// Print the number before creating the directory, even if creation fails
    #[arg(long)]
    pub legacy_report_order: bool,
}

/// Entry ordering
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingArg {
    /// Locale-aware string order
    Lexical,
    /// Parsed ordinal value
    Numeric,
}

impl From<OrderingArg> for SortMode {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Lexical => SortMode::Lexical,
            OrderingArg::Numeric => SortMode::Numeric,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
