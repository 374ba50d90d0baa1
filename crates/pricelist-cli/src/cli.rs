//! CLI argument definitions for the price-list tool.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pricelist_report::DEFAULT_PAGE_SIZE;

use pricelist_cli::session::DEFAULT_EXIT_WORD;

#[derive(Parser)]
#[command(
    name = "pricelist",
    version,
    about = "Search supplier price lists and export them as an HTML report",
    long_about = "Load every CSV price list in a directory, normalize their columns to\n\
                  name, price and weight, search them interactively ranked by unit price,\n\
                  and export a paginated, searchable HTML report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the catalog, search it interactively, then export the report.
    Search(SearchArgs),

    /// Load the catalog and write the HTML report.
    Export(CatalogArgs),

    /// Print the header alias table.
    Aliases(AliasArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Directory containing the CSV price lists.
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Report path (default: <SOURCE_DIR>/output.html).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rows per report page.
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub page_size: usize,

    /// TOML alias table replacing the built-in one.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,

    /// Report title.
    #[arg(long = "title", value_name = "TEXT", default_value = "Price list")]
    pub title: String,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Word that ends the session (compared case-insensitively).
    #[arg(long = "exit-word", value_name = "WORD", default_value = DEFAULT_EXIT_WORD)]
    pub exit_word: String,
}

#[derive(Args)]
pub struct AliasArgs {
    /// TOML alias table to print instead of the built-in one.
    #[arg(long = "aliases", value_name = "PATH")]
    pub aliases: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
