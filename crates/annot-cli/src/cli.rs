//! CLI argument definitions for the annotation converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "annot-convert",
    version,
    about = "Convert static-analyzer taint annotations into symbolic-execution annotations",
    long_about = "Convert JSON annotation files keyed by `display(mangled)` function names\n\
                  into a single annotation document keyed by mangled name.\n\n\
                  With --taint, source taint tags are rewritten into the engine's\n\
                  TaintOutput / TaintPropagation / TaintSink vocabulary."
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

    /// Log output format (pretty for human, json for machine parsing).
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
    /// Merge source annotation files into one engine annotation file.
    Convert(ConvertArgs),

    /// Check an engine annotation file for problems the engine rejects.
    Check(CheckArgs),

    /// List the taint tag rewrite rules.
    Tags,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Source annotation files, merged in order (later files win).
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Target file for the produced annotations.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Rewrite taint tags into the engine vocabulary.
    ///
    /// Needed when the annotations are used for taint analysis. Without it
    /// annotation arrays are copied unchanged and only names are split.
    #[arg(long = "taint")]
    pub taint: bool,

    /// Convert and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Run the annotation checks on the merged result.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Engine annotation file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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
