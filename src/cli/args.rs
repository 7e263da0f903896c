//! Command line argument parsing for the doclex CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::document::DocumentSource;

/// doclex - Lexical statistics for documents
#[derive(Parser, Debug, Clone)]
#[command(name = "doclex")]
#[command(about = "Word counts, frequencies, POS tags, lemmas, stems and language of a document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DoclexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "DOCLEX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Language code to use instead of identifying it (e.g. eng, swe, deu)
    #[arg(short, long, value_name = "CODE", global = true)]
    pub language: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DoclexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the tokens of a document
    Tokens(InputArgs),

    /// Count the words of a document
    Count(CountArgs),

    /// Show word frequencies, most frequent first
    Frequency(FrequencyArgs),

    /// Identify the language of a document
    Language(InputArgs),

    /// Show the POS tag of every distinct token
    Pos(PosArgs),

    /// Lemmatize the tokens of a document
    Lemmas(LemmasArgs),

    /// Stem the tokens of a document
    Stems(InputArgs),

    /// Summarize all statistics of a document
    Report(ReportArgs),

    /// Print the extracted body of a document
    Show(InputArgs),
}

impl Command {
    /// The input shared by every command.
    pub fn input(&self) -> &InputArgs {
        match self {
            Command::Tokens(args)
            | Command::Language(args)
            | Command::Stems(args)
            | Command::Show(args) => args,
            Command::Count(args) => &args.input,
            Command::Frequency(args) => &args.input,
            Command::Pos(args) => &args.input,
            Command::Lemmas(args) => &args.input,
            Command::Report(args) => &args.input,
        }
    }
}

/// Document to analyze
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to a .doc* file, or the text itself
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Treat INPUT as literal text even if a file with that name exists
    #[arg(long)]
    pub text: bool,
}

impl InputArgs {
    /// Resolve the input into a document source.
    pub fn source(&self) -> DocumentSource {
        if self.text {
            DocumentSource::Text(self.input.clone())
        } else {
            DocumentSource::infer(&self.input)
        }
    }
}

/// Arguments for word counting
#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Count distinct words only
    #[arg(short, long)]
    pub unique: bool,
}

/// Arguments for word frequencies
#[derive(Args, Debug, Clone)]
pub struct FrequencyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show only the N most frequent words
    #[arg(short, long, value_name = "N")]
    pub top: Option<usize>,
}

/// Arguments for POS tagging
#[derive(Args, Debug, Clone)]
pub struct PosArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show tag descriptions instead of tag codes
    #[arg(long)]
    pub friendly: bool,

    /// Show the number of distinct tokens per tag
    #[arg(long, conflicts_with = "friendly")]
    pub counts: bool,
}

/// Arguments for lemmatization
#[derive(Args, Debug, Clone)]
pub struct LemmasArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show the number of distinct lemmas only
    #[arg(long)]
    pub count: bool,
}

/// Arguments for the summary report
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of most frequent words to include
    #[arg(short, long, value_name = "N", default_value = "10")]
    pub top: usize,

    /// Include POS tag counts and the lemma count
    #[arg(long)]
    pub annotate: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
