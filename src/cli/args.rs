//! Command line argument parsing for the hanseg CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryForm;
use crate::segmenter::SegmentationMode;

/// hanseg - dictionary-driven word segmentation
#[derive(Parser, Debug, Clone)]
#[command(name = "hanseg")]
#[command(about = "Segment unspaced text into dictionary words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct HansegArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl HansegArgs {
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
    /// Segment text into words
    Segment(SegmentArgs),

    /// List the dictionary matches found in text, grouped into runs
    Matches(MatchesArgs),

    /// Look up a key or list keys with a prefix
    Lookup(LookupArgs),
}

/// Where to load the dictionary from
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// CEDICT-format dictionary file
    #[arg(
        long,
        value_name = "CEDICT_FILE",
        required_unless_present = "words",
        conflicts_with = "words"
    )]
    pub cedict: Option<PathBuf>,

    /// Plain word list, one word per line
    #[arg(long, value_name = "WORD_FILE")]
    pub words: Option<PathBuf>,

    /// Headword column to use from a CEDICT file
    #[arg(long, value_enum, default_value = "simplified")]
    pub form: FormArg,
}

/// Texts to process
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Read texts from a file, one per line
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,

    /// Texts given on the command line
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,
}

/// Arguments for segmentation
#[derive(Parser, Debug, Clone)]
pub struct SegmentArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Segmentation strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Segmenter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Fall back to greedy segmentation when no shortest path exists
    #[arg(long)]
    pub fallback: bool,

    /// Print token offsets
    #[arg(long)]
    pub offsets: bool,
}

/// Arguments for match listing
#[derive(Parser, Debug, Clone)]
pub struct MatchesArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Arguments for dictionary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Key to look up
    #[arg(value_name = "KEY")]
    pub key: String,

    /// List every entry starting with KEY instead of an exact lookup
    #[arg(short, long)]
    pub prefix: bool,

    /// Maximum number of keys to list
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Segmentation strategies selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Longest match at each position
    Greedy,
    /// Minimum-fragmentation shortest path
    Path,
}

impl From<ModeArg> for SegmentationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Greedy => SegmentationMode::Greedy,
            ModeArg::Path => SegmentationMode::ShortestPath,
        }
    }
}

/// CEDICT headword columns
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormArg {
    /// Simplified characters
    Simplified,
    /// Traditional characters
    Traditional,
    /// Both columns
    Both,
}

impl From<FormArg> for DictionaryForm {
    fn from(form: FormArg) -> Self {
        match form {
            FormArg::Simplified => DictionaryForm::Simplified,
            FormArg::Traditional => DictionaryForm::Traditional,
            FormArg::Both => DictionaryForm::Both,
        }
    }
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
