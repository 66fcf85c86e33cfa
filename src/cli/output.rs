//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::Run;
use crate::analysis::token::Token;
use crate::cli::args::{HansegArgs, OutputFormat};
use crate::error::Result;

/// Types that know how to print themselves for a terminal.
pub trait HumanReadable {
    /// Print the value in human-readable form.
    fn print_human(&self, args: &HansegArgs);
}

/// Segmentation of a single text.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub text: String,
    pub tokens: Vec<Token>,
    pub error: Option<String>,
}

/// Result structure for the segment command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentationReport {
    pub mode: String,
    pub show_offsets: bool,
    pub results: Vec<SegmentationResult>,
    pub duration_ms: u64,
}

/// Runs found in a single text.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub text: String,
    pub runs: Vec<Run>,
}

/// Result structure for the matches command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub results: Vec<MatchResult>,
}

/// Result structure for the lookup command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupReport {
    pub key: String,
    pub found: bool,
    pub keys: Option<Vec<String>>,
    pub total_keys: usize,
}

impl HumanReadable for SegmentationReport {
    fn print_human(&self, args: &HansegArgs) {
        for result in &self.results {
            if args.verbosity() > 1 {
                println!("{}", result.text);
            }
            match &result.error {
                Some(error) => println!("error: {error}"),
                None if self.show_offsets => {
                    let parts: Vec<String> = result
                        .tokens
                        .iter()
                        .map(|t| format!("{}[{}..{}]", t.text, t.start_offset, t.end_offset))
                        .collect();
                    println!("{}", parts.join(" | "));
                }
                None => {
                    let parts: Vec<&str> = result.tokens.iter().map(|t| t.text.as_str()).collect();
                    println!("{}", parts.join(" | "));
                }
            }
        }
        if args.verbosity() > 1 {
            println!();
            println!(
                "{} texts segmented ({}) in {}ms",
                self.results.len(),
                self.mode,
                self.duration_ms
            );
        }
    }
}

impl HumanReadable for MatchReport {
    fn print_human(&self, _args: &HansegArgs) {
        for result in &self.results {
            println!("{}", result.text);
            println!("─────────────");
            for (index, run) in result.runs.iter().enumerate() {
                let matches: Vec<String> = run
                    .iter()
                    .map(|m| format!("{}[{}..{}]", m.text, m.start, m.end))
                    .collect();
                println!("run {}: {}", index + 1, matches.join(" "));
            }
            println!();
        }
    }
}

impl HumanReadable for LookupReport {
    fn print_human(&self, _args: &HansegArgs) {
        match &self.keys {
            Some(keys) => {
                for key in keys {
                    println!("{key}");
                }
                if keys.len() < self.total_keys {
                    println!("... ({} of {} keys shown)", keys.len(), self.total_keys);
                }
            }
            None if self.found => println!("{}: found", self.key),
            None => println!("{}: not found", self.key),
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &HansegArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &HansegArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
