//! Command implementations for the hanseg CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::char_filter::{CharFilter, PatternStripCharFilter};
use crate::analysis::matcher::MatchFinder;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::{Cedict, PrefixDictionary, build_dictionary, load_word_list};
use crate::error::{HansegError, Result};
use crate::segmenter::{Segmenter, SegmenterConfig};

/// Execute a CLI command.
pub fn execute_command(args: HansegArgs) -> Result<()> {
    match &args.command {
        Command::Segment(segment_args) => segment_texts(segment_args.clone(), &args),
        Command::Matches(matches_args) => list_matches(matches_args.clone(), &args),
        Command::Lookup(lookup_args) => lookup_key(lookup_args.clone(), &args),
    }
}

/// Segment every input text.
fn segment_texts(args: SegmentArgs, cli_args: &HansegArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading segmenter config from: {}", path.display());
            SegmenterConfig::load_from_file(path)?
        }
        None => SegmenterConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if args.fallback {
        config.fallback_to_greedy = true;
    }

    let dictionary = load_dictionary(&args.dictionary)?;
    let texts = read_texts(&args.input)?;
    let mode = config.mode;
    let segmenter = Segmenter::new(Arc::new(dictionary), config)?;

    let start_time = Instant::now();
    let results = segmenter
        .tokenize_batch(&texts)
        .into_iter()
        .zip(texts)
        .map(|(result, text)| match result {
            Ok(tokens) => SegmentationResult {
                text,
                tokens,
                error: None,
            },
            Err(e) => {
                log::warn!("Failed to segment '{text}': {e}");
                SegmentationResult {
                    text,
                    tokens: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();
    let duration = start_time.elapsed();

    output_result(
        "Segmentation completed",
        &SegmentationReport {
            mode: mode.to_string(),
            show_offsets: args.offsets,
            results,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

/// List the dictionary matches of every input text.
fn list_matches(args: MatchesArgs, cli_args: &HansegArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;
    let texts = read_texts(&args.input)?;
    let char_filter = PatternStripCharFilter::new();
    let finder = MatchFinder::new(&dictionary);

    let results = texts
        .into_iter()
        .map(|text| {
            let runs = finder.scan(&char_filter.filter(&text));
            MatchResult { text, runs }
        })
        .collect();

    output_result("Matches found", &MatchReport { results }, cli_args)
}

/// Look up a key, or list the keys starting with it.
fn lookup_key(args: LookupArgs, cli_args: &HansegArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;

    let report = if args.prefix {
        let keys = dictionary.keys_with_prefix(&args.key);
        let total_keys = keys.len();
        LookupReport {
            found: total_keys > 0,
            keys: Some(keys.into_iter().take(args.limit).collect()),
            total_keys,
            key: args.key,
        }
    } else {
        LookupReport {
            found: dictionary.contains_key(&args.key),
            keys: None,
            total_keys: dictionary.len(),
            key: args.key,
        }
    };

    output_result("Lookup completed", &report, cli_args)
}

/// Load the dictionary named on the command line.
pub fn load_dictionary(args: &DictionaryArgs) -> Result<PrefixDictionary> {
    let words = match (&args.cedict, &args.words) {
        (Some(path), _) => {
            log::info!("Loading CEDICT dictionary from: {}", path.display());
            Cedict::load_from_file(path)?.words(args.form.into())
        }
        (None, Some(path)) => {
            log::info!("Loading word list from: {}", path.display());
            load_word_list(path)?
        }
        (None, None) => {
            return Err(HansegError::invalid_argument(
                "either --cedict or --words is required",
            ));
        }
    };

    let dictionary = build_dictionary(words);
    log::info!("Dictionary loaded with {} entries", dictionary.len());
    Ok(dictionary)
}

/// Collect the texts to process from the input file and the command line.
pub fn read_texts(args: &InputArgs) -> Result<Vec<String>> {
    let mut texts = match &args.input {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };
    texts.extend(args.texts.iter().cloned());

    if texts.is_empty() {
        return Err(HansegError::invalid_argument(
            "no input text; pass TEXT arguments or --input",
        ));
    }
    Ok(texts)
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn word_file(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    fn dictionary_args(words: Option<PathBuf>) -> DictionaryArgs {
        DictionaryArgs {
            cedict: None,
            words,
            form: FormArg::Simplified,
        }
    }

    #[test]
    fn test_load_dictionary_from_word_list() {
        let file = word_file(&["中国", "人民", "# comment", ""]);
        let dictionary = load_dictionary(&dictionary_args(Some(file.path().to_path_buf()))).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_key("人民"));
    }

    #[test]
    fn test_load_dictionary_requires_source() {
        assert!(load_dictionary(&dictionary_args(None)).is_err());
    }

    #[test]
    fn test_read_texts() {
        let file = word_file(&["第一行", "", "第二行"]);
        let args = InputArgs {
            input: Some(file.path().to_path_buf()),
            texts: vec!["第三行".to_string()],
        };

        assert_eq!(read_texts(&args).unwrap(), vec!["第一行", "第二行", "第三行"]);
    }

    #[test]
    fn test_read_texts_empty_input() {
        let args = InputArgs {
            input: None,
            texts: Vec::new(),
        };
        assert!(read_texts(&args).is_err());
    }
}
