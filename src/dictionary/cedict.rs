//! CEDICT-format dictionary source.
//!
//! Each non-comment line has the shape
//!
//! ```text
//! 中國 中国 [Zhong1 guo2] /China/
//! ```
//!
//! i.e. the traditional form, the simplified form, a bracketed reading and a
//! slash-delimited list of glosses. Only the headwords matter to the
//! segmenter; the rest is kept so callers can display it.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HansegError, Result};

/// Which headword column to take from a CEDICT file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictionaryForm {
    /// Simplified characters.
    #[default]
    Simplified,
    /// Traditional characters.
    Traditional,
    /// Both columns, each distinct word once.
    Both,
}

/// One parsed CEDICT line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CedictEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
    pub definitions: Vec<String>,
}

impl CedictEntry {
    /// Parse a single line. Returns `None` for blank lines and comments.
    pub fn parse_line(line: &str) -> Option<Result<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(Self::parse_entry(line))
    }

    fn parse_entry(line: &str) -> Result<Self> {
        let (head, glosses) = match line.split_once('/') {
            Some((head, glosses)) => (head, glosses),
            None => (line, ""),
        };

        let (words, pinyin) = match (head.find('['), head.rfind(']')) {
            (Some(open), Some(close)) if open < close => {
                (&head[..open], head[open + 1..close].trim())
            }
            _ => (head, ""),
        };

        let mut words = words.split_whitespace();
        let (Some(traditional), Some(simplified)) = (words.next(), words.next()) else {
            return Err(HansegError::dictionary(format!(
                "missing headwords in line: {line}"
            )));
        };

        let definitions = glosses
            .split('/')
            .map(str::trim)
            .filter(|gloss| !gloss.is_empty())
            .map(str::to_string)
            .collect();

        Ok(CedictEntry {
            traditional: traditional.to_string(),
            simplified: simplified.to_string(),
            pinyin: pinyin.to_string(),
            definitions,
        })
    }
}

/// A parsed CEDICT file.
#[derive(Debug, Clone, Default)]
pub struct Cedict {
    entries: Vec<CedictEntry>,
    skipped_lines: usize,
}

impl Cedict {
    /// Parse CEDICT content held in memory.
    pub fn parse_str(content: &str) -> Self {
        let mut cedict = Cedict::default();
        for (index, line) in content.lines().enumerate() {
            cedict.push_line(index + 1, line);
        }
        cedict
    }

    /// Parse CEDICT content from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut cedict = Cedict::default();
        for (index, line) in BufReader::new(reader).lines().enumerate() {
            cedict.push_line(index + 1, &line?);
        }
        Ok(cedict)
    }

    /// Load a CEDICT file from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            HansegError::dictionary(format!(
                "Failed to open CEDICT file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let cedict = Self::from_reader(file)?;
        log::debug!(
            "loaded {} CEDICT entries from {} ({} lines skipped)",
            cedict.entries.len(),
            path.display(),
            cedict.skipped_lines
        );
        Ok(cedict)
    }

    fn push_line(&mut self, line_number: usize, line: &str) {
        match CedictEntry::parse_line(line) {
            Some(Ok(entry)) => self.entries.push(entry),
            Some(Err(e)) => {
                log::warn!("skipping CEDICT line {line_number}: {e}");
                self.skipped_lines += 1;
            }
            None => {}
        }
    }

    /// Parsed entries in file order.
    pub fn entries(&self) -> &[CedictEntry] {
        &self.entries
    }

    /// Number of malformed lines that were skipped.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Headwords in the requested form, in file order without duplicates.
    pub fn words(&self, form: DictionaryForm) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut words = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let forms = match form {
                DictionaryForm::Simplified => [Some(&entry.simplified), None],
                DictionaryForm::Traditional => [Some(&entry.traditional), None],
                DictionaryForm::Both => [Some(&entry.simplified), Some(&entry.traditional)],
            };
            for word in forms.into_iter().flatten() {
                if seen.insert(word.as_str()) {
                    words.push(word.clone());
                }
            }
        }

        words
    }
}

/// Load a plain word list with one word per line.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() && !word.starts_with('#') {
            words.push(word.to_string());
        }
    }

    Ok(words)
}
