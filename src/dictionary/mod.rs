//! Segmentation dictionary.
//!
//! The dictionary is a [`PrefixDictionary`]: a character trie populated once
//! from a word list and then queried by the match finder. Where the word list
//! comes from is up to the caller; [`cedict`] parses the common CEDICT text
//! format and [`load_word_list`] reads one word per line.

pub mod cedict;
pub mod trie;

pub use cedict::{Cedict, CedictEntry, DictionaryForm, load_word_list};
pub use trie::{PrefixDictionary, TrieNode};

/// Build a dictionary from a list of words.
///
/// Every word is inserted with a unit payload. Empty strings are skipped.
///
/// # Examples
///
/// ```
/// use hanseg::dictionary::build_dictionary;
///
/// let dict = build_dictionary(["中国", "中", "国"]);
/// assert_eq!(dict.len(), 3);
/// assert!(dict.contains_key("中国"));
/// ```
pub fn build_dictionary<I, S>(words: I) -> PrefixDictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dictionary = PrefixDictionary::new();
    let mut skipped = 0usize;

    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            skipped += 1;
            continue;
        }
        dictionary.insert(word, ());
    }

    log::debug!(
        "built dictionary with {} entries ({} empty words skipped)",
        dictionary.len(),
        skipped
    );
    dictionary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_dictionary_skips_empty_and_duplicates() {
        let dict = build_dictionary(vec!["中国", "", "中国", "人"]);
        assert_eq!(dict.len(), 2);
        assert!(dict.contains_key("人"));
    }
}
