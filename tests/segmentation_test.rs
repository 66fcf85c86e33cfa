use std::io::Write;
use std::sync::Arc;

use hanseg::analysis::char_filter::{CharFilter, PatternStripCharFilter};
use hanseg::dictionary::{Cedict, DictionaryForm, PrefixDictionary, load_word_list};
use hanseg::segmenter::{SegmentationMode, Segmenter, SegmenterConfig};
use hanseg::{build_dictionary, greedy_segment, path_segment, scan_matches};
use tempfile::NamedTempFile;

const CEDICT_SAMPLE: &str = "\
# CC-CEDICT sample
中國 中国 [Zhong1 guo2] /China/Middle Kingdom/
軍方 军方 [jun1 fang1] /military/
此舉 此举 [ci3 ju3] /this move/
是 是 [shi4] /is/are/yes/
針對 针对 [zhen1 dui4] /to target/to focus on/
當前 当前 [dang1 qian2] /current/present/
台灣 台湾 [Tai2 wan1] /Taiwan/
總統 总统 [zong3 tong3] /president/
中 中 [zhong1] /within/among/
國 国 [guo2] /country/
";

fn sample_dictionary() -> PrefixDictionary {
    let cedict = Cedict::parse_str(CEDICT_SAMPLE);
    build_dictionary(cedict.words(DictionaryForm::Simplified))
}

#[test]
fn test_segments_concatenate_to_normalized_input() {
    let dict = sample_dictionary();
    let filter = PatternStripCharFilter::new();

    for text in ["中国军方此举是针对台湾总统", "中国，军方！ 当前", "xyz中国abc", "台湾"] {
        let normalized = filter.filter(text);

        assert_eq!(greedy_segment(&dict, text).concat(), normalized);
        if let Ok(segments) = path_segment(&dict, text) {
            assert_eq!(segments.concat(), normalized);
        }
    }
}

#[test]
fn test_resegmenting_with_own_tokens_is_stable() {
    let dict = build_dictionary(["研究", "研究生", "生命", "命", "中国", "人民"]);

    for text in ["研究生命中国人民", "中国研究生命", "x研究y"] {
        let first = greedy_segment(&dict, text);
        let token_dict = build_dictionary(&first);
        assert_eq!(greedy_segment(&token_dict, text), first, "text: {text}");
    }
}

#[test]
fn test_dictionary_contract() {
    let mut dict = PrefixDictionary::new();
    dict.insert("中国", 1);
    dict.insert("中", 2);
    dict.insert("中国人", 3);

    assert_eq!(dict.find("中国"), Some(&1));
    assert_eq!(dict.find("中国人"), Some(&3));
    assert_eq!(dict.find("国"), None);

    let prefixed: Vec<String> = dict.keys_with_prefix("中").into_iter().collect();
    assert_eq!(prefixed, vec!["中", "中国", "中国人"]);
    assert!(dict.keys_with_prefix("国").is_empty());

    // Removing an entry with descendants leaves the descendants reachable.
    assert_eq!(dict.remove("中国"), Some(1));
    assert_eq!(dict.find("中国"), None);
    assert_eq!(dict.find("中国人"), Some(&3));
    assert_eq!(dict.find("中"), Some(&2));

    // Deleting a leaf prunes its now-empty path.
    assert!(dict.delete("中国人"));
    assert!(!dict.contains_prefix("中国"));
    assert!(dict.contains_key("中"));
    assert_eq!(dict.len(), 1);
}

#[test]
fn test_greedy_prefers_longest_match() {
    let dict = build_dictionary(["中国", "中", "国"]);
    assert_eq!(greedy_segment(&dict, "中国"), vec!["中国"]);
}

#[test]
fn test_path_prefers_single_long_match() {
    let dict = build_dictionary(["中国", "中", "国"]);
    assert_eq!(path_segment(&dict, "中国").unwrap(), vec!["中国"]);
}

#[test]
fn test_greedy_emits_unmatched_characters_alone() {
    let dict = build_dictionary(["中国"]);
    assert_eq!(greedy_segment(&dict, "中国人"), vec!["中国", "人"]);
    assert_eq!(greedy_segment(&dict, "人"), vec!["人"]);
}

#[test]
fn test_path_fails_when_end_is_uncovered() {
    let dict = build_dictionary(["中"]);
    let err = path_segment(&dict, "中国").unwrap_err();
    assert!(err.is_pathfinding());
}

#[test]
fn test_scan_matches_groups_overlapping_matches() {
    let dict = sample_dictionary();
    let runs = scan_matches(&dict, "中国军方");

    let texts: Vec<Vec<&str>> = runs
        .iter()
        .map(|run| run.iter().map(|m| m.text.as_str()).collect())
        .collect();
    assert_eq!(texts, vec![vec!["中", "中国"], vec!["国"], vec!["军方"]]);

    for m in runs.iter().flat_map(|run| run.iter()) {
        assert!(dict.contains_key(&m.text));
        assert_eq!(m.end - m.start, m.len());
    }
}

#[test]
fn test_cedict_forms() {
    let cedict = Cedict::parse_str(CEDICT_SAMPLE);
    assert_eq!(cedict.entries().len(), 10);

    let traditional = build_dictionary(cedict.words(DictionaryForm::Traditional));
    assert!(traditional.contains_key("中國"));
    assert!(!traditional.contains_key("中国"));

    let both = build_dictionary(cedict.words(DictionaryForm::Both));
    assert!(both.contains_key("中國"));
    assert!(both.contains_key("中国"));
    assert!(both.contains_key("是"));
}

#[test]
fn test_cedict_and_word_list_from_files() {
    let mut cedict_file = NamedTempFile::new().unwrap();
    cedict_file.write_all(CEDICT_SAMPLE.as_bytes()).unwrap();
    let cedict = Cedict::load_from_file(cedict_file.path()).unwrap();
    assert_eq!(cedict.skipped_lines(), 0);

    let mut word_file = NamedTempFile::new().unwrap();
    writeln!(word_file, "研究\n研究生\n\n生命\n命").unwrap();
    let words = load_word_list(word_file.path()).unwrap();
    assert_eq!(words, vec!["研究", "研究生", "生命", "命"]);

    let dict = build_dictionary(&words);
    assert_eq!(greedy_segment(&dict, "研究生命"), vec!["研究生", "命"]);
    assert_eq!(path_segment(&dict, "研究生命").unwrap(), vec!["研究", "生命"]);
}

#[test]
fn test_segmenter_from_config_file() {
    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"{{"mode": "shortest_path", "fallback_to_greedy": true}}"#
    )
    .unwrap();

    let config = SegmenterConfig::load_from_file(config_file.path()).unwrap();
    assert_eq!(config.mode, SegmentationMode::ShortestPath);

    let segmenter = Segmenter::new(Arc::new(sample_dictionary()), config).unwrap();
    assert_eq!(
        segmenter.segment("中国军方此举").unwrap(),
        vec!["中国", "军方", "此举"]
    );
    // Nothing covers 人, so the path search fails and greedy takes over.
    assert_eq!(segmenter.segment("中国人").unwrap(), vec!["中国", "人"]);

    let results = segmenter.segment_batch(&["台湾总统", "当前"]);
    assert_eq!(results[0].as_ref().unwrap(), &vec!["台湾", "总统"]);
    assert_eq!(results[1].as_ref().unwrap(), &vec!["当前"]);
}
