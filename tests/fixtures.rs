use std::fs;

use more_asserts::{assert_gt, assert_le};
use rayon::prelude::*;
use script_splitter::{
    measure, sentences, ChunkConfig, PartCount, SentenceSplitter, TextStats, Unit,
};
use strum::IntoEnumIterator;

const LIMITS: [usize; 4] = [0, 10, 100, 1000];
const PARTS: [usize; 4] = [2, 3, 4, 7];

fn trimmed_sentences(text: &str) -> Vec<&str> {
    sentences(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[test]
fn fixed_limit() {
    insta::glob!("inputs/text/*.txt", |path| {
        let text = fs::read_to_string(path).unwrap();
        let expected = trimmed_sentences(&text);

        LIMITS.into_par_iter().for_each(|limit| {
            for unit in Unit::iter() {
                let splitter = SentenceSplitter::new(ChunkConfig::new(limit).with_sizer(unit));
                let chunks = splitter.chunks(&text).collect::<Vec<_>>();

                assert_eq!(
                    expected,
                    chunks.iter().flat_map(|c| sentences(c)).collect::<Vec<_>>()
                );
                for chunk in &chunks {
                    assert!(!chunk.is_empty());
                    if sentences(chunk).count() > 1 {
                        assert_le!(measure(chunk, unit), limit);
                    }
                }
            }
        });
    });
}

#[test]
fn equal_split() {
    insta::glob!("inputs/text/*.txt", |path| {
        let text = fs::read_to_string(path).unwrap();
        let stats = TextStats::new(&text);

        PARTS.into_par_iter().for_each(|parts| {
            for unit in Unit::iter() {
                let config =
                    ChunkConfig::new(PartCount::new(parts).unwrap()).with_sizer(unit);
                let total = match unit {
                    Unit::Characters => stats.characters,
                    Unit::Words => stats.words,
                };
                assert_eq!(config.limit_for(&text), total / parts);

                let chunks = SentenceSplitter::new(config).chunks(&text).collect::<Vec<_>>();
                assert_gt!(chunks.len(), 1);
                assert_eq!(
                    trimmed_sentences(&text),
                    chunks.iter().flat_map(|c| sentences(c)).collect::<Vec<_>>()
                );
            }
        });
    });
}

#[test]
fn splitter_can_be_shared_across_threads() {
    insta::glob!("inputs/text/*.txt", |path| {
        let text = fs::read_to_string(path).unwrap();
        let splitter = SentenceSplitter::new(ChunkConfig::new(50).with_sizer(Unit::Words));
        let expected = splitter.chunks(&text).collect::<Vec<_>>();

        (0..8).into_par_iter().for_each(|_| {
            assert_eq!(expected, splitter.chunks(&text).collect::<Vec<_>>());
        });
    });
}
