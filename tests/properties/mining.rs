//! Property tests for minimal-model mining.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fmview::domain::services::mine_minimal_features;
use fmview::Configuration;

fn corpus_lines() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-e]", 0..6), 1..6)
}

fn to_corpus(files: &[Vec<String>]) -> Vec<Configuration> {
    files
        .iter()
        .enumerate()
        .map(|(i, lines)| Configuration::from_content(format!("{i}.config"), &lines.join("\n")))
        .collect()
}

fn line_set(lines: &[String]) -> BTreeSet<String> {
    lines.iter().cloned().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: tolerance 0 is the intersection of all line sets.
    #[test]
    fn property_zero_tolerance_is_intersection(files in corpus_lines()) {
        let expected = files
            .iter()
            .map(|f| line_set(f))
            .reduce(|acc, set| acc.intersection(&set).cloned().collect())
            .unwrap_or_default();

        prop_assert_eq!(mine_minimal_features(&to_corpus(&files), 0), expected);
    }

    /// PROPERTY: a single file mines to its own distinct lines.
    #[test]
    fn property_single_file_is_its_line_set(lines in prop::collection::vec("[a-e]", 0..8)) {
        let corpus = to_corpus(std::slice::from_ref(&lines));
        prop_assert_eq!(mine_minimal_features(&corpus, 0), line_set(&lines));
    }

    /// PROPERTY: raising the tolerance never removes features.
    #[test]
    fn property_tolerance_is_monotonic(files in corpus_lines(), tol in 0usize..4) {
        let corpus = to_corpus(&files);
        let narrow = mine_minimal_features(&corpus, tol);
        let wide = mine_minimal_features(&corpus, tol + 1);
        prop_assert!(narrow.is_subset(&wide));
    }

    /// PROPERTY: a tolerance of at least the corpus size admits every line seen.
    #[test]
    fn property_full_tolerance_is_union(files in corpus_lines()) {
        let union: BTreeSet<String> = files.iter().flatten().cloned().collect();
        prop_assert_eq!(mine_minimal_features(&to_corpus(&files), files.len()), union);
    }
}
