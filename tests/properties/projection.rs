//! Property tests for line-sequence projection and prefix stripping.

use proptest::prelude::*;

use fmview::domain::policies::SelectedByName;
use fmview::domain::services::strip_prefix;
use fmview::{project_lines, propagate, ProjectionOptions, PropagationPass, Tag};

use crate::strategies::{feature_tree, selection};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one line per selected node below the `struct` container.
    #[test]
    fn property_line_count_matches_selection(
        mut tree in feature_tree(),
        names in selection()
    ) {
        propagate(&mut tree, &SelectedByName::new(names), PropagationPass::new(Tag::Selected));

        let lines = project_lines(&tree, &ProjectionOptions::default());
        let selected_below_root = tree.iter().skip(1).filter(|n| n.has(Tag::Selected)).count();

        prop_assert_eq!(lines.len(), selected_below_root);
        prop_assert!(lines.iter().all(|l| l.has(Tag::Selected)));
    }

    /// PROPERTY: indentation width is depth * chars.
    #[test]
    fn property_indent_width(
        mut tree in feature_tree(),
        names in selection(),
        chars in 1usize..8
    ) {
        propagate(&mut tree, &SelectedByName::new(names), PropagationPass::new(Tag::Selected));

        let options = ProjectionOptions { chars, ..ProjectionOptions::default() };
        for line in project_lines(&tree, &options) {
            prop_assert_eq!(line.indent.chars().count(), line.depth * chars);
        }
    }

    /// PROPERTY: `<L>_<digits>_<rest>` strips to `<rest>`.
    #[test]
    fn property_strip_structural_prefix(
        letter in "[A-Z]",
        number in "[0-9]{1,4}",
        rest in "[a-z][a-z0-9_]{0,10}"
    ) {
        let name = format!("{letter}_{number}_{rest}");
        prop_assert_eq!(strip_prefix(&name), rest);
    }

    /// PROPERTY: stripping never empties a non-empty name.
    #[test]
    fn property_strip_never_empties(name in "[A-Za-z0-9_]{1,16}") {
        let stripped = strip_prefix(&name);
        prop_assert!(!stripped.is_empty());
        prop_assert!(name.ends_with(&stripped));
    }
}

#[test]
fn strip_prefix_examples() {
    assert_eq!(strip_prefix("A_1_foo"), "foo");
    assert_eq!(strip_prefix("foo"), "foo");
}
