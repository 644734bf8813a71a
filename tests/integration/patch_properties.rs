//! Property-based tests for the section patcher

use docindex::readme::patch::{patch_section, Markers, PatchOutcome};
use proptest::prelude::*;

const START: &str = "<!-- CONTENTS -->";
const END: &str = "<!-- END CONTENTS -->";

fn markers() -> Markers {
    Markers::new(START, END)
}

/// Lines that can never be mistaken for a marker.
fn plain_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 #*_-]{0,24}", 0..8)
}

fn join(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

proptest! {
    /// Everything outside the markers survives character for character.
    #[test]
    fn prop_preserves_text_outside_markers(
        before in plain_lines(),
        inside in plain_lines(),
        after in plain_lines(),
        block in plain_lines(),
    ) {
        let prefix = format!("{}{}\n", join(&before), START);
        let suffix = format!("{}\n{}", END, join(&after));
        let original = format!("{}{}{}", prefix, join(&inside), suffix);
        let block = join(&block);

        let outcome = patch_section(&original, &block, &markers()).unwrap();
        let PatchOutcome::Patched(patched) = outcome else {
            panic!("markers present but not patched");
        };
        prop_assert_eq!(patched, format!("{}{}\n{}", prefix, block, suffix));
    }

    /// Without a start marker the patcher never produces output to write.
    #[test]
    fn prop_no_markers_no_injection(lines in plain_lines(), block in plain_lines()) {
        let original = join(&lines);
        prop_assert_eq!(
            patch_section(&original, &join(&block), &markers()).unwrap(),
            PatchOutcome::NoMarkers
        );
    }

    /// Patching an already patched document changes nothing.
    #[test]
    fn prop_patch_idempotent(inside in plain_lines(), block in plain_lines()) {
        let original = format!("{}\n{}{}\n", START, join(&inside), END);
        let block = join(&block);
        let PatchOutcome::Patched(first) = patch_section(&original, &block, &markers()).unwrap() else {
            panic!("expected patch");
        };
        let PatchOutcome::Patched(second) = patch_section(&first, &block, &markers()).unwrap() else {
            panic!("expected patch");
        };
        prop_assert_eq!(first, second);
    }
}
