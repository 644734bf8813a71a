//! Integration tests for the root README section patcher

use super::test_utils::{read, workspace};
use docindex::readme::root::{update_root_readme, RootOutcome};
use docindex::{run, IndexOptions, WriteMode};
use std::fs;

#[test]
fn test_patch_scenario() {
    let ws = workspace(&[
        (
            "README.md",
            "Intro\n<!-- CONTENTS -->\nstale\n<!-- END CONTENTS -->\nFooter\n",
        ),
        ("notes.md", "n"),
    ]);

    let outcome = update_root_readme(ws.path(), &IndexOptions::default(), WriteMode::Write).unwrap();
    assert_eq!(outcome, RootOutcome::Patched);
    assert_eq!(
        read(ws.path(), "README.md"),
        "Intro\n<!-- CONTENTS -->\n# Contents\n\n- [notes.md](notes.md)\n\n<!-- END CONTENTS -->\nFooter\n"
    );
}

#[test]
fn test_bootstrap_scenario() {
    let ws = workspace(&[("x.md", "x")]);

    let outcome = update_root_readme(ws.path(), &IndexOptions::default(), WriteMode::Write).unwrap();
    assert_eq!(outcome, RootOutcome::Created);
    assert_eq!(read(ws.path(), "README.md"), "# Contents\n\n- [x.md](x.md)\n");
}

/// A README without markers is left byte-identical
#[test]
fn test_no_markers_byte_identical() {
    let original = "# Project\r\n\r\nSome text with trailing spaces   \r\nno newline at end";
    let ws = workspace(&[("README.md", original), ("guide.md", "")]);

    let outcome = update_root_readme(ws.path(), &IndexOptions::default(), WriteMode::Write).unwrap();
    assert_eq!(outcome, RootOutcome::MissingMarkers);
    assert_eq!(fs::read(ws.path().join("README.md")).unwrap(), original.as_bytes());
}

/// Text before the start marker and after the end marker is preserved exactly
#[test]
fn test_surrounding_text_preserved() {
    let before = "# Title\n\n  indented  \n\t\ttabs\n<!-- CONTENTS -->\n";
    let after = "<!-- END CONTENTS -->\n\n## Licence\nMIT";
    let original = format!("{}old line 1\nold line 2\n{}", before, after);
    let ws = workspace(&[("README.md", original.as_str()), ("a.md", "")]);

    update_root_readme(ws.path(), &IndexOptions::default(), WriteMode::Write).unwrap();
    let patched = read(ws.path(), "README.md");
    assert!(patched.starts_with(before));
    assert!(patched.ends_with(after));
    assert!(!patched.contains("old line"));
}

/// The full run writes per-directory indexes first, so the root tree reflects
/// them; README.md files themselves stay out of the tree
#[test]
fn test_full_run_emoji_variant() {
    let ws = workspace(&[
        ("README.md", "Intro\n<!-- CONTENTS -->\n<!-- END CONTENTS -->\n"),
        ("guides/getting_started.md", ""),
    ]);
    let options = IndexOptions {
        emoji: true,
        humanize_titles: true,
        ..IndexOptions::default()
    };

    let report = run(ws.path(), &options, WriteMode::Write);
    assert!(report.is_success());
    assert_eq!(
        read(ws.path(), "guides/README.md"),
        "# 📚 Contents\n\n- [Getting Started](getting_started.md)\n"
    );
    assert_eq!(
        read(ws.path(), "README.md"),
        "Intro\n<!-- CONTENTS -->\n# 📚 Contents\n\n- 📂 guides\n  - 📄 [Getting Started](guides/getting_started.md)\n\n<!-- END CONTENTS -->\n"
    );
}

/// Custom markers from options are honoured
#[test]
fn test_custom_markers() {
    let ws = workspace(&[
        ("README.md", "<!-- toc -->\nold\n<!-- /toc -->\n"),
        ("a.md", ""),
    ]);
    let options = IndexOptions {
        start_marker: "<!-- toc -->".to_string(),
        end_marker: "<!-- /toc -->".to_string(),
        heading: "Index".to_string(),
        ..IndexOptions::default()
    };

    update_root_readme(ws.path(), &options, WriteMode::Write).unwrap();
    assert_eq!(
        read(ws.path(), "README.md"),
        "<!-- toc -->\n# Index\n\n- [a.md](a.md)\n\n<!-- /toc -->\n"
    );
}
