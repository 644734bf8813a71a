//! Integration tests for per-directory failure isolation

use super::test_utils::{read, workspace};
use docindex::run::PathStatus;
use docindex::{run, IndexOptions, WriteMode};
use std::fs;

/// A directory whose README.md cannot be replaced fails alone; siblings and
/// the root are still updated
#[test]
fn test_write_failure_does_not_abort_run() {
    let ws = workspace(&[
        ("a/one.md", ""),
        ("b/two.md", ""),
        ("c/three.md", ""),
        ("README.md", "<!-- CONTENTS -->\n<!-- END CONTENTS -->\n"),
    ]);
    // A directory named README.md cannot be read or replaced by a file.
    fs::create_dir(ws.path().join("b").join("README.md")).unwrap();

    let report = run(ws.path(), &IndexOptions::default(), WriteMode::Write);

    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].path, "b/README.md");
    assert!(matches!(
        failures[0].status,
        PathStatus::Failed { ref kind, .. } if kind == "write"
    ));

    assert_eq!(read(ws.path(), "a/README.md"), "# Contents\n\n- [one.md](one.md)\n");
    assert_eq!(read(ws.path(), "c/README.md"), "# Contents\n\n- [three.md](three.md)\n");
    assert_eq!(report.root_readme.status, PathStatus::Patched);
}

/// A malformed root README aborts only the root step
#[test]
fn test_malformed_root_keeps_directory_updates() {
    let original = "Intro\n<!-- CONTENTS -->\nnever closed\n";
    let ws = workspace(&[("docs/a.md", ""), ("README.md", original)]);

    let report = run(ws.path(), &IndexOptions::default(), WriteMode::Write);
    assert!(!report.is_success());
    assert_eq!(report.directories[0].status, PathStatus::Written);
    match &report.root_readme.status {
        PathStatus::Failed { kind, error } => {
            assert_eq!(kind, "malformed");
            assert!(error.contains("line 2"), "{}", error);
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(read(ws.path(), "README.md"), original);
}

/// An index README holding non-UTF-8 bytes is replaced, not reported
#[test]
fn test_non_utf8_index_readme_is_overwritten() {
    let ws = workspace(&[("docs/a.md", "")]);
    fs::write(ws.path().join("docs").join("README.md"), [0xff, 0xfe, b'x']).unwrap();

    let report = run(ws.path(), &IndexOptions::default(), WriteMode::Write);
    assert!(report.failures().is_empty(), "{:?}", report.failures());
    assert_eq!(report.directories[0].status, PathStatus::Written);
    assert_eq!(read(ws.path(), "docs/README.md"), "# Contents\n\n- [a.md](a.md)\n");
}

/// Permission checks do not apply to uid 0, so unreadable fixtures are moot
#[cfg(unix)]
fn running_as_root() -> bool {
    fs::read_to_string("/proc/self/status")
        .map(|status| {
            status
                .lines()
                .find(|line| line.starts_with("Uid:"))
                .and_then(|line| line.split_whitespace().nth(1).map(|uid| uid == "0"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// An unreadable subdirectory fails once; siblings and the root tree go on
#[cfg(unix)]
#[test]
fn test_unreadable_directory_fails_alone() {
    use std::os::unix::fs::PermissionsExt;
    if running_as_root() {
        return;
    }

    let ws = workspace(&[
        ("docs/a.md", ""),
        ("locked/", ""),
        ("README.md", "Intro\n<!-- CONTENTS -->\n<!-- END CONTENTS -->\n"),
    ]);
    let locked = ws.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let report = run(ws.path(), &IndexOptions::default(), WriteMode::Write);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let failures = report.failures();
    assert_eq!(failures.len(), 1, "{:?}", failures);
    assert_eq!(failures[0].path, "locked");
    assert!(matches!(
        failures[0].status,
        PathStatus::Failed { ref kind, .. } if kind == "listing"
    ));

    assert_eq!(report.root_readme.status, PathStatus::Patched);
    assert_eq!(
        read(ws.path(), "README.md"),
        "Intro\n<!-- CONTENTS -->\n# Contents\n\n- docs\n  - [a.md](docs/a.md)\n- locked\n\n<!-- END CONTENTS -->\n"
    );
    assert_eq!(read(ws.path(), "docs/README.md"), "# Contents\n\n- [a.md](a.md)\n");
}

/// Dot-directories are indexed unless skipped
#[test]
fn test_hidden_directories_indexed_by_default() {
    let ws = workspace(&[(".github/CONTRIBUTING.md", "")]);

    let report = run(ws.path(), &IndexOptions::default(), WriteMode::Write);
    assert_eq!(report.directories.len(), 1);
    assert_eq!(report.directories[0].path, ".github/README.md");
    assert_eq!(
        read(ws.path(), ".github/README.md"),
        "# Contents\n\n- [CONTRIBUTING.md](CONTRIBUTING.md)\n"
    );

    let options = IndexOptions {
        skip_hidden_dirs: true,
        ..IndexOptions::default()
    };
    let report = run(ws.path(), &options, WriteMode::Check);
    assert!(report.directories.is_empty());
}
