//! Doc comments across the workspace contain no tab characters.
//!
//! `clippy::tabs_in_doc_comments` is denied through `clippy::all`; this keeps
//! the check in the test suite so a stray tab fails before linting does.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Crate directories scanned, relative to the workspace root.
const CRATE_DIRS: &[&str] = &["kernel", "search", "harness", "tests/lock", "benchmarks"];

fn walk(dir: &Path, violations: &mut Vec<(String, usize)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        let is_doc = trimmed.starts_with("///") || trimmed.starts_with("//!");
        if is_doc && trimmed.contains('\t') {
            violations.push((path.display().to_string(), line_no + 1));
        }
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn no_tabs_in_doc_comments() {
    let root = workspace_root();
    let mut violations = Vec::new();
    for dir in CRATE_DIRS {
        let path = root.join(dir);
        assert!(path.is_dir(), "{} missing", path.display());
        walk(&path, &mut violations);
    }

    if !violations.is_empty() {
        let mut msg = String::from("tab characters in doc comments:\n");
        for (file, line) in &violations {
            let _ = writeln!(msg, "  {file}:{line}");
        }
        panic!("{msg}");
    }
}

#[test]
fn rendered_steps_still_use_tabs() {
    use ferry_harness::render::render_path;
    use ferry_search::search::solve;
    use lock_tests::fixtures::{classic_goal, classic_initial};

    let text = render_path(&solve(classic_initial(), classic_goal()));
    assert!(text.contains("\n\tBoat is now at: "));
    assert!(text.contains("\n\tOrigin Bank State: "));
}
