//! Hygiene: source patterns the guard crate must not contain.
//!
//! The login page runs this code on every keystroke-driven submit and every
//! countdown tick, against storage entries anyone can edit in devtools. A
//! panic there bricks the login screen, so panicking shortcuts, silent error
//! drops and lossy numeric casts are all budgeted at zero.

use std::fs;
use std::path::{Path, PathBuf};

/// (description, needle, budget)
const RULES: &[(&str, &str, usize)] = &[
    ("unwrap", ".unwrap()", 0),
    ("expect", ".expect(", 0),
    ("panic", "panic!(", 0),
    ("unreachable", "unreachable!(", 0),
    ("todo", "todo!(", 0),
    ("unimplemented", "unimplemented!(", 0),
    ("silent discard", "let _ =", 0),
    ("error-erasing .ok()", ".ok()", 0),
    ("dead code allowance", "#[allow(dead_code)]", 0),
    ("cast to i64", " as i64", 0),
    ("cast to u64", " as u64", 0),
    ("cast to u32", " as u32", 0),
];

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with("_test.rs"));
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(
        files.iter().any(|(path, _)| path.ends_with("login.rs")),
        "hygiene scan found no sources; run from the guard crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources();
    let mut violations = Vec::new();

    for (label, needle, budget) in RULES {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|(path, content)| {
                content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(needle))
                    .map(move |(idx, _)| format!("{}:{}", path.display(), idx + 1))
            })
            .collect();
        if hits.len() > *budget {
            violations.push(format!("{label}: {} found, budget {budget}\n  {}", hits.len(), hits.join("\n  ")));
        }
    }

    assert!(violations.is_empty(), "hygiene budgets exceeded:\n{}", violations.join("\n"));
}
