//! Golden file tests for plain-text recipe export.
//!
//! Each JSON file in `fixtures/` holds a recipe and the exact text and file
//! name its export must produce.

use serde::Deserialize;
use sous_core::{export_file_name, export_to_dir, format_recipe, Recipe};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TestCase {
    recipe: Recipe,
    expected_file_name: String,
    expected_export: String,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");

    let mut cases = Vec::new();
    for entry in fs::read_dir(&fixtures_dir).expect("Failed to read fixtures directory") {
        let path = entry.expect("Failed to read directory entry").path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    assert!(!cases.is_empty(), "No test fixtures found in {:?}", fixtures_dir);
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_export_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);
        assert_eq!(
            format_recipe(&case.recipe),
            case.expected_export,
            "export text mismatch for {}",
            name
        );
        assert_eq!(
            export_file_name(&case.recipe),
            case.expected_file_name,
            "file name mismatch for {}",
            name
        );
    }
}

#[test]
fn test_exported_files_match_golden_text() {
    let dir = tempfile::tempdir().unwrap();

    for (name, case) in load_test_cases() {
        let path = export_to_dir(&case.recipe, dir.path()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, case.expected_export, "file content mismatch for {}", name);
    }
}
