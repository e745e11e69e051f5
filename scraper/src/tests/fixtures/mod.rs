use std::fs;
use std::path::{Path, PathBuf};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/tests/fixtures")
}

pub fn failures_dir() -> PathBuf {
    fixtures_dir().join("failures")
}

/// Load test HTML fixture by name
pub fn load_html_fixture(fixture_name: &str) -> String {
    let path = fixtures_dir().join(format!("{}.html", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// Load a real failure case for regression testing
pub fn load_failure_html(failure_name: &str) -> Option<String> {
    let path = failures_dir().join(format!("{}.html", failure_name));
    fs::read_to_string(path).ok()
}
