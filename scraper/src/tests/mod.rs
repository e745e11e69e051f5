use anyhow::Result;
use std::fs;

pub mod fixtures;
pub mod standings_tests;

/// Save a page the parser choked on so it becomes a regression case
pub fn save_failed_html(html: &str, test_name: &str) -> Result<()> {
    let failures_dir = fixtures::failures_dir();
    fs::create_dir_all(&failures_dir)?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, html)?;

    println!("Saved failed HTML to {}", file_path.display());
    Ok(())
}
