use anyhow::{Context, Result};
use clap::Parser;
use scraper::{Html, Selector};
use standings_scraper::cli::{init_logging, ConfigArgs};
use standings_scraper::extract::{locate_table, table_rows};
use standings_scraper::{parse_standings_page, session, FirstRowContains, PageParse};
use std::fs;
use std::path::Path;

/// Save one year page as a regression fixture and report how it parses.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// URL of the year page
    url: String,

    /// Season the page covers
    year: u16,

    /// Short description, used in the fixture name
    test_name: String,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config.load()?;

    println!("Fetching HTML from {}...", cli.url);

    let mut session = session::open(&config)?;
    session.navigate(&cli.url)?;
    let title = session.title()?;
    let html = session.content()?;
    session.close();

    // Create failures directory if it doesn't exist
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    // Regression tests read the year back out of the file name
    let file_path = failures_dir.join(format!("{}_{}.html", cli.year, cli.test_name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let selector = FirstRowContains::new(config.table_marker.clone());
    let document = Html::parse_document(&html);
    let table_selector = Selector::parse("table").unwrap();
    let table_count = document.select(&table_selector).count();
    let located = locate_table(&document, &selector);
    let row_count = located.map(|table| table_rows(table).len());

    println!("\nHTML analysis results:");
    println!("  - Title: {:?}", title);
    println!("  - Tables on page: {}", table_count);
    println!("  - Standings table found: {}", located.is_some());
    if let Some(rows) = row_count {
        println!("  - Table rows: {}", rows);
    }

    match parse_standings_page(&title, &html, cli.year, config.league, &selector) {
        PageParse::WrongLeague => {
            println!("Page title belongs to the {}.", config.league.opponent());
        }
        PageParse::TableNotFound => {
            println!("No table has {:?} in its first row - structural issue", config.table_marker);
        }
        PageParse::Table { records, tally } if records.is_empty() => {
            println!("Table found but no team rows survived: {:?}", tally);
            println!("   Likely a content parsing issue");
        }
        PageParse::Table { records, tally } => {
            println!(
                "Parse succeeded with {} records ({} rows without a division, {} with bad fields).",
                records.len(),
                tally.no_division,
                tally.bad_field
            );
            println!("This may not be a failure case.");
        }
    }

    Ok(())
}
