pub mod batch;
pub mod clean;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod discover;
pub mod error;
pub mod extract;
pub mod league;
pub mod outcome;
pub mod reference;
pub mod session;
pub mod writer;

// Fixture-driven tests
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::batch::{collect, run, run_with, RunSummary};
pub use crate::config::{Backend, ScraperConfig, YearRange};
pub use crate::discover::{YearIndex, YearLink};
pub use crate::error::ScrapeError;
pub use crate::extract::{
    parse_standings_page, Extractor, FirstRowContains, GamesBehind, PageParse, StandingsRecord,
    TableSelector,
};
pub use crate::league::League;
pub use crate::outcome::{EmptyReason, ExtractionOutcome, OutcomeTag, RunReport};
pub use crate::session::{ChromeSession, HttpSession, PageSession};
pub use crate::writer::{read_records, write_records};
