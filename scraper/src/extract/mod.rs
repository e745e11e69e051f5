//! Standings extraction for a single year page.

pub mod classify;
pub mod record;
pub mod table;

use log::{info, warn};
use scraper::Html;

pub use self::classify::{classify_row, classify_rows, RowClass, RowTally, SectionState};
pub use self::record::{GamesBehind, StandingsRecord};
pub use self::table::{locate_table, table_rows, FirstRowContains, TableSelector};

use crate::config::ScraperConfig;
use crate::diagnostics::Diagnostics;
use crate::league::League;
use crate::outcome::{EmptyReason, ExtractionOutcome};
use crate::session::PageSession;

/// What a year page held, before any side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum PageParse {
    WrongLeague,
    TableNotFound,
    Table {
        records: Vec<StandingsRecord>,
        tally: RowTally,
    },
}

/// Parse an already loaded year page.
pub fn parse_standings_page<T: TableSelector + ?Sized>(
    title: &str,
    html: &str,
    year: u16,
    league: League,
    selector: &T,
) -> PageParse {
    if title.contains(league.wrong_league_marker()) {
        return PageParse::WrongLeague;
    }

    let document = Html::parse_document(html);
    let Some(table) = locate_table(&document, selector) else {
        return PageParse::TableNotFound;
    };

    let rows = table_rows(table);
    let (records, tally) = classify_rows(year, &rows);
    PageParse::Table { records, tally }
}

/// Pulls standings off year pages through a session.
pub struct Extractor {
    league: League,
    selector: Box<dyn TableSelector>,
    diagnostics: Diagnostics,
}

impl Extractor {
    pub fn new(league: League, selector: Box<dyn TableSelector>, diagnostics: Diagnostics) -> Self {
        Self {
            league,
            selector,
            diagnostics,
        }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(
            config.league,
            Box::new(FirstRowContains::new(config.table_marker.clone())),
            Diagnostics::new(&config.debug_dir),
        )
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Extract one year's standings. Every failure becomes an outcome.
    pub fn extract<S: PageSession + ?Sized>(
        &self,
        session: &mut S,
        year: u16,
        url: &str,
    ) -> ExtractionOutcome {
        info!("Extracting {} {} team standings", year, self.league);

        let page = session
            .navigate(url)
            .and_then(|()| Ok((session.title()?, session.content()?)));
        let (title, html) = match page {
            Ok(page) => page,
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::from(e));
                warn!("Could not load {} page {}: {}", year, url, message);
                return ExtractionOutcome::Empty(EmptyReason::NavigationError(message));
            }
        };

        match parse_standings_page(&title, &html, year, self.league, self.selector.as_ref()) {
            PageParse::WrongLeague => {
                info!(
                    "{} page is a {} page, skipping",
                    year,
                    self.league.opponent()
                );
                ExtractionOutcome::Empty(EmptyReason::WrongLeague)
            }
            PageParse::TableNotFound => {
                warn!("Could not find team standings table for {}", year);
                self.diagnostics.capture(session, &format!("{}_page", year));
                ExtractionOutcome::Empty(EmptyReason::TableNotFound)
            }
            PageParse::Table { records, tally } => {
                info!(
                    "Extracted {} team records for {} ({} rows, {} dropped)",
                    records.len(),
                    year,
                    tally.rows,
                    tally.no_division + tally.bad_field
                );
                ExtractionOutcome::Extracted(records)
            }
        }
    }
}
