//! Drives a whole run: discovery, one extraction per year, then the write.

use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use crate::clean::clean_records;
use crate::config::ScraperConfig;
use crate::discover::YearIndex;
use crate::error::{Result, ScrapeError};
use crate::extract::{Extractor, StandingsRecord};
use crate::outcome::{OutcomeTag, RunReport};
use crate::session::{self, PageSession};
use crate::writer::write_records;

#[derive(Debug)]
pub struct RunSummary {
    pub records: Vec<StandingsRecord>,
    pub report: RunReport,
    /// Where the dataset went; `None` if nothing was extracted.
    pub output: Option<PathBuf>,
}

/// Run the full pipeline with a fresh session from `config`.
pub fn run(config: &ScraperConfig) -> Result<RunSummary> {
    config.validate()?;
    let mut session = session::open(config)?;
    run_with(config, session.as_mut())
}

/// Run the pipeline over an already open session.
///
/// The session is closed exactly once before this returns, whether or not
/// the run succeeds.
pub fn run_with<S: PageSession + ?Sized>(
    config: &ScraperConfig,
    session: &mut S,
) -> Result<RunSummary> {
    let collected = YearIndex::from_config(config)
        .map(|index| collect(&mut *session, &index, &Extractor::from_config(config)));
    session.close();

    let (records, report) = collected?;
    finish(config, records, report)
}

/// Discover the year pages and extract each in ascending year order.
///
/// No single year can stop the loop: every page ends up as an outcome in
/// the report, whatever happened to it.
pub fn collect<S: PageSession + ?Sized>(
    session: &mut S,
    index: &YearIndex,
    extractor: &Extractor,
) -> (Vec<StandingsRecord>, RunReport) {
    let mut links = index.discover(session, extractor.diagnostics());
    links.sort_by_key(|link| link.year);

    let mut report = RunReport::new(index.league, index.range);
    let mut records = Vec::new();

    for link in &links {
        let outcome = extractor.extract(session, link.year, &link.url);
        report.record(link.year, &outcome);
        if outcome.tag() == OutcomeTag::EmptyTable {
            warn!("Standings table for {} had no team rows", link.year);
        }
        records.extend(outcome.into_records());
    }

    report.finish();
    (records, report)
}

/// Write the collected batch (and the report, if asked for).
pub fn finish(
    config: &ScraperConfig,
    records: Vec<StandingsRecord>,
    report: RunReport,
) -> Result<RunSummary> {
    let records = if config.clean {
        clean_records(records).records
    } else {
        records
    };

    let output = if records.is_empty() {
        warn!("No team standings found for any year; nothing written");
        None
    } else {
        let path = config.output_path();
        write_records(&records, &path)?;
        info!("Saved {} team records to {}", records.len(), path.display());
        Some(path)
    };

    if let Some(report_path) = &config.report {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| ScrapeError::write(report_path, e))?;
        if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ScrapeError::write(report_path, e))?;
        }
        fs::write(report_path, json).map_err(|e| ScrapeError::write(report_path, e))?;
        info!("Saved run report to {}", report_path.display());
    }

    Ok(RunSummary {
        records,
        report,
        output,
    })
}
