use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::YearRange;
use crate::extract::StandingsRecord;
use crate::league::League;

/// Result of extracting one year's page. Always a value, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// The standings table was found; may still hold no records.
    Extracted(Vec<StandingsRecord>),
    Empty(EmptyReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyReason {
    WrongLeague,
    TableNotFound,
    NavigationError(String),
}

impl ExtractionOutcome {
    pub fn tag(&self) -> OutcomeTag {
        match self {
            ExtractionOutcome::Extracted(records) if records.is_empty() => OutcomeTag::EmptyTable,
            ExtractionOutcome::Extracted(_) => OutcomeTag::Extracted,
            ExtractionOutcome::Empty(EmptyReason::WrongLeague) => OutcomeTag::WrongLeague,
            ExtractionOutcome::Empty(EmptyReason::TableNotFound) => OutcomeTag::TableNotFound,
            ExtractionOutcome::Empty(EmptyReason::NavigationError(_)) => {
                OutcomeTag::NavigationError
            }
        }
    }

    pub fn records(&self) -> &[StandingsRecord] {
        match self {
            ExtractionOutcome::Extracted(records) => records,
            ExtractionOutcome::Empty(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<StandingsRecord> {
        match self {
            ExtractionOutcome::Extracted(records) => records,
            ExtractionOutcome::Empty(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeTag {
    Extracted,
    EmptyTable,
    WrongLeague,
    TableNotFound,
    NavigationError,
}

impl OutcomeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeTag::Extracted => "extracted",
            OutcomeTag::EmptyTable => "empty-table",
            OutcomeTag::WrongLeague => "wrong-league",
            OutcomeTag::TableNotFound => "table-not-found",
            OutcomeTag::NavigationError => "navigation-error",
        }
    }
}

impl fmt::Display for OutcomeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearReport {
    pub tag: OutcomeTag,
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&ExtractionOutcome> for YearReport {
    fn from(outcome: &ExtractionOutcome) -> Self {
        let detail = match outcome {
            ExtractionOutcome::Empty(EmptyReason::NavigationError(message)) => {
                Some(message.clone())
            }
            _ => None,
        };
        Self {
            tag: outcome.tag(),
            records: outcome.records().len(),
            detail,
        }
    }
}

/// Per-year outcome of a whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub league: League,
    pub range: YearRange,
    pub per_year: BTreeMap<u16, YearReport>,
}

impl RunReport {
    pub fn new(league: League, range: YearRange) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            league,
            range,
            per_year: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, year: u16, outcome: &ExtractionOutcome) {
        self.per_year.insert(year, YearReport::from(outcome));
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total_records(&self) -> usize {
        self.per_year.values().map(|year| year.records).sum()
    }

    pub fn count(&self, tag: OutcomeTag) -> usize {
        self.per_year.values().filter(|year| year.tag == tag).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} standings {}-{}:",
            self.league, self.range.min, self.range.max
        )?;
        for (year, report) in &self.per_year {
            match (&report.tag, &report.detail) {
                (OutcomeTag::Extracted, _) => writeln!(f, "  {}: {} teams", year, report.records)?,
                (tag, Some(detail)) => writeln!(f, "  {}: {} ({})", year, tag, detail)?,
                (tag, None) => writeln!(f, "  {}: {}", year, tag)?,
            }
        }
        write!(
            f,
            "{} records from {} of {} pages",
            self.total_records(),
            self.count(OutcomeTag::Extracted),
            self.per_year.len()
        )
    }
}
