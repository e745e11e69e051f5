//! Row classification for the standings table.
//!
//! Standings are laid out as one flat table: a division header row (just
//! "East", "Central" or "West"), a repeated column header, then one row per
//! team. Which division a team row belongs to is only known from the last
//! header above it, so the pass carries a [`SectionState`] from row to row.

use log::debug;

use super::record::StandingsRecord;

pub const DIVISION_LABELS: [&str; 3] = ["East", "Central", "West"];
pub const COLUMN_HEADER_MARKER: &str = "Team [Click for roster]";
pub const DATA_ROW_WIDTH: usize = 7;

/// Shape of a single row, judged without any context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowClass<'a> {
    Division(&'a str),
    Data(&'a [String]),
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    ColumnHeader,
    /// Wrong number of cells for a team row.
    Shape,
    /// Team row seen before any division header.
    NoDivision,
    /// A numeric cell did not coerce.
    BadField,
}

pub fn classify_row(cells: &[String]) -> RowClass<'_> {
    let Some(first) = cells.first() else {
        return RowClass::Skip(SkipReason::Blank);
    };
    if let Some(label) = DIVISION_LABELS.iter().find(|label| **label == first.as_str()) {
        return RowClass::Division(*label);
    }
    if first.contains(COLUMN_HEADER_MARKER) {
        return RowClass::Skip(SkipReason::ColumnHeader);
    }
    if cells.len() == DATA_ROW_WIDTH {
        return RowClass::Data(cells);
    }
    RowClass::Skip(SkipReason::Shape)
}

/// What a row did to the pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Emitted(StandingsRecord),
    DivisionSet,
    Skipped(SkipReason),
}

/// Division context carried across the rows of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    current_division: Option<String>,
}

impl SectionState {
    pub fn current_division(&self) -> Option<&str> {
        self.current_division.as_deref()
    }

    /// Advance over one classified row.
    pub fn step(self, year: u16, row: RowClass<'_>) -> (Self, RowOutcome) {
        match row {
            RowClass::Division(label) => (
                SectionState {
                    current_division: Some(label.to_string()),
                },
                RowOutcome::DivisionSet,
            ),
            RowClass::Data(cells) => {
                let outcome = match self.current_division() {
                    None => RowOutcome::Skipped(SkipReason::NoDivision),
                    Some(division) => match StandingsRecord::from_cells(year, division, cells) {
                        Some(record) => RowOutcome::Emitted(record),
                        None => RowOutcome::Skipped(SkipReason::BadField),
                    },
                };
                (self, outcome)
            }
            RowClass::Skip(reason) => (self, RowOutcome::Skipped(reason)),
        }
    }
}

/// Counts of what the pass saw, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowTally {
    pub rows: usize,
    pub divisions: usize,
    pub emitted: usize,
    pub blank: usize,
    pub column_headers: usize,
    pub wrong_shape: usize,
    pub no_division: usize,
    pub bad_field: usize,
}

impl RowTally {
    fn record(&mut self, outcome: &RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Emitted(_) => self.emitted += 1,
            RowOutcome::DivisionSet => self.divisions += 1,
            RowOutcome::Skipped(SkipReason::Blank) => self.blank += 1,
            RowOutcome::Skipped(SkipReason::ColumnHeader) => self.column_headers += 1,
            RowOutcome::Skipped(SkipReason::Shape) => self.wrong_shape += 1,
            RowOutcome::Skipped(SkipReason::NoDivision) => self.no_division += 1,
            RowOutcome::Skipped(SkipReason::BadField) => self.bad_field += 1,
        }
    }
}

/// Classify every row of one table in order and collect the team records.
pub fn classify_rows<R>(year: u16, rows: &[R]) -> (Vec<StandingsRecord>, RowTally)
where
    R: AsRef<[String]>,
{
    let mut records = Vec::new();
    let mut tally = RowTally::default();
    let mut state = SectionState::default();

    for row in rows {
        let cells = row.as_ref();
        let (next, outcome) = state.step(year, classify_row(cells));
        state = next;
        tally.record(&outcome);
        match outcome {
            RowOutcome::Emitted(record) => {
                debug!(
                    "Added team: {} ({}-{}) in {}",
                    record.team, record.wins, record.losses, record.division
                );
                records.push(record);
            }
            RowOutcome::DivisionSet => {
                debug!("Found division: {}", cells[0]);
            }
            RowOutcome::Skipped(SkipReason::BadField) => {
                debug!("Dropped row with unparsable fields: {:?}", cells);
            }
            RowOutcome::Skipped(_) => {}
        }
    }

    (records, tally)
}
