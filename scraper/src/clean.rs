//! Post-processing for a finished standings batch.

use log::{info, warn};
use std::collections::HashSet;

use crate::extract::StandingsRecord;

/// Largest gap tolerated between the printed and recomputed win percentage.
/// The source prints three decimals, so anything past rounding is suspect.
pub const WIN_PERCENTAGE_TOLERANCE: f64 = 0.002;

#[derive(Debug, Clone, PartialEq)]
pub struct CleanSummary {
    pub records: Vec<StandingsRecord>,
    pub duplicates_removed: usize,
    /// (year, team) of rows whose WP disagrees with their W-L-T.
    pub win_percentage_mismatches: Vec<(u16, String)>,
}

/// Every column of a record, hashable. Split seasons list a team twice
/// under one division, so only fully identical rows are duplicates.
#[derive(Debug, PartialEq, Eq, Hash)]
struct RowKey {
    year: u16,
    division: String,
    team: String,
    wins: u32,
    losses: u32,
    ties: u32,
    win_percentage: u64,
    games_behind: String,
    payroll: Option<u64>,
}

impl From<&StandingsRecord> for RowKey {
    fn from(r: &StandingsRecord) -> Self {
        Self {
            year: r.year,
            division: r.division.clone(),
            team: r.team.clone(),
            wins: r.wins,
            losses: r.losses,
            ties: r.ties,
            win_percentage: r.win_percentage.to_bits(),
            games_behind: r.games_behind.to_string(),
            payroll: r.payroll.map(f64::to_bits),
        }
    }
}

/// Drop fully duplicated rows, flag inconsistent win percentages, and order
/// by year, division, then wins descending.
pub fn clean_records(records: Vec<StandingsRecord>) -> CleanSummary {
    let before = records.len();
    let mut seen = HashSet::new();
    let mut records: Vec<StandingsRecord> = records
        .into_iter()
        .filter(|r| seen.insert(RowKey::from(r)))
        .collect();
    let duplicates_removed = before - records.len();

    let win_percentage_mismatches = records
        .iter()
        .filter(|r| {
            r.computed_win_percentage()
                .map(|computed| (computed - r.win_percentage).abs() > WIN_PERCENTAGE_TOLERANCE)
                .unwrap_or(false)
        })
        .map(|r| {
            warn!(
                "{} {}: WP {} does not match {}-{}-{}",
                r.year, r.team, r.win_percentage, r.wins, r.losses, r.ties
            );
            (r.year, r.team.clone())
        })
        .collect();

    records.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.division.cmp(&b.division))
            .then_with(|| b.wins.cmp(&a.wins))
    });

    info!(
        "Cleaned {} records ({} duplicates removed)",
        records.len(),
        duplicates_removed
    );

    CleanSummary {
        records,
        duplicates_removed,
        win_percentage_mismatches,
    }
}
