use serde::{Deserialize, Serialize};
use std::fmt;

/// One team's line in a season's standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRecord {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "Losses")]
    pub losses: u32,
    #[serde(rename = "Ties")]
    pub ties: u32,
    #[serde(rename = "WP")]
    pub win_percentage: f64,
    #[serde(rename = "GB")]
    pub games_behind: GamesBehind,
    #[serde(rename = "Payroll")]
    pub payroll: Option<f64>,
}

impl StandingsRecord {
    /// Build a record from the seven positional cells of a data row.
    ///
    /// Returns `None` if a numeric field does not coerce.
    pub fn from_cells(year: u16, division: &str, cells: &[String]) -> Option<Self> {
        let [team, wins, losses, ties, wp, gb, payroll] = cells else {
            return None;
        };
        if team.is_empty() || division.is_empty() {
            return None;
        }
        Some(Self {
            year,
            division: division.to_string(),
            team: team.clone(),
            wins: parse_count(wins)?,
            losses: parse_count(losses)?,
            ties: parse_ties(ties)?,
            win_percentage: parse_win_percentage(wp)?,
            games_behind: GamesBehind::from(gb.clone()),
            payroll: parse_payroll(payroll)?,
        })
    }

    /// Summed in `u64`; each count is an unchecked `u32` off the page.
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.ties)
    }

    /// Win percentage recomputed from the record itself.
    pub fn computed_win_percentage(&self) -> Option<f64> {
        match self.games_played() {
            0 => None,
            games => Some(f64::from(self.wins) / games as f64),
        }
    }
}

/// Games behind the division leader.
///
/// The leader's cell holds a dash rather than a number, and older seasons
/// use `½` for half games, so anything that does not read as a number is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GamesBehind {
    Games(f64),
    Text(String),
}

impl GamesBehind {
    pub fn games(&self) -> Option<f64> {
        match self {
            GamesBehind::Games(games) => Some(*games),
            GamesBehind::Text(_) => None,
        }
    }
}

impl From<String> for GamesBehind {
    fn from(text: String) -> Self {
        let trimmed = text.trim();
        let (whole, half) = match trimmed.strip_suffix('½') {
            Some(whole) => (whole.trim(), 0.5),
            None => (trimmed, 0.0),
        };
        let games = if whole.is_empty() && half > 0.0 {
            Some(0.0)
        } else {
            whole.parse::<f64>().ok().filter(|g| g.is_finite())
        };
        match games {
            Some(games) => GamesBehind::Games(games + half),
            None => GamesBehind::Text(trimmed.to_string()),
        }
    }
}

impl From<GamesBehind> for String {
    fn from(gb: GamesBehind) -> Self {
        gb.to_string()
    }
}

impl fmt::Display for GamesBehind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamesBehind::Games(games) => write!(f, "{}", games),
            GamesBehind::Text(text) => f.write_str(text),
        }
    }
}

fn parse_count(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Older tables leave the ties column blank.
fn parse_ties(text: &str) -> Option<u32> {
    match text.trim() {
        "" => Some(0),
        ties => ties.parse().ok(),
    }
}

fn parse_win_percentage(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|wp| (0.0..=1.0).contains(wp))
}

/// `Some(None)` for placeholders like `-` or `N/A`, `None` for a value that
/// has digits but does not parse.
fn parse_payroll(text: &str) -> Option<Option<f64>> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Some(None);
    }
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().map(Some)
}
