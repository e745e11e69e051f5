use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, ScrapeError};
use crate::league::League;

pub const DEFAULT_INDEX_URL: &str = "https://www.baseball-almanac.com/yearmenu.shtml";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TABLE_MARKER: &str = "Team Standings";

/// How pages are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum Backend {
    /// Headless Chrome; renders client-side content
    #[default]
    Chrome,
    /// Plain HTTP fetch; no script execution
    Http,
}

/// Inclusive range of supported years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
}

impl YearRange {
    pub fn new(min: u16, max: u16) -> Result<Self> {
        if min > max {
            return Err(ScrapeError::Config(format!(
                "min year {} is after max year {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, year: u16) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1975,
            max: 2025,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub index_url: String,
    pub league: League,
    pub min_year: u16,
    pub max_year: u16,
    /// Fixed wait after every navigation, in milliseconds.
    pub settle_delay_ms: u64,
    pub user_agent: String,
    pub backend: Backend,
    pub headless: bool,
    /// Overrides the league's default position among the year menu sections.
    pub section_index: Option<usize>,
    /// Text the first row of the standings table must contain.
    pub table_marker: String,
    pub output: Option<PathBuf>,
    pub debug_dir: PathBuf,
    pub report: Option<PathBuf>,
    pub clean: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        let range = YearRange::default();
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            league: League::default(),
            min_year: range.min,
            max_year: range.max,
            settle_delay_ms: 5_000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            backend: Backend::default(),
            headless: true,
            section_index: None,
            table_marker: DEFAULT_TABLE_MARKER.to_string(),
            output: None,
            debug_dir: PathBuf::from("data"),
            report: None,
            clean: false,
        }
    }
}

impl ScraperConfig {
    /// Load a JSON config file; fields it omits keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ScrapeError::Config(format!("cannot open {}: {}", path.display(), e))
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ScrapeError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.year_range()?;
        url::Url::parse(&self.index_url).map_err(|e| {
            ScrapeError::Config(format!("index url {:?} is invalid: {}", self.index_url, e))
        })?;
        if self.user_agent.trim().is_empty() {
            return Err(ScrapeError::Config("user agent must not be empty".into()));
        }
        if self.table_marker.trim().is_empty() {
            return Err(ScrapeError::Config("table marker must not be empty".into()));
        }
        Ok(())
    }

    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.min_year, self.max_year)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn section_index(&self) -> usize {
        self.section_index
            .unwrap_or_else(|| self.league.default_section_index())
    }

    /// Destination CSV, derived from league and years unless set explicitly.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from("data").join(format!(
                "{}_standings_{}_to_{}.csv",
                self.league.slug(),
                self.min_year,
                self.max_year
            )),
        }
    }
}
