//! Command line pieces shared by the binaries.

use clap::Args;
use std::path::PathBuf;

use crate::config::{Backend, ScraperConfig};
use crate::error::Result;
use crate::league::League;

/// Flags that map onto [`ScraperConfig`]. Anything left unset keeps the
/// value from `--config` or the built-in default.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// League to scrape
    #[arg(long, value_enum)]
    pub league: Option<League>,

    /// First season to include
    #[arg(long)]
    pub min_year: Option<u16>,

    /// Last season to include
    #[arg(long)]
    pub max_year: Option<u16>,

    /// Year menu page listing every season
    #[arg(long)]
    pub index_url: Option<String>,

    /// Wait after each page load, in milliseconds
    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Page fetching backend
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headful: bool,

    /// Position of the league's section on the year menu
    #[arg(long)]
    pub section_index: Option<usize>,

    /// Directory for page captures of unparsable pages
    #[arg(long)]
    pub debug_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolve defaults, then the config file, then flags.
    pub fn load(&self) -> Result<ScraperConfig> {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut ScraperConfig) {
        if let Some(league) = self.league {
            config.league = league;
        }
        if let Some(min_year) = self.min_year {
            config.min_year = min_year;
        }
        if let Some(max_year) = self.max_year {
            config.max_year = max_year;
        }
        if let Some(index_url) = &self.index_url {
            config.index_url = index_url.clone();
        }
        if let Some(delay) = self.settle_delay_ms {
            config.settle_delay_ms = delay;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.headful {
            config.headless = false;
        }
        if let Some(section_index) = self.section_index {
            config.section_index = Some(section_index);
        }
        if let Some(debug_dir) = &self.debug_dir {
            config.debug_dir = debug_dir.clone();
        }
    }
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--league",
            "national",
            "--min-year",
            "1990",
            "--backend",
            "http",
            "--headful",
        ]);
        let config = cli.config.load().unwrap();
        assert_eq!(config.league, League::National);
        assert_eq!(config.min_year, 1990);
        assert_eq!(config.max_year, 2025);
        assert_eq!(config.backend, Backend::Http);
        assert!(!config.headless);
    }

    #[test]
    fn test_invalid_combination_rejected() {
        let cli = TestCli::parse_from(["test", "--min-year", "2030", "--max-year", "2000"]);
        assert!(cli.config.load().is_err());
    }
}
