use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which league's year pages to scrape.
///
/// The year menu lists both leagues side by side and the per-year pages for
/// the two leagues share a URL scheme, so everything league-specific the
/// pipeline needs to tell them apart lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[clap(rename_all = "lowercase")]
pub enum League {
    #[default]
    American,
    National,
}

impl League {
    pub fn name(self) -> &'static str {
        match self {
            League::American => "American League",
            League::National => "National League",
        }
    }

    pub fn opponent(self) -> League {
        match self {
            League::American => League::National,
            League::National => League::American,
        }
    }

    /// Title text that marks a page as belonging to the other league.
    pub fn wrong_league_marker(self) -> &'static str {
        self.opponent().name()
    }

    /// Position of this league's section among the year menu's `ba-table` containers.
    pub fn default_section_index(self) -> usize {
        match self {
            League::American => 0,
            League::National => 1,
        }
    }

    /// Per-year page suffix, e.g. `yr1975a.shtml`.
    pub fn page_suffix(self) -> &'static str {
        match self {
            League::American => "a.shtml",
            League::National => "n.shtml",
        }
    }

    /// Snake-case slug used in output file names.
    pub fn slug(self) -> &'static str {
        match self {
            League::American => "american_league",
            League::National => "national_league",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_league_marker_is_opponent_name() {
        assert_eq!(League::American.wrong_league_marker(), "National League");
        assert_eq!(League::National.wrong_league_marker(), "American League");
    }

    #[test]
    fn test_page_suffix() {
        assert!("yr1975a.shtml".ends_with(League::American.page_suffix()));
        assert!("yr1975n.shtml".ends_with(League::National.page_suffix()));
        assert!(!"yr1975n.shtml".ends_with(League::American.page_suffix()));
    }

    #[test]
    fn test_deserialize_lowercase() {
        let league: League = serde_json::from_str("\"national\"").unwrap();
        assert_eq!(league, League::National);
    }
}
