//! Hand-maintained companion datasets shipped next to the scraped standings.

use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScrapeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Champion {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "World_Series_Champion")]
    pub champion: &'static str,
    /// `AL`, `NL`, or a note for seasons without a Series.
    #[serde(rename = "League")]
    pub league: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MvpWinner {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "AL_MVP_Winner")]
    pub player: &'static str,
    #[serde(rename = "Team")]
    pub team: &'static str,
    #[serde(rename = "Position")]
    pub position: &'static str,
}

const fn champion(year: u16, champion: &'static str, league: &'static str) -> Champion {
    Champion {
        year,
        champion,
        league,
    }
}

const fn mvp(
    year: u16,
    player: &'static str,
    team: &'static str,
    position: &'static str,
) -> MvpWinner {
    MvpWinner {
        year,
        player,
        team,
        position,
    }
}

pub const WORLD_SERIES_CHAMPIONS: &[Champion] = &[
    champion(1975, "Cincinnati Reds", "NL"),
    champion(1976, "Cincinnati Reds", "NL"),
    champion(1977, "New York Yankees", "AL"),
    champion(1978, "New York Yankees", "AL"),
    champion(1979, "Pittsburgh Pirates", "NL"),
    champion(1980, "Philadelphia Phillies", "NL"),
    champion(1981, "Los Angeles Dodgers", "NL"),
    champion(1982, "St. Louis Cardinals", "NL"),
    champion(1983, "Baltimore Orioles", "AL"),
    champion(1984, "Detroit Tigers", "AL"),
    champion(1985, "Kansas City Royals", "AL"),
    champion(1986, "New York Mets", "NL"),
    champion(1987, "Minnesota Twins", "AL"),
    champion(1988, "Los Angeles Dodgers", "NL"),
    champion(1989, "Oakland Athletics", "AL"),
    champion(1990, "Cincinnati Reds", "NL"),
    champion(1991, "Minnesota Twins", "AL"),
    champion(1992, "Toronto Blue Jays", "AL"),
    champion(1993, "Toronto Blue Jays", "AL"),
    champion(1994, "No World Series", "Strike"),
    champion(1995, "Atlanta Braves", "NL"),
    champion(1996, "New York Yankees", "AL"),
    champion(1997, "Florida Marlins", "NL"),
    champion(1998, "New York Yankees", "AL"),
    champion(1999, "New York Yankees", "AL"),
    champion(2000, "New York Yankees", "AL"),
    champion(2001, "Arizona Diamondbacks", "NL"),
    champion(2002, "Anaheim Angels", "AL"),
    champion(2003, "Florida Marlins", "NL"),
    champion(2004, "Boston Red Sox", "AL"),
    champion(2005, "Chicago White Sox", "AL"),
    champion(2006, "St. Louis Cardinals", "NL"),
    champion(2007, "Boston Red Sox", "AL"),
    champion(2008, "Philadelphia Phillies", "NL"),
    champion(2009, "New York Yankees", "AL"),
    champion(2010, "San Francisco Giants", "NL"),
    champion(2011, "St. Louis Cardinals", "NL"),
    champion(2012, "San Francisco Giants", "NL"),
    champion(2013, "Boston Red Sox", "AL"),
    champion(2014, "San Francisco Giants", "NL"),
    champion(2015, "Kansas City Royals", "AL"),
    champion(2016, "Chicago Cubs", "NL"),
    champion(2017, "Houston Astros", "AL"),
    champion(2018, "Boston Red Sox", "AL"),
    champion(2019, "Washington Nationals", "NL"),
    champion(2020, "Los Angeles Dodgers", "NL"),
    champion(2021, "Atlanta Braves", "NL"),
    champion(2022, "Houston Astros", "AL"),
    champion(2023, "Texas Rangers", "AL"),
    champion(2024, "Los Angeles Dodgers", "NL"),
    champion(2025, "TBD", "TBD"),
];

pub const AL_MVP_WINNERS: &[MvpWinner] = &[
    mvp(1975, "Fred Lynn", "Boston Red Sox", "OF"),
    mvp(1976, "Thurman Munson", "New York Yankees", "C"),
    mvp(1977, "Rod Carew", "Minnesota Twins", "1B"),
    mvp(1978, "Jim Rice", "Boston Red Sox", "OF"),
    mvp(1979, "Don Baylor", "California Angels", "DH"),
    mvp(1980, "George Brett", "Kansas City Royals", "3B"),
    mvp(1981, "Rollie Fingers", "Milwaukee Brewers", "P"),
    mvp(1982, "Robin Yount", "Milwaukee Brewers", "SS"),
    mvp(1983, "Cal Ripken Jr.", "Baltimore Orioles", "SS"),
    mvp(1984, "Willie Hernandez", "Detroit Tigers", "P"),
    mvp(1985, "Don Mattingly", "New York Yankees", "1B"),
    mvp(1986, "Roger Clemens", "Boston Red Sox", "P"),
    mvp(1987, "George Bell", "Toronto Blue Jays", "OF"),
    mvp(1988, "Jose Canseco", "Oakland Athletics", "OF"),
    mvp(1989, "Robin Yount", "Milwaukee Brewers", "OF"),
    mvp(1990, "Rickey Henderson", "Oakland Athletics", "OF"),
    mvp(1991, "Cal Ripken Jr.", "Baltimore Orioles", "SS"),
    mvp(1992, "Dennis Eckersley", "Oakland Athletics", "P"),
    mvp(1993, "Frank Thomas", "Chicago White Sox", "1B"),
    mvp(1994, "Frank Thomas", "Chicago White Sox", "1B"),
    mvp(1995, "Mo Vaughn", "Boston Red Sox", "1B"),
    mvp(1996, "Juan Gonzalez", "Texas Rangers", "OF"),
    mvp(1997, "Ken Griffey Jr.", "Seattle Mariners", "OF"),
    mvp(1998, "Juan Gonzalez", "Texas Rangers", "OF"),
    mvp(1999, "Ivan Rodriguez", "Texas Rangers", "C"),
    mvp(2000, "Jason Giambi", "Oakland Athletics", "1B"),
    mvp(2001, "Ichiro Suzuki", "Seattle Mariners", "OF"),
    mvp(2002, "Miguel Tejada", "Oakland Athletics", "SS"),
    mvp(2003, "Alex Rodriguez", "Texas Rangers", "SS"),
    mvp(2004, "Vladimir Guerrero", "Anaheim Angels", "OF"),
    mvp(2005, "Alex Rodriguez", "New York Yankees", "3B"),
    mvp(2006, "Justin Morneau", "Minnesota Twins", "1B"),
    mvp(2007, "Alex Rodriguez", "New York Yankees", "3B"),
    mvp(2008, "Dustin Pedroia", "Boston Red Sox", "2B"),
    mvp(2009, "Joe Mauer", "Minnesota Twins", "C"),
    mvp(2010, "Josh Hamilton", "Texas Rangers", "OF"),
    mvp(2011, "Justin Verlander", "Detroit Tigers", "P"),
    mvp(2012, "Miguel Cabrera", "Detroit Tigers", "3B"),
    mvp(2013, "Miguel Cabrera", "Detroit Tigers", "1B"),
    mvp(2014, "Mike Trout", "Los Angeles Angels", "OF"),
    mvp(2015, "Josh Donaldson", "Toronto Blue Jays", "3B"),
    mvp(2016, "Mike Trout", "Los Angeles Angels", "OF"),
    mvp(2017, "Jose Altuve", "Houston Astros", "2B"),
    mvp(2018, "Mookie Betts", "Boston Red Sox", "OF"),
    mvp(2019, "Mike Trout", "Los Angeles Angels", "OF"),
    mvp(2020, "Jose Abreu", "Chicago White Sox", "1B"),
    mvp(2021, "Shohei Ohtani", "Los Angeles Angels", "DH/P"),
    mvp(2022, "Aaron Judge", "New York Yankees", "OF"),
    mvp(2023, "Corey Seager", "Texas Rangers", "SS"),
    mvp(2024, "Aaron Judge", "New York Yankees", "OF"),
    mvp(2025, "TBD", "TBD", "TBD"),
];

pub const CHAMPIONS_FILE: &str = "world_series_champions_1975_to_2025.csv";
pub const MVP_FILE: &str = "american_league_mvp_winners_1975_to_2025.csv";

/// Write both reference datasets into `dir`, replacing existing files.
pub fn write_reference_datasets<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| ScrapeError::write(dir, e))?;

    let champions = dir.join(CHAMPIONS_FILE);
    write_rows(&champions, WORLD_SERIES_CHAMPIONS)?;
    let mvps = dir.join(MVP_FILE);
    write_rows(&mvps, AL_MVP_WINNERS)?;
    Ok(vec![champions, mvps])
}

fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = Writer::from_path(path).map_err(|e| ScrapeError::write(path, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| ScrapeError::write(path, e))?;
    }
    writer.flush().map_err(|e| ScrapeError::write(path, e))
}
