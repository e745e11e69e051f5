use super::fake_session::FakeSession;
use super::fixtures;
use super::save_failed_html;
use crate::clean::clean_records;
use crate::diagnostics::Diagnostics;
use crate::extract::{parse_standings_page, Extractor, FirstRowContains, GamesBehind, PageParse};
use crate::league::League;
use crate::outcome::{EmptyReason, ExtractionOutcome, OutcomeTag};
use crate::session::document_title;
use anyhow::Result;

fn parse_fixture(name: &str, year: u16, league: League) -> PageParse {
    let html = fixtures::load_html_fixture(name);
    parse_standings_page(
        &document_title(&html),
        &html,
        year,
        league,
        &FirstRowContains::new("Team Standings"),
    )
}

fn extractor(dir: &std::path::Path) -> Extractor {
    Extractor::new(
        League::American,
        Box::new(FirstRowContains::new("Team Standings")),
        Diagnostics::new(dir),
    )
}

// Test successful parsing of a full season page
#[test]
fn test_sample_season_parsing() {
    let PageParse::Table { records, tally } = parse_fixture("al_1995", 1995, League::American)
    else {
        save_failed_html(&fixtures::load_html_fixture("al_1995"), "al_1995_test").unwrap();
        panic!("standings table not found in al_1995 fixture");
    };

    assert_eq!(records.len(), 14);
    assert_eq!(tally.divisions, 3);
    assert_eq!(tally.column_headers, 3);
    assert_eq!(tally.wrong_shape, 4);

    let red_sox = &records[0];
    assert_eq!(red_sox.year, 1995);
    assert_eq!(red_sox.division, "East");
    assert_eq!(red_sox.team, "Boston Red Sox");
    assert_eq!((red_sox.wins, red_sox.losses, red_sox.ties), (86, 58, 0));
    assert_eq!(red_sox.win_percentage, 0.597);
    assert_eq!(red_sox.games_behind, GamesBehind::Text("--".into()));
    assert_eq!(red_sox.payroll, Some(38_090_000.0));

    let per_division = |division: &str| records.iter().filter(|r| r.division == division).count();
    assert_eq!(per_division("East"), 5);
    assert_eq!(per_division("Central"), 5);
    assert_eq!(per_division("West"), 4);

    let brewers = records.iter().find(|r| r.team == "Milwaukee Brewers").unwrap();
    assert_eq!(brewers.payroll, None);
    assert_eq!(brewers.division, "Central");

    let rangers = records.iter().find(|r| r.team == "Texas Rangers").unwrap();
    assert_eq!(rangers.games_behind, GamesBehind::Games(4.5));
    assert_eq!(rangers.division, "West");
}

// A lone division header followed by one team row
#[test]
fn test_minimal_standings_table() {
    let html = r#"
        <html><head><title>2004 American League</title></head><body>
        <table>
          <tr><td colspan="7">Team Standings</td></tr>
          <tr><td>East</td></tr>
          <tr>
            <td>Red Sox</td><td>90</td><td>72</td><td>0</td>
            <td>0.556</td><td>—</td><td>180000000</td>
          </tr>
        </table>
        </body></html>"#;
    let parsed = parse_standings_page(
        "2004 American League",
        html,
        2004,
        League::American,
        &FirstRowContains::new("Team Standings"),
    );
    let PageParse::Table { records, .. } = parsed else {
        panic!("expected a table, got {:?}", parsed);
    };
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].division, "East");
    assert_eq!(records[0].team, "Red Sox");
    assert_eq!(records[0].wins, 90);
    assert_eq!(records[0].losses, 72);
    assert_eq!(records[0].payroll, Some(180_000_000.0));
}

#[test]
fn test_opposing_league_page_is_skipped() {
    assert_eq!(
        parse_fixture("nl_1996", 1996, League::American),
        PageParse::WrongLeague
    );
}

#[test]
fn test_national_league_scrape_accepts_national_page() {
    let PageParse::Table { records, .. } = parse_fixture("nl_1996", 1996, League::National) else {
        panic!("expected the National League table");
    };
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].team, "Montreal Expos");
    assert_eq!(records[1].games_behind.games(), Some(8.0));
}

#[test]
fn test_marker_outside_first_row_is_not_found() {
    assert_eq!(
        parse_fixture("al_1997_redesign", 1997, League::American),
        PageParse::TableNotFound
    );
}

#[test]
fn test_wrong_league_has_no_capture() {
    let dir = tempfile::tempdir().unwrap();
    let url = "https://www.baseball-almanac.com/yearly/yr1996a.shtml";
    let mut session = FakeSession::new().with_page(url, fixtures::load_html_fixture("nl_1996"));

    let outcome = extractor(dir.path()).extract(&mut session, 1996, url);

    assert_eq!(outcome, ExtractionOutcome::Empty(EmptyReason::WrongLeague));
    assert!(outcome.records().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_table_not_found_writes_capture() {
    let dir = tempfile::tempdir().unwrap();
    let url = "https://www.baseball-almanac.com/yearly/yr1997a.shtml";
    let html = fixtures::load_html_fixture("al_1997_redesign");
    let mut session = FakeSession::new().with_page(url, html.clone());

    let outcome = extractor(dir.path()).extract(&mut session, 1997, url);

    assert_eq!(outcome.tag(), OutcomeTag::TableNotFound);
    let capture = dir.path().join("debug_1997_page.html");
    assert_eq!(std::fs::read_to_string(capture).unwrap(), html);
}

#[test]
fn test_navigation_failure_becomes_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = FakeSession::new();

    let outcome = extractor(dir.path()).extract(
        &mut session,
        1994,
        "https://example.invalid/yr1994a.shtml",
    );

    match outcome {
        ExtractionOutcome::Empty(EmptyReason::NavigationError(message)) => {
            assert!(message.contains("failed to load https://example.invalid/yr1994a.shtml"));
            assert!(message.contains("ERR_NAME_NOT_RESOLVED"));
        }
        other => panic!("expected navigation error, got {:?}", other),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// Regression tests - every saved failure page must now parse into records
#[test]
fn test_regression_failures() -> Result<()> {
    use std::fs;

    let failures_dir = fixtures::failures_dir();
    if !failures_dir.exists() {
        println!("No failure fixtures saved");
        return Ok(());
    }

    for entry in fs::read_dir(&failures_dir)? {
        let path = entry?.path();
        if path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("Testing regression case: {}", name);

        // Failure fixtures are named `{year}_{description}`
        let year: u16 = name
            .split('_')
            .next()
            .and_then(|year| year.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("failure fixture {} is not named by year", name))?;
        let html = fixtures::load_failure_html(&name)
            .ok_or_else(|| anyhow::anyhow!("could not read {}", name))?;

        let parsed = parse_standings_page(
            &document_title(&html),
            &html,
            year,
            League::American,
            &FirstRowContains::new("Team Standings"),
        );
        match parsed {
            PageParse::Table { records, .. } if !records.is_empty() => {}
            other => anyhow::bail!("regression case {} parsed as {:?}", name, other),
        }
    }
    Ok(())
}

#[test]
fn test_split_season_layout() {
    let html = fixtures::load_failure_html("1981_split_season").unwrap();
    let PageParse::Table { records, tally } = parse_standings_page(
        &document_title(&html),
        &html,
        1981,
        League::American,
        &FirstRowContains::new("Team Standings"),
    ) else {
        panic!("expected a table");
    };

    let teams: Vec<_> = records
        .iter()
        .map(|r| (r.team.as_str(), r.division.as_str()))
        .collect();
    assert_eq!(
        teams,
        vec![
            ("New York Yankees", "East"),
            ("Baltimore Orioles", "East"),
            ("Oakland Athletics", "West"),
            ("Texas Rangers", "West"),
            ("Milwaukee Brewers", "East"),
            ("New York Yankees", "East"),
        ]
    );
    assert!(records.iter().all(|r| r.ties == 0 && r.payroll.is_none()));
    assert_eq!(records[3].games_behind, GamesBehind::Games(1.5));
    assert_eq!(tally.blank, 1);
}

// Both halves of a split season survive cleaning
#[test]
fn test_split_season_rows_survive_cleaning() {
    let html = fixtures::load_failure_html("1981_split_season").unwrap();
    let PageParse::Table { records, .. } = parse_standings_page(
        &document_title(&html),
        &html,
        1981,
        League::American,
        &FirstRowContains::new("Team Standings"),
    ) else {
        panic!("expected a table");
    };

    let summary = clean_records(records);

    assert_eq!(summary.duplicates_removed, 0);
    assert_eq!(summary.records.len(), 6);
    let yankees: Vec<_> = summary
        .records
        .iter()
        .filter(|r| r.team == "New York Yankees")
        .map(|r| (r.wins, r.losses))
        .collect();
    assert_eq!(yankees, vec![(34, 22), (25, 26)]);
}
