//! Year menu discovery.
//!
//! The year menu has no stable ids. Each league's links sit in a `div` whose
//! class contains `ba-table`, and the sections appear in a fixed order, so
//! the league's section is picked by position. Fragile, but it is the only
//! structure the page offers.

use log::{debug, error, info, warn};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use crate::config::{ScraperConfig, YearRange};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::league::League;
use crate::session::{collapse_whitespace, PageSession};

/// Href token shared by every per-year page.
const YEAR_PAGE_TOKEN: &str = "yr";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLink {
    pub year: u16,
    pub url: String,
}

/// Where and what to look for on the year menu.
#[derive(Debug, Clone)]
pub struct YearIndex {
    pub index_url: String,
    pub league: League,
    pub section_index: usize,
    pub range: YearRange,
}

impl YearIndex {
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            index_url: config.index_url.clone(),
            league: config.league,
            section_index: config.section_index(),
            range: config.year_range()?,
        })
    }

    /// Load the year menu and collect the league's year links in page order.
    ///
    /// Never fails: an unreachable menu or a missing section yields an empty
    /// list, with a page capture for the latter.
    pub fn discover<S: PageSession + ?Sized>(
        &self,
        session: &mut S,
        diagnostics: &Diagnostics,
    ) -> Vec<YearLink> {
        info!("Getting {} year links from {}", self.league, self.index_url);

        if let Err(e) = session.navigate(&self.index_url) {
            error!("Could not load year menu: {:#}", anyhow::Error::from(e));
            return Vec::new();
        }

        let html = match session.content() {
            Ok(html) => html,
            Err(e) => {
                error!("Could not read year menu: {:#}", anyhow::Error::from(e));
                return Vec::new();
            }
        };

        match self.parse(&html) {
            Some(links) => {
                info!(
                    "Found {} {} year links from {} to {}",
                    links.len(),
                    self.league,
                    self.range.min,
                    self.range.max
                );
                links
            }
            None => {
                warn!(
                    "Could not find {} section #{} on the year menu",
                    self.league, self.section_index
                );
                diagnostics.capture(session, "year_menu");
                Vec::new()
            }
        }
    }

    /// Extract year links from year menu HTML.
    ///
    /// Returns `None` when the league's section container is missing. Links
    /// that do not look like a year page of this league inside the range are
    /// skipped; the first link seen for a year wins.
    pub fn parse(&self, html: &str) -> Option<Vec<YearLink>> {
        let base = match Url::parse(&self.index_url) {
            Ok(base) => base,
            Err(e) => {
                error!("Index url {} is invalid: {}", self.index_url, e);
                return None;
            }
        };

        let document = Html::parse_document(html);
        let section_selector = Selector::parse(r#"div[class*="ba-table"]"#).unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let section = document.select(&section_selector).nth(self.section_index)?;

        let mut seen = HashSet::new();
        let mut links = Vec::new();
        for anchor in section.select(&link_selector) {
            let text = collapse_whitespace(&anchor.text().collect::<String>());
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let Some(link) = self.accept(&base, &text, href) else {
                continue;
            };
            if seen.insert(link.year) {
                debug!("Added year link: {} -> {}", link.year, link.url);
                links.push(link);
            }
        }
        Some(links)
    }

    fn accept(&self, base: &Url, text: &str, href: &str) -> Option<YearLink> {
        if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let url = base.join(href).ok()?;
        let url = url.as_str();
        if !url.contains(YEAR_PAGE_TOKEN) || !url.ends_with(self.league.page_suffix()) {
            return None;
        }
        let year: u16 = text.parse().ok()?;
        if !self.range.contains(year) {
            return None;
        }
        Some(YearLink {
            year,
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(league: League, min: u16, max: u16) -> YearIndex {
        YearIndex {
            index_url: "https://www.baseball-almanac.com/yearmenu.shtml".into(),
            league,
            section_index: league.default_section_index(),
            range: YearRange::new(min, max).unwrap(),
        }
    }

    const MENU: &str = r#"
        <html><body>
        <div class="ba-table intro"><a href="yearly/yr1975a.shtml">1975</a>
          <a href="yearly/yr1976a.shtml"> 1976 </a>
          <a href="yearly/yr1976a.shtml">1976</a>
          <a href="yearly/yr1977a.shtml">Next</a>
          <a href="yearly/yr19a.shtml">197</a>
          <a href="/yearly/yr1978n.shtml">1978</a>
          <a href="/leaders/yr1979a.html">1979</a>
          <a href="yearly/yr1901a.shtml">1901</a>
          <a>1980</a>
        </div>
        <div class="ba-table"><a href="yearly/yr1975n.shtml">1975</a></div>
        </body></html>"#;

    #[test]
    fn test_parse_filters_and_resolves_links() {
        let links = index(League::American, 1975, 2025).parse(MENU).unwrap();
        assert_eq!(
            links,
            vec![
                YearLink {
                    year: 1975,
                    url: "https://www.baseball-almanac.com/yearly/yr1975a.shtml".into()
                },
                YearLink {
                    year: 1976,
                    url: "https://www.baseball-almanac.com/yearly/yr1976a.shtml".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_uses_league_section() {
        let links = index(League::National, 1975, 2025).parse(MENU).unwrap();
        assert_eq!(links.len(), 1);
        assert!(links[0].url.ends_with("yr1975n.shtml"));
    }

    #[test]
    fn test_parse_respects_range() {
        let links = index(League::American, 1976, 1976).parse(MENU).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].year, 1976);
    }

    #[test]
    fn test_parse_missing_section() {
        let html = "<html><body><div class='other'><a href='yr1975a.shtml'>1975</a></div></body></html>";
        assert_eq!(index(League::American, 1975, 2025).parse(html), None);
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        let html = r#"<div class="ba-table"><a href="yr١٩٧٥a.shtml">١٩٧٥</a></div>"#;
        let links = index(League::American, 1975, 2025).parse(html).unwrap();
        assert!(links.is_empty());
    }
}
