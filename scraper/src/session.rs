//! Browser session lifecycle.
//!
//! A [`PageSession`] owns one browsing context for the whole run. Every
//! navigation is followed by a fixed settle delay: the source site renders
//! parts of its pages client-side and exposes no readiness marker worth
//! polling for, so a configurable wait is the contract.
//!
//! Sessions release their underlying resources on [`PageSession::close`]
//! and again on drop, so a Chrome process never outlives the run even
//! when extraction panics.

use anyhow::{anyhow, Context};
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::{Backend, ScraperConfig};
use crate::error::{Result, ScrapeError};

/// Bytes written out when a page does not look the way the parser expects.
#[derive(Debug, Clone)]
pub struct Capture {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

pub trait PageSession {
    /// Load `url` and wait out the settle delay.
    fn navigate(&mut self, url: &str) -> Result<()>;

    /// Title of the current page.
    fn title(&self) -> Result<String>;

    /// Rendered HTML of the current page.
    fn content(&self) -> Result<String>;

    /// Snapshot of the current page for manual inspection.
    fn capture(&self) -> Result<Capture>;

    /// Release the session. Calling it more than once is a no-op.
    fn close(&mut self);
}

/// Start a session for the configured backend.
pub fn open(config: &ScraperConfig) -> Result<Box<dyn PageSession>> {
    match config.backend {
        Backend::Chrome => Ok(Box::new(ChromeSession::launch(config)?)),
        Backend::Http => Ok(Box::new(HttpSession::new(config)?)),
    }
}

pub struct ChromeSession {
    browser: Option<Browser>,
    tab: Option<Arc<Tab>>,
    settle_delay: Duration,
    current_url: String,
}

impl ChromeSession {
    pub fn launch(config: &ScraperConfig) -> Result<Self> {
        let settle_delay = config.settle_delay();
        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((1366, 1024)))
            // the browser must not be reaped as idle while we sleep between pages
            .idle_browser_timeout(settle_delay * 2 + Duration::from_secs(60))
            .build()
            .map_err(|e| ScrapeError::SessionStart(anyhow!("invalid launch options: {}", e)))?;

        let browser = Browser::new(options).map_err(ScrapeError::SessionStart)?;
        let tab = browser.new_tab().map_err(ScrapeError::SessionStart)?;
        tab.set_user_agent(&config.user_agent, None, None)
            .map_err(ScrapeError::SessionStart)?;

        info!("Started headless Chrome session");
        Ok(Self {
            browser: Some(browser),
            tab: Some(tab),
            settle_delay,
            current_url: String::new(),
        })
    }

    fn tab(&self) -> Result<&Arc<Tab>> {
        self.tab.as_ref().ok_or_else(|| ScrapeError::PageRead {
            url: self.current_url.clone(),
            source: anyhow!("session already closed"),
        })
    }

    fn page_read_error(&self, source: anyhow::Error) -> ScrapeError {
        ScrapeError::PageRead {
            url: self.current_url.clone(),
            source,
        }
    }
}

impl PageSession for ChromeSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.current_url = url.to_string();
        let tab = self.tab().map_err(|e| ScrapeError::Navigation {
            url: url.to_string(),
            source: e.into(),
        })?;
        tab.navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|source| ScrapeError::Navigation {
                url: url.to_string(),
                source,
            })?;
        thread::sleep(self.settle_delay);
        Ok(())
    }

    fn title(&self) -> Result<String> {
        self.tab()?.get_title().map_err(|e| self.page_read_error(e))
    }

    fn content(&self) -> Result<String> {
        self.tab()?
            .get_content()
            .map_err(|e| self.page_read_error(e))
    }

    fn capture(&self) -> Result<Capture> {
        let bytes = self
            .tab()?
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| self.page_read_error(e))?;
        Ok(Capture {
            bytes,
            extension: "png",
        })
    }

    fn close(&mut self) {
        if let Some(tab) = self.tab.take() {
            if let Err(e) = tab.close(false) {
                warn!("Failed to close browser tab: {}", e);
            }
        }
        // dropping the browser kills the Chrome process
        if self.browser.take().is_some() {
            info!("Closed headless Chrome session");
        }
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Session over plain HTTP. Useful when the pages do not need scripts to
/// render, and for debugging without a Chrome install.
pub struct HttpSession {
    client: Option<Client>,
    settle_delay: Duration,
    current_url: String,
    html: Option<String>,
}

impl HttpSession {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScrapeError::SessionStart(e.into()))?;
        Ok(Self {
            client: Some(client),
            settle_delay: config.settle_delay(),
            current_url: String::new(),
            html: None,
        })
    }

    fn html(&self) -> Result<&str> {
        self.html.as_deref().ok_or_else(|| ScrapeError::PageRead {
            url: self.current_url.clone(),
            source: anyhow!("no page loaded"),
        })
    }
}

impl PageSession for HttpSession {
    fn navigate(&mut self, url: &str) -> Result<()> {
        debug!("Fetching {}", url);
        self.current_url = url.to_string();
        self.html = None;

        let client = self.client.as_ref().ok_or_else(|| ScrapeError::Navigation {
            url: url.to_string(),
            source: anyhow!("session already closed"),
        })?;
        let html = client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .context("Failed to send request")
            .and_then(|response| response.text().context("Failed to get response text"))
            .map_err(|source| ScrapeError::Navigation {
                url: url.to_string(),
                source,
            })?;

        self.html = Some(html);
        thread::sleep(self.settle_delay);
        Ok(())
    }

    fn title(&self) -> Result<String> {
        Ok(document_title(self.html()?))
    }

    fn content(&self) -> Result<String> {
        Ok(self.html()?.to_string())
    }

    fn capture(&self) -> Result<Capture> {
        Ok(Capture {
            bytes: self.html()?.as_bytes().to_vec(),
            extension: "html",
        })
    }

    fn close(&mut self) {
        self.html = None;
        self.client = None;
    }
}

/// Text of the document's `<title>`, whitespace collapsed.
pub fn document_title(html: &str) -> String {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").unwrap();
    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .unwrap_or_default()
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        let html = "<html><head><title>\n  1995 American League\n  Team Standings </title></head></html>";
        assert_eq!(document_title(html), "1995 American League Team Standings");
    }

    #[test]
    fn test_document_title_missing() {
        assert_eq!(document_title("<html><body></body></html>"), "");
    }

    #[test]
    fn test_http_session_reads_fail_before_navigation() {
        let session = HttpSession::new(&ScraperConfig::default()).unwrap();
        assert!(matches!(session.title(), Err(ScrapeError::PageRead { .. })));
        assert!(session.capture().is_err());
    }

    #[test]
    fn test_http_session_navigate_after_close_fails() {
        let mut session = HttpSession::new(&ScraperConfig::default()).unwrap();
        session.close();
        session.close();
        let err = session.navigate("http://localhost/").unwrap_err();
        assert!(matches!(err, ScrapeError::Navigation { .. }));
    }
}
