//! Cache busting for stylesheet and script references.

use chrono::{Datelike, NaiveDate, Utc};
use regex::{Captures, Regex};

use crate::error::Result;

/// Time sample taken once per build and shared by every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStamp {
    /// Unix time in milliseconds, used as the cache-busting version
    pub timestamp: i64,
    /// UTC date, used for sitemap `lastmod`
    pub today: NaiveDate,
}

impl BuildStamp {
    pub fn now() -> Self {
        let now = Utc::now();
        Self { timestamp: now.timestamp_millis(), today: now.date_naive() }
    }

    pub fn fixed(timestamp: i64, today: NaiveDate) -> Self {
        Self { timestamp, today }
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }

    /// ISO `YYYY-MM-DD` form of [`BuildStamp::today`].
    pub fn lastmod(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }
}

/// Appends `?v=<timestamp>` to `href="css/*.css"` and `src="js/*.js"` references.
///
/// References that already carry a query string are not matched, so stamping a page
/// twice leaves it unchanged.
pub struct CacheBuster {
    timestamp: i64,
    css: Regex,
    js: Regex,
}

impl CacheBuster {
    pub fn new(timestamp: i64) -> Result<Self> {
        let css = Regex::new(r#"href="css/([^"?]*\.css)""#)?;
        let js = Regex::new(r#"src="js/([^"?]*\.js)""#)?;
        Ok(Self { timestamp, css, js })
    }

    pub fn stamp(&self, html: &str) -> String {
        let ts = self.timestamp;
        let html = self
            .css
            .replace_all(html, |caps: &Captures| format!(r#"href="css/{}?v={ts}""#, &caps[1]));
        self.js
            .replace_all(&html, |caps: &Captures| format!(r#"src="js/{}?v={ts}""#, &caps[1]))
            .into_owned()
    }
}

/// Stamps a single page with `timestamp`.
pub fn stamp(html: &str, timestamp: i64) -> Result<String> {
    Ok(CacheBuster::new(timestamp)?.stamp(html))
}
