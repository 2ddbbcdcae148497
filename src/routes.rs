//! Route descriptors and copy patterns driving the build.
//! The default tables describe the portfolio site; alternate tables can be supplied
//! through [`crate::config::SiteConfig`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{NOT_FOUND_PAGE, ROOT_PATH};

/// How often a page is expected to change, as advertised in the sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeFreq::Weekly => write!(f, "weekly"),
            ChangeFreq::Monthly => write!(f, "monthly"),
        }
    }
}

/// Pages whose content is refreshed often enough to be crawled weekly
const WEEKLY_PAGES: [&str; 2] = ["articles", "digital"];

/// One logical page: a site path rendered from a template into one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Clean site path, `/` for the root
    pub path: String,
    /// Template name, resolved to `<views>/<template>.html.j2`
    pub template: String,
    pub title: String,
    /// Page key handed to templates (used for active navigation state)
    pub page: String,
    /// Output file name, unique across the route table
    pub filename: String,
    /// Explicit sitemap change frequency, overriding the page-key rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFreq>,
}

impl Route {
    pub fn new(path: &str, template: &str, title: &str, page: &str, filename: &str) -> Self {
        Self {
            path: path.to_string(),
            template: template.to_string(),
            title: title.to_string(),
            page: page.to_string(),
            filename: filename.to_string(),
            changefreq: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.path == ROOT_PATH
    }

    pub fn is_not_found(&self) -> bool {
        self.page == NOT_FOUND_PAGE
    }

    /// Sitemap change frequency: the explicit override, else weekly for articles and
    /// digital work and monthly for everything else.
    pub fn change_frequency(&self) -> ChangeFreq {
        self.changefreq.unwrap_or_else(|| {
            if WEEKLY_PAGES.contains(&self.page.as_str()) {
                ChangeFreq::Weekly
            } else {
                ChangeFreq::Monthly
            }
        })
    }

    /// Sitemap priority: `1.0` for the root page, `0.8` otherwise.
    pub fn priority(&self) -> &'static str {
        if self.is_root() {
            "1.0"
        } else {
            "0.8"
        }
    }
}

/// One asset to mirror from the site root into the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    /// Source path relative to the site root, file or directory
    pub src: String,
    /// Destination path relative to the output directory
    pub dest: String,
}

impl CopyPattern {
    pub fn new(src: &str, dest: &str) -> Self {
        Self { src: src.to_string(), dest: dest.to_string() }
    }
}

/// The portfolio's route table, in build order.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", "index", "Portfolio - Home", "home", "index.html"),
        Route::new("/career", "career", "Career Achievements", "career", "career.html"),
        Route::new("/community", "community", "Dev Community", "community", "community.html"),
        Route::new("/digital", "digital", "Digital Work", "digital", "digital.html"),
        Route::new("/analog", "analog", "Analog Art", "analog", "analog.html"),
        Route::new("/bio", "bio", "About Me", "bio", "bio.html"),
        Route::new("/articles", "articles", "Articles & Writing", "articles", "articles.html"),
        Route::new("/events", "events", "Events & Speaking", "events", "events.html"),
        Route::new("/404", "404", "404 - Page Not Found", "404", "404.html"),
    ]
}

/// The portfolio's static assets, copied before any page is rendered.
pub fn default_copy_patterns() -> Vec<CopyPattern> {
    vec![
        CopyPattern::new("public/css", "css"),
        CopyPattern::new("public/js", "js"),
        CopyPattern::new("public/images", "images"),
        CopyPattern::new("public/video", "video"),
        CopyPattern::new("public/404.html", "404.html"),
        CopyPattern::new(".nojekyll", ".nojekyll"),
    ]
}
