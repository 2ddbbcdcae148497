//! Site configuration for folio.
//! The built-in defaults describe the portfolio; a `folio.json`, `folio.yml` or
//! `folio.yaml` file in the site root may override any field.

use crate::constants::{
    CONFIG_FILES, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_VIEWS_DIR, NOT_FOUND_PAGE,
};
use crate::error::{Error, Result};
use crate::routes::{default_copy_patterns, default_routes, CopyPattern, Route};
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use url::Url;

/// Immutable build configuration, passed explicitly into the orchestrator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute site URL, always ending with `/`
    pub base_url: String,
    /// Output directory relative to the site root; removed and recreated on every build
    pub output_dir: PathBuf,
    /// Template directory relative to the site root, also the include root for partials
    pub views_dir: PathBuf,
    /// Rendered in order
    pub routes: Vec<Route>,
    /// Copied in order, before any route renders
    pub assets: Vec<CopyPattern>,
    /// Rewrite `href="/"` to the root filename on the root page too
    pub rewrite_root_self_link: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            views_dir: PathBuf::from(DEFAULT_VIEWS_DIR),
            routes: default_routes(),
            assets: default_copy_patterns(),
            rewrite_root_self_link: false,
        }
    }
}

/// Reads the first configuration file found in the site root.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found configuration file, if any
pub fn load_config<P: AsRef<Path>>(site_root: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = site_root.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<SiteConfig> {
    let config = match serde_json::from_str::<SiteConfig>(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str::<SiteConfig>(content)?,
    };
    config.validate()
}

impl SiteConfig {
    /// Loads and validates the configuration for a site root.
    ///
    /// Falls back to [`SiteConfig::default`] when no configuration file exists.
    pub fn load<P: AsRef<Path>>(site_root: P) -> Result<Self> {
        match load_config(site_root, &CONFIG_FILES)? {
            Some(content) => parse_config(&content),
            None => SiteConfig::default().validate(),
        }
    }

    /// Checks table invariants and normalises the base URL.
    ///
    /// # Errors
    /// * `Error::ConfigError` for duplicate output filenames, a missing or repeated root
    ///   route, more than one not-found route, or an unsafe output directory
    /// * `Error::UrlError` if the base URL does not parse
    pub fn validate(mut self) -> Result<Self> {
        let mut filenames = HashSet::new();
        for route in &self.routes {
            if !filenames.insert(route.filename.as_str()) {
                return Err(Error::ConfigError(format!(
                    "duplicate output filename '{}'",
                    route.filename
                )));
            }
        }

        let roots = self.routes.iter().filter(|r| r.is_root()).count();
        if roots != 1 {
            return Err(Error::ConfigError(format!(
                "expected exactly one root route, found {roots}"
            )));
        }

        if self.routes.iter().filter(|r| r.is_not_found()).count() > 1 {
            return Err(Error::ConfigError(format!(
                "more than one route uses the '{NOT_FOUND_PAGE}' page"
            )));
        }

        let output_dir = self.checked_output_dir()?;
        let inputs = std::iter::once(self.views_dir.as_path())
            .chain(self.assets.iter().map(|a| Path::new(&a.src)))
            .filter_map(within_site_root);
        for input in inputs {
            if input.starts_with(&output_dir) {
                return Err(Error::ConfigError(format!(
                    "output directory '{}' would delete build input '{}'",
                    self.output_dir.display(),
                    input.display()
                )));
            }
        }

        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "base URL '{}' cannot be used as a base",
                self.base_url
            )));
        }
        if !self.base_url.ends_with('/') {
            self.base_url.push('/');
        }

        Ok(self)
    }

    /// The output directory relative to the site root, with `.` components dropped.
    /// It must stay strictly below the site root because every build deletes it.
    fn checked_output_dir(&self) -> Result<PathBuf> {
        let unsafe_dir = || {
            Error::ConfigError(format!(
                "output directory '{}' must be a subdirectory of the site root",
                self.output_dir.display()
            ))
        };
        let mut dir = PathBuf::new();
        for component in self.output_dir.components() {
            match component {
                Component::Normal(part) => dir.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(unsafe_dir())
                }
            }
        }
        if dir.as_os_str().is_empty() {
            return Err(unsafe_dir());
        }
        Ok(dir)
    }

    pub fn root_route(&self) -> Option<&Route> {
        self.routes.iter().find(|r| r.is_root())
    }

    pub fn not_found_route(&self) -> Option<&Route> {
        self.routes.iter().find(|r| r.is_not_found())
    }
}

/// Lexically resolves `path` against the site root. `None` when it leaves the root.
fn within_site_root(path: &Path) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}
