//! Error handling for folio.
//! Defines the error type shared by every build step and the fatal handler used by the binary.

use std::io;
use thiserror::Error;

/// Errors that can occur while building the site.
///
/// Setup and teardown steps (cleaning, scaffolding, asset copying, metadata emission)
/// propagate these with `?` and abort the build. Route rendering captures them per page
/// inside [`crate::processor::PageReport`] instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The named template file does not exist in the views directory
    #[error("Template not found: {path}.")]
    TemplateNotFound { path: String },

    /// Represents errors raised by MiniJinja while loading or rendering a template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or validation
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors raised while walking an asset directory
    #[error("Failed to walk asset tree: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse JSON: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid pattern: {0}.")]
    RegexError(#[from] regex::Error),

    #[error("Invalid URL: {0}.")]
    UrlError(#[from] url::ParseError),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler for fatal build errors.
///
/// Logs the error and exits the process with status code 1.
pub fn default_error_handler(err: Error) {
    log::error!("Build failed: {err}");
    std::process::exit(1);
}
