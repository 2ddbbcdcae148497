//! folio pre-renders a template-driven portfolio site into static HTML.
//! It renders every route, rewrites links for file-based hosting, busts asset caches
//! and emits sitemap, robots.txt and redirects next to the pages.

/// Command-line interface module for the folio binary
pub mod cli;

/// Site configuration
/// Supports JSON and YAML formats (folio.json, folio.yml, folio.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Best-effort static asset copying
pub mod copier;

/// Error types and handling
pub mod error;

pub mod logger;

/// sitemap.xml, robots.txt and _redirects generation
pub mod metadata;

/// Build orchestration
/// Combines all components to generate the final output
pub mod processor;

/// MiniJinja template rendering
pub mod renderer;

/// Link rewriting for static hosts
pub mod rewrite;

/// Route table and copy patterns
pub mod routes;

/// Cache busting and the per-build time sample
pub mod stamp;

/// Behaviour of the browser-side interactions shipped with the site
pub mod client;
