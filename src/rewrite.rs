//! Link rewriting for file-based static hosts.
//!
//! Rendered pages use root-relative links (`/css/style.css`, `/career`) that only work
//! behind a router. A static host needs output-relative asset paths and links to the
//! generated `.html` files instead.
//!
//! The rewrite is literal substring replacement over the exact attribute forms the
//! templates emit (`href="/career"`, `src="/js/main.js"`). An attribute written any other
//! way (single quotes, extra whitespace, a trailing slash) is left untouched.

use crate::constants::{PRIMARY_SCRIPT_TAG, ROOT_PATH, SECONDARY_SCRIPT_TAG};
use crate::routes::Route;

/// Root-relative asset prefixes and their output-relative replacements
const ASSET_REWRITES: [(&str, &str); 4] = [
    (r#"href="/css/"#, r#"href="css/"#),
    (r#"src="/js/"#, r#"src="js/"#),
    (r#"src="/images/"#, r#"src="images/"#),
    (r#"src="/video/"#, r#"src="video/"#),
];

/// Rewrites rendered pages for a given route table.
#[derive(Debug, Clone)]
pub struct StaticRewriter {
    /// `(href="/career", href="career.html")` pairs for every clean route
    nav_links: Vec<(String, String)>,
    /// `(href="/", href="index.html")` when the table has a root route
    root_link: Option<(String, String)>,
    rewrite_root_self_link: bool,
}

fn href(target: &str) -> String {
    format!(r#"href="{target}""#)
}

impl StaticRewriter {
    /// Builds the navigation rules from a route table.
    ///
    /// Every route except the root and the not-found page gets a rule mapping its clean
    /// path to its output filename.
    pub fn from_routes(routes: &[Route], rewrite_root_self_link: bool) -> Self {
        let nav_links = routes
            .iter()
            .filter(|r| !r.is_root() && !r.is_not_found())
            .map(|r| (href(&r.path), href(&r.filename)))
            .collect();
        let root_link = routes
            .iter()
            .find(|r| r.is_root())
            .map(|r| (href(&r.path), href(&r.filename)));

        Self { nav_links, root_link, rewrite_root_self_link }
    }

    /// Rewrites `html` rendered for `route_path`.
    ///
    /// The root link is only rewritten on pages other than the root, unless
    /// `rewrite_root_self_link` is set.
    pub fn rewrite(&self, html: &str, route_path: &str) -> String {
        let mut processed = html.to_string();

        for (from, to) in ASSET_REWRITES {
            processed = processed.replace(from, to);
        }

        if route_path != ROOT_PATH || self.rewrite_root_self_link {
            if let Some((from, to)) = &self.root_link {
                processed = processed.replace(from.as_str(), to);
            }
        }

        for (from, to) in &self.nav_links {
            processed = processed.replace(from.as_str(), to);
        }

        processed.replace(
            PRIMARY_SCRIPT_TAG,
            &format!("{PRIMARY_SCRIPT_TAG}\n    {SECONDARY_SCRIPT_TAG}"),
        )
    }
}

/// Rewrites a page with the default portfolio route table.
pub fn rewrite_for_static_host(html: &str, route_path: &str) -> String {
    StaticRewriter::from_routes(&crate::routes::default_routes(), false).rewrite(html, route_path)
}
