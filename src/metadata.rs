//! Site metadata emitted next to the rendered pages.
//!
//! - `sitemap.xml`: one `<url>` per route except the not-found page
//! - `robots.txt`: allow-all, pointing crawlers at the sitemap
//! - `_redirects`: clean paths to their `.html` files, plus a catch-all to the 404 page
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2024-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::constants::{REDIRECTS_FILE, ROBOTS_FILE, SITEMAP_FILE};
use crate::error::Result;
use crate::routes::Route;
use crate::stamp::BuildStamp;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Catch-all target when the route table has no not-found page
const FALLBACK_NOT_FOUND_FILE: &str = "404.html";

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Public URL of a route: the base URL for the root, `<base><filename>` otherwise.
pub fn route_url(route: &Route, base_url: &str) -> String {
    if route.is_root() {
        base_url.to_string()
    } else {
        format!("{base_url}{}", route.filename)
    }
}

/// Generates the sitemap document for `routes`.
pub fn sitemap_xml(routes: &[Route], base_url: &str, lastmod: &str) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));

    for route in routes.iter().filter(|r| !r.is_not_found()) {
        xml.push_str("\n  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&route_url(route, base_url))));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", route.change_frequency()));
        xml.push_str(&format!("    <priority>{}</priority>\n", route.priority()));
        xml.push_str("  </url>");
    }

    xml.push_str("\n</urlset>");
    xml
}

pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {base_url}{SITEMAP_FILE}")
}

/// Generates the `_redirects` manifest.
///
/// Each line is `<from> <to> <status>`; lines starting with `#` are comments.
pub fn redirects(routes: &[Route]) -> String {
    let mut manifest = String::from("# Redirect all routes to appropriate HTML files\n");
    for route in routes.iter().filter(|r| !r.is_root() && !r.is_not_found()) {
        manifest.push_str(&format!("{} /{} 200\n", route.path, route.filename));
    }

    let not_found = routes
        .iter()
        .find(|r| r.is_not_found())
        .map(|r| r.filename.as_str())
        .unwrap_or(FALLBACK_NOT_FOUND_FILE);
    manifest.push_str(&format!("\n# Fallback to 404\n/* /{not_found} 404"));
    manifest
}

/// Writes sitemap, robots.txt and redirects into `output_dir`.
///
/// # Errors
/// * `Error::IoError` if any file cannot be written; this aborts the build
pub fn write_site_metadata(output_dir: &Path, config: &SiteConfig, stamp: &BuildStamp) -> Result<()> {
    fs::write(
        output_dir.join(SITEMAP_FILE),
        sitemap_xml(&config.routes, &config.base_url, &stamp.lastmod()),
    )?;
    println!("Created {SITEMAP_FILE}");

    fs::write(output_dir.join(ROBOTS_FILE), robots_txt(&config.base_url))?;
    println!("Created {ROBOTS_FILE}");

    fs::write(output_dir.join(REDIRECTS_FILE), redirects(&config.routes))?;
    println!("Created {REDIRECTS_FILE} file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_xml(r#""it's""#), "&quot;it&apos;s&quot;");
    }

    #[test]
    fn test_redirects_without_not_found_route() {
        let routes = vec![
            Route::new("/", "index", "Home", "home", "index.html"),
            Route::new("/bio", "bio", "About Me", "bio", "bio.html"),
        ];
        let manifest = redirects(&routes);
        assert!(manifest.contains("/bio /bio.html 200\n"));
        assert!(manifest.ends_with("/* /404.html 404"));
    }
}
