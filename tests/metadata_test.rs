use folio::constants::DEFAULT_BASE_URL;
use folio::metadata::{redirects, robots_txt, route_url, sitemap_xml};
use folio::routes::default_routes;

const LASTMOD: &str = "2024-05-17";

/// Splits a sitemap into its `<url>` blocks.
fn url_blocks(xml: &str) -> Vec<&str> {
    xml.split("<url>").skip(1).map(|b| b.split("</url>").next().unwrap()).collect()
}

fn tag<'a>(block: &'a str, name: &str) -> &'a str {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let start = block.find(&open).unwrap() + open.len();
    let end = block.find(&close).unwrap();
    &block[start..end]
}

#[test]
fn test_one_entry_per_route_except_404() {
    let routes = default_routes();
    let xml = sitemap_xml(&routes, DEFAULT_BASE_URL, LASTMOD);
    let blocks = url_blocks(&xml);

    assert_eq!(blocks.len(), routes.len() - 1);
    for route in routes.iter().filter(|r| !r.is_not_found()) {
        let loc = route_url(route, DEFAULT_BASE_URL);
        let matching = blocks.iter().filter(|b| tag(b, "loc") == loc).count();
        assert_eq!(matching, 1, "expected one entry for {loc}");
    }
    assert!(!xml.contains("404.html"));
}

#[test]
fn test_locations() {
    let xml = sitemap_xml(&default_routes(), DEFAULT_BASE_URL, LASTMOD);
    let blocks = url_blocks(&xml);

    assert_eq!(tag(blocks[0], "loc"), "https://che-effe.github.io/com.cfgrugan/");
    assert_eq!(tag(blocks[1], "loc"), "https://che-effe.github.io/com.cfgrugan/career.html");
}

#[test]
fn test_priority_and_changefreq() {
    let xml = sitemap_xml(&default_routes(), DEFAULT_BASE_URL, LASTMOD);

    for block in url_blocks(&xml) {
        let loc = tag(block, "loc");
        let expected_priority = if loc == DEFAULT_BASE_URL { "1.0" } else { "0.8" };
        assert_eq!(tag(block, "priority"), expected_priority, "priority of {loc}");

        let expected_freq = if loc.ends_with("articles.html") || loc.ends_with("digital.html") {
            "weekly"
        } else {
            "monthly"
        };
        assert_eq!(tag(block, "changefreq"), expected_freq, "changefreq of {loc}");
        assert_eq!(tag(block, "lastmod"), LASTMOD);
    }
}

#[test]
fn test_sitemap_document_shape() {
    let routes = default_routes();
    let xml = sitemap_xml(&routes[..1], DEFAULT_BASE_URL, LASTMOD);

    assert_eq!(
        xml,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://che-effe.github.io/com.cfgrugan/</loc>
    <lastmod>2024-05-17</lastmod>
    <changefreq>monthly</changefreq>
    <priority>1.0</priority>
  </url>
</urlset>"#
    );
}

#[test]
fn test_locations_are_escaped() {
    let xml = sitemap_xml(&default_routes(), "https://example.com/?a=1&b=2/", LASTMOD);
    assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2/</loc>"));
}

#[test]
fn test_robots() {
    assert_eq!(
        robots_txt(DEFAULT_BASE_URL),
        "User-agent: *\nAllow: /\n\nSitemap: https://che-effe.github.io/com.cfgrugan/sitemap.xml"
    );
}

#[test]
fn test_redirects_manifest() {
    let manifest = redirects(&default_routes());

    assert_eq!(
        manifest,
        "# Redirect all routes to appropriate HTML files
/career /career.html 200
/community /community.html 200
/digital /digital.html 200
/analog /analog.html 200
/bio /bio.html 200
/articles /articles.html 200
/events /events.html 200

# Fallback to 404
/* /404.html 404"
    );
    assert!(manifest.lines().any(|l| l == "/community /community.html 200"));
}
