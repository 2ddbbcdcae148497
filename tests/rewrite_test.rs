use folio::rewrite::{rewrite_for_static_host, StaticRewriter};
use folio::routes::{default_routes, Route};

#[test]
fn test_nav_link_rewritten_on_non_root_page() {
    let html = r#"<a href="/career" class="nav-link">Career</a>"#;
    let out = rewrite_for_static_host(html, "/community");

    assert!(out.contains(r#"href="career.html""#));
    assert!(!out.contains(r#"href="/career""#));
}

#[test]
fn test_all_nav_links() {
    let html = ["/career", "/community", "/digital", "/analog", "/bio", "/articles", "/events"]
        .iter()
        .map(|p| format!(r#"<a href="{p}">"#))
        .collect::<String>();
    let out = rewrite_for_static_host(&html, "/bio");

    assert_eq!(
        out,
        concat!(
            r#"<a href="career.html"><a href="community.html"><a href="digital.html">"#,
            r#"<a href="analog.html"><a href="bio.html"><a href="articles.html"><a href="events.html">"#
        )
    );
}

#[test]
fn test_root_link_depends_on_current_route() {
    let html = r#"<a href="/" class="nav-logo">Portfolio</a>"#;

    assert!(rewrite_for_static_host(html, "/career").contains(r#"href="index.html""#));
    assert_eq!(rewrite_for_static_host(html, "/"), html);
}

#[test]
fn test_root_self_link_option() {
    let rewriter = StaticRewriter::from_routes(&default_routes(), true);
    let out = rewriter.rewrite(r#"<a href="/">Home</a>"#, "/");
    assert_eq!(out, r#"<a href="index.html">Home</a>"#);
}

#[test]
fn test_asset_paths_lose_leading_slash() {
    let html = concat!(
        r#"<link rel="stylesheet" href="/css/style.css">"#,
        r#"<img src="/images/a.png">"#,
        r#"<video><source src="/video/demo.mp4"></video>"#,
        r#"<script src="/js/extra.js"></script>"#,
    );
    let out = rewrite_for_static_host(html, "/");

    assert_eq!(
        out,
        concat!(
            r#"<link rel="stylesheet" href="css/style.css">"#,
            r#"<img src="images/a.png">"#,
            r#"<video><source src="video/demo.mp4"></video>"#,
            r#"<script src="js/extra.js"></script>"#,
        )
    );
}

#[test]
fn test_router_script_injected_after_main_script() {
    let html = "<body>\n    <script src=\"/js/main.js\"></script>\n</body>";
    let out = rewrite_for_static_host(html, "/digital");

    assert_eq!(
        out,
        "<body>\n    <script src=\"js/main.js\"></script>\n    <script src=\"js/router.js\"></script>\n</body>"
    );
}

#[test]
fn test_non_literal_forms_are_untouched() {
    let html = concat!(
        r#"<a href='/career'>"#,
        r#"<a href = "/career">"#,
        r#"<a href="/career/">"#,
        r#"<a href="/careers">"#,
        r#"<a href="/404">"#,
    );
    assert_eq!(rewrite_for_static_host(html, "/bio"), html);
}

#[test]
fn test_alternate_route_table() {
    let routes = vec![
        Route::new("/", "home", "Home", "home", "home.html"),
        Route::new("/gallery", "gallery", "Gallery", "gallery", "gallery.html"),
    ];
    let rewriter = StaticRewriter::from_routes(&routes, false);
    let out = rewriter.rewrite(r#"<a href="/"><a href="/gallery"><a href="/career">"#, "/gallery");

    assert_eq!(out, r#"<a href="home.html"><a href="gallery.html"><a href="/career">"#);
}
