//! Common constants used throughout folio.

/// Supported configuration file names, tried in order
pub const CONFIG_FILES: [&str; 3] = ["folio.json", "folio.yml", "folio.yaml"];

/// Site URL used for sitemap and robots.txt when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "https://che-effe.github.io/com.cfgrugan/";

pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_VIEWS_DIR: &str = "views";

/// Extension appended to a template name to locate its file in the views directory
pub const TEMPLATE_EXTENSION: &str = "html.j2";

/// Path of the site root route
pub const ROOT_PATH: &str = "/";

/// Page key of the not-found route, excluded from sitemap and redirects
pub const NOT_FOUND_PAGE: &str = "404";

/// Script tag the templates emit once the asset rewrite has run
pub const PRIMARY_SCRIPT_TAG: &str = r#"<script src="js/main.js"></script>"#;

/// Script tag injected after [`PRIMARY_SCRIPT_TAG`] for static hosting
pub const SECONDARY_SCRIPT_TAG: &str = r#"<script src="js/router.js"></script>"#;

pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";
pub const REDIRECTS_FILE: &str = "_redirects";
