//! Template rendering for folio.
//! Resolves page templates from the views directory and renders them with MiniJinja,
//! registering the same directory as the include root for shared partials.
use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use minijinja::{path_loader, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Data handed to every page template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub title: String,
    pub page: String,
    pub current_year: i32,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the template file is absent
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    views_dir: PathBuf,
    /// MiniJinja environment with a path loader rooted at `views_dir`
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer loading templates and partials from `views_dir`.
    pub fn new<P: AsRef<Path>>(views_dir: P) -> Self {
        let views_dir = views_dir.as_ref().to_path_buf();
        let mut env = Environment::new();
        env.set_loader(path_loader(&views_dir));
        Self { views_dir, env }
    }

    /// File name of a template inside the views directory.
    pub fn template_file(template_name: &str) -> String {
        format!("{template_name}.{TEMPLATE_EXTENSION}")
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template_name: &str, context: &serde_json::Value) -> Result<String> {
        let file_name = Self::template_file(template_name);
        let template_path = self.views_dir.join(&file_name);
        if !template_path.is_file() {
            return Err(Error::TemplateNotFound { path: template_path.display().to_string() });
        }

        let tmpl = self.env.get_template(&file_name)?;
        Ok(tmpl.render(context)?)
    }
}
