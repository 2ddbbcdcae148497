//! Build orchestration.
//!
//! One build runs strictly in order: clean, scaffold, copy assets, render every route,
//! emit metadata. Any failure outside the route loop is fatal and returned as an error.
//! A failing route is recorded in its [`PageReport`] and the remaining routes still render.

use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::copier::{copy_tree, ensure_dir, CopyOutcome};
use crate::error::Result;
use crate::metadata::write_site_metadata;
use crate::renderer::{TemplateData, TemplateRenderer};
use crate::rewrite::StaticRewriter;
use crate::routes::Route;
use crate::stamp::{BuildStamp, CacheBuster};

/// Result of one copy pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub src: String,
    pub dest: String,
    pub outcome: CopyOutcome,
}

/// Result of rendering one route.
#[derive(Debug)]
pub struct PageReport {
    pub filename: String,
    pub title: String,
    /// Path of the written file, or the error that skipped this route
    pub outcome: Result<PathBuf>,
}

impl PageReport {
    pub fn is_generated(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Everything a finished build did.
#[derive(Debug)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub assets: Vec<AssetReport>,
    pub pages: Vec<PageReport>,
}

impl BuildReport {
    pub fn generated(&self) -> impl Iterator<Item = &PageReport> {
        self.pages.iter().filter(|p| p.is_generated())
    }

    pub fn failed(&self) -> impl Iterator<Item = &PageReport> {
        self.pages.iter().filter(|p| !p.is_generated())
    }
}

/// Builds a site from a configuration, a renderer and a single time sample.
pub struct SiteBuilder<'a> {
    renderer: &'a dyn TemplateRenderer,
    config: &'a SiteConfig,
    site_root: &'a Path,
    stamp: BuildStamp,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        config: &'a SiteConfig,
        site_root: &'a Path,
        stamp: BuildStamp,
    ) -> Self {
        Self { renderer, config, site_root, stamp }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.site_root.join(&self.config.output_dir)
    }

    /// Runs the whole build.
    ///
    /// # Errors
    /// * Any error while cleaning, scaffolding, copying assets or writing metadata.
    ///   Route failures are reported in [`BuildReport::pages`] instead.
    pub fn build(&self) -> Result<BuildReport> {
        let output_dir = self.output_dir();
        println!("Starting static site generation...");

        self.clean(&output_dir)?;
        ensure_dir(&output_dir)?;

        println!("Copying static assets...");
        let assets = self.copy_assets(&output_dir)?;

        println!("Generating static HTML pages...");
        let pages = self.render_pages(&output_dir)?;

        println!("Creating additional files...");
        write_site_metadata(&output_dir, self.config, &self.stamp)?;

        Ok(BuildReport { output_dir, assets, pages })
    }

    fn clean(&self, output_dir: &Path) -> Result<()> {
        if output_dir.exists() {
            fs::remove_dir_all(output_dir)?;
            println!("Cleaned output directory");
        }
        Ok(())
    }

    fn copy_assets(&self, output_dir: &Path) -> Result<Vec<AssetReport>> {
        let mut reports = Vec::with_capacity(self.config.assets.len());
        for pattern in &self.config.assets {
            let outcome =
                copy_tree(self.site_root.join(&pattern.src), output_dir.join(&pattern.dest))?;
            match outcome {
                CopyOutcome::Directory { files } => {
                    println!("   Copied directory: {} → {}", pattern.src, pattern.dest);
                    debug!("{files} files copied from {}", pattern.src);
                }
                CopyOutcome::File => {
                    println!("   Copied file: {} → {}", pattern.src, pattern.dest);
                }
                CopyOutcome::Missing => {}
            }
            reports.push(AssetReport {
                src: pattern.src.clone(),
                dest: pattern.dest.clone(),
                outcome,
            });
        }
        Ok(reports)
    }

    fn render_pages(&self, output_dir: &Path) -> Result<Vec<PageReport>> {
        let rewriter =
            StaticRewriter::from_routes(&self.config.routes, self.config.rewrite_root_self_link);
        let buster = CacheBuster::new(self.stamp.timestamp)?;

        let pages = self
            .config
            .routes
            .iter()
            .map(|route| {
                println!("   Processing: {} → {}", route.template, route.filename);
                let outcome = self.render_page(route, &rewriter, &buster, output_dir);
                match &outcome {
                    Ok(_) => println!("   Generated: {}", route.filename),
                    Err(e) => error!("Error generating {}: {e}", route.filename),
                }
                PageReport {
                    filename: route.filename.clone(),
                    title: route.title.clone(),
                    outcome,
                }
            })
            .collect();
        Ok(pages)
    }

    fn render_page(
        &self,
        route: &Route,
        rewriter: &StaticRewriter,
        buster: &CacheBuster,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let data = TemplateData {
            title: route.title.clone(),
            page: route.page.clone(),
            current_year: self.stamp.current_year(),
        };
        let context = serde_json::to_value(&data)?;

        let html = self.renderer.render(&route.template, &context)?;
        let html = rewriter.rewrite(&html, &route.path);
        let html = buster.stamp(&html);

        let output_path = output_dir.join(&route.filename);
        fs::write(&output_path, html)?;
        Ok(output_path)
    }
}
