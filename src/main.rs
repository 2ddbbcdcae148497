//! folio's application entry point.
//! Parses arguments, loads the site configuration and runs one build.

use folio::{
    cli::{get_args, Args},
    config::SiteConfig,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{BuildReport, SiteBuilder},
    renderer::MiniJinjaRenderer,
    stamp::BuildStamp,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    std::panic::set_hook(Box::new(|info| {
        log::error!("Build failed: {info}");
    }));

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_summary(report: &BuildReport) {
    println!();
    println!("Static site generation completed successfully!");
    println!("Output directory: {}", report.output_dir.display());
    println!();
    println!("Generated files:");
    for page in report.generated() {
        println!("   {} ({})", page.filename, page.title);
    }

    let failed = report.failed().count();
    if failed > 0 {
        println!();
        println!("{failed} page(s) could not be generated, see the errors above.");
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the site configuration (file or defaults)
/// 2. Applies the output directory override
/// 3. Renders the site with one shared time sample
/// 4. Prints the build summary
fn run(args: Args) -> Result<()> {
    let mut config = SiteConfig::load(&args.site_dir)?;
    if let Some(output) = args.output {
        config.output_dir = output;
        config = config.validate()?;
    }

    let renderer = MiniJinjaRenderer::new(args.site_dir.join(&config.views_dir));
    let builder = SiteBuilder::new(&renderer, &config, &args.site_dir, BuildStamp::now());
    let report = builder.build()?;

    print_summary(&report);
    Ok(())
}
