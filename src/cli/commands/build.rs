//! Build command handler
//!
//! Loads the catalog and pre-renders every route into the site directory.

use coursegen::config::Config;
use coursegen::{build_site, load_catalog, Catalog};
use logger::{error, info, warn};
use std::path::PathBuf;

/// Run the build command.
///
/// # Arguments
/// * `config` - Configuration naming the data file and site directory
/// * `verbose` - Whether to list every written page
pub fn run(config: &Config, verbose: bool) {
    if let Err(err) = build(config, verbose) {
        error!("Site build failed: {err}");
        eprintln!("{err}");
    }
}

fn build(config: &Config, list_pages: bool) -> Result<(), String> {
    let data_file = PathBuf::from(&config.paths.data_file);
    let site_dir = PathBuf::from(&config.paths.site_dir);

    let catalog = load_catalog(&data_file).map_err(|e| {
        error!("Failed to load catalog {}: {e}", data_file.display());
        format!("✗ Failed to load {}: {e}", data_file.display())
    })?;

    info!("Catalog loaded: {}", data_file.display());

    // Structural problems don't stop the build, but the affected pages
    // will have blank headings or dead download links.
    if let Err(problems) = catalog.validate() {
        for problem in &problems {
            warn!("{problem}");
        }
    }

    let report = build_site(&catalog, &site_dir).map_err(|e| {
        error!("Site build failed in {}: {e}", site_dir.display());
        format!("✗ Failed to build site in {}: {e}", site_dir.display())
    })?;

    if list_pages {
        for page in &report.pages {
            println!("  {}", page.display());
        }
    }

    println!(
        "✓ Site built: {} pages in {}",
        report.page_count(),
        site_dir.display()
    );
    info!("Site built: {} pages", report.page_count());

    print_summary(&catalog);

    Ok(())
}

/// Print a summary of the built catalog
fn print_summary(catalog: &Catalog) {
    println!("\n=== Summary ===");
    println!("Catalog: {}", catalog.name);
    println!("Semesters: {}", catalog.semester_count());
    println!("Subjects: {}", catalog.subject_count());
    println!("Lectures: {}", catalog.lecture_count());

    let missing = catalog.missing_count();
    if missing > 0 {
        println!("⚠️  {missing} lectures have no notes in the PDFs");
    }
}
