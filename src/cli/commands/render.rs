//! Render command handler
//!
//! Resolves a single URL fragment against the catalog and emits the page.

use coursegen::config::Config;
use coursegen::{load_catalog, render_page, ViewState};
use logger::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the render command.
///
/// # Arguments
/// * `fragment` - URL fragment to resolve (leading `#` optional)
/// * `output` - Optional output path; stdout when omitted
/// * `content_only` - Emit only the content region instead of the document
/// * `config` - Configuration naming the data file
pub fn run(fragment: &str, output: Option<&Path>, content_only: bool, config: &Config) {
    if let Err(err) = render_fragment(fragment, output, content_only, config) {
        error!("Render failed for '{fragment}': {err}");
        eprintln!("{err}");
    }
}

fn render_fragment(
    fragment: &str,
    output: Option<&Path>,
    content_only: bool,
    config: &Config,
) -> Result<(), String> {
    let data_file = PathBuf::from(&config.paths.data_file);

    let catalog = load_catalog(&data_file).map_err(|e| {
        error!("Failed to load catalog {}: {e}", data_file.display());
        format!("✗ Failed to load {}: {e}", data_file.display())
    })?;

    let view = ViewState::resolve(fragment, Some(&catalog));
    debug!("Resolved '{fragment}' to {view}");

    let page = render_page(&catalog, view)
        .map_err(|e| format!("✗ Failed to render {view}: {e}"))?;

    let markup = if content_only {
        page.content
    } else {
        page.document()
            .map_err(|e| format!("✗ Failed to render {view}: {e}"))?
    };

    match output {
        Some(path) => {
            fs::write(path, markup)
                .map_err(|e| format!("✗ Failed to write {}: {e}", path.display()))?;
            println!("✓ Page written: {}", path.display());
            info!("Page for '{fragment}' written to {}", path.display());
        }
        None => println!("{markup}"),
    }

    Ok(())
}
