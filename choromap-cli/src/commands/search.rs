//! Headless entity search over a dataset.
//!
//! Runs the same highlight pass the TUI runs per keystroke, then prints
//! the matched region names and their label anchor points instead of
//! restyling a display.

use std::path::PathBuf;

use clap::Args;

use choromap::dataset;
use choromap::search::MapSession;
use choromap::surface::MemorySurface;

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Path to the GeoJSON boundary dataset
    #[arg(long)]
    pub dataset: PathBuf,

    /// Entity name to search for (full-entry match, case-insensitive)
    #[arg(long)]
    pub query: String,
}

/// Load the dataset, apply the query once, and report the matches.
pub fn run(args: &SearchArgs) -> Result<String, CliError> {
    let regions = dataset::load_file(&args.dataset)?;
    let mut surface = MemorySurface::for_collection(&regions);
    let mut session = MapSession::new(regions);

    session.render_initial(&mut surface);
    session.apply_search(&args.query, &mut surface);

    if session.overlay().is_empty() {
        return Ok(format!("No regions match '{}'", session.query()));
    }

    let mut out = format!(
        "{} region(s) match '{}':",
        session.match_count(),
        session.query()
    );
    for label in session.overlay() {
        out.push_str(&format!("\n{} {}", label.text, label.anchor));
    }
    Ok(out)
}
