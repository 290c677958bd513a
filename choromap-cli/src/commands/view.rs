//! Interactive viewer command.
//!
//! Acts as a thin front controller: initialize logging, load the
//! dataset once, then hand the session to the TUI event loop. A load
//! failure is non-fatal by design: the viewer still opens with base
//! layers only and search as a no-op, and the failure goes to the
//! diagnostic log.

use std::path::PathBuf;

use clap::Args;

use choromap::dataset;
use choromap::logging;
use choromap::region::RegionCollection;
use choromap::search::MapSession;
use choromap::surface::MemorySurface;

use crate::error::CliError;
use crate::tui_app::{self, ViewerConfig};

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Path to the GeoJSON boundary dataset
    #[arg(long, default_value = "counties.geojson")]
    pub dataset: PathBuf,
}

pub fn run(args: &ViewArgs) -> Result<(), CliError> {
    let _guard = logging::init_logging(logging::default_log_dir(), logging::default_log_file())
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

    tracing::info!(version = choromap::VERSION, "Starting choromap viewer");

    let (regions, load_error) = match dataset::load_file(&args.dataset) {
        Ok(regions) => (regions, None),
        Err(e) => {
            tracing::error!(error = %e, "Boundary dataset failed to load");
            (RegionCollection::default(), Some(e.to_string()))
        }
    };

    let mut surface = MemorySurface::for_collection(&regions);
    let mut session = MapSession::new(regions);
    session.render_initial(&mut surface);

    let config = ViewerConfig {
        dataset_name: args.dataset.display().to_string(),
        load_error,
    };
    tui_app::run_viewer(session, surface, config)
}
