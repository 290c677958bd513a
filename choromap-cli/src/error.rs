//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and appropriate exit codes.

use std::fmt;
use std::process;

use choromap::dataset::DatasetError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to load the boundary dataset
    Dataset(DatasetError),
    /// Terminal setup or drawing failed
    Terminal(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if let CliError::Dataset(DatasetError::NotFound(_)) = self {
            eprintln!();
            eprintln!("The viewer expects a GeoJSON FeatureCollection of region");
            eprintln!("boundaries. Pass its location with --dataset <path>.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Dataset(e) => write!(f, "Failed to load boundary dataset: {}", e),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
        }
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        CliError::Dataset(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Terminal(e)
    }
}
