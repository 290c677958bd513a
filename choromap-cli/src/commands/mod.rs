//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and a
//! `run` handler.
//!
//! # Command Modules
//!
//! - [`view`] - Interactive TUI viewer (main command)
//! - [`search`] - Headless entity search over a dataset
//! - [`classify`] - Headless metric classification
//! - [`legend`] - Print the legend rows

pub mod classify;
pub mod legend;
pub mod search;
pub mod view;
