//! Choromap CLI - terminal choropleth viewer.
//!
//! This binary provides a command-line interface to the choromap
//! library: an interactive TUI viewer plus headless subcommands for
//! scripted use.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod tui_app;
mod ui;

use commands::{classify, legend, search, view};

#[derive(Parser)]
#[command(name = "choromap")]
#[command(version = choromap::VERSION)]
#[command(about = "Render a county choropleth and search it by entity name", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer
    View(view::ViewArgs),
    /// Print regions whose affiliate list contains an entity name
    Search(search::SearchArgs),
    /// Print the color bucket for a metric value
    Classify(classify::ClassifyArgs),
    /// Print the legend rows
    Legend,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::View(args) => view::run(&args),
        Commands::Search(args) => search::run(&args).map(|report| println!("{report}")),
        Commands::Classify(args) => {
            println!("{}", classify::run(&args));
            Ok(())
        }
        Commands::Legend => {
            println!("{}", legend::run());
            Ok(())
        }
    };

    if let Err(e) = result {
        e.exit();
    }
}
