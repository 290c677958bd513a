//! Headless metric classification.

use clap::Args;

use choromap::classify::classify;

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Metric value to classify
    #[arg(long, allow_negative_numbers = true)]
    pub metric: f64,
}

/// Classify one metric and report its bucket and display color.
pub fn run(args: &ClassifyArgs) -> String {
    let bucket = classify(args.metric);
    format!("{} {}", bucket.name(), bucket.color().hex())
}
