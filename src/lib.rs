// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::TradingPair;
pub use engine::{MarketEngine, SlotId};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Initial pair for the left dashboard slot (e.g. BTCUSDT)
    #[arg(long)]
    pub left: Option<String>,

    /// Initial pair for the right dashboard slot (e.g. ETHUSDT)
    #[arg(long)]
    pub right: Option<String>,

    /// Refresh interval in seconds
    #[arg(long, default_value_t = 10)]
    pub interval_secs: u64,

    /// Fix the generator seed for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            interval_secs: 10,
            seed: None,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
