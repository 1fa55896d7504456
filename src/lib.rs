// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod ui;

// Re-export commonly used types
pub use data::{AppConfig, AppData, Program, ProgramCatalog};
pub use engine::{Engine, GenerateError, GeneratedOutput, InputMode};
pub use ui::NarasiApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root URL or directory that serves data.json and program.json
    #[arg(long, default_value = config::DEFAULT_SOURCE_ROOT)]
    pub source_root: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    sources: config::DataSources,
) -> Box<dyn eframe::App> {
    let app = ui::NarasiApp::new(cc, sources);
    Box::new(app)
}
