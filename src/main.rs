#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;

use narasi_gen::config::DataSources;
use narasi_gen::{Cli, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Resolve where the two JSON documents live (the data itself is
    // fetched inside the app so the window can show a loading state)
    let sources = DataSources::resolve(&args.source_root);

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([460.0, 760.0])
            .with_min_inner_size([380.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Narasi Generator - Pilih. Susun. Bagikan.",
        options,
        Box::new(move |cc| Ok(run_app(cc, sources))),
    )
}
