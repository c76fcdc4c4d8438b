#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// A personal task and productivity app built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "kuntartib", version, about)]
struct Cli {
    /// Create a task with this title on startup.
    #[arg(long = "new-task")]
    new_task: Option<String>,

    /// Override the data directory (tasks, board, tallies).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting kuntartib");

    // The store resolves its location from this variable at startup
    if let Some(dir) = &cli.data_dir {
        std::env::set_var("KUNTARTIB_DATA_DIR", dir);
    }

    let startup_args = kuntartib_ui::StartupArgs {
        new_task: cli.new_task,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kuntartib",
        native_options,
        Box::new(move |cc| Ok(Box::new(kuntartib_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
