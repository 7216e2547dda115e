mod app;
mod keybindings;

use anyhow::{Context, Result};
use app::TriageApp;
use clap::Parser;
use eframe::{NativeOptions, egui};
use rfd::FileDialog;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triage_core::{Session, TriageConfig};

/// Review the images of a folder one by one and set aside the rejected ones.
#[derive(Debug, Parser)]
#[command(name = "Triage", version = env!("TRIAGE_VERSION"))]
struct Args {
    /// Folder with the images; a folder picker is shown when omitted.
    folder: Option<PathBuf>,
    /// Config file (TOML). Defaults to `triage.toml` inside the folder.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write a CSV report of all decisions here on quit.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let folder = match args.folder {
        Some(folder) => folder,
        None => FileDialog::new()
            .set_directory(".")
            .pick_folder()
            .context("no folder selected")?,
    };
    if !folder.is_dir() {
        anyhow::bail!("Folder {} not found", folder.display());
    }

    let mut config = TriageConfig::resolve(args.config.as_deref(), &folder)?;
    if args.report.is_some() {
        config.report = args.report;
    }
    let session = Session::open(&folder)?;

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1320.0, 860.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Image Triage",
        options,
        Box::new(move |_cc| {
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(TriageApp::new(
                session, config,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("application stopped with error: {e}"))
}
