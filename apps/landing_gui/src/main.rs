use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use waitlist_core::{ProcessClientContext, StoreConfig, WaitlistService};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::LandingApp;

const APP_NAME: &str = "interview-lens-landing";
const WINDOW_TITLE: &str = "Interview Lens";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Interview Lens landing page with waitlist signup")]
struct Args {
    /// Settings file with store_url / store_api_key (defaults to ./waitlist.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let store_config = StoreConfig::load(args.config.as_deref())
        .context("failed to load waitlist store configuration")?;
    tracing::info!(table_url = store_config.table_url(), "waitlist store configured");

    let context = Arc::new(ProcessClientContext::new(APP_NAME, env!("CARGO_PKG_VERSION")));
    let service = WaitlistService::from_config(&store_config, context);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, service);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1180.0, 860.0])
            .with_min_inner_size([760.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LandingApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("landing page window failed: {err}"))
}
