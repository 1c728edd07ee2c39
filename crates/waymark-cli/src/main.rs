//! Waymark CLI Application
//!
//! Command-line interface for the waymark leveling guide: one-shot
//! subcommands for scripted use and an interactive session when run
//! without a subcommand.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use waymark_core::GuideBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let guide = GuideBuilder::new()
        .with_database_path(database_file)
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to initialize guide")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waymark started");

    match command {
        Some(command) => Cli::new(guide, renderer).handle(command).await,
        None => Session::new(guide, renderer).run().await,
    }
}
