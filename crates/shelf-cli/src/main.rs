//! Shelf CLI application
//!
//! Command-line front end and HTTP server for the Shelf book catalog.

mod args;
mod cli;
mod http;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelf_core::{params::ListBooks, CatalogBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        no_seed,
        command,
    } = Args::parse();

    let catalog = CatalogBuilder::new()
        .with_database_path(database_file)
        .with_sample_data(!no_seed)
        .build()
        .await
        .context("Failed to initialize catalog")?;

    info!("Shelf started with {}", catalog.database_path().display());

    match command {
        Some(Book { command }) => {
            Cli::new(catalog, TerminalRenderer::new(!no_color))
                .handle_book_command(command)
                .await
        }
        Some(Stats) => {
            Cli::new(catalog, TerminalRenderer::new(!no_color))
                .show_stats()
                .await
        }
        Some(Serve(args)) => http::serve(catalog, args.into()).await,
        None => {
            Cli::new(catalog, TerminalRenderer::new(!no_color))
                .list_books(&ListBooks::default())
                .await
        }
    }
}
