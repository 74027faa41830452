use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BookCommands, ServeArgs};

/// Command-line interface for Shelf, a personal book catalog
///
/// Shelf tracks books together with their reading status. It can be used
/// directly from the terminal or run as a small web server that exposes a
/// JSON API and a browser UI over the same SQLite database.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shelf/shelf.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not insert the sample books into an empty catalog
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shelf CLI
///
/// Without a command, every book in the catalog is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage books
    #[command(alias = "b")]
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// Show reading statistics
    Stats,
    /// Start the HTTP server with the JSON API and browser UI
    Serve(ServeArgs),
}
