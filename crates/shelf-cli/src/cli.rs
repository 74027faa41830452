//! Command-line argument wrappers and the command handler.
//!
//! Arguments are parsed by clap into the wrapper structs below and then
//! converted into the interface-agnostic parameter types of
//! [`shelf_core::params`]:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog
//! ```
//!
//! Core parameter types carry no clap attributes, so the same types are
//! deserialized from JSON by the HTTP layer.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use shelf_core::{
    display::{Books, CreateResult, DeleteResult, UpdateResult},
    params::{BookFields, Id, ListBooks, ReplaceBook, UpdateStatus},
    Book, Catalog, ReadingStatus,
};

use crate::{http::ServerConfig, renderer::TerminalRenderer};

/// Writable book fields shared by `add` and `update`
#[derive(Args)]
pub struct BookFieldArgs {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Short summary of the book
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category, e.g. Hadith or Tafsir
    #[arg(short, long)]
    pub category: Option<String>,
    /// Language of the copy (new books default to Arabic)
    #[arg(short, long)]
    pub language: Option<String>,
    /// Number of pages
    #[arg(short, long)]
    pub pages: Option<i64>,
    /// Personal notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<BookFieldArgs> for BookFields {
    fn from(val: BookFieldArgs) -> Self {
        BookFields {
            title: val.title,
            author: val.author,
            description: val.description,
            category: val.category,
            language: val.language,
            pages: val.pages,
            notes: val.notes,
        }
    }
}

/// List books, optionally filtered
#[derive(Args)]
pub struct ListBooksArgs {
    /// Case-insensitive text matched against title, author and description
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only books in this category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Only books with this reading status
    #[arg(long, value_enum)]
    pub status: Option<ReadingStatusArg>,
    /// Only books in this language
    #[arg(short, long)]
    pub language: Option<String>,
}

impl From<ListBooksArgs> for ListBooks {
    fn from(val: ListBooksArgs) -> Self {
        ListBooks {
            search: val.search,
            category: val.category,
            status: val.status.map(|s| ReadingStatus::from(s).as_str().to_string()),
            language: val.language,
        }
    }
}

/// Identify a single book
#[derive(Args)]
pub struct BookIdArgs {
    /// ID of the book
    pub id: u64,
}

impl From<BookIdArgs> for Id {
    fn from(val: BookIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change the reading status of a book
#[derive(Args)]
pub struct SetStatusArgs {
    /// ID of the book
    pub id: u64,
    /// New reading status
    #[arg(value_enum)]
    pub status: ReadingStatusArg,
}

impl From<SetStatusArgs> for UpdateStatus {
    fn from(val: SetStatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            reading_status: ReadingStatus::from(val.status).as_str().to_string(),
        }
    }
}

/// Replace every editable field of a book
#[derive(Args)]
pub struct UpdateBookArgs {
    /// ID of the book to update
    pub id: u64,
    #[command(flatten)]
    pub fields: BookFieldArgs,
}

impl From<UpdateBookArgs> for ReplaceBook {
    fn from(val: UpdateBookArgs) -> Self {
        ReplaceBook {
            id: val.id,
            fields: val.fields.into(),
        }
    }
}

/// Start the HTTP server
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
    /// Allowed CORS origin; repeat for several. Any origin when omitted
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl From<ServeArgs> for ServerConfig {
    fn from(val: ServeArgs) -> Self {
        ServerConfig {
            host: val.host,
            port: val.port,
            cors_origins: val.cors_origins,
        }
    }
}

#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a new book
    #[command(alias = "a")]
    Add(BookFieldArgs),
    /// List books
    #[command(alias = "ls")]
    List(ListBooksArgs),
    /// Show details of a book
    #[command(alias = "s")]
    Show(BookIdArgs),
    /// Set the reading status of a book
    Status(SetStatusArgs),
    /// Replace the details of a book
    #[command(alias = "u")]
    Update(UpdateBookArgs),
    /// Delete a book
    #[command(alias = "rm")]
    Delete(BookIdArgs),
}

/// Reading status values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ReadingStatusArg {
    /// Not opened yet
    #[value(name = "not_started")]
    NotStarted,
    /// Currently reading
    #[value(name = "in_progress")]
    InProgress,
    /// Read to the end
    Completed,
}

impl From<ReadingStatusArg> for ReadingStatus {
    fn from(val: ReadingStatusArg) -> Self {
        match val {
            ReadingStatusArg::NotStarted => ReadingStatus::NotStarted,
            ReadingStatusArg::InProgress => ReadingStatus::InProgress,
            ReadingStatusArg::Completed => ReadingStatus::Completed,
        }
    }
}

/// Runs CLI commands against the catalog and renders the result.
pub struct Cli {
    catalog: Catalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(catalog: Catalog, renderer: TerminalRenderer) -> Self {
        Self { catalog, renderer }
    }

    pub async fn handle_book_command(&self, command: BookCommands) -> Result<()> {
        match command {
            BookCommands::Add(args) => self.add_book(args.into()).await,
            BookCommands::List(args) => self.list_books(&args.into()).await,
            BookCommands::Show(args) => self.show_book(args.into()).await,
            BookCommands::Status(args) => self.set_status(args.into()).await,
            BookCommands::Update(args) => self.update_book(args.into()).await,
            BookCommands::Delete(args) => self.delete_book(args.into()).await,
        }
    }

    pub async fn list_books(&self, params: &ListBooks) -> Result<()> {
        let books = self
            .catalog
            .list_books(params)
            .await
            .context("Failed to list books")?;
        self.renderer.render(&Books(books).to_string())
    }

    pub async fn show_stats(&self) -> Result<()> {
        let stats = self
            .catalog
            .stats()
            .await
            .context("Failed to compute statistics")?;
        self.renderer.render(&stats.to_string())
    }

    async fn add_book(&self, fields: BookFields) -> Result<()> {
        let book = self
            .catalog
            .create_book(&fields)
            .await
            .context("Failed to add book")?;
        self.renderer.render(&CreateResult::new(book).to_string())
    }

    async fn show_book(&self, params: Id) -> Result<()> {
        let book = self.find_book(params).await?;
        self.renderer.render(&book.to_string())
    }

    async fn set_status(&self, params: UpdateStatus) -> Result<()> {
        let before = self.find_book(Id { id: params.id }).await?;
        let after = self
            .catalog
            .update_status(&params)
            .await
            .context("Failed to update reading status")?;

        let changes = describe_changes(&before, &after);
        self.renderer
            .render(&UpdateResult::with_changes(after, changes).to_string())
    }

    async fn update_book(&self, params: ReplaceBook) -> Result<()> {
        let before = self.find_book(Id { id: params.id }).await?;
        let after = self
            .catalog
            .replace_book(&params)
            .await
            .context("Failed to update book")?;

        let changes = describe_changes(&before, &after);
        self.renderer
            .render(&UpdateResult::with_changes(after, changes).to_string())
    }

    async fn delete_book(&self, params: Id) -> Result<()> {
        let book = self
            .catalog
            .delete_book(&params)
            .await
            .context("Failed to delete book")?;
        self.renderer.render(&DeleteResult::new(book).to_string())
    }

    async fn find_book(&self, params: Id) -> Result<Book> {
        self.catalog
            .get_book(&params)
            .await
            .context("Failed to load book")?
            .ok_or_else(|| anyhow!("Book with ID {} not found", params.id))
    }
}

/// Human readable list of the fields that differ between two versions of a
/// book.
fn describe_changes(before: &Book, after: &Book) -> Vec<String> {
    fn text(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or("(none)")
    }

    let mut changes = Vec::new();
    let mut push = |field: &str, old: &str, new: &str| {
        if old != new {
            changes.push(format!("{field}: {old} -> {new}"));
        }
    };

    push("Title", &before.title, &after.title);
    push("Author", &before.author, &after.author);
    push("Description", text(&before.description), text(&after.description));
    push("Category", text(&before.category), text(&after.category));
    push("Language", text(&before.language), text(&after.language));
    push(
        "Pages",
        &before.pages.map_or("(none)".to_string(), |p| p.to_string()),
        &after.pages.map_or("(none)".to_string(), |p| p.to_string()),
    );
    push("Notes", text(&before.notes), text(&after.notes));
    push(
        "Status",
        before.reading_status.label(),
        after.reading_status.label(),
    );
    changes
}
