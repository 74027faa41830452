//! Server-side HTML rendering for the browser UI.
//!
//! Each fragment is a [`Display`](fmt::Display) wrapper, mirroring the text
//! wrappers in [`crate::display`]. Stored text always goes through
//! [`Escaped`] before it reaches the markup; the browser runtime renders
//! the same fragments with the same escaping after it takes over.

use std::fmt;

use super::Shelf;
use crate::{
    display::LocalDate,
    models::{Book, CatalogStats, ReadingStatus},
};

/// Escapes `& < > " '` so that text is safe in element content and quoted
/// attribute values.
///
/// ```rust
/// use shelf_core::view::html::escape_html;
///
/// assert_eq!(
///     escape_html(r#"<b onclick="x('y')">&</b>"#),
///     "&lt;b onclick=&quot;x(&#39;y&#39;)&quot;&gt;&amp;&lt;/b&gt;"
/// );
/// ```
pub fn escape_html(text: &str) -> String {
    Escaped(text).to_string()
}

/// Display wrapper writing its text HTML-escaped.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

/// One book card with its inline status selector.
pub struct BookCard<'a>(pub &'a Book);

impl fmt::Display for BookCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(f, r#"<div class="book-card" data-id="{}">"#, book.id)?;
        writeln!(f, r#"  <div class="book-header">"#)?;
        writeln!(
            f,
            r#"    <div class="book-title">{}</div>"#,
            Escaped(&book.title)
        )?;
        writeln!(
            f,
            r#"    <div class="book-author">by {}</div>"#,
            Escaped(&book.author)
        )?;
        writeln!(f, "  </div>")?;

        if let Some(desc) = &book.description {
            writeln!(
                f,
                r#"  <div class="book-description">{}</div>"#,
                Escaped(desc)
            )?;
        }

        writeln!(f, r#"  <div class="book-meta">"#)?;
        if let Some(category) = &book.category {
            writeln!(f, r#"    <span class="meta-tag">{}</span>"#, Escaped(category))?;
        }
        if let Some(language) = &book.language {
            writeln!(f, r#"    <span class="meta-tag">{}</span>"#, Escaped(language))?;
        }
        if let Some(pages) = book.pages {
            writeln!(f, r#"    <span class="meta-tag">{pages} pages</span>"#)?;
        }
        writeln!(f, "  </div>")?;

        writeln!(f, r#"  <div class="status-selector">"#)?;
        writeln!(f, "    <label>Status:</label>")?;
        writeln!(
            f,
            r#"    <select class="{}" data-id="{}">"#,
            book.reading_status.css_class(),
            book.id
        )?;
        for status in ReadingStatus::ALL {
            let selected = if status == book.reading_status {
                " selected"
            } else {
                ""
            };
            writeln!(
                f,
                r#"      <option value="{}"{selected}>{}</option>"#,
                status.as_str(),
                status.label()
            )?;
        }
        writeln!(f, "    </select>")?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")
    }
}

/// The grid of visible cards, or the empty-state block.
pub struct BooksGrid<'a>(pub &'a Shelf);

impl fmt::Display for BooksGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.visible_len() == 0 {
            writeln!(f, r#"<div class="empty-state">"#)?;
            writeln!(f, "  <h3>No books found</h3>")?;
            writeln!(
                f,
                "  <p>Try adjusting your search criteria or add a new book.</p>"
            )?;
            return writeln!(f, "</div>");
        }

        for book in self.0.visible() {
            write!(f, "{}", BookCard(book))?;
        }
        Ok(())
    }
}

/// Body of the book-detail modal.
///
/// The browser fills the modal with `renderDetails` from
/// [`APP_JS`](super::APP_JS); this is the same markup rendered in Rust.
pub struct BookDetails<'a>(pub &'a Book);

impl fmt::Display for BookDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(f, r#"<div class="details">"#)?;
        section(f, "h3", "Author", &book.author)?;
        if let Some(desc) = &book.description {
            section(f, "h3", "Description", desc)?;
        }

        writeln!(f, r#"  <div class="details-grid">"#)?;
        if let Some(category) = &book.category {
            section(f, "h4", "Category", category)?;
        }
        if let Some(language) = &book.language {
            section(f, "h4", "Language", language)?;
        }
        if let Some(pages) = book.pages {
            section(f, "h4", "Pages", &pages.to_string())?;
        }
        section(f, "h4", "Reading Status", book.reading_status.label())?;
        writeln!(f, "  </div>")?;

        if let Some(notes) = &book.notes {
            section(f, "h3", "Notes", notes)?;
        }
        section(
            f,
            "h4",
            "Date Added",
            &LocalDate(&book.date_added).to_string(),
        )?;
        writeln!(f, "</div>")
    }
}

fn section(f: &mut fmt::Formatter<'_>, tag: &str, heading: &str, body: &str) -> fmt::Result {
    writeln!(f, r#"  <div class="details-section">"#)?;
    writeln!(f, "    <{tag}>{heading}</{tag}>")?;
    writeln!(f, "    <p>{}</p>", Escaped(body))?;
    writeln!(f, "  </div>")
}

/// The four counters at the top of the page.
pub struct StatsPanel<'a>(pub &'a CatalogStats);

impl fmt::Display for StatsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, r#"<div class="stats">"#)?;
        for (id, label, value) in [
            ("totalBooks", "Total Books", stats.total),
            ("completedBooks", "Completed", stats.completed),
            ("inProgressBooks", "In Progress", stats.in_progress),
            ("notStartedBooks", "Not Started", stats.not_started),
        ] {
            writeln!(f, r#"  <div class="stat-card">"#)?;
            writeln!(f, r#"    <span class="stat-number" id="{id}">{value}</span>"#)?;
            writeln!(f, r#"    <span class="stat-label">{label}</span>"#)?;
            writeln!(f, "  </div>")?;
        }
        writeln!(f, "</div>")
    }
}

/// The full index page: header, stats, filter bar, cards and both modals.
pub struct IndexPage<'a> {
    pub shelf: &'a Shelf,
    pub stats: &'a CatalogStats,
}

impl fmt::Display for IndexPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let criteria = self.shelf.criteria();

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="utf-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
        )?;
        writeln!(f, "<title>Book Shelf</title>")?;
        writeln!(f, r#"<link rel="stylesheet" href="/assets/style.css">"#)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<div class="container">"#)?;
        writeln!(f, "<header>")?;
        writeln!(f, "<h1>Book Shelf</h1>")?;
        writeln!(
            f,
            r#"<button type="button" class="btn-primary" id="openAddBook">Add Book</button>"#
        )?;
        writeln!(f, "</header>")?;

        write!(f, "{}", StatsPanel(self.stats))?;

        writeln!(f, r#"<div class="filters">"#)?;
        writeln!(
            f,
            r#"<input type="text" id="searchInput" placeholder="Search by title, author or description" value="{}">"#,
            Escaped(criteria.search.as_deref().unwrap_or(""))
        )?;
        filter_select(
            f,
            "categoryFilter",
            "All Categories",
            &self.shelf.categories(),
            criteria.category.as_deref(),
        )?;
        writeln!(f, r#"<select id="statusFilter">"#)?;
        writeln!(f, r#"<option value="">All Statuses</option>"#)?;
        for status in ReadingStatus::ALL {
            let selected = if criteria.status == Some(status) {
                " selected"
            } else {
                ""
            };
            writeln!(
                f,
                r#"<option value="{}"{selected}>{}</option>"#,
                status.as_str(),
                status.label()
            )?;
        }
        writeln!(f, "</select>")?;
        filter_select(
            f,
            "languageFilter",
            "All Languages",
            &self.shelf.languages(),
            criteria.language.as_deref(),
        )?;
        writeln!(f, "</div>")?;

        writeln!(f, r#"<div class="loading" id="loading" hidden>Loading...</div>"#)?;
        writeln!(f, r#"<div class="books-grid" id="booksGrid">"#)?;
        write!(f, "{}", BooksGrid(self.shelf))?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;

        write_add_book_modal(f)?;

        writeln!(f, r#"<div class="modal" id="bookDetailsModal">"#)?;
        writeln!(f, r#"<div class="modal-content">"#)?;
        writeln!(f, r#"<div class="modal-header">"#)?;
        writeln!(f, r#"<h2 id="bookDetailsTitle"></h2>"#)?;
        writeln!(
            f,
            r#"<button type="button" class="close" data-close="bookDetailsModal">&times;</button>"#
        )?;
        writeln!(f, "</div>")?;
        writeln!(f, r#"<div id="bookDetailsContent"></div>"#)?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;

        writeln!(f, r#"<script src="/assets/app.js"></script>"#)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn filter_select(
    f: &mut fmt::Formatter<'_>,
    id: &str,
    placeholder: &str,
    values: &[&str],
    selected: Option<&str>,
) -> fmt::Result {
    writeln!(f, r#"<select id="{id}">"#)?;
    writeln!(f, r#"<option value="">{placeholder}</option>"#)?;
    for value in values {
        let mark = if selected == Some(*value) {
            " selected"
        } else {
            ""
        };
        writeln!(
            f,
            r#"<option value="{0}"{mark}>{0}</option>"#,
            Escaped(value)
        )?;
    }
    writeln!(f, "</select>")
}

fn write_add_book_modal(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, r#"<div class="modal" id="addBookModal">"#)?;
    writeln!(f, r#"<div class="modal-content">"#)?;
    writeln!(f, r#"<div class="modal-header">"#)?;
    writeln!(f, "<h2>Add New Book</h2>")?;
    writeln!(
        f,
        r#"<button type="button" class="close" data-close="addBookModal">&times;</button>"#
    )?;
    writeln!(f, "</div>")?;
    writeln!(f, r#"<form id="addBookForm">"#)?;
    for (id, label, input) in [
        ("bookTitle", "Title *", r#"type="text" required"#),
        ("bookAuthor", "Author *", r#"type="text" required"#),
        ("bookCategory", "Category", r#"type="text""#),
        ("bookLanguage", "Language", r#"type="text" value="Arabic""#),
        ("bookPages", "Pages", r#"type="number" min="1""#),
    ] {
        writeln!(f, r#"<label for="{id}">{label}</label>"#)?;
        writeln!(f, r#"<input id="{id}" {input}>"#)?;
    }
    for (id, label) in [("bookDescription", "Description"), ("bookNotes", "Notes")] {
        writeln!(f, r#"<label for="{id}">{label}</label>"#)?;
        writeln!(f, r#"<textarea id="{id}" rows="3"></textarea>"#)?;
    }
    writeln!(f, r#"<button type="submit" class="btn-primary">Add Book</button>"#)?;
    writeln!(f, "</form>")?;
    writeln!(f, "</div>")?;
    writeln!(f, "</div>")
}
