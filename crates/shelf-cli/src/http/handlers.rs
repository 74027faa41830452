//! Route handlers for the JSON API and the browser UI.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shelf_core::{
    params::{BookFields, Id, ListBooks, ReplaceBook, UpdateStatus},
    view::{html::IndexPage, Shelf, APP_JS, STYLE_CSS},
    Book, BookFilter, CatalogStats,
};

use super::{errors::ApiError, router::AppState};

type ApiResult<T> = Result<T, ApiError>;

/// Body of `PATCH /api/books/:id/status`
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub reading_status: String,
}

/// Response to a successful create
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: u64,
    pub message: &'static str,
}

/// Response to a successful mutation
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

/// Server-rendered first page. Query parameters preselect the filters the
/// same way the filter bar does in the browser.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<ListBooks>, QueryRejection>,
) -> ApiResult<Html<String>> {
    let Query(params) = query?;
    let criteria = BookFilter::try_from(&params)?;
    let books = state.catalog.list_books(&ListBooks::default()).await?;
    let stats = state.catalog.stats().await?;

    let mut shelf = Shelf::new(books);
    shelf.set_criteria(criteria);

    Ok(Html(
        IndexPage {
            shelf: &shelf,
            stats: &stats,
        }
        .to_string(),
    ))
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.catalog.count_books().await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<ListBooks>, QueryRejection>,
) -> ApiResult<Json<Vec<Book>>> {
    let Query(params) = query?;
    let books = state.catalog.list_books(&params).await?;
    debug!("Listed {} books", books.len());
    Ok(Json(books))
}

pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let Path(id) = id?;
    debug!("Fetching book {id}");
    state
        .catalog
        .get_book(&Id { id })
        .await?
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<BookFields>, JsonRejection>,
) -> ApiResult<Json<Created>> {
    let Json(fields) = body?;
    let book = state.catalog.create_book(&fields).await?;
    info!("POST /api/books created {}", book.id);
    Ok(Json(Created {
        id: book.id,
        message: "Book added successfully",
    }))
}

pub async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id?;
    let Json(body) = body?;
    state
        .catalog
        .update_status(&UpdateStatus {
            id,
            reading_status: body.reading_status,
        })
        .await?;
    info!("PATCH /api/books/{id}/status");
    Ok(Json(Message {
        message: "Reading status updated successfully",
    }))
}

pub async fn replace_book(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<BookFields>, JsonRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id?;
    let Json(fields) = body?;
    state
        .catalog
        .replace_book(&ReplaceBook { id, fields })
        .await?;
    info!("PUT /api/books/{id}");
    Ok(Json(Message {
        message: "Book updated successfully",
    }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id?;
    state.catalog.delete_book(&Id { id }).await?;
    info!("DELETE /api/books/{id}");
    Ok(Json(Message {
        message: "Book deleted successfully",
    }))
}

pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<CatalogStats>> {
    Ok(Json(state.catalog.stats().await?))
}
