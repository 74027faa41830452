mod common;

use common::{book_fields, create_test_catalog};
use shelf_core::{
    display::Books, BookFilter, CatalogStats, Id, ListBooks, ReadingStatus, ReplaceBook, Shelf,
    UpdateStatus,
};

#[tokio::test]
async fn test_complete_book_workflow() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let mut fields = book_fields("Bulugh al-Maram", "Ibn Hajar al-Asqalani");
    fields.category = Some("Hadith".to_string());
    fields.pages = Some(700);
    let book = catalog
        .create_book(&fields)
        .await
        .expect("Failed to create book");

    let fetched = catalog
        .get_book(&Id { id: book.id })
        .await
        .expect("Failed to get book")
        .expect("Book should exist");
    assert_eq!(fetched, book);

    let updated = catalog
        .update_status(&UpdateStatus {
            id: book.id,
            reading_status: "completed".to_string(),
        })
        .await
        .expect("Failed to update status");
    assert_eq!(updated.reading_status, ReadingStatus::Completed);

    let mut replacement = book_fields("Bulugh al-Maram min Adillat al-Ahkam", "Ibn Hajar");
    replacement.language = Some("Arabic".to_string());
    let replaced = catalog
        .replace_book(&ReplaceBook {
            id: book.id,
            fields: replacement,
        })
        .await
        .expect("Failed to replace book");
    assert_eq!(replaced.reading_status, ReadingStatus::Completed);
    assert_eq!(replaced.category, None);

    let deleted = catalog
        .delete_book(&Id { id: book.id })
        .await
        .expect("Failed to delete book");
    assert_eq!(deleted.id, book.id);
    assert!(catalog.get_book(&Id { id: book.id }).await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_query_parameters_are_unset() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;

    let books = catalog
        .list_books(&ListBooks {
            search: Some(String::new()),
            category: Some(String::new()),
            status: Some(String::new()),
            language: Some(String::new()),
        })
        .await
        .unwrap();
    assert_eq!(books.len(), 5);
}

#[tokio::test]
async fn test_status_filter() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;
    let books = catalog.list_books(&ListBooks::default()).await.unwrap();
    catalog
        .update_status(&UpdateStatus {
            id: books[2].id,
            reading_status: "in_progress".to_string(),
        })
        .await
        .unwrap();

    let in_progress = catalog
        .list_books(&ListBooks {
            status: Some("in_progress".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, books[2].id);
}

#[tokio::test]
async fn test_shelf_matches_catalog_stats() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;
    let books = catalog.list_books(&ListBooks::default()).await.unwrap();
    let first = books[0].id;

    let mut shelf = Shelf::new(books);
    catalog
        .update_status(&UpdateStatus {
            id: first,
            reading_status: "completed".to_string(),
        })
        .await
        .unwrap();
    assert!(shelf.apply_status(first, ReadingStatus::Completed));

    let stats: CatalogStats = catalog.stats().await.unwrap();
    assert_eq!(shelf.stats(), stats);

    shelf.set_criteria(BookFilter {
        status: Some(ReadingStatus::Completed),
        ..Default::default()
    });
    assert_eq!(shelf.visible().map(|b| b.id).collect::<Vec<_>>(), vec![first]);
}

#[tokio::test]
async fn test_books_display() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;

    let books = Books(catalog.list_books(&ListBooks::default()).await.unwrap());
    let output = books.to_string();
    assert!(output.contains("## Sahih Muslim (ID: "));
    assert!(output.contains("- **Status**: Not Started"));

    let none = Books(
        catalog
            .list_books(&ListBooks {
                category: Some("Fiqh".to_string()),
                ..Default::default()
            })
            .await
            .unwrap(),
    );
    assert_eq!(none.to_string(), "No books found.\n");
}
