//! Tests for the catalog module.

use super::*;
use crate::{
    models::ReadingStatus,
    params::{BookFields, Id, ListBooks, ReplaceBook, UpdateStatus},
    CatalogError,
};
use tempfile::TempDir;

/// Helper function to create a test catalog
async fn create_test_catalog(sample_data: bool) -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .with_sample_data(sample_data)
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

fn fields(title: &str, author: &str) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: author.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_book_assigns_fresh_ids() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let first = catalog
        .create_book(&fields("Al-Muwatta", "Imam Malik"))
        .await
        .expect("Failed to create book");
    let second = catalog
        .create_book(&fields("Bulugh al-Maram", "Ibn Hajar"))
        .await
        .expect("Failed to create book");

    assert!(first.id > 0);
    assert_ne!(first.id, second.id);
    assert_eq!(first.language.as_deref(), Some("Arabic"));
    assert_eq!(first.reading_status, ReadingStatus::NotStarted);
}

#[tokio::test]
async fn test_create_book_rejects_missing_title_or_author() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let err = catalog.create_book(&fields("", "Imam Malik")).await.unwrap_err();
    assert!(err.is_validation());

    let err = catalog.create_book(&fields("Al-Muwatta", "")).await.unwrap_err();
    assert!(err.is_validation());

    assert_eq!(catalog.count_books().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_missing_book_returns_none() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let book = catalog.get_book(&Id { id: 999 }).await.expect("Query failed");
    assert!(book.is_none());
}

#[tokio::test]
async fn test_update_status_persists() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;
    let book = catalog
        .create_book(&fields("Al-Muwatta", "Imam Malik"))
        .await
        .unwrap();

    let updated = catalog
        .update_status(&UpdateStatus {
            id: book.id,
            reading_status: "in_progress".to_string(),
        })
        .await
        .expect("Failed to update status");
    assert_eq!(updated.reading_status, ReadingStatus::InProgress);

    let fetched = catalog.get_book(&Id { id: book.id }).await.unwrap().unwrap();
    assert_eq!(fetched.reading_status, ReadingStatus::InProgress);
    assert_eq!(fetched.date_added, book.date_added);
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;
    let book = catalog
        .create_book(&fields("Al-Muwatta", "Imam Malik"))
        .await
        .unwrap();

    let err = catalog
        .update_status(&UpdateStatus {
            id: book.id,
            reading_status: "abandoned".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let fetched = catalog.get_book(&Id { id: book.id }).await.unwrap().unwrap();
    assert_eq!(fetched.reading_status, ReadingStatus::NotStarted);
}

#[tokio::test]
async fn test_update_status_on_missing_book() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let err = catalog
        .update_status(&UpdateStatus {
            id: 42,
            reading_status: "completed".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::BookNotFound { id: 42 }));
}

#[tokio::test]
async fn test_replace_book_overwrites_mutable_fields() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;
    let mut original = fields("Al-Muwatta", "Imam Malik");
    original.notes = Some("first reading".to_string());
    original.pages = Some(900);
    let book = catalog.create_book(&original).await.unwrap();
    catalog
        .update_status(&UpdateStatus {
            id: book.id,
            reading_status: "completed".to_string(),
        })
        .await
        .unwrap();

    let mut replacement = fields("Al-Muwatta (annotated)", "Imam Malik ibn Anas");
    replacement.category = Some("Fiqh".to_string());
    let replaced = catalog
        .replace_book(&ReplaceBook {
            id: book.id,
            fields: replacement,
        })
        .await
        .expect("Failed to replace book");

    assert_eq!(replaced.id, book.id);
    assert_eq!(replaced.title, "Al-Muwatta (annotated)");
    assert_eq!(replaced.category.as_deref(), Some("Fiqh"));
    assert_eq!(replaced.notes, None);
    assert_eq!(replaced.pages, None);
    assert_eq!(replaced.language, None);
    assert_eq!(replaced.reading_status, ReadingStatus::Completed);
    assert_eq!(replaced.date_added, book.date_added);
}

#[tokio::test]
async fn test_replace_book_validation_and_not_found() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;

    let err = catalog
        .replace_book(&ReplaceBook {
            id: 1,
            fields: fields("", ""),
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = catalog
        .replace_book(&ReplaceBook {
            id: 1,
            fields: fields("Title", "Author"),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_twice() {
    let (_temp_dir, catalog) = create_test_catalog(false).await;
    let book = catalog
        .create_book(&fields("Al-Muwatta", "Imam Malik"))
        .await
        .unwrap();

    let deleted = catalog
        .delete_book(&Id { id: book.id })
        .await
        .expect("First delete should succeed");
    assert_eq!(deleted.title, "Al-Muwatta");

    let err = catalog.delete_book(&Id { id: book.id }).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_books_filters_by_category_and_search() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;

    let hadith = catalog
        .list_books(&ListBooks {
            category: Some("Hadith".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hadith.len(), 3);
    assert!(hadith.iter().all(|b| b.category.as_deref() == Some("Hadith")));

    let searched = catalog
        .list_books(&ListBooks {
            search: Some("SAHIH".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut titles: Vec<&str> = searched.iter().map(|b| b.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Sahih Muslim", "Sahih al-Bukhari"]);
}

#[tokio::test]
async fn test_list_books_rejects_unknown_status_filter() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;

    let err = catalog
        .list_books(&ListBooks {
            status: Some("reading".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_seed_then_stats_scenario() {
    let (_temp_dir, catalog) = create_test_catalog(true).await;

    let stats = catalog.stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.not_started, 5);

    let books = catalog.list_books(&ListBooks::default()).await.unwrap();
    catalog
        .update_status(&UpdateStatus {
            id: books[0].id,
            reading_status: "completed".to_string(),
        })
        .await
        .unwrap();

    let stats = catalog.stats().await.unwrap();
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.not_started, 4);
    assert_eq!(stats.completed + stats.in_progress + stats.not_started, stats.total);
}

#[tokio::test]
async fn test_seeding_happens_only_once() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("seeded.db");

    for _ in 0..2 {
        CatalogBuilder::new()
            .with_database_path(Some(&db_path))
            .with_sample_data(true)
            .build()
            .await
            .unwrap();
    }

    let catalog = CatalogBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    assert_eq!(catalog.count_books().await.unwrap(), 5);
}
