use shelf_core::{BookFields, Catalog, CatalogBuilder};
use tempfile::TempDir;

/// Helper function to create a test catalog
pub async fn create_test_catalog(sample_data: bool) -> (TempDir, Catalog) {
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

/// Minimal valid fields for a new book
pub fn book_fields(title: &str, author: &str) -> BookFields {
    BookFields {
        title: title.to_string(),
        author: author.to_string(),
        ..Default::default()
    }
}
