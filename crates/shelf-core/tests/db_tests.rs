use shelf_core::{
    db::seed::SAMPLE_BOOKS, BookFields, BookFilter, CatalogError, Database, ReadingStatus,
    ValidBook,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn valid(title: &str, author: &str) -> ValidBook {
    BookFields {
        title: title.to_string(),
        author: author.to_string(),
        ..Default::default()
    }
    .validate_new()
    .expect("fields should be valid")
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.count_books().expect("Failed to count"), 0);
}

#[test]
fn test_reopen_keeps_existing_rows() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.insert_book(&valid("Al-Muwatta", "Imam Malik")).unwrap();
    }
    let db = Database::new(temp_file.path()).expect("Schema init should be idempotent");
    assert_eq!(db.count_books().unwrap(), 1);
}

#[test]
fn test_insert_assigns_id_and_defaults() {
    let (_temp_file, mut db) = create_test_db();

    let book = db
        .insert_book(&valid("Al-Muwatta", "Imam Malik"))
        .expect("Failed to insert book");

    assert!(book.id > 0);
    assert_eq!(book.title, "Al-Muwatta");
    assert_eq!(book.language.as_deref(), Some("Arabic"));
    assert_eq!(book.reading_status, ReadingStatus::NotStarted);
    assert_eq!(book.pages, None);
}

#[test]
fn test_get_book() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.insert_book(&valid("Get Title", "Author")).unwrap();
    let retrieved = db
        .get_book(created.id)
        .expect("Failed to get book")
        .expect("Book should exist");
    assert_eq!(retrieved, created);

    assert!(db.get_book(created.id + 100).unwrap().is_none());
}

#[test]
fn test_list_books_newest_first() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_book(&valid("Title 1", "Author")).unwrap();
    let second = db.insert_book(&valid("Title 2", "Author")).unwrap();
    let third = db.insert_book(&valid("Title 3", "Author")).unwrap();

    let ids: Vec<u64> = db
        .list_books(None)
        .expect("Failed to list books")
        .iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn test_list_books_combined_filters() {
    let (_temp_file, mut db) = create_test_db();
    db.seed_sample_books().unwrap();

    let filter = BookFilter {
        category: Some("Hadith".to_string()),
        language: Some("Arabic".to_string()),
        search: Some("collection".to_string()),
        ..Default::default()
    };
    let mut titles: Vec<String> = db
        .list_books(Some(&filter))
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    titles.sort();
    assert_eq!(
        titles,
        vec![
            "Riyadh as-Salihin",
            "Sahih Muslim",
            "Sahih al-Bukhari"
        ]
    );

    let english = BookFilter {
        language: Some("English".to_string()),
        ..Default::default()
    };
    let books = db.list_books(Some(&english)).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "The Sealed Nectar");
}

#[test]
fn test_search_treats_wildcards_literally() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_book(&valid("100% Certain", "Someone")).unwrap();
    db.insert_book(&valid("Plain title", "Someone")).unwrap();

    let percent = BookFilter {
        search: Some("%".to_string()),
        ..Default::default()
    };
    let books = db.list_books(Some(&percent)).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "100% Certain");

    let underscore = BookFilter {
        search: Some("_".to_string()),
        ..Default::default()
    };
    assert!(db.list_books(Some(&underscore)).unwrap().is_empty());
}

#[test]
fn test_sql_and_in_memory_filters_agree() {
    let (_temp_file, mut db) = create_test_db();
    db.seed_sample_books().unwrap();
    let all = db.list_books(None).unwrap();

    let filters = [
        BookFilter {
            search: Some("hadith".to_string()),
            ..Default::default()
        },
        BookFilter {
            category: Some("Tafsir".to_string()),
            ..Default::default()
        },
        BookFilter {
            status: Some(ReadingStatus::NotStarted),
            language: Some("Arabic".to_string()),
            ..Default::default()
        },
    ];

    for filter in filters {
        let from_sql: Vec<u64> = db
            .list_books(Some(&filter))
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();
        let in_memory: Vec<u64> = all
            .iter()
            .filter(|b| filter.matches(b))
            .map(|b| b.id)
            .collect();
        assert_eq!(from_sql, in_memory, "filter {filter:?}");
    }
}

#[test]
fn test_update_reading_status() {
    let (_temp_file, mut db) = create_test_db();
    let book = db.insert_book(&valid("Status Book", "Author")).unwrap();

    assert!(db
        .update_reading_status(book.id, ReadingStatus::Completed)
        .expect("Failed to update status"));
    let updated = db.get_book(book.id).unwrap().unwrap();
    assert_eq!(updated.reading_status, ReadingStatus::Completed);

    assert!(!db
        .update_reading_status(book.id + 1, ReadingStatus::Completed)
        .unwrap());
}

#[test]
fn test_replace_book() {
    let (_temp_file, mut db) = create_test_db();
    let book = db.insert_book(&valid("Old", "Author")).unwrap();

    let replacement = BookFields {
        title: "New".to_string(),
        author: "Other".to_string(),
        pages: Some(250),
        ..Default::default()
    }
    .validate()
    .unwrap();
    assert!(db.replace_book(book.id, &replacement).unwrap());

    let stored = db.get_book(book.id).unwrap().unwrap();
    assert_eq!(stored.title, "New");
    assert_eq!(stored.pages, Some(250));
    assert_eq!(stored.language, None);
    assert_eq!(stored.date_added, book.date_added);

    assert!(!db.replace_book(book.id + 1, &replacement).unwrap());
}

#[test]
fn test_delete_book() {
    let (_temp_file, mut db) = create_test_db();
    let book = db.insert_book(&valid("Delete Me", "Author")).unwrap();

    assert!(db.delete_book(book.id).expect("Failed to delete"));
    assert!(!db.delete_book(book.id).unwrap());
    assert!(db.get_book(book.id).unwrap().is_none());
}

#[test]
fn test_stats_buckets_sum_to_total() {
    let (_temp_file, mut db) = create_test_db();
    db.seed_sample_books().unwrap();
    let books = db.list_books(None).unwrap();
    db.update_reading_status(books[0].id, ReadingStatus::Completed)
        .unwrap();
    db.update_reading_status(books[1].id, ReadingStatus::InProgress)
        .unwrap();

    let stats = db.stats().expect("Failed to compute stats");
    assert_eq!(stats.total, 5);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.not_started, 3);
    assert_eq!(
        stats.completed + stats.in_progress + stats.not_started,
        stats.total
    );
}

#[test]
fn test_seed_only_into_empty_table() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.seed_sample_books().unwrap(), SAMPLE_BOOKS.len());
    assert_eq!(db.seed_sample_books().unwrap(), 0);
    assert_eq!(db.count_books().unwrap(), 5);

    let (_temp_file, mut db) = create_test_db();
    db.insert_book(&valid("Mine", "Me")).unwrap();
    assert_eq!(db.seed_sample_books().unwrap(), 0);
    assert_eq!(db.count_books().unwrap(), 1);
}

#[test]
fn test_database_error_on_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let result = Database::new(dir.path());
    assert!(matches!(result, Err(CatalogError::Database { .. })));

    let message = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("unable to open"), "got: {message}");
}

#[test]
fn test_ids_beyond_rowid_range_are_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let book = db.insert_book(&valid("Kept", "Author")).unwrap();
    let too_large = u64::MAX;

    assert!(db.get_book(too_large).unwrap_err().is_validation());
    assert!(db
        .update_reading_status(too_large, ReadingStatus::Completed)
        .unwrap_err()
        .is_validation());
    assert!(db
        .replace_book(too_large, &valid("Other", "Author"))
        .unwrap_err()
        .is_validation());
    assert!(db.delete_book(too_large).unwrap_err().is_validation());

    assert_eq!(db.get_book(book.id).unwrap(), Some(book));
}
