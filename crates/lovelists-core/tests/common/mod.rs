use lovelists_core::{Lists, ListsBuilder, SqliteStore};
use tempfile::TempDir;

/// Two lists from the classic example: one legacy-category home list and one
/// event.
pub const TWO_ITEM_CATALOG: &str = r#"[
    {"id": "1", "title": "Declutter", "category": "Home & Life Admin",
     "tags": ["home"], "steps": ["Counters", "Cupboards", "Fridge", "Drawers"]},
    {"id": "2", "title": "Wedding Plan", "category": "Events",
     "tags": ["wedding"], "steps": ["Budget", "Venue"]}
]"#;

/// Helper function to create a test environment with a catalog file.
pub fn create_test_environment(catalog_json: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("catalog.json"), catalog_json)
        .expect("Failed to write catalog");
    temp_dir
}

/// Open (or reopen) the lists stored in `temp_dir`.
pub fn open_lists(temp_dir: &TempDir) -> Lists<SqliteStore> {
    ListsBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_catalog_path(Some(temp_dir.path().join("catalog.json")))
        .build()
        .expect("Failed to create lists")
}
