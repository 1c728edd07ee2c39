use tempfile::TempDir;
use waymark_core::{Guide, GuideBuilder};

/// Helper function to create a test guide backed by a temp directory
pub async fn create_test_guide() -> (TempDir, Guide) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let guide = GuideBuilder::new()
        .with_database_path(Some(&db_path))
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create guide");
    (temp_dir, guide)
}

/// Helper function to create a test guide with a poe2 dataset override
pub async fn create_test_guide_with_dataset(dataset: &str) -> (TempDir, Guide) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("poe2.json"), dataset)
        .expect("Failed to write dataset override");
    let db_path = temp_dir.path().join("test.db");
    let guide = GuideBuilder::new()
        .with_database_path(Some(&db_path))
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .await
        .expect("Failed to create guide");
    (temp_dir, guide)
}
