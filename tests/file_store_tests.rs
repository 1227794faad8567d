use valet_store::backends::file::FileStore;
use valet_store::config::FileConfig;
use valet_store::errors::StoreError;
use valet_store::models::Color;
use valet_store::traits::store::ValueStore;

#[tokio::test]
async fn test_save_load_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::<String>::at(dir.path().join("greeting.json"));

    let echoed = store.save(&(), "hello".to_string()).await.unwrap();
    assert_eq!("hello", echoed);
    assert_eq!("hello", store.load(&()).await.unwrap());

    store.remove(&()).await.unwrap();
    assert!(store.load(&()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_missing_file_reports_not_found_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let store = FileStore::<String>::at(path.clone());

    let err = store.load(&()).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(Some(path.display().to_string().as_str()), err.identity());
}

#[tokio::test]
async fn test_corrupt_file_reports_decoding_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let store = FileStore::<String>::at(path);
    let err = store.load(&()).await.unwrap_err();
    assert!(matches!(err, StoreError::Decoding { .. }));
}

#[tokio::test]
async fn test_remove_is_idempotent_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::<String>::at(dir.path().join("absent.json"));

    store.remove(&()).await.unwrap();
    store.remove(&()).await.unwrap();
}

#[tokio::test]
async fn test_save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/settings/theme.json");
    let store = FileStore::<String>::at(path.clone());

    store.save(&(), "dark".to_string()).await.unwrap();

    assert!(path.exists());
    assert_eq!("dark", store.load(&()).await.unwrap());
}

#[tokio::test]
async fn test_save_without_create_dirs_fails_as_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = FileConfig::builder()
        .path(dir.path().join("missing/theme.json"))
        .create_dirs(false)
        .build();
    let store = FileStore::<String>::new(config);

    let err = store.save(&(), "dark".to_string()).await.unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
}

#[tokio::test]
async fn test_pretty_output_is_multi_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accent.json");
    let config = FileConfig::builder().path(path.clone()).pretty(true).build();
    let store = FileStore::<Color>::new(config);

    store
        .save(&(), Color::from_hex("#1e90ff").unwrap())
        .await
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains('\n'));
}

#[tokio::test]
async fn test_value_survives_across_store_handles() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("greeting.json");

    FileStore::<String>::at(path.clone())
        .save(&(), "hello".to_string())
        .await?;

    let reopened = FileStore::<String>::at(path);
    assert_eq!("hello", reopened.load(&()).await?);
    Ok(())
}
