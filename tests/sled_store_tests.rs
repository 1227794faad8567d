#![cfg(feature = "sled")]

pub mod common;

use common::PrefKey;
use valet_store::backends::sled_store::SledBackend;
use valet_store::config::SledConfig;
use valet_store::errors::StoreError;
use valet_store::models::Color;
use valet_store::traits::store::ValueStore;

#[test]
fn test_temp_backend_creation() {
    let backend = SledBackend::<PrefKey>::temp();
    assert!(backend.is_ok());
}

#[tokio::test]
async fn test_save_load_remove_round_trip() {
    let backend = SledBackend::temp().unwrap();
    let store = backend.value_store::<String>(PrefKey::Greeting);

    let echoed = store.save(&(), "hello".to_string()).await.unwrap();
    assert_eq!("hello", echoed);
    assert_eq!("hello", store.load(&()).await.unwrap());

    store.remove(&()).await.unwrap();
    assert!(store.load(&()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let backend = SledBackend::temp().unwrap();
    let store = backend.value_store::<String>(PrefKey::Greeting);

    store.remove(&()).await.unwrap();
    store.remove(&()).await.unwrap();
}

#[tokio::test]
async fn test_identity_includes_namespace() {
    let backend = SledBackend::temp().unwrap();
    let store = backend.value_store::<String>(PrefKey::Greeting);

    assert_eq!("values/Greeting", store.identity());

    let err = store.load(&()).await.unwrap_err();
    assert_eq!(Some("values/Greeting"), err.identity());
}

#[tokio::test]
async fn test_keys_are_isolated() {
    let backend = SledBackend::temp().unwrap();
    let greeting = backend.value_store::<String>(PrefKey::Greeting);
    let theme = backend.value_store::<String>(PrefKey::Theme);

    greeting.save(&(), "hello".to_string()).await.unwrap();
    theme.save(&(), "dark".to_string()).await.unwrap();

    greeting.remove(&()).await.unwrap();
    assert_eq!("dark", theme.load(&()).await.unwrap());
}

#[tokio::test]
async fn test_value_survives_reopen() -> Result<(), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("settings.db");

    {
        let backend = SledBackend::new(SledConfig::new(&db_path))?;
        backend
            .value_store::<String>(PrefKey::Greeting)
            .save(&(), "hello".to_string())
            .await?;
    }

    let backend = SledBackend::new(SledConfig::new(&db_path))?;
    let store = backend.value_store::<String>(PrefKey::Greeting);
    assert_eq!("hello", store.load(&()).await?);
    Ok(())
}

#[tokio::test]
async fn test_mismatched_value_type_reports_decoding_failure() {
    let backend = SledBackend::temp().unwrap();

    backend
        .value_store::<u64>(PrefKey::Greeting)
        .save(&(), 42)
        .await
        .unwrap();

    let store = backend.value_store::<String>(PrefKey::Greeting);
    let err = store.load(&()).await.unwrap_err();
    assert!(matches!(err, StoreError::Decoding { .. }));
}

#[tokio::test]
async fn test_stores_typed_models() {
    let backend = SledBackend::temp().unwrap();
    let store = backend.value_store::<Color>(PrefKey::AccentColor);

    let color = Color::from_hex("#1e90ff").unwrap();
    store.save(&(), color).await.unwrap();
    assert_eq!(color, store.load(&()).await.unwrap());
}

#[tokio::test]
async fn test_flush() {
    let backend = SledBackend::temp().unwrap();
    backend
        .value_store::<String>(PrefKey::Greeting)
        .save(&(), "hello".to_string())
        .await
        .unwrap();

    assert!(backend.flush().is_ok());
}
