use crate::tests::{CountingStore, is_uuid_v4_format};
use crate::{INSTALLATION_ID_KEY, InstallationId, InstallationIdentityManager, ServiceUrl};

use std::sync::Arc;

use googletest::assert_that;
use googletest::prelude::eq;
use ra_core::{KeyValueStore, RecordingRegistrar, StoreError, StoreResult, UninstallRegistrar};
use serde_json::{Map, Value, json};

const SERVICE: &str = "https://support.lsdsoftware.com";

fn manager(
    store: Arc<CountingStore>,
    registrar: Arc<dyn UninstallRegistrar>,
) -> InstallationIdentityManager {
    InstallationIdentityManager::new(store, registrar, ServiceUrl::parse(SERVICE).unwrap())
}

fn stored(id: &str) -> Map<String, Value> {
    let mut items = Map::new();
    items.insert(INSTALLATION_ID_KEY.to_string(), json!(id));
    items
}

struct FailingRegistrar;

#[async_trait::async_trait]
impl UninstallRegistrar for FailingRegistrar {
    async fn register_uninstall_url(&self, _url: &str) -> StoreResult<()> {
        Err(StoreError::type_mismatch("uninstallUrl", "a string"))
    }
}

#[test]
fn test_generated_ids_match_uuid_v4_layout() {
    for _ in 0..100 {
        let id = InstallationId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert!(is_uuid_v4_format(id.as_str()), "bad format: {id}");
    }
}

#[tokio::test]
async fn given_empty_store_when_get_installation_id_then_creates_and_persists() {
    // Given
    let store = Arc::new(CountingStore::default());
    let registrar = Arc::new(RecordingRegistrar::new());
    let manager = manager(store.clone(), registrar.clone());

    // When
    let id = manager.get_installation_id().await.unwrap();

    // Then
    assert!(is_uuid_v4_format(id.as_str()));
    let persisted = store.get(&[INSTALLATION_ID_KEY]).await.unwrap();
    assert_eq!(persisted.get(INSTALLATION_ID_KEY), Some(&json!(id.as_str())));
    assert_that!(store.writes(), eq(1));
}

#[tokio::test]
async fn given_sequential_calls_when_get_installation_id_then_same_id_and_one_write() {
    // Given
    let store = Arc::new(CountingStore::default());
    let manager = manager(store.clone(), Arc::new(RecordingRegistrar::new()));

    // When
    let first = manager.get_installation_id().await.unwrap();
    let second = manager.get_installation_id().await.unwrap();

    // Then
    assert_eq!(first, second);
    assert_that!(store.writes(), eq(1));
}

#[tokio::test]
async fn given_new_identity_when_created_then_uninstall_url_registered_once() {
    // Given
    let store = Arc::new(CountingStore::default());
    let registrar = Arc::new(RecordingRegistrar::new());
    let manager = manager(store, registrar.clone());

    // When
    let id = manager.get_installation_id().await.unwrap();
    manager.get_installation_id().await.unwrap();
    manager.get_installation_id().await.unwrap();

    // Then
    assert_eq!(
        registrar.registered().await,
        vec![format!("{SERVICE}/read-aloud/billing/uninstall/{id}")]
    );
}

#[tokio::test]
async fn given_existing_identity_when_get_installation_id_then_no_write_or_registration() {
    // Given
    let store = Arc::new(CountingStore::with_items(stored("abc-123")));
    let registrar = Arc::new(RecordingRegistrar::new());
    let manager = manager(store.clone(), registrar.clone());

    // When
    let id = manager.get_installation_id().await.unwrap();

    // Then
    assert_that!(id.as_str(), eq("abc-123"));
    assert_that!(store.writes(), eq(0));
    assert!(registrar.registered().await.is_empty());
}

#[tokio::test]
async fn given_established_identity_when_called_100_times_then_identical_and_no_writes() {
    // Given
    let store = Arc::new(CountingStore::default());
    let manager = manager(store.clone(), Arc::new(RecordingRegistrar::new()));
    let established = manager.get_installation_id().await.unwrap();
    let writes_after_creation = store.writes();

    // When
    let mut ids = Vec::with_capacity(100);
    for _ in 0..100 {
        ids.push(manager.get_installation_id().await.unwrap());
    }

    // Then
    assert!(ids.iter().all(|id| *id == established));
    assert_that!(store.writes(), eq(writes_after_creation));
}

#[tokio::test]
async fn given_concurrent_first_access_when_resolved_then_one_identity_is_created() {
    // Given
    let store = Arc::new(CountingStore::default());
    let registrar = Arc::new(RecordingRegistrar::new());
    let manager = manager(store.clone(), registrar.clone());

    // When
    let (a, b, c, d) = tokio::join!(
        manager.get_installation_id(),
        manager.get_installation_id(),
        manager.get_installation_id(),
        manager.get_installation_id(),
    );

    // Then
    let a = a.unwrap();
    assert_eq!(a, b.unwrap());
    assert_eq!(a, c.unwrap());
    assert_eq!(a, d.unwrap());
    assert_that!(store.writes(), eq(1));
    assert_that!(registrar.registered().await.len(), eq(1));
}

#[tokio::test]
async fn given_empty_string_stored_when_get_installation_id_then_replaced() {
    // Given
    let store = Arc::new(CountingStore::with_items(stored("")));
    let manager = manager(store.clone(), Arc::new(RecordingRegistrar::new()));

    // When
    let id = manager.get_installation_id().await.unwrap();

    // Then
    assert!(is_uuid_v4_format(id.as_str()));
    assert_that!(store.writes(), eq(1));
}

#[tokio::test]
async fn given_failing_registrar_when_identity_created_then_id_still_returned() {
    // Given
    let store = Arc::new(CountingStore::default());
    let manager = manager(store.clone(), Arc::new(FailingRegistrar));

    // When
    let result = manager.get_installation_id().await;

    // Then
    assert!(result.is_ok());
    assert_that!(store.writes(), eq(1));
}

#[test]
fn test_uninstall_url_uses_service_base() {
    let manager = InstallationIdentityManager::new(
        Arc::new(CountingStore::default()),
        Arc::new(RecordingRegistrar::new()),
        ServiceUrl::parse("http://127.0.0.1:9000/").unwrap(),
    );
    let id = InstallationId::from("abc-123".to_string());

    assert_eq!(
        manager.uninstall_url(&id),
        "http://127.0.0.1:9000/read-aloud/billing/uninstall/abc-123"
    );
}
