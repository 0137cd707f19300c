mod identity;

use crate::{BillingError, BillingResult, HttpTransport};

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ra_core::{KeyValueStore, MemoryStore, StoreResult};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

/// MemoryStore that counts writes and yields on every read so concurrent
/// callers interleave.
#[derive(Default)]
pub(crate) struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn with_items(items: Map<String, Value>) -> Self {
        Self {
            inner: MemoryStore::with_items(items),
            writes: AtomicUsize::new(0),
        }
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, keys: &[&str]) -> StoreResult<Map<String, Value>> {
        tokio::task::yield_now().await;
        self.inner.get(keys).await
    }

    async fn set(&self, items: Map<String, Value>) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.inner.set(items).await
    }

    async fn remove(&self, keys: &[&str]) -> StoreResult<()> {
        self.inner.remove(keys).await
    }
}

/// Canned transport response.
#[derive(Clone)]
pub(crate) enum Canned {
    Ok(String),
    Status(u16, String),
}

/// Transport stub that records requested URLs and answers from a table.
#[derive(Default)]
pub(crate) struct StubTransport {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn respond(mut self, url: &str, response: Canned) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub(crate) async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: &str) -> BillingResult<String> {
        self.requests.lock().await.push(url.to_string());
        match self.responses.get(url) {
            Some(Canned::Ok(body)) => Ok(body.clone()),
            Some(Canned::Status(status, body)) => Err(BillingError::remote(*status, body.clone())),
            None => Err(BillingError::remote(404, "no stub")),
        }
    }

    async fn post(&self, url: &str, _form: Option<&[(String, String)]>) -> BillingResult<String> {
        self.get(url).await
    }
}

/// `[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}`
pub(crate) fn is_uuid_v4_format(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    if lengths != [8, 4, 4, 4, 12] {
        return false;
    }
    let lower_hex = |g: &str| g.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
    groups.iter().all(|g| lower_hex(g))
        && groups[2].starts_with('4')
        && groups[3].starts_with(['8', '9', 'a', 'b'])
}
