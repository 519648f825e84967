//! Shared test doubles: a scripted transport and a counting store.

#![allow(dead_code)]

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use etagged::{CacheEntry, CacheKey, CacheStore, Completion, HttpClient, RequestOptions};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("mock transport error: {0}")]
pub struct MockError(pub String);

type Responder = dyn Fn(&RequestOptions) -> Completion<MockError> + Send + Sync;

/// Transport that answers from a closure and records every request it sees.
#[derive(Clone)]
pub struct MockClient {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<RequestOptions>>>,
}

impl MockClient {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RequestOptions) -> Completion<MockError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RequestOptions> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RequestOptions {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    type Error = MockError;

    fn execute(
        &self,
        options: RequestOptions,
    ) -> impl Future<Output = Completion<Self::Error>> + Send {
        let completion = (self.responder)(&options);
        self.requests.lock().unwrap().push(options);
        async move {
            tokio::task::yield_now().await;
            completion
        }
    }
}

#[derive(Debug, Default)]
pub struct StoreCounters {
    pub get_count: AtomicUsize,
    pub set_count: AtomicUsize,
    pub reset_count: AtomicUsize,
}

/// Unbounded store that counts every interaction.
#[derive(Clone, Debug, Default)]
pub struct CountingStore {
    pub cache: Arc<DashMap<CacheKey, CacheEntry>>,
    pub counters: Arc<StoreCounters>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_count(&self) -> usize {
        self.counters.get_count.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.counters.set_count.load(Ordering::SeqCst)
    }

    pub fn reset_count(&self) -> usize {
        self.counters.reset_count.load(Ordering::SeqCst)
    }

    pub fn entry_count(&self) -> usize {
        self.cache.len()
    }

    pub fn entry_for(&self, options: &RequestOptions) -> Option<CacheEntry> {
        let key = CacheKey::capture(options).unwrap();
        self.cache.get(&key).map(|entry| entry.value().clone())
    }
}

impl CacheStore for CountingStore {
    fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.counters.get_count.fetch_add(1, Ordering::SeqCst);
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: CacheKey, entry: CacheEntry) {
        self.counters.set_count.fetch_add(1, Ordering::SeqCst);
        self.cache.insert(key, entry);
    }

    fn reset(&self) {
        self.counters.reset_count.fetch_add(1, Ordering::SeqCst);
        self.cache.clear();
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
