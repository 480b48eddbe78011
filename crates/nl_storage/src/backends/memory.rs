use async_trait::async_trait;
use futures::future::BoxFuture;
use nl_core::{CacheStore, Result};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::{OnceCell, RwLock};

/// Process-lifetime cache. Each key owns a cell that is filled at most once.
pub struct MemoryStore<K, V> {
    name: String,
    entries: RwLock<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MemoryStore<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries.get(key).and_then(|cell| cell.get().cloned())
    }

    async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(key, Arc::new(OnceCell::new_with(Some(value))));
    }

    async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|cell| cell.initialized()).count()
    }

    async fn get_or_populate<'a>(&'a self, key: K, populate: BoxFuture<'a, Result<V>>) -> Result<V> {
        let cell = {
            let mut entries = self.entries.write().await;
            entries
                .entry(key)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        if let Some(value) = cell.get() {
            tracing::debug!(cache = %self.name, "cache hit");
            return Ok(value.clone());
        }

        let value = cell.get_or_try_init(|| populate).await?;
        Ok(value.clone())
    }
}
