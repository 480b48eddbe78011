use async_trait::async_trait;
use futures::future::BoxFuture;
use crate::Result;

/// Key-value store backing the query and content caches.
///
/// `get_or_populate` is atomic per key: concurrent callers asking for the same
/// missing key await a single population. A failed population leaves the key
/// absent.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V>;

    async fn insert(&self, key: K, value: V);

    async fn len(&self) -> usize;

    async fn get_or_populate<'a>(&'a self, key: K, populate: BoxFuture<'a, Result<V>>) -> Result<V>;
}
