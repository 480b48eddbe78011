use nl_core::{CacheStore, Error, Result};
use std::hash::Hash;
use std::sync::Arc;

pub mod backends;

pub use backends::*;

/// Builds a cache store by backend name. Only `memory` exists; entries live
/// for the lifetime of the process.
pub fn create_store<K, V>(kind: &str, name: &str) -> Result<Arc<dyn CacheStore<K, V>>>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    match kind {
        "memory" => Ok(Arc::new(MemoryStore::new(name))),
        other => Err(Error::Storage(format!("Unknown cache backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_store;
    pub use nl_core::CacheStore;
}
