use std::sync::Arc;

use anyhow::Result;

/// Key/value store behind the client cache. Blobs are opaque strings.
pub trait CacheStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, blob: &str) -> Result<()>;
}

impl<S: CacheStorage + ?Sized> CacheStorage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        (**self).set(key, blob)
    }
}
