use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

use crate::repository::traits::CacheStorage;

#[derive(Default)]
pub struct MemoryCacheStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // Every write is a single insert, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CacheStorage for MemoryCacheStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_overwrites_by_exact_key() {
        let storage = MemoryCacheStorage::new();
        assert_eq!(storage.get("recent_contest?i=1").unwrap(), None);

        storage.set("recent_contest?i=1", "[1]").unwrap();
        storage.set("recent_contest?i=1", "[2]").unwrap();

        assert_eq!(storage.get("recent_contest?i=1").unwrap(), Some("[2]".to_string()));
        assert_eq!(storage.get("recent_contest?i=2").unwrap(), None);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_poisoned_lock_keeps_entries_visible() {
        let storage = Arc::new(MemoryCacheStorage::new());
        storage.set("k", "1").unwrap();

        let poisoner = storage.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(storage.entries.is_poisoned());

        assert_eq!(storage.len(), 1);
        assert!(!storage.is_empty());
        assert_eq!(storage.get("k").unwrap(), Some("1".to_string()));
        storage.set("k2", "2").unwrap();
        assert_eq!(storage.len(), 2);
    }
}
