#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Arc;

    use anyhow::{anyhow, Result};
    use chrono::Utc;
    use tokio::sync::oneshot;

    use crate::model::contest_log::ContestLog;
    use crate::repository::{CacheStorage, FileCacheStorage, MemoryCacheStorage};
    use crate::service::cached_state::{CachedState, Dependencies, RefreshOutcome};
    use crate::service::serializer::{ContestLogsSerializer, JsonSerializer};

    type NumbersCache = CachedState<Vec<u32>, JsonSerializer<Vec<u32>>, Arc<MemoryCacheStorage>>;

    struct FailingStorage;

    impl CacheStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(anyhow!("disk unplugged"))
        }

        fn set(&self, _key: &str, _blob: &str) -> Result<()> {
            Err(anyhow!("disk unplugged"))
        }
    }

    fn numbers(storage: Arc<MemoryCacheStorage>, key: &str) -> NumbersCache {
        CachedState::initialize(storage, JsonSerializer::new(), key, Dependencies::none(), vec![])
    }

    #[tokio::test]
    async fn test_default_then_cached_value_after_reload() {
        let storage = Arc::new(MemoryCacheStorage::new());

        let cache = numbers(storage.clone(), "recent_contest?i=1");
        assert_eq!(cache.current(), Vec::<u32>::new());

        let activation = cache
            .activate("recent_contest?i=1", Dependencies::none())
            .unwrap();
        let outcome = cache
            .refresh(&activation, || async { Ok(vec![1, 2, 3]) })
            .await;
        assert_eq!(outcome, RefreshOutcome::Updated);
        assert_eq!(cache.current(), vec![1, 2, 3]);

        // Simulated reload: a fresh instance over the same storage
        let reloaded = numbers(storage.clone(), "recent_contest?i=1");
        assert_eq!(reloaded.current(), vec![1, 2, 3]);

        // A bumped key does not see the old entry
        let bumped = numbers(storage, "recent_contest?i=2");
        assert_eq!(bumped.current(), Vec::<u32>::new());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_known_value() {
        let storage = Arc::new(MemoryCacheStorage::new());
        storage.set("k", "[7]").unwrap();

        let cache = numbers(storage.clone(), "k");
        assert_eq!(cache.current(), vec![7]);

        let activation = cache.activate("k", Dependencies::none()).unwrap();
        let outcome = cache
            .refresh(&activation, || async { Err(anyhow!("503")) })
            .await;

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(cache.current(), vec![7]);
        assert_eq!(storage.get("k").unwrap(), Some("[7]".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_entry_falls_back_to_default() {
        let storage = Arc::new(MemoryCacheStorage::new());
        storage.set("k", r#"{"schema": "old"}"#).unwrap();

        let cache = numbers(storage, "k");
        assert_eq!(cache.current(), Vec::<u32>::new());
    }

    #[tokio::test]
    async fn test_unreadable_storage_is_a_miss_and_writes_do_not_block_updates() {
        let cache = CachedState::initialize(
            FailingStorage,
            JsonSerializer::new(),
            "k",
            Dependencies::none(),
            5u32,
        );
        assert_eq!(cache.current(), 5);

        let activation = cache.activate("k", Dependencies::none()).unwrap();
        let outcome = cache.refresh(&activation, || async { Ok(6) }).await;

        assert_eq!(outcome, RefreshOutcome::Updated);
        assert_eq!(cache.current(), 6);
    }

    #[tokio::test]
    async fn test_on_change_receives_fresh_value() {
        let storage = Arc::new(MemoryCacheStorage::new());
        let cache = numbers(storage, "k");
        let seen = RefCell::new(Vec::new());

        let activation = cache.activate("k", Dependencies::none()).unwrap();
        cache
            .refresh_with(
                &activation,
                || async { Ok(vec![4]) },
                |v| seen.borrow_mut().push(v.clone()),
            )
            .await;

        let failed = cache.activate("k", Dependencies::of(["again"])).unwrap();
        cache
            .refresh_with(
                &failed,
                || async { Err(anyhow!("offline")) },
                |v| seen.borrow_mut().push(v.clone()),
            )
            .await;

        assert_eq!(seen.into_inner(), vec![vec![4]]);
    }

    #[tokio::test]
    async fn test_activation_only_changes_with_key_or_dependencies() {
        let storage = Arc::new(MemoryCacheStorage::new());
        let cache = numbers(storage, "k");

        assert!(cache.activate("k", Dependencies::of(["contest:1"])).is_some());
        assert!(cache.activate("k", Dependencies::of(["contest:1"])).is_none());
        assert!(cache.activate("k", Dependencies::of(["contest:2"])).is_some());
        assert!(cache
            .activate("other", Dependencies::of(["contest:2"]))
            .is_some());
        assert_eq!(cache.key(), "other");
        assert_eq!(cache.dependencies(), Dependencies::of(["contest:2"]));
    }

    #[tokio::test]
    async fn test_stale_refresh_does_not_overwrite_new_key() {
        let storage = Arc::new(MemoryCacheStorage::new());
        storage.set("b", "[20]").unwrap();
        let cache = numbers(storage.clone(), "a");

        let activation_a = cache.activate("a", Dependencies::none()).unwrap();
        let (tx, rx) = oneshot::channel::<Vec<u32>>();

        let slow_a = cache.refresh(&activation_a, || async move {
            rx.await.map_err(|_| anyhow!("sender dropped"))
        });

        let switch_to_b = async {
            let activation_b = cache.activate("b", Dependencies::none()).unwrap();
            // Switching keys reseeds from b's persisted entry
            assert_eq!(cache.current(), vec![20]);

            let outcome = cache
                .refresh(&activation_b, || async { Ok(vec![21]) })
                .await;
            tx.send(vec![1]).unwrap();
            outcome
        };

        let (outcome_a, outcome_b) = tokio::join!(slow_a, switch_to_b);

        assert_eq!(outcome_a, RefreshOutcome::Superseded);
        assert_eq!(outcome_b, RefreshOutcome::Updated);
        assert_eq!(cache.current(), vec![21]);
        assert_eq!(storage.get("b").unwrap(), Some("[21]".to_string()));
        assert_eq!(storage.get("a").unwrap(), None);
    }

    #[tokio::test]
    async fn test_stale_refresh_with_changed_dependencies() {
        let storage = Arc::new(MemoryCacheStorage::new());
        let cache = numbers(storage, "logs");

        let first = cache.activate("logs", Dependencies::of(["user:1"])).unwrap();
        let second = cache.activate("logs", Dependencies::of(["user:2"])).unwrap();

        let second_outcome = cache.refresh(&second, || async { Ok(vec![2]) }).await;
        let first_outcome = cache.refresh(&first, || async { Ok(vec![1]) }).await;

        assert_eq!(second_outcome, RefreshOutcome::Updated);
        assert_eq!(first_outcome, RefreshOutcome::Superseded);
        assert_eq!(cache.current(), vec![2]);
    }

    #[tokio::test]
    async fn test_contest_logs_persist_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileCacheStorage::new(dir.path(), "cache.json").unwrap();
        let key = "logs?contest=3";
        let logs = vec![ContestLog::new("jpn", 1, 50.0, 12.5, Utc::now())];

        let cache = CachedState::initialize(
            storage.clone(),
            ContestLogsSerializer,
            key,
            Dependencies::none(),
            vec![],
        );
        let activation = cache.activate(key, Dependencies::none()).unwrap();
        let fetched = logs.clone();
        cache
            .refresh(&activation, || async move { Ok(fetched) })
            .await;

        let reloaded = CachedState::initialize(
            storage,
            ContestLogsSerializer,
            key,
            Dependencies::none(),
            vec![],
        );
        assert_eq!(reloaded.current(), logs);
    }
}
