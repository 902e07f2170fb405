//! Stale-while-fetch client cache.
//!
//! A [`CachedState`] exposes the best value it currently knows for a cache
//! key: the persisted snapshot, or the caller's default. Each activation of a
//! `(key, dependencies)` pair fetches once in the background and writes the
//! fresh value through to storage. Results of activations that were replaced
//! while their fetch was in flight are discarded.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::repository::CacheStorage;
use crate::service::serializer::{decode, encode, Serializer};

/// Values an activation depends on besides its key. Compared by value, in order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Dependencies(Vec<String>);

impl Dependencies {
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Token for one activation. Only the newest activation may publish a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    key: String,
    generation: u64,
}

impl Activation {
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fresh value stored and exposed.
    Updated,
    /// Fetch failed; the last known value stays.
    Failed,
    /// A newer activation replaced this one before the fetch resolved.
    Superseded,
}

struct State<T> {
    key: String,
    dependencies: Dependencies,
    generation: u64,
    activated: bool,
    value: T,
}

pub struct CachedState<T, S, St> {
    storage: St,
    serializer: S,
    default_value: T,
    state: Mutex<State<T>>,
}

impl<T, S, St> CachedState<T, S, St>
where
    T: Clone,
    S: Serializer<T>,
    St: CacheStorage,
{
    /// Seeds the value from storage. A missing or unreadable entry yields `default_value`.
    pub fn initialize(storage: St, serializer: S, key: &str, dependencies: Dependencies, default_value: T) -> Self {
        let value = load(&storage, &serializer, key).unwrap_or_else(|| default_value.clone());

        Self {
            storage,
            serializer,
            default_value,
            state: Mutex::new(State {
                key: key.to_string(),
                dependencies,
                generation: 0,
                activated: false,
                value,
            }),
        }
    }

    pub fn current(&self) -> T {
        self.lock().value.clone()
    }

    pub fn key(&self) -> String {
        self.lock().key.clone()
    }

    pub fn dependencies(&self) -> Dependencies {
        self.lock().dependencies.clone()
    }

    /// Starts a new activation unless `key` and `dependencies` equal the current ones
    /// and an activation already happened. Switching keys reseeds the value from storage.
    pub fn activate(&self, key: &str, dependencies: Dependencies) -> Option<Activation> {
        let mut state = self.lock();
        if state.activated && state.key == key && state.dependencies == dependencies {
            return None;
        }

        if state.key != key {
            state.value =
                load(&self.storage, &self.serializer, key).unwrap_or_else(|| self.default_value.clone());
            state.key = key.to_string();
        }
        state.dependencies = dependencies;
        state.generation += 1;
        state.activated = true;

        debug!(key, generation = state.generation, "cache activated");
        Some(Activation {
            key: state.key.clone(),
            generation: state.generation,
        })
    }

    pub async fn refresh<F, Fut>(&self, activation: &Activation, fetch_data: F) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.refresh_with(activation, fetch_data, |_| {}).await
    }

    /// Runs `fetch_data` once. On success for a still-current activation the value is
    /// written through to storage, exposed, then handed to `on_change`.
    pub async fn refresh_with<F, Fut, C>(&self, activation: &Activation, fetch_data: F, on_change: C) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
        C: FnOnce(&T),
    {
        let fetched = fetch_data().await;

        let value = {
            let mut state = self.lock();
            if state.generation != activation.generation {
                debug!(key = %activation.key, "discarding result of superseded activation");
                return RefreshOutcome::Superseded;
            }

            let value = match fetched {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %activation.key, error = %e, "refresh failed, keeping last known value");
                    return RefreshOutcome::Failed;
                }
            };

            match encode(&self.serializer, &value) {
                Ok(blob) => {
                    if let Err(e) = self.storage.set(&activation.key, &blob) {
                        warn!(key = %activation.key, error = %e, "could not persist refreshed value");
                    }
                }
                Err(e) => warn!(key = %activation.key, error = %e, "could not serialize refreshed value"),
            }

            state.value = value.clone();
            value
        };

        info!(key = %activation.key, "cache refreshed");
        on_change(&value);
        RefreshOutcome::Updated
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        // State is replaced wholesale, so a poisoned lock still holds a consistent value.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn load<T, S, St>(storage: &St, serializer: &S, key: &str) -> Option<T>
where
    S: Serializer<T>,
    St: CacheStorage,
{
    let blob = match storage.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!(key, "cache miss");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "cache read failed");
            return None;
        }
    };

    match decode(serializer, &blob) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "ignoring undecodable cache entry");
            None
        }
    }
}
