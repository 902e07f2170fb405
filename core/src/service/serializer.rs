use std::marker::PhantomData;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::contest_log::{ContestLog, RawContestLog};

/// Maps a domain value to and from the plain data kept in the cache.
pub trait Serializer<T> {
    type Raw: Serialize + DeserializeOwned;

    fn to_raw(&self, value: &T) -> Self::Raw;
    fn from_raw(&self, raw: Self::Raw) -> Result<T>;
}

pub fn encode<T, S: Serializer<T>>(serializer: &S, value: &T) -> Result<String> {
    Ok(serde_json::to_string(&serializer.to_raw(value))?)
}

pub fn decode<T, S: Serializer<T>>(serializer: &S, blob: &str) -> Result<T> {
    let raw: S::Raw = serde_json::from_str(blob)?;
    serializer.from_raw(raw)
}

/// For values whose serde shape already is the cached shape.
pub struct JsonSerializer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSerializer<T> {
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for JsonSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Serializer<T> for JsonSerializer<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    type Raw = T;

    fn to_raw(&self, value: &T) -> T {
        value.clone()
    }

    fn from_raw(&self, raw: T) -> Result<T> {
        Ok(raw)
    }
}

/// Stores logs in their API wire shape.
#[derive(Default, Clone, Copy)]
pub struct ContestLogsSerializer;

impl Serializer<Vec<ContestLog>> for ContestLogsSerializer {
    type Raw = Vec<RawContestLog>;

    fn to_raw(&self, value: &Vec<ContestLog>) -> Vec<RawContestLog> {
        value.iter().map(ContestLog::to_raw).collect()
    }

    fn from_raw(&self, raw: Vec<RawContestLog>) -> Result<Vec<ContestLog>> {
        raw.into_iter().map(ContestLog::from_raw).collect()
    }
}
