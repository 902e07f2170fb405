use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::aggregate::{aggregate_media_distribution, aggregate_reading_activity, AggregatedSeries, MediumDistribution};
use crate::model::contest::ContestPeriod;
use crate::model::contest_log::ContestLog;
use crate::repository::CacheStorage;
use crate::service::cached_state::{CachedState, Dependencies, RefreshOutcome};
use crate::service::serializer::ContestLogsSerializer;

pub type LogsCache<St> = CachedState<Vec<ContestLog>, ContestLogsSerializer, St>;

/// Bump the version suffix when the cached log shape changes.
pub fn logs_cache_key(contest_id: u64, user_id: u64) -> String {
    format!("contest_logs?contest={}&user={}&i=1", contest_id, user_id)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContestDashboard {
    pub log_count: usize,
    pub activity: AggregatedSeries,
    pub media: MediumDistribution,
}

impl ContestDashboard {
    pub fn build(logs: &[ContestLog], period: &ContestPeriod) -> Self {
        Self {
            log_count: logs.len(),
            activity: aggregate_reading_activity(logs, period),
            media: aggregate_media_distribution(logs),
        }
    }
}

pub struct DashboardUseCase<'a, St: CacheStorage> {
    cache: &'a LogsCache<St>,
}

impl<'a, St: CacheStorage> DashboardUseCase<'a, St> {
    pub fn new(cache: &'a LogsCache<St>) -> Self {
        Self { cache }
    }

    /// Charts for whatever logs are known right now.
    pub fn snapshot(&self, period: &ContestPeriod) -> ContestDashboard {
        ContestDashboard::build(&self.cache.current(), period)
    }

    /// Activates the cache for one user's contest logs, fetches them, and rebuilds the charts.
    /// `None` outcome means this contest/user pair was already active and nothing was fetched.
    pub async fn refresh<F, Fut>(
        &self,
        contest_id: u64,
        user_id: u64,
        period: &ContestPeriod,
        fetch_logs: F,
    ) -> (Option<RefreshOutcome>, ContestDashboard)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ContestLog>>>,
    {
        let key = logs_cache_key(contest_id, user_id);
        let dependencies = Dependencies::of([period.start.to_rfc3339(), period.end.to_rfc3339()]);

        let outcome = match self.cache.activate(&key, dependencies) {
            Some(activation) => Some(self.cache.refresh(&activation, fetch_logs).await),
            None => None,
        };

        (outcome, self.snapshot(period))
    }
}
