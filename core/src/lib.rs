pub mod aggregate;
pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use aggregate::{
    aggregate_media_distribution, aggregate_reading_activity, rankings_to_registration_overview,
    AggregatedSeries, MediumDistribution, RankingError,
};
pub use config::Config;
pub use model::contest::{Contest, ContestPeriod, User};
pub use model::contest_log::{ContestLog, RawContestLog};
pub use model::ranking::{Ranking, RankingRegistration, RegistrationOverview};
pub use repository::{CacheStorage, FileCacheStorage, MemoryCacheStorage};
pub use service::cached_state::{Activation, CachedState, Dependencies, RefreshOutcome};
pub use service::serializer::{ContestLogsSerializer, JsonSerializer, Serializer};
pub use time::{day_key, days_between, parse_utc_date};
pub use usecase::dashboard::{logs_cache_key, ContestDashboard, DashboardUseCase};
