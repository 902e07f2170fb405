mod logging;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tadoku_core::{
    aggregate_media_distribution, aggregate_reading_activity, logs_cache_key, parse_utc_date,
    rankings_to_registration_overview, CachedState, Config, ContestLog, ContestLogsSerializer,
    ContestPeriod, DashboardUseCase, Dependencies, FileCacheStorage, Ranking, RawContestLog,
    RefreshOutcome,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "tadoku")]
#[command(about = "Reading contest activity charts and cache", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Per-language daily reading table (usage: activity --logs logs.json --start 2020-01-01 --end 2020-01-31)
    Activity {
        /// JSON array of contest logs as returned by the API
        #[arg(long)]
        logs: PathBuf,
        /// First contest day (YYYY-MM-DD, RFC 3339, today, -3d ...)
        #[arg(long)]
        start: String,
        /// Last contest day, inclusive
        #[arg(long)]
        end: String,
    },
    /// Reading distribution by medium
    Media {
        #[arg(long)]
        logs: PathBuf,
    },
    /// A user's contest rankings, global score first
    Overview {
        /// JSON array of rankings for one contest and user
        #[arg(long)]
        rankings: PathBuf,
    },
    /// Show cached charts for a user's contest, then refresh them from a log source
    Dashboard {
        #[arg(long)]
        contest: u64,
        #[arg(long)]
        user: u64,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// JSON file standing in for the contest log endpoint
        #[arg(long)]
        source: PathBuf,
    },
}

fn read_logs(path: &Path) -> Result<Vec<ContestLog>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read logs from {}", path.display()))?;
    let raw: Vec<RawContestLog> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid log file {}", path.display()))?;
    raw.into_iter().map(ContestLog::from_raw).collect()
}

async fn fetch_logs(path: PathBuf) -> Result<Vec<ContestLog>> {
    let content = tokio::fs::read_to_string(&path).await?;
    let raw: Vec<RawContestLog> = serde_json::from_str(&content)?;
    raw.into_iter().map(ContestLog::from_raw).collect()
}

fn parse_period(start: &str, end: &str) -> Result<ContestPeriod> {
    let period = ContestPeriod::new(parse_utc_date(start)?, parse_utc_date(end)?);
    if period.end < period.start {
        return Err(anyhow!("Contest end {} is before its start {}", end, start));
    }
    Ok(period)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init_logger(&config.log_level);
    debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Activity { logs, start, end } => {
            let period = parse_period(&start, &end)?;
            let logs = read_logs(&logs)?;
            report::show_activity(&aggregate_reading_activity(&logs, &period));
        }
        Commands::Media { logs } => {
            let logs = read_logs(&logs)?;
            report::show_media(&aggregate_media_distribution(&logs));
        }
        Commands::Overview { rankings } => {
            let content = std::fs::read_to_string(&rankings)
                .with_context(|| format!("Could not read rankings from {}", rankings.display()))?;
            let rankings: Vec<Ranking> = serde_json::from_str(&content)?;
            match rankings_to_registration_overview(&rankings)? {
                Some(overview) => report::show_overview(&overview),
                None => println!("No rankings found."),
            }
        }
        Commands::Dashboard { contest, user, start, end, source } => {
            let period = parse_period(&start, &end)?;
            let storage = FileCacheStorage::from_config(&config)?;
            let cache = CachedState::initialize(
                storage,
                ContestLogsSerializer,
                &logs_cache_key(contest, user),
                Dependencies::none(),
                Vec::new(),
            );
            let usecase = DashboardUseCase::new(&cache);

            let cached = usecase.snapshot(&period);
            println!("Cached: {} logs", cached.log_count);

            let (outcome, dashboard) = usecase
                .refresh(contest, user, &period, || fetch_logs(source))
                .await;
            match outcome {
                Some(RefreshOutcome::Updated) => println!("Refreshed: {} logs", dashboard.log_count),
                Some(RefreshOutcome::Failed) => println!("Refresh failed, showing cached logs"),
                Some(RefreshOutcome::Superseded) | None => {}
            }
            info!(contest, user, logs = dashboard.log_count, "dashboard ready");

            report::show_activity(&dashboard.activity);
            report::show_media(&dashboard.media);
        }
    }
    Ok(())
}
