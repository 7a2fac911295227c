use studymatch_engine::config::{LogFormat, Settings};
use studymatch_engine::{Error, Matcher, Result, SnapshotStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

fn run() -> Result<()> {
    let raw_user_id = std::env::args()
        .nth(1)
        .ok_or_else(|| Error::InvalidUserId("missing <user_id> argument".to_string()))?;
    let user_id: i64 = raw_user_id
        .parse()
        .map_err(|_| Error::InvalidUserId(raw_user_id.clone()))?;

    let settings = Settings::load()?;

    init_logging(&settings.logging.level, settings.logging.log_format());
    info!("Configuration loaded successfully");

    let store = SnapshotStore::load(&settings.snapshot.path)?;
    info!(
        "Snapshot loaded from {} ({} profiles, {} groups)",
        settings.snapshot.path.display(),
        store.profile_count(),
        store.group_count()
    );

    let matcher = Matcher::with_default_weights();
    let result = matcher.recommend_for_user(user_id, &store, &store);

    info!(
        "Returning {} recommendations for user {} (from {} candidates)",
        result.matches.len(),
        user_id,
        result.total_candidates
    );

    println!("{}", serde_json::to_string_pretty(&result.matches)?);
    Ok(())
}

fn main() -> std::process::ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("studymatch-engine: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
