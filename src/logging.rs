use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["almanac", "almanac_calendar"];

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    let level = level(verbosity);
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing based on a verbosity level.
///
/// Mapping:
/// - 0 -> warn
/// - 1 -> info
/// - 2 -> debug
/// - 3+ -> trace
///
/// `RUST_LOG` env var overrides the level if set.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; use [`try_init`]
/// where that can happen.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt().with_env_filter(filter(verbosity)).init();
}

/// Like [`init`], but returns `false` instead of panicking when a global
/// subscriber is already installed.
pub fn try_init(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .try_init()
        .is_ok()
}
