//! Logging setup
//!
//! The engine logs through `tracing`. Binaries embedding it call
//! [`init_tracing`] once at startup; libraries and tests never install a
//! subscriber themselves.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_FILTER_ENV: &str = "SHIFTSLOT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Directives come from `SHIFTSLOT_LOG` (for example
/// `shiftslot_core=debug,info`) and default to `info`. With `json` set,
/// events are written as one JSON object per line.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(json: bool) -> bool {
    let filter = build_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref());

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    result.is_ok()
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
