//! Tracing setup for the binary.
//!
//! Filter comes from `CHATSEG_LOG` (same syntax as `RUST_LOG`), default `warn`.
//! Output goes to stderr so stdout stays clean for JSON.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "CHATSEG_LOG";

/// Installs the global subscriber. Keep the guard alive until exit.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(writer))
        .with(filter)
        .try_init();
    if let Err(err) = installed {
        eprintln!("warning: logging disabled: {err}");
    }

    guard
}
