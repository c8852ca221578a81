use std::io;

use tracing_subscriber::EnvFilter;

/// Install a global subscriber that writes log events to stderr.
///
/// Generated tables are written to stdout, so log output must never go
/// there. `RUST_LOG` takes precedence over the verbosity given on the
/// command line.
pub fn init(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    // This can only fail if a subscriber is already installed, in which
    // case we keep that one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
