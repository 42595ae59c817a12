use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the bower-finder CLI
///
/// Logs go to stderr so stdout only carries command output and can be piped.
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=debug bower-finder files app  (cache loads, component path)
/// - RUST_LOG=trace bower-finder files app  (every dependency expansion)
///
/// Without RUST_LOG only warnings are shown, or debug output with `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!("Logging initialized");

    Ok(())
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "bower_finder=debug,bower_finder_cli=debug"
    } else {
        "bower_finder=warn,bower_finder_cli=warn"
    }
}
