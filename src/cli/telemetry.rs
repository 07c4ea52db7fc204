use crate::cli::commands::logging;
use anyhow::Result;
use std::io::stderr;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Build the filter: `RUST_LOG` wins, otherwise `level`.
///
/// # Errors
///
/// Returns an error if a built-in directive fails to parse
pub fn env_filter(level: Level) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?))
}

/// Initialize logging on stderr, as text or JSON lines, so stdout only carries results.
///
/// # Errors
///
/// Returns an error if the subscriber is already set or a directive is invalid
pub fn init(options: logging::Options) -> Result<()> {
    let filter = env_filter(options.level)?;

    if options.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(stderr)
            .with_current_span(true)
            .with_target(false);

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(stderr)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_target(false);

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
