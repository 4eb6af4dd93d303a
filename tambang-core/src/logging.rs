//! Subscriber setup shared by the front ends.
//!
//! Each front end passes its own crate name so its events pass the default
//! filter alongside `tambang_core`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ports::FareError;

/// Default directives when `RUST_LOG` is unset.
fn default_directives(app_crate: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("tambang_core={level},{app_crate}={level},warn")
}

fn filter(app_crate: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(app_crate, verbose)))
}

/// Compact stderr logging for the console front end.
///
/// `app_crate` is the calling binary's crate name (`env!("CARGO_CRATE_NAME")`).
pub fn init_console_logger(app_crate: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(app_crate, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Plain-text logging into a file, for front ends that own the terminal.
///
/// # Errors
///
/// Returns [`FareError::Io`] when the log file cannot be created.
pub fn init_file_logger(path: &Path, app_crate: &str, verbose: bool) -> Result<(), FareError> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(filter(app_crate, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();
    Ok(())
}
