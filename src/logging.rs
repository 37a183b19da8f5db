use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
///
/// Console lines carry the progress stream; the file under `log_dir` gets the same events as JSON.
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise info for our crate, warn for dependencies
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,workshop_catalog=info"));

    // Without a writable log directory we still want console progress
    let (file_layer, guard) = match fs::create_dir_all(log_dir) {
        Ok(()) => {
            // Create a non-blocking file appender for daily log rotation
            let file_appender = tracing_appender::rolling::daily(log_dir, "workshop_catalog.log");
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::layer().json().with_writer(non_blocking_writer)),
                Some(guard),
            )
        }
        Err(_) => (None, None),
    };

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
