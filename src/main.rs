//! Welcome GUI - Main Entry Point

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use welcome_gui::app::application::run_app;
use welcome_gui::constants::LOG_FILE_PREFIX;
use welcome_gui::helpers::{get_or_create_data_dir, is_development};
use welcome_gui::settings::AppSettings;

/// Initialize stdout and file logging. The guard must live as long as the app.
fn init_logging() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_level},welcome_gui={default_level}")));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(data_dir) => {
            let file_appender = tracing_appender::rolling::daily(data_dir.join("logs"), LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let _guard = init_logging();

    tracing::info!("Starting Welcome GUI...");

    let settings = AppSettings::load_or_default();

    // Run the GPUI application
    run_app(settings);
}
