use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level};
use std::str::FromStr;

const RUST_LOG_ENV: &str = "RUST_LOG";

/// HTTP internals log every connection at debug level.
const NOISY_DEPENDENCIES: [&str; 3] = ["hyper", "reqwest", "mio"];

fn color_from_level(level: Level) -> ColoredString {
    match level {
        log::Level::Error => "ERROR".red(),
        log::Level::Warn => "WARN".yellow(),
        log::Level::Info => "INFO".green(),
        log::Level::Debug => "DEBUG".blue(),
        log::Level::Trace => "TRACE".white(),
    }
}

/// # Panics
/// Panics if a global logger has already been installed.
pub(crate) fn init_logging_with_level(log_level: log::LevelFilter) {
    let dispatch = NOISY_DEPENDENCIES.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                let time = Local::now().format("%H:%M:%S%.3f");
                let color = color_from_level(record.level());
                out.finish(format_args!("{time} {color} > {message}"));
            })
            .level(log_level),
        |dispatch, noisy| dispatch.level_for(*noisy, log::LevelFilter::Warn),
    );
    dispatch
        .chain(std::io::stdout())
        .apply()
        .inspect_err(|e| println!("Failed to initialize logging with level `{log_level}`: {e}"))
        .unwrap();

    if let Some(log_level) = log_level.to_level() {
        debug!("Logging initialized with level: {log_level}");
    }
}

fn parse_log_level_from_str(log_level: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            RUST_LOG_ENV, log_level
        )
    })
}

fn init_logging_with_level_str(log_level: &str) {
    init_logging_with_level(parse_log_level_from_str(log_level));
}

use std::sync::Once;
static INIT: Once = Once::new();
fn init_logging_inner() {
    if let Ok(log_level) = std::env::var(RUST_LOG_ENV) {
        init_logging_with_level_str(&log_level);
    } else {
        init_logging_with_level(log::LevelFilter::Info);
    }
}

/// Installs the logger once; later calls are no-ops.
///
/// # Panics
/// Panics if `RUST_LOG` is set to something that is not a log level.
pub fn init_logging() {
    INIT.call_once(|| {
        init_logging_inner();
    });
}
