//! Logging setup for the voxbiome tools.
//!
//! Generation code only emits `tracing` events: one `info` line per generated
//! chunk, `debug` per pass and `trace` per placed feature. This crate installs
//! the subscriber that prints them. The level comes from `RUST_LOG` when set,
//! otherwise from `Config::debug.log_level`.

use std::path::Path;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use voxbiome_config::Config;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "voxbiome.log";

/// Filter directive for `config`, falling back to [`DEFAULT_FILTER`].
pub fn filter_directive(config: Option<&Config>) -> &str {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim()
        }
        _ => DEFAULT_FILTER,
    }
}

/// Installs the global subscriber.
///
/// Console output carries the event target and the time since start. With
/// `debug_build` and a `log_dir`, events are also written as JSON lines to
/// [`LOG_FILE_NAME`] inside that directory; if the file cannot be created the
/// console layer is installed alone.
///
/// Fails only if a global subscriber is already set.
pub fn init_logging(
    log_dir: Option<&Path>,
    debug_build: bool,
    config: Option<&Config>,
) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();
        return subscriber.with(file_layer).try_init();
    }

    subscriber.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(EnvFilter::new(filter_directive(None)).to_string(), "info");
        assert_eq!(filter_directive(None), "info");
    }

    #[test]
    fn test_config_level_is_used() {
        let mut config = Config::default();
        config.debug.log_level = "debug,voxbiome_terrain=trace".to_string();
        assert_eq!(filter_directive(Some(&config)), "debug,voxbiome_terrain=trace");
    }

    #[test]
    fn test_blank_config_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_directive(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_per_crate_directives_parse() {
        for directive in [
            "info",
            "warn,voxbiome_terrain=debug",
            "error,voxbiome_terrain::beach=trace",
        ] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_second_init_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        // Another test in this binary may have initialised first; either way
        // a following call must fail rather than panic.
        let _ = init_logging(Some(dir.path()), true, None);
        assert!(init_logging(None, false, None).is_err());
    }
}
