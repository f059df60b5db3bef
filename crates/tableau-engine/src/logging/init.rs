use std::sync::atomic::{AtomicBool, Ordering};

use env_logger::fmt::TimestampPrecision;
use log::LevelFilter;

/// Where the active filter directives came from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FilterSource {
    /// Set on the [`LoggingConfig`] by the host application.
    Explicit(String),
    /// Read from `RUST_LOG`.
    Environment(String),
    /// Neither was present; only `default_level` applies.
    Fallback(LevelFilter),
}

/// Settings for the process-wide `env_logger` backend.
///
/// Scene stores log membership changes at `trace` and `clear_all_except`
/// summaries at `debug`, so `"tableau_engine::scene=debug"` is a useful
/// starting filter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives; when set, `RUST_LOG` is not consulted.
    pub filter: Option<String>,
    pub default_level: LevelFilter,
    /// `None` drops timestamps entirely (handy for diffable output).
    pub timestamps: Option<TimestampPrecision>,
    /// Prefix each record with its module path.
    pub show_target: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            timestamps: Some(TimestampPrecision::Millis),
            show_target: true,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = None;
        self
    }

    /// Picks the filter: explicit directives, then `rust_log`, then the
    /// default level. Blank strings count as absent.
    pub fn resolve_filter(&self, rust_log: Option<String>) -> FilterSource {
        let present = |s: &String| !s.trim().is_empty();
        if let Some(filter) = self.filter.clone().filter(present) {
            FilterSource::Explicit(filter)
        } else if let Some(filter) = rust_log.filter(present) {
            FilterSource::Environment(filter)
        } else {
            FilterSource::Fallback(self.default_level)
        }
    }

    fn builder(&self, source: &FilterSource) -> env_logger::Builder {
        let mut builder = env_logger::Builder::new();
        match source {
            FilterSource::Explicit(spec) | FilterSource::Environment(spec) => {
                builder.parse_filters(spec);
            }
            FilterSource::Fallback(level) => {
                builder.filter_level(*level);
            }
        }
        builder
            .format_timestamp(self.timestamps)
            .format_target(self.show_target)
            .write_style(self.write_style);
        builder
    }
}

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs `env_logger` as the global logger.
///
/// Returns `true` only for the call that installed it. Later calls, or a
/// logger installed by another crate first, leave the existing one alone and
/// return `false`.
pub fn init_logging(config: LoggingConfig) -> bool {
    if INSTALLED.swap(true, Ordering::AcqRel) {
        return false;
    }

    let source = config.resolve_filter(std::env::var(env_logger::DEFAULT_FILTER_ENV).ok());
    if config.builder(&source).try_init().is_err() {
        log::debug!("a global logger was already set; keeping it");
        return false;
    }

    log::debug!("logging initialized from {source:?}");
    true
}
