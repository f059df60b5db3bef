use anyhow::{bail, Result};
use tableau_engine::logging::LoggingConfig;

/// How the final scene report is printed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ReportStyle {
    #[default]
    Pretty,
    Compact,
}

/// Studio settings, read from the environment.
///
/// - `TABLEAU_LOG`: `env_logger` filter (falls back to `RUST_LOG`, then `info`)
/// - `TABLEAU_REPORT`: `pretty` | `compact`
#[derive(Debug, Clone, Default)]
pub struct StudioConfig {
    pub log_filter: Option<String>,
    pub report: ReportStyle,
}

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("TABLEAU_LOG").ok(),
            std::env::var("TABLEAU_REPORT").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, report: Option<String>) -> Result<Self> {
        let report = match report.as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => ReportStyle::Pretty,
            Some("compact") => ReportStyle::Compact,
            Some(other) => bail!("TABLEAU_REPORT must be `pretty` or `compact`, got `{other}`"),
        };
        Ok(Self { log_filter, report })
    }

    pub fn logging(&self) -> LoggingConfig {
        match &self.log_filter {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }
}
