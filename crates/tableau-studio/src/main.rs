mod config;
mod session;

use anyhow::{Context, Result};
use serde_json::json;
use tableau_engine::logging::init_logging;

use config::{ReportStyle, StudioConfig};

fn main() -> Result<()> {
    let config = StudioConfig::from_env()?;
    init_logging(config.logging());
    log::debug!("studio config: {config:?}");

    let steps = session::run()?;
    let report = json!({ "steps": steps });

    let text = match config.report {
        ReportStyle::Pretty => serde_json::to_string_pretty(&report),
        ReportStyle::Compact => serde_json::to_string(&report),
    }
    .context("failed to encode scene report")?;
    println!("{text}");

    Ok(())
}
