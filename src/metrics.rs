//! Resolution counters.
//!
//! Recorded through the `metrics` facade. The binary installs a Prometheus recorder
//! with [`init_metrics`] and prints the totals with [`report`] when the run ends;
//! library users without a recorder pay nothing.

use crate::error::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("workshop_catalog_", $phase, "_", $name, "_total")
    };
}

/// Which resolver a counter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Game,
    Mod,
}

/// Install the process-wide recorder. Returns `None` if one is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("metrics recorder not installed: {}", e);
            None
        }
    }
}

/// `name value` lines of a Prometheus text rendering, without comments.
pub fn summary_lines(rendered: &str) -> Vec<&str> {
    rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Log the counter totals, and write the full rendering to `path` if given.
pub fn report(handle: &PrometheusHandle, path: Option<&Path>) -> Result<()> {
    let rendered = handle.render();
    for line in summary_lines(&rendered) {
        info!("metric {}", line);
    }
    if let Some(path) = path {
        fs::write(path, &rendered)?;
    }
    Ok(())
}

pub fn record_fetch() {
    ::metrics::counter!(phase_metric!(counter, "http", "fetches")).increment(1);
}

pub fn record_resolved(entity: Entity) {
    match entity {
        Entity::Game => ::metrics::counter!(phase_metric!(counter, "games", "resolved")),
        Entity::Mod => ::metrics::counter!(phase_metric!(counter, "mods", "resolved")),
    }
    .increment(1);
}

pub fn record_not_found(entity: Entity) {
    match entity {
        Entity::Game => ::metrics::counter!(phase_metric!(counter, "games", "not_found")),
        Entity::Mod => ::metrics::counter!(phase_metric!(counter, "mods", "not_found")),
    }
    .increment(1);
}

pub fn record_skipped_failure(entity: Entity) {
    match entity {
        Entity::Game => ::metrics::counter!(phase_metric!(counter, "games", "failed")),
        Entity::Mod => ::metrics::counter!(phase_metric!(counter, "mods", "failed")),
    }
    .increment(1);
}

pub fn record_shape_mismatch() {
    ::metrics::counter!(phase_metric!(counter, "mods", "detail_shape_mismatch")).increment(1);
}
