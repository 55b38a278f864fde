use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::CompletionMetrics;

pub const DEFAULT_CONFIG_PATH: &str = "demo.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub submit_delay_ms: u64,
    pub completion_distance_km: f64,
    pub completion_duration_hours: f64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let metrics = CompletionMetrics::placeholder();
        Self {
            submit_delay_ms: 1000,
            completion_distance_km: metrics.distance_km,
            completion_duration_hours: metrics.duration_hours,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn completion_metrics(&self) -> CompletionMetrics {
        CompletionMetrics {
            distance_km: self.completion_distance_km,
            duration_hours: self.completion_duration_hours,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    submit_delay_ms: Option<u64>,
    completion_distance_km: Option<f64>,
    completion_duration_hours: Option<f64>,
    log_filter: Option<String>,
}

/// Defaults, then `demo.toml` (or `path`) if present, then `APP__*`
/// environment variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let mut settings = Settings::default();

    if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        apply_file(&mut settings, &raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.submit_delay_ms {
        settings.submit_delay_ms = v;
    }
    if let Some(v) = file_cfg.completion_distance_km {
        settings.completion_distance_km = v;
    }
    if let Some(v) = file_cfg.completion_duration_hours {
        settings.completion_duration_hours = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__SUBMIT_DELAY_MS").and_then(|v| v.parse().ok()) {
        settings.submit_delay_ms = v;
    }
    if let Some(v) = lookup("APP__COMPLETION_DISTANCE_KM").and_then(|v| v.parse().ok()) {
        settings.completion_distance_km = v;
    }
    if let Some(v) = lookup("APP__COMPLETION_DURATION_HOURS").and_then(|v| v.parse().ok()) {
        settings.completion_duration_hours = v;
    }
    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
