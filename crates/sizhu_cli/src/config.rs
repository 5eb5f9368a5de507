use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sizhu_chart::ChartConfig;
use tracing::info;

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level `sizhu.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizhuConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Optional report sections.
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: OutputFormat,
}

impl SizhuConfig {
    /// Load a config file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        info!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}
