use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

use crate::{DEFAULT_INPUT, DEFAULT_SIZE_MARKER, plot::Plot};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Plots to render in order, the built-in set when absent
    pub plots: Option<Vec<Box<dyn Plot>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Results CSV, relative to the results directory
    pub input: String,
    /// Regex selecting the large file rows by filename
    pub size_marker: String,
    pub dpi: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_owned(),
            size_marker: DEFAULT_SIZE_MARKER.to_owned(),
            dpi: 300,
        }
    }
}

impl Config {
    pub async fn load(path: &Path) -> Result<Self> {
        let data = read_to_string(path)
            .await
            .context(format!("Read config {}", path.display()))?;
        Self::from_yaml(&data).context(format!("Parse config {}", path.display()))
    }

    pub fn from_yaml(data: &str) -> Result<Self> {
        Ok(serde_yml::from_str(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_benchmark_output() {
        let settings = Settings::default();
        assert_eq!(settings.input, "benchmark_results.csv");
        assert_eq!(settings.size_marker, "2_5MB");
        assert_eq!(settings.dpi, 300);
    }

    #[test]
    fn partial_settings_keep_defaults() {
        let config = Config::from_yaml("settings:\n  dpi: 100\n").unwrap();
        assert_eq!(config.settings.dpi, 100);
        assert_eq!(config.settings.size_marker, "2_5MB");
        assert!(config.plots.is_none());
    }

    #[test]
    fn empty_document_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn unknown_plot_type_is_rejected() {
        assert!(Config::from_yaml("plots:\n  - type: Pie\n").is_err());
    }
}
