use std::path::{Path, PathBuf};

use common::{
    chart::{BarLayout, Figure, Palette, PanelStyle, YScale, bitmap_area, draw_bar_panel, present},
    config::Settings,
    dataset::Dataset,
    plot::Plot,
};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Throughput of every cipher and operation on the largest benchmarked file,
/// with error bars from the timing deviation carried over to MB/s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThroughputBasic {
    pub title: String,
    pub filename: String,
    /// Figure width in inches
    pub width: f64,
    /// Figure height in inches
    pub height: f64,
    /// Replaces the size marker from the settings
    pub size_marker: Option<String>,
    pub palette: Palette,
}

impl Default for ThroughputBasic {
    fn default() -> Self {
        Self {
            title: "Throughput for 2.5MB File (Larger is Better)".to_owned(),
            filename: "throughput_comparison_with_stddev.png".to_owned(),
            width: 12.0,
            height: 7.0,
            size_marker: None,
            palette: Palette::Viridis,
        }
    }
}

impl ThroughputBasic {
    pub fn layout(&self, dataset: &Dataset, settings: &Settings) -> Result<BarLayout> {
        let marker = self
            .size_marker
            .as_deref()
            .unwrap_or(&settings.size_marker);
        let subset = dataset
            .filter_filename(marker)
            .context("Select large file rows")?;
        if subset.is_empty() {
            warn!("No results match filename marker {marker}");
        }

        let derived = subset.throughput_stddev();
        for (record, value) in subset.records().iter().zip(&derived) {
            if value.is_none() {
                warn!(
                    "{} {} {}: no throughput deviation for mean time {}",
                    record.cipher, record.operation, record.filename, record.mean_time_ms
                );
            }
        }

        Ok(BarLayout::grouped(
            subset.ciphers(),
            subset.operations(),
            subset.records().iter().zip(derived),
            |r| r.throughput_mbps,
        ))
    }

    pub fn render(&self, layout: &BarLayout, path: &Path, settings: &Settings) -> Result<()> {
        let figure = Figure::new(self.width, self.height, settings.dpi);
        let root = bitmap_area(path, &figure)?;
        draw_bar_panel(
            &root,
            layout,
            &PanelStyle {
                figure,
                caption: &self.title,
                caption_pt: 16.0,
                caption_bold: true,
                x_desc: "Cipher",
                y_desc: "Throughput (MB/s)",
                scale: YScale::Linear,
                palette: self.palette,
                cap_pt: 4.0,
                legend_title: Some("Operation"),
            },
        )?;
        present(&root)?;
        Ok(())
    }
}

#[async_trait::async_trait]
#[typetag::serde]
impl Plot for ThroughputBasic {
    fn name(&self) -> &'static str {
        "ThroughputBasic"
    }

    fn filename(&self) -> &str {
        &self.filename
    }

    async fn plot(
        &self,
        dataset: &Dataset,
        results_dir: &Path,
        settings: &Settings,
    ) -> Result<PathBuf> {
        let layout = self.layout(dataset, settings)?;
        debug!("Throughput chart has {} bars", layout.bars.len());

        let path = results_dir.join(&self.filename);
        self.render(&layout, &path, settings)
            .context(format!("Draw {}", path.display()))?;
        println!("Saved throughput plot to: {}", path.display());
        Ok(path)
    }
}
