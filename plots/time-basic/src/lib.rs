use std::path::{Path, PathBuf};

use common::{
    chart::{
        BarLayout, Figure, LegendAnchor, Palette, PanelStyle, YScale, bitmap_area,
        draw_bar_panel, draw_legend, present,
    },
    config::Settings,
    dataset::Dataset,
    plot::Plot,
};
use eyre::{Context, Result};
use plotters::style::{FontStyle, IntoFont};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Room above the panels for the figure title, in inches
const TITLE_HEIGHT: f64 = 0.6;

/// Mean execution time per cipher and operation, one log-scaled panel per benchmarked file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeBasic {
    pub title: String,
    /// Panel caption, `{name}` is replaced by the filename
    pub panel_title: String,
    pub filename: String,
    /// Panel width in inches
    pub panel_width: f64,
    /// Panel height in inches
    pub panel_height: f64,
    /// Width of the legend strip right of the panels, in inches
    pub legend_width: f64,
    pub palette: Palette,
}

impl Default for TimeBasic {
    fn default() -> Self {
        Self {
            title: "Mean Execution Time by File Size (Smaller is Better)".to_owned(),
            panel_title: "File: {name}".to_owned(),
            filename: "performance_comparison_with_stddev.png".to_owned(),
            panel_width: 4.5,
            panel_height: 5.0,
            legend_width: 1.2,
            palette: Palette::Plasma,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub filename: String,
    pub title: String,
    pub scale: YScale,
    pub layout: BarLayout,
}

impl TimeBasic {
    /// One panel per distinct filename, in order of first appearance
    pub fn panels(&self, dataset: &Dataset) -> Vec<Panel> {
        dataset
            .filenames()
            .iter()
            .map(|filename| {
                let subset = dataset.for_filename(filename);
                let layout = BarLayout::grouped(
                    subset.ciphers(),
                    subset.operations(),
                    subset.records().iter().map(|r| (r, Some(r.stddev_ms))),
                    |r| r.mean_time_ms,
                );
                Panel {
                    filename: filename.to_owned(),
                    title: self.panel_title.replace("{name}", filename),
                    scale: YScale::Log,
                    layout,
                }
            })
            .collect()
    }

    pub fn figure(&self, panels: usize, settings: &Settings) -> Figure {
        Figure::new(
            self.panel_width * panels.max(1) as f64 + self.legend_width,
            self.panel_height + TITLE_HEIGHT,
            settings.dpi,
        )
    }

    pub fn render(&self, panels: &[Panel], path: &Path, settings: &Settings) -> Result<()> {
        let figure = self.figure(panels.len(), settings);
        let root = bitmap_area(path, &figure)?;
        let body = root
            .titled(
                &self.title,
                ("sans-serif", figure.pt(16.0))
                    .into_font()
                    .style(FontStyle::Bold),
            )
            .context("Draw figure title")?;

        let panels_width = self.panel_width * panels.len().max(1) as f64 * f64::from(figure.dpi);
        let (body, legend) = body.split_horizontally(panels_width.round() as i32);

        let areas = body.split_evenly((1, panels.len().max(1)));
        for (area, panel) in areas.iter().zip(panels) {
            draw_bar_panel(
                area,
                &panel.layout,
                &PanelStyle {
                    figure,
                    caption: &panel.title,
                    caption_pt: 12.0,
                    caption_bold: false,
                    x_desc: "Cipher",
                    y_desc: "Mean Time (ms)",
                    scale: panel.scale,
                    palette: self.palette,
                    cap_pt: 3.0,
                    legend_title: None,
                },
            )
            .context(format!("Draw panel {}", panel.filename))?;
        }

        if let Some(panel) = panels.first()
            && !panel.layout.hues.is_empty()
        {
            draw_legend(
                &legend,
                "Operation",
                &panel.layout.hues,
                self.palette,
                figure,
                LegendAnchor::CenterLeft,
            )
            .context("Draw legend")?;
        }
        present(&root)?;
        Ok(())
    }
}

#[async_trait::async_trait]
#[typetag::serde]
impl Plot for TimeBasic {
    fn name(&self) -> &'static str {
        "TimeBasic"
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
        let panels = self.panels(dataset);
        if panels.is_empty() {
            warn!("No results to plot, writing an empty time chart");
        }
        debug!("Time chart has {} panels", panels.len());

        let path = results_dir.join(&self.filename);
        self.render(&panels, &path, settings)
            .context(format!("Draw {}", path.display()))?;
        println!("Saved performance plot to: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Cipher,Operation,Filename,MeanTime(ms),StdDev(ms),Throughput(MB/s)
AES,encrypt,1MB,0.8,0.05,1250
AES,decrypt,1MB,0.6,0.02,1666.67
SM4,encrypt,1MB,4.0,0.3,250
SM4,decrypt,1MB,4.2,0.4,238.1
AES,encrypt,2_5MB,2.0,0.1,1250
AES,decrypt,2_5MB,1.5,0.05,1666.67
SM4,encrypt,2_5MB,10.0,1.2,250
SM4,decrypt,2_5MB,10.5,0.9,238.1
";

    fn dataset() -> Dataset {
        Dataset::from_reader(CSV.as_bytes()).unwrap()
    }

    #[test]
    fn one_log_panel_per_filename() {
        let panels = TimeBasic::default().panels(&dataset());
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].filename, "1MB");
        assert_eq!(panels[1].filename, "2_5MB");
        assert!(panels.iter().all(|p| p.scale == YScale::Log));
        assert_eq!(panels[1].title, "File: 2_5MB");
    }

    #[test]
    fn panels_use_their_own_rows() {
        let panels = TimeBasic::default().panels(&dataset());
        for panel in &panels {
            assert_eq!(panel.layout.bars.len(), 4);
            assert!(panel.layout.bars.iter().all(|b| b.filename == panel.filename));
        }

        let bar = panels[1].layout.find("SM4", "encrypt").unwrap();
        assert_eq!(bar.value, 10.0);
        assert_eq!(bar.error, Some(1.2));
    }

    #[test]
    fn panels_scale_independently() {
        let panels = TimeBasic::default().panels(&dataset());
        let small = panels[0].layout.log_y_range();
        let large = panels[1].layout.log_y_range();
        assert!(small.end < large.end);
        assert!(small.start < large.start);
    }

    #[test]
    fn figure_grows_with_panels() {
        let plot = TimeBasic::default();
        let settings = Settings::default();
        assert_eq!(plot.figure(2, &settings).pixels(), (3060, 1680));
        assert_eq!(plot.figure(0, &settings).pixels(), (1710, 1680));
    }

    #[test]
    fn panels_share_legend_entries() {
        let panels = TimeBasic::default().panels(&dataset());
        assert!(panels.iter().all(|p| p.layout.hues == ["decrypt", "encrypt"]));
    }

    #[test]
    fn empty_dataset_has_no_panels() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(TimeBasic::default().panels(&dataset).is_empty());
    }
}
