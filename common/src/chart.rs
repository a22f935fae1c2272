//! Grouped bar charts rendered with [`plotters`]
//!
//! A [`BarLayout`] is the geometry of one chart panel: a bar per `(category, hue)` pair
//! present in the data, each carrying the identity of the row it was built from, so
//! error bars are attached from the bar itself. [`draw_bar_panel`] renders a layout
//! onto a bitmap drawing area.
//!
//! Sizes follow print conventions: a [`Figure`] is measured in inches at a DPI, and
//! fonts, line widths and caps are given in points.

use std::{ops::Range, path::Path};

use plotters::{
    coord::{Shift, types::RangedCoordf64},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    dataset::{Categories, Record},
    util::{format_log_tick, log_ticks},
};

/// Errors that can occur while rendering a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = core::result::Result<T, ChartError>;

/// Fraction of a category slot covered by its group of bars
pub const GROUP_WIDTH: f64 = 0.8;

const FONT: &str = "sans-serif";
const TICK_PT: f64 = 10.0;
const AXIS_DESC_PT: f64 = 12.0;
const LINE_PT: f64 = 1.5;

fn drawing_err(err: impl ToString) -> ChartError {
    ChartError::Drawing(err.to_string())
}

fn config_err(err: impl ToString) -> ChartError {
    ChartError::ChartConfig(err.to_string())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Viridis,
    Plasma,
}

// Evenly spaced stops of the matplotlib colormaps
const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (71, 44, 122),
    (59, 82, 139),
    (44, 114, 142),
    (33, 145, 140),
    (40, 174, 128),
    (94, 201, 98),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: &[(u8, u8, u8)] = &[
    (13, 8, 135),
    (75, 3, 161),
    (126, 3, 168),
    (168, 34, 150),
    (204, 71, 120),
    (230, 108, 92),
    (248, 149, 64),
    (253, 196, 39),
    (240, 249, 33),
];

impl Palette {
    fn stops(self) -> &'static [(u8, u8, u8)] {
        match self {
            Palette::Viridis => VIRIDIS,
            Palette::Plasma => PLASMA,
        }
    }

    /// Color at `t` in `[0, 1]`, linearly interpolated between stops
    pub fn at(self, t: f64) -> RGBColor {
        let stops = self.stops();
        let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let idx = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - idx as f64;
        let (a, b) = (stops[idx], stops[idx + 1]);
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
        RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }

    /// `n` colors evenly spread over the map with both ends excluded
    pub fn colors(self, n: usize) -> Vec<RGBColor> {
        (1..=n)
            .map(|i| self.at(i as f64 / (n + 1) as f64))
            .collect()
    }
}

/// Canvas size in inches at a resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    pub width: f64,
    pub height: f64,
    pub dpi: u32,
}

impl Figure {
    pub fn new(width: f64, height: f64, dpi: u32) -> Self {
        Self { width, height, dpi }
    }

    pub fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width * dpi).round() as u32,
            (self.height * dpi).round() as u32,
        )
    }

    /// Pixel length of `points` at this resolution, at least one pixel
    pub fn pt(&self, points: f64) -> u32 {
        ((points * f64::from(self.dpi) / 72.0).round() as u32).max(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub cipher: String,
    pub operation: String,
    pub filename: String,
    /// Index into [`BarLayout::categories`]
    pub category: usize,
    /// Index into [`BarLayout::hues`]
    pub hue: usize,
    pub left: f64,
    pub right: f64,
    pub value: f64,
    /// Half height of the error bar, `None` draws no error bar
    pub error: Option<f64>,
}

impl Bar {
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Vertical extent of an error bar, centered on its bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Whisker {
    pub x: f64,
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarLayout {
    pub categories: Vec<String>,
    pub hues: Vec<String>,
    pub bars: Vec<Bar>,
}

impl BarLayout {
    /// Groups `rows` by cipher along the x axis, one bar per operation within a group
    ///
    /// Every hue owns a fixed slot inside its group, an absent `(cipher, operation)` pair
    /// leaves a gap. When a pair has several rows, the first one is used.
    pub fn grouped<'a>(
        categories: &Categories,
        hues: &Categories,
        rows: impl IntoIterator<Item = (&'a Record, Option<f64>)>,
        value: impl Fn(&Record) -> f64,
    ) -> Self {
        let rows = rows.into_iter().collect::<Vec<_>>();
        let width = GROUP_WIDTH / hues.len().max(1) as f64;
        let middle = (hues.len() as f64 - 1.0) / 2.0;

        let mut bars = Vec::new();
        for (category, cipher) in categories.iter().enumerate() {
            for (hue, operation) in hues.iter().enumerate() {
                let Some((record, error)) = rows
                    .iter()
                    .find(|(r, _)| r.cipher == cipher && r.operation == operation)
                else {
                    continue;
                };
                let center = category as f64 + (hue as f64 - middle) * width;
                bars.push(Bar {
                    cipher: record.cipher.clone(),
                    operation: record.operation.clone(),
                    filename: record.filename.clone(),
                    category,
                    hue,
                    left: center - width / 2.0,
                    right: center + width / 2.0,
                    value: value(record),
                    error: *error,
                });
            }
        }

        Self {
            categories: categories.as_slice().to_vec(),
            hues: hues.as_slice().to_vec(),
            bars,
        }
    }

    pub fn find(&self, cipher: &str, operation: &str) -> Option<&Bar> {
        self.bars
            .iter()
            .find(|b| b.cipher == cipher && b.operation == operation)
    }

    pub fn x_range(&self) -> Range<f64> {
        -0.5..(self.categories.len().max(1) as f64 - 0.5)
    }

    /// From zero to a margin above the highest error bar
    pub fn linear_y_range(&self) -> Range<f64> {
        let top = self
            .bars
            .iter()
            .map(|b| b.value + b.error.unwrap_or(0.0))
            .fold(0.0_f64, f64::max);
        if top > 0.0 { 0.0..top * 1.05 } else { 0.0..1.0 }
    }

    /// Half the lowest positive bar bottom up to twice the highest error bar
    pub fn log_y_range(&self) -> Range<f64> {
        let positive = || self.bars.iter().filter(|b| b.value > 0.0);
        let bottom = positive()
            .map(|b| {
                let low = b.value - b.error.unwrap_or(0.0);
                if low > 0.0 { low } else { b.value }
            })
            .fold(f64::INFINITY, f64::min);
        let top = positive()
            .map(|b| b.value + b.error.unwrap_or(0.0))
            .fold(0.0_f64, f64::max);
        if !bottom.is_finite() || top <= 0.0 {
            return 0.1..10.0;
        }
        bottom / 2.0..top * 2.0
    }

    /// Bars that can be shown on `scale`, each with its error bar clipped to `floor`
    ///
    /// Non-positive bars have no place on a log axis and are left out. A bar
    /// without an error value is kept with no whisker.
    pub fn drawable(&self, scale: YScale, floor: f64) -> Vec<(&Bar, Option<Whisker>)> {
        self.bars
            .iter()
            .filter(|bar| {
                let shown = scale == YScale::Linear || bar.value > 0.0;
                if !shown {
                    warn!(
                        "{} {} {}: cannot show {} on a log axis",
                        bar.cipher, bar.operation, bar.filename, bar.value
                    );
                }
                shown
            })
            .map(|bar| {
                let whisker = match bar.error {
                    Some(error) => Some(Whisker {
                        x: bar.center(),
                        low: (bar.value - error).max(floor),
                        high: bar.value + error,
                    }),
                    None => {
                        debug!(
                            "No error value for {} {} {}, skipping error bar",
                            bar.cipher, bar.operation, bar.filename
                        );
                        None
                    }
                };
                (bar, whisker)
            })
            .collect()
    }
}

/// Half the cap width in x data units, for a cap `cap_pt` points wide
pub fn cap_half_width(figure: &Figure, cap_pt: f64, x_span: f64, plot_width: u32) -> f64 {
    f64::from(figure.pt(cap_pt)) / 2.0 * x_span / f64::from(plot_width.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YScale {
    Linear,
    Log,
}

#[derive(Debug, Clone)]
pub struct PanelStyle<'a> {
    pub figure: Figure,
    pub caption: &'a str,
    pub caption_pt: f64,
    pub caption_bold: bool,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub scale: YScale,
    pub palette: Palette,
    /// Full width of the error bar caps in points
    pub cap_pt: f64,
    /// Draws a legend keyed by hue under this title
    pub legend_title: Option<&'a str>,
}

/// Creates a white bitmap canvas at `path` sized for `figure`
pub fn bitmap_area<'a>(
    path: &'a Path,
    figure: &Figure,
) -> Result<DrawingArea<BitMapBackend<'a>, Shift>> {
    let (width, height) = figure.pixels();
    if width == 0 || height == 0 {
        return Err(ChartError::InvalidData(format!(
            "Figure {figure:?} has no pixels"
        )));
    }
    let area = BitMapBackend::new(path, (width, height)).into_drawing_area();
    area.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;
    Ok(area)
}

/// Writes the canvas to its file
pub fn present(area: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
    area.present()
        .map_err(|e| ChartError::DrawingArea(e.to_string()))
}

fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Renders `layout` as a grouped bar chart with error bars and a legend keyed by hue
pub fn draw_bar_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    layout: &BarLayout,
    style: &PanelStyle<'_>,
) -> Result<()> {
    let figure = style.figure;
    let caption_font = (FONT, figure.pt(style.caption_pt)).into_font();
    let caption_font = if style.caption_bold {
        caption_font.style(FontStyle::Bold)
    } else {
        caption_font
    };

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(style.caption, caption_font)
        .margin(figure.pt(8.0))
        .x_label_area_size(figure.pt(36.0))
        .y_label_area_size(figure.pt(56.0));

    let x_labels = layout.categories.len().max(1);
    let x_formatter = |x: &f64| category_label(&layout.categories, *x);

    match style.scale {
        YScale::Linear => {
            let y_range = layout.linear_y_range();
            let mut chart = builder
                .build_cartesian_2d(layout.x_range(), y_range.clone())
                .map_err(config_err)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .light_line_style(TRANSPARENT)
                .x_labels(x_labels)
                .x_label_formatter(&x_formatter)
                .x_desc(style.x_desc)
                .y_desc(style.y_desc)
                .label_style((FONT, figure.pt(TICK_PT)))
                .axis_desc_style((FONT, figure.pt(AXIS_DESC_PT)))
                .draw()
                .map_err(config_err)?;
            draw_bars(&mut chart, layout, style, y_range.start)
        }
        YScale::Log => {
            let y_range = layout.log_y_range();
            let y_coord = y_range
                .clone()
                .log_scale()
                .with_key_points(log_ticks(&y_range));
            let mut chart = builder
                .build_cartesian_2d(layout.x_range(), y_coord)
                .map_err(config_err)?;
            chart
                .configure_mesh()
                .disable_x_mesh()
                .light_line_style(TRANSPARENT)
                .x_labels(x_labels)
                .x_label_formatter(&x_formatter)
                .y_label_formatter(&|y: &f64| format_log_tick(*y))
                .x_desc(style.x_desc)
                .y_desc(style.y_desc)
                .label_style((FONT, figure.pt(TICK_PT)))
                .axis_desc_style((FONT, figure.pt(AXIS_DESC_PT)))
                .draw()
                .map_err(config_err)?;
            draw_bars(&mut chart, layout, style, y_range.start)
        }
    }
}

/// Bars start at `floor`, error bars are clipped to it
fn draw_bars<Y>(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, Y>>,
    layout: &BarLayout,
    style: &PanelStyle<'_>,
    floor: f64,
) -> Result<()>
where
    Y: Ranged<ValueType = f64>,
{
    let figure = style.figure;
    let colors = style.palette.colors(layout.hues.len());
    let drawable = layout.drawable(style.scale, floor);

    chart
        .draw_series(drawable.iter().map(|(b, _)| {
            Rectangle::new([(b.left, floor), (b.right, b.value)], colors[b.hue].filled())
        }))
        .map_err(drawing_err)?;

    let (plot_width, _) = chart.plotting_area().dim_in_pixel();
    let x_range = layout.x_range();
    let cap = cap_half_width(&figure, style.cap_pt, x_range.end - x_range.start, plot_width);
    let line = BLACK.stroke_width(figure.pt(LINE_PT));

    for whisker in drawable.iter().filter_map(|(_, w)| *w) {
        let Whisker { x, low, high } = whisker;
        chart
            .draw_series([
                PathElement::new(vec![(x, low), (x, high)], line),
                PathElement::new(vec![(x - cap, low), (x + cap, low)], line),
                PathElement::new(vec![(x - cap, high), (x + cap, high)], line),
            ])
            .map_err(drawing_err)?;
    }

    if let Some(title) = style.legend_title
        && !layout.hues.is_empty()
    {
        draw_legend(
            &chart.plotting_area().strip_coord_spec(),
            title,
            &layout.hues,
            style.palette,
            style.figure,
            LegendAnchor::UpperRight,
        )?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendAnchor {
    /// Inside the plotting area, in its upper right corner
    UpperRight,
    /// Against the left edge, vertically centered
    CenterLeft,
}

/// Boxed legend mapping each hue to its palette color
pub fn draw_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    hues: &[String],
    palette: Palette,
    figure: Figure,
    anchor: LegendAnchor,
) -> Result<()> {
    let colors = palette.colors(hues.len());
    let font: TextStyle = (FONT, figure.pt(TICK_PT)).into_font().into();
    let pad = figure.pt(5.0) as i32;
    let row = figure.pt(15.0) as i32;
    let swatch = figure.pt(20.0) as i32;

    let mut text_width = area
        .estimate_text_size(title, &font)
        .map_err(drawing_err)?
        .0 as i32;
    for hue in hues {
        let (width, _) = area.estimate_text_size(hue, &font).map_err(drawing_err)?;
        text_width = text_width.max(width as i32 + swatch + pad);
    }

    let (area_width, area_height) = area.dim_in_pixel();
    let box_width = text_width + 2 * pad;
    let box_height = row * (hues.len() as i32 + 1) + 2 * pad;
    let (x0, y0) = match anchor {
        LegendAnchor::UpperRight => (area_width as i32 - box_width - pad, pad),
        LegendAnchor::CenterLeft => (pad, ((area_height as i32 - box_height) / 2).max(0)),
    };
    let frame = [(x0, y0), (x0 + box_width, y0 + box_height)];

    area.draw(&Rectangle::new(frame, WHITE.mix(0.8).filled()))
        .map_err(drawing_err)?;
    area.draw(&Rectangle::new(frame, BLACK.mix(0.3).stroke_width(1)))
        .map_err(drawing_err)?;
    area.draw(&Text::new(
        title.to_owned(),
        (x0 + pad, y0 + pad),
        font.clone(),
    ))
    .map_err(drawing_err)?;

    for (i, (hue, color)) in hues.iter().zip(&colors).enumerate() {
        let y = y0 + pad + row * (i as i32 + 1);
        area.draw(&Rectangle::new(
            [(x0 + pad, y + row / 6), (x0 + pad + swatch, y + row * 5 / 6)],
            color.filled(),
        ))
        .map_err(drawing_err)?;
        area.draw(&Text::new(
            hue.clone(),
            (x0 + 2 * pad + swatch, y),
            font.clone(),
        ))
        .map_err(drawing_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    const CSV: &str = "\
Cipher,Operation,Filename,MeanTime(ms),StdDev(ms),Throughput(MB/s)
A,encrypt,2_5MB,2.0,0.2,1000
A,decrypt,2_5MB,4.0,0.1,500
B,encrypt,2_5MB,1.0,0.5,2000
B,decrypt,2_5MB,0.5,0.0,4000
";

    fn layout(csv: &str) -> BarLayout {
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        let records = dataset.records();
        BarLayout::grouped(
            dataset.ciphers(),
            dataset.operations(),
            records.iter().map(|r| (r, Some(r.stddev_ms))),
            |r| r.mean_time_ms,
        )
    }

    #[test]
    fn one_bar_per_cipher_and_operation() {
        let layout = layout(CSV);
        assert_eq!(layout.categories, ["A", "B"]);
        assert_eq!(layout.hues, ["decrypt", "encrypt"]);
        assert_eq!(layout.bars.len(), 4);

        let bar = layout.find("B", "encrypt").unwrap();
        assert_eq!(bar.category, 1);
        assert_eq!(bar.hue, 1);
        assert_eq!(bar.value, 1.0);
        assert_eq!(bar.error, Some(0.5));
        assert!((bar.center() - 1.2).abs() < 1e-9);
        assert!((bar.right - bar.left - 0.4).abs() < 1e-9);
    }

    #[test]
    fn missing_pair_leaves_gap() {
        let csv = "Cipher,Operation,Filename,MeanTime(ms),StdDev(ms),Throughput(MB/s)\n\
                   A,encrypt,1MB,1.0,0.1,10\n\
                   A,decrypt,1MB,1.0,0.1,10\n\
                   B,encrypt,1MB,1.0,0.1,10\n";
        let layout = layout(csv);
        assert_eq!(layout.bars.len(), 3);
        assert!(layout.find("B", "decrypt").is_none());
        let bar = layout.find("B", "encrypt").unwrap();
        assert!((bar.center() - 1.2).abs() < 1e-9);
    }

    #[test]
    fn bars_follow_category_order() {
        let layout = layout(CSV);
        let keys = layout
            .bars
            .iter()
            .map(|b| (b.cipher.as_str(), b.operation.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            [
                ("A", "decrypt"),
                ("A", "encrypt"),
                ("B", "decrypt"),
                ("B", "encrypt")
            ]
        );
    }

    #[test]
    fn y_ranges_cover_error_bars() {
        let layout = layout(CSV);
        let linear = layout.linear_y_range();
        assert_eq!(linear.start, 0.0);
        assert!((linear.end - 4.1 * 1.05).abs() < 1e-9);

        let log = layout.log_y_range();
        assert!((log.start - 0.25).abs() < 1e-9);
        assert!((log.end - 8.2).abs() < 1e-9);
    }

    #[test]
    fn log_range_falls_back_without_positive_values() {
        assert_eq!(BarLayout::default().log_y_range(), 0.1..10.0);
        assert_eq!(BarLayout::default().linear_y_range(), 0.0..1.0);
    }

    const EDGES: &str = "\
Cipher,Operation,Filename,MeanTime(ms),StdDev(ms),Throughput(MB/s)
A,encrypt,16B,0.0,0.0,0
A,decrypt,16B,0.002,0.003,8
B,encrypt,16B,0.004,0.001,4
";

    #[test]
    fn whiskers_sit_on_bar_tops() {
        let layout = layout(CSV);
        let drawable = layout.drawable(YScale::Linear, 0.0);
        assert_eq!(drawable.len(), 4);
        for (bar, whisker) in drawable {
            let whisker = whisker.unwrap();
            assert_eq!(whisker.x, bar.center());
            let error = bar.error.unwrap();
            assert!((whisker.high - (bar.value + error)).abs() < 1e-12);
            assert!((whisker.low - (bar.value - error)).abs() < 1e-12);
        }
    }

    #[test]
    fn whiskers_clip_to_floor() {
        let layout = layout(EDGES);
        let drawable = layout.drawable(YScale::Linear, 0.0);
        let (_, whisker) = drawable
            .iter()
            .find(|(b, _)| b.cipher == "A" && b.operation == "decrypt")
            .unwrap();
        let whisker = whisker.unwrap();
        assert_eq!(whisker.low, 0.0);
        assert!((whisker.high - 0.005).abs() < 1e-12);

        let floor = layout.log_y_range().start;
        for (_, whisker) in layout.drawable(YScale::Log, floor) {
            assert!(whisker.unwrap().low >= floor);
        }
    }

    #[test]
    fn log_axis_leaves_out_non_positive_bars() {
        let layout = layout(EDGES);
        assert_eq!(layout.drawable(YScale::Linear, 0.0).len(), 3);

        let drawable = layout.drawable(YScale::Log, layout.log_y_range().start);
        assert_eq!(drawable.len(), 2);
        assert!(drawable.iter().all(|(b, _)| b.value > 0.0));
    }

    #[test]
    fn missing_error_draws_no_whisker() {
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap();
        let layout = BarLayout::grouped(
            dataset.ciphers(),
            dataset.operations(),
            dataset
                .records()
                .iter()
                .map(|r| (r, (r.cipher == "A").then_some(r.stddev_ms))),
            |r| r.mean_time_ms,
        );
        for (bar, whisker) in layout.drawable(YScale::Linear, 0.0) {
            assert_eq!(whisker.is_some(), bar.cipher == "A");
        }
    }

    #[test]
    fn cap_spans_its_full_width_in_points() {
        let figure = Figure::new(12.0, 7.0, 72);
        // 4pt at 72 DPI is 4px, one data unit per 100px
        let half = cap_half_width(&figure, 4.0, 2.0, 200);
        assert!((half - 0.02).abs() < 1e-12);
        assert!(cap_half_width(&figure, 4.0, 2.0, 0) > 0.0);
    }

    #[test]
    fn palette_samples_interior_points() {
        assert_eq!(Palette::Viridis.at(0.0), RGBColor(68, 1, 84));
        assert_eq!(Palette::Plasma.at(1.0), RGBColor(240, 249, 33));
        let colors = Palette::Viridis.colors(2);
        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
        assert_eq!(colors[0], Palette::Viridis.at(1.0 / 3.0));
        assert!(Palette::Plasma.colors(0).is_empty());
    }

    #[test]
    fn figure_scales_points_with_dpi() {
        let figure = Figure::new(12.0, 7.0, 300);
        assert_eq!(figure.pixels(), (3600, 2100));
        assert_eq!(figure.pt(72.0), 300);
        assert_eq!(figure.pt(16.0), 67);
        assert_eq!(Figure::new(1.0, 1.0, 10).pt(1.0), 1);
    }

    #[test]
    fn category_labels_only_on_slots() {
        let categories = ["AES".to_owned(), "SM4".to_owned()];
        assert_eq!(category_label(&categories, 0.0), "AES");
        assert_eq!(category_label(&categories, 1.1), "SM4");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, 2.0), "");
        assert_eq!(category_label(&categories, -0.5), "");
    }
}
