// src/plotting/mod.rs
// Plotting module for geneconv-viz: coverage step plot with highlighted
// duplication region and tail

pub mod stats;
pub mod themes;
pub mod utils;

use crate::plotting::stats::{DuplicationRegion, RegionStats};
use crate::plotting::themes::{CLASSIC, ColorTheme};
use crate::plotting::utils::{blend_colors, format_number, step_points};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// 14 x 4.5 inches at 300 DPI
pub const PLOT_SIZE: (u32, u32) = (4200, 1350);

const REGION_ALPHA: f64 = 0.6;
const TAIL_ALPHA: f64 = 0.7;

pub struct PlotOptions {
    pub theme: &'static ColorTheme,
    /// Write SVG instead of PNG
    pub svg: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            theme: &CLASSIC,
            svg: false,
        }
    }
}

/// Output path actually written: `.svg` is forced when SVG is requested
pub fn resolve_output_path(output_path: &Path, svg: bool) -> PathBuf {
    let is_svg_ext = output_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if svg && !is_svg_ext {
        output_path.with_extension("svg")
    } else {
        output_path.to_path_buf()
    }
}

/// Render the coverage array with the duplication and tail bands.
///
/// The image format follows the output extension (`.svg` gives SVG,
/// anything else a bitmap). Returns the path written.
pub fn plot_coverage(
    counts: &[u32],
    region: &DuplicationRegion,
    stats: &RegionStats,
    tail_len: u64,
    output_path: &Path,
    options: &PlotOptions,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_output_path(output_path, options.svg);
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    debug!(
        "Rendering {} positions to {} ({})",
        counts.len(),
        path.display(),
        if is_svg { "svg" } else { "bitmap" }
    );

    if is_svg {
        let root = SVGBackend::new(&path, PLOT_SIZE).into_drawing_area();
        draw_coverage(&root, counts, region, stats, tail_len, options.theme)?;
        root.present()?;
    } else {
        let root = BitMapBackend::new(&path, PLOT_SIZE).into_drawing_area();
        draw_coverage(&root, counts, region, stats, tail_len, options.theme)?;
        root.present()?;
    }
    Ok(path)
}

fn draw_coverage<DB>(
    root: &DrawingArea<DB, Shift>,
    counts: &[u32],
    region: &DuplicationRegion,
    stats: &RegionStats,
    tail_len: u64,
    theme: &ColorTheme,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&theme.base)?;

    let x_max = counts.len().max(1) as i64;
    let y_peak = counts.iter().copied().max().unwrap_or(0) as f64;
    let y_max = if y_peak < 3.0 { 3.0 } else { y_peak * 1.05 };

    let mut chart = ChartBuilder::on(root)
        .margin(40)
        .caption(
            "Significant Gene Conversion Fragment Coverage",
            ("sans-serif", 60).into_font().color(&theme.text),
        )
        .set_label_area_size(LabelAreaPosition::Left, 140)
        .set_label_area_size(LabelAreaPosition::Bottom, 120)
        .build_cartesian_2d(0i64..x_max, 0f64..y_max)?;

    // Bands are clamped to the axis so nothing spills into the label areas
    let clamp_x = |x: u64| (x as i64).min(x_max);
    let region_fill = blend_colors(&theme.base, &theme.region, REGION_ALPHA);
    let tail_fill = blend_colors(&theme.base, &theme.tail, TAIL_ALPHA);
    let line_color = theme.primary;

    // Legend entries follow series order; the coverage line is listed first
    // but drawn last so it sits over the bands and grid
    chart
        .draw_series(LineSeries::new(
            std::iter::empty::<(i64, f64)>(),
            line_color.stroke_width(4),
        ))?
        .label("Fragment coverage")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], line_color.stroke_width(4)));

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(clamp_x(region.start), 0.0), (clamp_x(region.end), y_max)],
            region_fill.filled(),
        )))?
        .label(format!("Duplication region ({}%)", stats.dup_pct))
        .legend(move |(x, y)| Rectangle::new([(x, y - 12), (x + 40, y + 12)], region_fill.filled()));

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(clamp_x(stats.tail_start), 0.0), (clamp_x(region.end), y_max)],
            tail_fill.filled(),
        )))?
        .label(format!(
            "Last {} bp of duplication ({}%)",
            tail_len, stats.tail_pct
        ))
        .legend(move |(x, y)| Rectangle::new([(x, y - 12), (x + 40, y + 12)], tail_fill.filled()));

    // Grid goes over the bands
    chart
        .configure_mesh()
        .x_desc("Mitochondrial DNA Position (bp)")
        .y_desc("Stacking Coverage (Fragments)")
        .axis_desc_style(("sans-serif", 40).into_font().color(&theme.text))
        .x_label_formatter(&|x| format_number(*x as u64))
        .x_labels(15)
        .x_label_style(("sans-serif", 30).into_font().color(&theme.text))
        .y_label_style(("sans-serif", 30).into_font().color(&theme.text))
        .bold_line_style(theme.overlay.mix(0.5))
        .light_line_style(theme.overlay.mix(0.2))
        .axis_style(&theme.text)
        .draw()?;

    chart.draw_series(LineSeries::new(
        step_points(counts),
        line_color.stroke_width(4),
    ))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(20)
        .background_style(theme.base.mix(0.9))
        .border_style(&theme.overlay)
        .label_font(("sans-serif", 30).into_font().color(&theme.text))
        .draw()?;

    Ok(())
}
