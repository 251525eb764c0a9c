//! Chart rendering of the sampled curves.
//!
//! The capacitor voltage is drawn solid, the upper envelope dashed and the
//! lower envelope dotted, on a single chart with grid and legend. Output goes
//! through the plotters SVG backend.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::errors::{Result, RlcError};
use crate::oscillator::Curve;
use crate::waveform::Waveforms;

/// Horizontal extent of a legend glyph, in pixels.
const LEGEND_GLYPH_WIDTH: i32 = 20;

/// Stroke pattern of a curve, with lengths expressed as fractions of the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePattern {
    /// Continuous stroke.
    Solid,
    /// Long strokes separated by gaps.
    Dashed {
        /// Stroke length.
        on: f64,
        /// Gap length.
        off: f64,
    },
    /// Short strokes separated by gaps.
    Dotted {
        /// Stroke length.
        on: f64,
        /// Gap length.
        off: f64,
    },
}

impl LinePattern {
    /// Default dash pattern.
    pub const DASHED: Self = Self::Dashed {
        on: 0.012,
        off: 0.008,
    };
    /// Default dot pattern.
    pub const DOTTED: Self = Self::Dotted {
        on: 0.002,
        off: 0.006,
    };

    /// Pattern used for `curve`.
    #[must_use]
    pub const fn for_curve(curve: Curve) -> Self {
        match curve {
            Curve::CapacitorVoltage => Self::Solid,
            Curve::EnvelopeUpper => Self::DASHED,
            Curve::EnvelopeLower => Self::DOTTED,
        }
    }

    /// Splits `len` samples into the index ranges that are stroked.
    ///
    /// Ranges are disjoint, increasing and each holds at least two samples.
    #[must_use]
    pub fn runs(&self, len: usize) -> Vec<Range<usize>> {
        if len < 2 {
            return Vec::new();
        }
        let (on, off) = match *self {
            Self::Solid => return vec![0..len],
            Self::Dashed { on, off } | Self::Dotted { on, off } => (on, off),
        };
        let intervals = (len - 1) as f64;
        let on = ((on * intervals).round() as usize).max(1);
        let off = ((off * intervals).round() as usize).max(1);

        let mut runs = Vec::new();
        let mut start = 0;
        while start + 1 < len {
            let end = (start + on + 1).min(len);
            runs.push(start..end);
            start += on + off;
        }
        runs
    }
}

/// Visual settings of the chart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Font family for labels and legend.
    pub font_family: String,
    /// Font size for axis descriptions and legend, in pixels.
    pub font_size: f64,
    /// Bold weight for axis descriptions, tick labels and legend.
    pub bold_labels: bool,
    /// Stroke width of every curve, in pixels.
    pub line_width: u32,
    /// Outer margin, in pixels.
    pub margin: u32,
    /// Height reserved below the plot for tick labels and the x description.
    pub x_label_area: u32,
    /// Width reserved left of the plot for tick labels and the y description.
    pub y_label_area: u32,
    /// Relative headroom added above and below the peak voltage.
    pub y_padding: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            font_family: "sans-serif".to_owned(),
            font_size: 18.0,
            bold_labels: true,
            line_width: 2,
            margin: 20,
            x_label_area: 70,
            y_label_area: 90,
            y_padding: 0.05,
        }
    }
}

impl PlotStyle {
    /// Label font at `size` pixels, honouring `bold_labels`.
    #[must_use]
    pub fn label_font(&self, size: f64) -> FontDesc<'_> {
        let weight = if self.bold_labels {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        };
        FontDesc::new(FontFamily::from(self.font_family.as_str()), size, weight)
    }

    /// Default style at a given figure size.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Description of the time axis.
pub const X_AXIS_LABEL: &str = "time (s)";
/// Description of the voltage axis.
pub const Y_AXIS_LABEL: &str = "voltage (V)";

const fn curve_color(curve: Curve) -> RGBColor {
    match curve {
        Curve::CapacitorVoltage => RGBColor(31, 119, 180),
        Curve::EnvelopeUpper => RGBColor(255, 127, 14),
        Curve::EnvelopeLower => RGBColor(44, 160, 44),
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> RlcError {
    RlcError::Plot(err.to_string())
}

/// Renders the chart to an SVG file at `path`.
pub fn render_svg(path: &Path, waveforms: &Waveforms, style: &PlotStyle) -> Result<()> {
    let _span = tracing::info_span!("render_svg", path = %path.display()).entered();
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_chart(&root, waveforms, style)?;
    root.present().map_err(plot_error)?;
    tracing::info!(width = style.width, height = style.height, "chart written");
    Ok(())
}

/// Renders the chart to an in-memory SVG document.
pub fn render_svg_string(waveforms: &Waveforms, style: &PlotStyle) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (style.width, style.height)).into_drawing_area();
        draw_chart(&root, waveforms, style)?;
        root.present().map_err(plot_error)?;
    }
    Ok(svg)
}

/// Draws the three curves, axes, grid and legend on `root`.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    waveforms: &Waveforms,
    style: &PlotStyle,
) -> Result<()> {
    if waveforms.len() < 2 {
        return Err(RlcError::Plot(format!(
            "need at least 2 samples to draw, got {}",
            waveforms.len()
        )));
    }
    root.fill(&WHITE).map_err(plot_error)?;

    let (t_start, t_stop) = waveforms.time_range();
    let peak = waveforms.peak_voltage();
    let y_max = if peak > 0.0 { peak * (1.0 + style.y_padding) } else { 1.0 };
    tracing::debug!(t_start, t_stop, y_max, "chart ranges");

    let mut chart = ChartBuilder::on(root)
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(t_start..t_stop, -y_max..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(style.label_font(style.font_size))
        .label_style(style.label_font(style.font_size * 0.8))
        .draw()
        .map_err(plot_error)?;

    for curve in Curve::ALL {
        let line = curve_color(curve).stroke_width(style.line_width);
        let points: Vec<(f64, f64)> = waveforms.points(curve).collect();
        let pattern = LinePattern::for_curve(curve);

        let anno = match pattern {
            LinePattern::Solid => chart
                .draw_series(LineSeries::new(points, line))
                .map_err(plot_error)?,
            LinePattern::Dashed { .. } | LinePattern::Dotted { .. } => {
                let strokes = pattern
                    .runs(points.len())
                    .into_iter()
                    .map(|run| PathElement::new(points[run].to_vec(), line));
                chart.draw_series(strokes).map_err(plot_error)?
            }
        };

        let anno = anno.label(curve.label());
        match pattern {
            LinePattern::Solid => {
                anno.legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + LEGEND_GLYPH_WIDTH, y)], line)
                });
            }
            LinePattern::Dashed { .. } => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (8, 0)], line)
                        + PathElement::new(vec![(12, 0), (LEGEND_GLYPH_WIDTH, 0)], line)
                });
            }
            LinePattern::Dotted { .. } => {
                anno.legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (2, 0)], line)
                        + PathElement::new(vec![(6, 0), (8, 0)], line)
                        + PathElement::new(vec![(12, 0), (14, 0)], line)
                        + PathElement::new(vec![(18, 0), (LEGEND_GLYPH_WIDTH, 0)], line)
                });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(style.label_font(style.font_size))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    Ok(())
}
