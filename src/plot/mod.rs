//! Plot Module: Time Series and Phase Plane Figures
//!
//! Renders a [`Trajectory`] into two raster figures and writes them as
//! PNG files:
//!
//! - `fn_model_tser.png`: `u` and `w` against time
//! - `fn_model_pplane.png`: `w` against `u`
//!
//! Rendering is done in memory on an `image::RgbImage`, so figures can be
//! inspected without touching the filesystem. Only [`save_png`] and
//! [`render`] write files.

mod axes;
mod canvas;

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::Result;
use crate::trajectory::Trajectory;

pub use axes::AxisLabels;

use self::axes::{padded_range, Axes, PlotArea};
use self::canvas::Canvas;

/// File name of the time-series figure
pub const TIME_SERIES_FILE: &str = "fn_model_tser.png";
/// File name of the phase-plane figure
pub const PHASE_PLANE_FILE: &str = "fn_model_pplane.png";

/// Axis titles of the time-series figure
pub const TIME_SERIES_LABELS: AxisLabels = AxisLabels {
    x: "time",
    y: "voltage/adaptation",
};
/// Axis titles of the phase-plane figure
pub const PHASE_PLANE_LABELS: AxisLabels = AxisLabels {
    x: "voltage, u",
    y: "adaptation, w",
};

/// Figure layout and colors
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Series line width in pixels
    pub line_width: f64,
    /// Space left of the plot area (tick labels and y label)
    pub margin_left: u32,
    pub margin_right: u32,
    pub margin_top: u32,
    /// Space below the plot area (tick labels and x label)
    pub margin_bottom: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    /// Color of the potential `u`
    pub u_color: Rgb<u8>,
    /// Color of the adaptation `w`
    pub w_color: Rgb<u8>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            line_width: 4.0,
            margin_left: 80,
            margin_right: 20,
            margin_top: 20,
            margin_bottom: 60,
            background: Rgb([255, 255, 255]),
            foreground: Rgb([0, 0, 0]),
            u_color: Rgb([31, 119, 180]),
            w_color: Rgb([255, 127, 14]),
        }
    }
}

impl PlotConfig {
    fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margin_left as f64,
            top: self.margin_top as f64,
            right: self.width.saturating_sub(self.margin_right + 1) as f64,
            bottom: self.height.saturating_sub(self.margin_bottom + 1) as f64,
        }
    }
}

/// Paths of the files written by [`render`]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlots {
    pub time_series: PathBuf,
    pub phase_plane: PathBuf,
}

/// `u` and `w` against time, labeled "time" / "voltage/adaptation"
pub fn render_time_series(trajectory: &Trajectory, config: &PlotConfig) -> Result<RgbImage> {
    let (u_lo, u_hi) = trajectory.u_range();
    let (w_lo, w_hi) = trajectory.w_range();
    let t = trajectory.time();
    let t_bounds = if t.is_empty() { (0.0, 1.0) } else { (t[0], t[t.len() - 1]) };
    let axes = Axes {
        x_range: padded_range(t_bounds),
        y_range: padded_range((u_lo.min(w_lo), u_hi.max(w_hi))),
        area: config.plot_area(),
    };

    let mut canvas = Canvas::new(config.width, config.height, config.background)?;
    let u_points = t.iter().zip(trajectory.u().iter()).map(|(&x, &y)| axes.to_pixel(x, y));
    canvas.draw_polyline(u_points, config.line_width, config.u_color);
    let w_points = t.iter().zip(trajectory.w().iter()).map(|(&x, &y)| axes.to_pixel(x, y));
    canvas.draw_polyline(w_points, config.line_width, config.w_color);
    axes.draw(&mut canvas, TIME_SERIES_LABELS, config.foreground);

    Ok(canvas.into_image())
}

/// `w` against `u`, labeled "voltage, u" / "adaptation, w"
pub fn render_phase_plane(trajectory: &Trajectory, config: &PlotConfig) -> Result<RgbImage> {
    let axes = phase_plane_axes(trajectory, config);

    let mut canvas = Canvas::new(config.width, config.height, config.background)?;
    let points = trajectory
        .u()
        .iter()
        .zip(trajectory.w().iter())
        .map(|(&u, &w)| axes.to_pixel(u, w));
    canvas.draw_polyline(points, config.line_width, config.u_color);
    axes.draw(&mut canvas, PHASE_PLANE_LABELS, config.foreground);

    Ok(canvas.into_image())
}

/// `u` on the horizontal axis, `w` on the vertical one
fn phase_plane_axes(trajectory: &Trajectory, config: &PlotConfig) -> Axes {
    Axes::fit(trajectory.u_range(), trajectory.w_range(), config.plot_area())
}

/// Write an image as PNG, replacing any existing file
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Render both figures and write them into `out_dir`
pub fn render(trajectory: &Trajectory, out_dir: &Path, config: &PlotConfig) -> Result<RenderedPlots> {
    let time_series = out_dir.join(TIME_SERIES_FILE);
    save_png(&render_time_series(trajectory, config)?, &time_series)?;

    let phase_plane = out_dir.join(PHASE_PLANE_FILE);
    save_png(&render_phase_plane(trajectory, config)?, &phase_plane)?;

    Ok(RenderedPlots {
        time_series,
        phase_plane,
    })
}
