//! Axis scaling, tick placement and frame drawing.

use image::Rgb;

use super::canvas::Canvas;

/// Fraction of the data span added on each side of an axis
const MARGIN: f64 = 0.05;
/// Tick label height in pixels
const TICK_PX: f32 = 12.0;
/// Axis label height in pixels
const LABEL_PX: f32 = 18.0;

/// Axis titles of one figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
}

/// Pixel rectangle holding the plotted data
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Linear mapping from data coordinates to a plot area
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axes {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub area: PlotArea,
}

impl Axes {
    /// Fit axes around the given data bounds
    pub fn fit(x_bounds: (f64, f64), y_bounds: (f64, f64), area: PlotArea) -> Self {
        Self {
            x_range: padded_range(x_bounds),
            y_range: padded_range(y_bounds),
            area,
        }
    }

    /// Data point to pixel position (y grows downwards)
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        let a = self.area;
        let px = a.left + (x - x0) / (x1 - x0) * (a.right - a.left);
        let py = a.bottom - (y - y0) / (y1 - y0) * (a.bottom - a.top);
        (px, py)
    }

    /// Frame, ticks, tick labels and both axis labels
    pub fn draw(&self, canvas: &mut Canvas, labels: AxisLabels, color: Rgb<u8>) {
        let a = self.area;
        let (left, top) = (a.left.round() as i32, a.top.round() as i32);
        let (right, bottom) = (a.right.round() as i32, a.bottom.round() as i32);

        let w = (right - left + 1).max(0) as u32;
        let h = (bottom - top + 1).max(0) as u32;
        canvas.fill_rect(left, top, w, 1, color);
        canvas.fill_rect(left, bottom, w, 1, color);
        canvas.fill_rect(left, top, 1, h, color);
        canvas.fill_rect(right, top, 1, h, color);

        let x_ticks = nice_ticks(self.x_range.0, self.x_range.1);
        let x_step = tick_step(&x_ticks);
        for &t in &x_ticks {
            let (px, _) = self.to_pixel(t, self.y_range.0);
            let px = px.round() as i32;
            canvas.fill_rect(px, bottom + 1, 1, 5, color);
            let label = format_tick(t, x_step);
            let (tw, _) = canvas.text_size(&label, TICK_PX);
            canvas.draw_text(px - tw as i32 / 2, bottom + 8, &label, TICK_PX, color);
        }

        let y_ticks = nice_ticks(self.y_range.0, self.y_range.1);
        let y_step = tick_step(&y_ticks);
        for &t in &y_ticks {
            let (_, py) = self.to_pixel(self.x_range.0, t);
            let py = py.round() as i32;
            canvas.fill_rect(left - 5, py, 5, 1, color);
            let label = format_tick(t, y_step);
            let (tw, th) = canvas.text_size(&label, TICK_PX);
            canvas.draw_text(left - 8 - tw as i32, py - th as i32 / 2, &label, TICK_PX, color);
        }

        let (xw, _) = canvas.text_size(labels.x, LABEL_PX);
        let x_mid = (left + right) / 2;
        canvas.draw_text(x_mid - xw as i32 / 2, bottom + 28, labels.x, LABEL_PX, color);

        let (yw, _) = canvas.text_size(labels.y, LABEL_PX);
        let y_mid = (top + bottom) / 2;
        canvas.draw_text_up(4, y_mid + yw as i32 / 2, labels.y, LABEL_PX, color);
    }
}

/// Pad data bounds so the axis has a non-zero, finite span
pub(crate) fn padded_range((lo, hi): (f64, f64)) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * MARGIN
    } else if lo != 0.0 {
        lo.abs() * MARGIN
    } else {
        MARGIN
    };
    (lo - pad, hi + pad)
}

/// Round tick values (steps of 1, 2 or 5 × 10^k) inside [lo, hi]
pub(crate) fn nice_ticks(lo: f64, hi: f64) -> Vec<f64> {
    const TARGET: f64 = 6.0;
    let span = hi - lo;
    if !(span > 0.0) || !span.is_finite() {
        return Vec::new();
    }

    let raw = span / TARGET;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = mag
        * if norm < 1.5 {
            1.0
        } else if norm < 3.0 {
            2.0
        } else if norm < 7.0 {
            5.0
        } else {
            10.0
        };

    let first = (lo / step).ceil();
    let mut ticks = Vec::new();
    let mut i = 0.0;
    while ticks.len() < 20 {
        let t = (first + i) * step;
        if t > hi + step * 1e-9 {
            break;
        }
        // avoid printing "-0"
        ticks.push(if t == 0.0 { 0.0 } else { t });
        i += 1.0;
    }
    ticks
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

/// Format a tick with just enough decimals for its step
pub(crate) fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()).max(0.0) as usize
    };
    let s = format!("{:.*}", decimals, value);
    // "-0.0" and friends
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
