//! Single-series line chart.
//!
//! Renders a white canvas with a light grid, an axis frame and the data
//! polyline. Title, axis labels and legend travel as PNG text metadata since
//! there is no font rasterizer.

use std::path::Path;

use crate::error::RenderError;
use crate::render::primitives::{draw_line, draw_rect_outline, draw_thick_line};
use crate::render::{Framebuffer, Rgba, write_png};

const GRID_DIVISIONS: u32 = 10;

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy)]
struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A degenerate domain is widened by one unit on each side.
    fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if (domain.1 - domain.0).abs() < f64::EPSILON {
            (domain.0 - 1.0, domain.1 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    fn scale(&self, value: f64) -> f64 {
        let t = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct LineChart {
    x: Vec<f64>,
    y: Vec<f64>,
    width: u32,
    height: u32,
    margin: u32,
    color: Rgba,
    thickness: u32,
    title: String,
    x_label: String,
    y_label: String,
    legend: String,
}

impl LineChart {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            width,
            height,
            margin: 48,
            color: Rgba::SERIES,
            thickness: 2,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            legend: String::new(),
        }
    }

    pub(crate) fn data(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub(crate) fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub(crate) fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub(crate) fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = legend.into();
        self
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.x.len() != self.y.len() {
            return Err(RenderError::DataLengthMismatch {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        if self.x.is_empty() {
            return Err(RenderError::EmptyData);
        }
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Rasterize into a fresh framebuffer.
    pub(crate) fn render(&self) -> Result<Framebuffer, RenderError> {
        self.validate()?;
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgba::WHITE);

        let left = self.margin as i32;
        let top = self.margin as i32;
        let plot_w = self.width - 2 * self.margin;
        let plot_h = self.height - 2 * self.margin;
        let right = left + plot_w as i32 - 1;
        let bottom = top + plot_h as i32 - 1;

        for i in 1..GRID_DIVISIONS {
            let gx = left + (plot_w * i / GRID_DIVISIONS) as i32;
            let gy = top + (plot_h * i / GRID_DIVISIONS) as i32;
            draw_line(&mut fb, gx, top, gx, bottom, Rgba::GRID);
            draw_line(&mut fb, left, gy, right, gy, Rgba::GRID);
        }

        let (x_min, x_max) = extent(&self.x);
        let (y_min, y_max) = extent(&self.y);
        let sx = LinearScale::new((x_min, x_max), (left as f64, right as f64));
        // Screen y grows downward
        let sy = LinearScale::new((y_min, y_max), (bottom as f64, top as f64));

        let points: Vec<(i32, i32)> = self
            .x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| (sx.scale(x).round() as i32, sy.scale(y).round() as i32))
            .collect();
        for pair in points.windows(2) {
            draw_thick_line(&mut fb, pair[0], pair[1], self.thickness, self.color);
        }

        draw_rect_outline(&mut fb, left, top, plot_w as i32, plot_h as i32, Rgba::BLACK);

        // Legend swatch above the top-right corner of the frame
        if !self.legend.is_empty() {
            let swatch_w = plot_w.min(24);
            fb.fill_rect(right as u32 + 1 - swatch_w, self.margin / 2, swatch_w, 4, self.color);
        }
        Ok(fb)
    }

    /// Render and write to `path`; the framebuffer is dropped before returning.
    pub(crate) fn save(&self, path: &Path) -> Result<(), RenderError> {
        let fb = self.render()?;
        write_png(&fb, path, &self.text_chunks())
    }

    fn text_chunks(&self) -> Vec<(&'static str, String)> {
        [
            ("Title", &self.title),
            ("XLabel", &self.x_label),
            ("YLabel", &self.y_label),
            ("Legend", &self.legend),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k, v.clone()))
        .collect()
    }
}

fn extent(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}
