// Shapes are in logical units; a pixel is covered when its centre falls inside.

use crate::color::Rgb;
use crate::constants::MIN_DOT_COVERAGE;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Ordinary alpha compositing.
    SourceOver,
    /// Additive: overlapping light sums and saturates at white.
    Lighter,
}

#[derive(Debug, Clone)]
pub struct Surface {
    cols: usize,
    rows: usize,
    scale: f32,
    pixels: Vec<Rgb>,
}

impl Surface {
    pub fn new(cols: usize, rows: usize, scale: f32) -> Self {
        Self {
            cols,
            rows,
            scale,
            pixels: vec![Rgb::BLACK; cols * rows],
        }
    }

    /// Reallocate for a new raster size; contents are cleared.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.cols = cols;
        self.rows = rows;
        self.pixels = vec![Rgb::BLACK; cols * rows];
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical width.
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.scale
    }

    /// Logical height.
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.scale
    }

    pub fn pixel(&self, col: usize, row: usize) -> Rgb {
        self.pixels[row * self.cols + col]
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Lay a translucent black sheet over the whole frame.
    pub fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha.clamp(0.0, 1.0);
        for px in &mut self.pixels {
            px.r *= keep;
            px.g *= keep;
            px.b *= keep;
        }
    }

    fn blend_pixel(&mut self, col: i64, row: i64, color: Rgb, alpha: f32, mode: BlendMode) {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return;
        }
        let dst = &mut self.pixels[row as usize * self.cols + col as usize];
        match mode {
            BlendMode::SourceOver => {
                dst.r = dst.r * (1.0 - alpha) + color.r * alpha;
                dst.g = dst.g * (1.0 - alpha) + color.g * alpha;
                dst.b = dst.b * (1.0 - alpha) + color.b * alpha;
            }
            BlendMode::Lighter => {
                dst.r = (dst.r + color.r * alpha).min(1.0);
                dst.g = (dst.g + color.g * alpha).min(1.0);
                dst.b = (dst.b + color.b * alpha).min(1.0);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb, alpha: f32, mode: BlendMode) {
        self.fill_ellipse(cx, cy, radius, radius, color, alpha, mode);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_ellipse(
        &mut self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Rgb,
        alpha: f32,
        mode: BlendMode,
    ) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let (pcx, pcy) = (cx / self.scale, cy / self.scale);
        let (prx, pry) = (rx.max(0.0) / self.scale, ry.max(0.0) / self.scale);

        let mut covered = false;
        if prx > 0.0 && pry > 0.0 {
            let x0 = (pcx - prx).floor() as i64;
            let x1 = (pcx + prx).ceil() as i64;
            let y0 = (pcy - pry).floor() as i64;
            let y1 = (pcy + pry).ceil() as i64;
            for row in y0.max(0)..=y1.min(self.rows as i64 - 1) {
                let dy = (row as f32 + 0.5 - pcy) / pry;
                for col in x0.max(0)..=x1.min(self.cols as i64 - 1) {
                    let dx = (col as f32 + 0.5 - pcx) / prx;
                    if dx * dx + dy * dy <= 1.0 {
                        self.blend_pixel(col, row, color, alpha, mode);
                        covered = true;
                    }
                }
            }
        }

        if !covered {
            let coverage = (PI * prx * pry).clamp(MIN_DOT_COVERAGE, 1.0);
            self.blend_pixel(pcx.floor() as i64, pcy.floor() as i64, color, alpha * coverage, mode);
        }
    }

    /// Stroke a one-pixel line, alternating `dash[0]` drawn and `dash[1]`
    /// skipped logical units from the start point.
    pub fn dashed_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        dash: [f32; 2],
        color: Rgb,
        alpha: f32,
        mode: BlendMode,
    ) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let length = (dx * dx + dy * dy).sqrt();
        let period = dash[0] + dash[1];
        let step = self.scale * 0.5;
        if step <= 0.0 {
            return;
        }
        let steps = (length / step).ceil() as usize;

        let mut last = None;
        for i in 0..=steps {
            let d = (i as f32 * step).min(length);
            if period > 0.0 && d % period >= dash[0] {
                continue;
            }
            let t = if length > 0.0 { d / length } else { 0.0 };
            let col = ((from.0 + dx * t) / self.scale).floor() as i64;
            let row = ((from.1 + dy * t) / self.scale).floor() as i64;
            if last != Some((col, row)) {
                self.blend_pixel(col, row, color, alpha.clamp(0.0, 1.0), mode);
                last = Some((col, row));
            }
        }
    }
}
