//! Raster primitives used to paint the icons.
//!
//! Every primitive writes pixels directly (no alpha compositing) and silently
//! clips to the canvas, so geometry may run off the edge for tiny sizes.

use image::{Rgba, RgbaImage};

/// Inclusive pixel box. Signed so degenerate geometry can still be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether the whole box lies on a `size`×`size` canvas.
    pub fn fits_within(&self, size: u32) -> bool {
        let max = i64::from(size) - 1;
        self.x0 >= 0
            && self.y0 >= 0
            && self.x1 <= max
            && self.y1 <= max
            && self.x0 <= self.x1
            && self.y0 <= self.y1
    }

    fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }

    // The box spans whole pixels, so a one-pixel box has radius 0.5.
    fn radii(&self) -> (f64, f64) {
        let rx = ((self.x1 - self.x0 + 1) as f64 / 2.0).max(0.5);
        let ry = ((self.y1 - self.y0 + 1) as f64 / 2.0).max(0.5);
        (rx, ry)
    }

    /// Pixels of the box that are on the canvas, as `(x, y)` pairs.
    fn clipped_pixels(&self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let x_start = self.x0.max(0);
        let y_start = self.y0.max(0);
        let x_end = self.x1.min(i64::from(width) - 1);
        let y_end = self.y1.min(i64::from(height) - 1);

        (y_start..=y_end)
            .flat_map(move |y| (x_start..=x_end).map(move |x| (x as u32, y as u32)))
    }
}

fn ellipse_distance(dx: f64, dy: f64, rx: f64, ry: f64) -> f64 {
    (dx / rx).powi(2) + (dy / ry).powi(2)
}

/// Fill the ellipse inscribed in `rect`.
pub fn fill_ellipse(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (cx, cy) = rect.center();
    let (rx, ry) = rect.radii();

    let (width, height) = canvas.dimensions();
    for (x, y) in rect.clipped_pixels(width, height) {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        if ellipse_distance(dx, dy, rx, ry) <= 1.0 {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Fill every pixel of `rect`, edges included.
pub fn fill_rectangle(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for (x, y) in rect.clipped_pixels(width, height) {
        canvas.put_pixel(x, y, color);
    }
}

/// Stroke part of the outline of the ellipse inscribed in `rect`.
///
/// Angles are in degrees, counter-clockwise from 3 o'clock with y pointing up,
/// so `0..=180` is the upper half. The stroke grows inward from the ellipse
/// edge by `stroke_width` pixels.
pub fn stroke_arc(
    canvas: &mut RgbaImage,
    rect: Rect,
    start_deg: f64,
    end_deg: f64,
    stroke_width: u32,
    color: Rgba<u8>,
) {
    let (cx, cy) = rect.center();
    let (rx, ry) = rect.radii();
    let inner_rx = rx - f64::from(stroke_width);
    let inner_ry = ry - f64::from(stroke_width);
    let has_hole = inner_rx > 0.0 && inner_ry > 0.0;

    let (width, height) = canvas.dimensions();
    for (x, y) in rect.clipped_pixels(width, height) {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;

        if ellipse_distance(dx, dy, rx, ry) > 1.0 {
            continue;
        }
        if has_hole && ellipse_distance(dx, dy, inner_rx, inner_ry) < 1.0 {
            continue;
        }

        // Normalize to the unit circle so the angle follows the ellipse shape.
        let mut angle = (-dy / ry).atan2(dx / rx).to_degrees();
        // -180 (from a negative-zero dy) wraps to 180.
        if angle < 0.0 {
            angle += 360.0;
        }
        if angle >= start_deg && angle <= end_deg {
            canvas.put_pixel(x, y, color);
        }
    }
}
