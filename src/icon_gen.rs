use crate::draw::{fill_ellipse, fill_rectangle, stroke_arc, Rect};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Icon sizes written by [`generate_icons`], in generation order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Output directory used by the binary, relative to the working directory.
pub const ICON_DIR: &str = "icons";

/// Hue of the background disc; alpha comes from the ring index.
pub const GRADIENT_RGB: [u8; 3] = [102, 126, 234];

/// Color of both parts of the lock glyph.
pub const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Stroke width of the shackle arc, in pixels.
pub const SHACKLE_WIDTH: u32 = 2;

/// Layout of the background disc and lock glyph for one icon size.
///
/// All values use floor division on the size, so the layout is fully
/// determined by `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockGeometry {
    pub size: u32,
    pub center: i64,
    /// Radius of the outermost gradient ring. Zero or negative for tiny sizes.
    pub radius: i64,
    pub lock_size: i64,
    pub lock_x: i64,
    pub lock_y: i64,
}

impl LockGeometry {
    pub fn new(size: u32) -> Self {
        let size_i = i64::from(size);
        let center = size_i.div_euclid(2);
        let radius = center - 2;
        let lock_size = size_i.div_euclid(3);
        let lock_offset = center - lock_size.div_euclid(2);

        Self {
            size,
            center,
            radius,
            lock_size,
            lock_x: lock_offset,
            lock_y: lock_offset,
        }
    }

    /// Number of concentric discs painted for the gradient.
    pub fn gradient_steps(&self) -> u32 {
        self.radius.max(0) as u32
    }

    /// Bounding box and color of gradient ring `step`, outermost first.
    pub fn gradient_ring(&self, step: u32) -> (Rect, Rgba<u8>) {
        let inset = i64::from(step);
        let rect = Rect::new(
            self.center - self.radius + inset,
            self.center - self.radius + inset,
            self.center + self.radius - inset,
            self.center + self.radius - inset,
        );
        let [r, g, b] = GRADIENT_RGB;
        (rect, Rgba([r, g, b, gradient_alpha(step, self.radius)]))
    }

    /// The filled rectangle forming the lock body.
    pub fn body_rect(&self) -> Rect {
        let body_y = self.lock_y + self.lock_size.div_euclid(4);
        let body_height = self.lock_size.div_euclid(2);
        Rect::new(
            self.lock_x,
            body_y,
            self.lock_x + self.lock_size,
            body_y + body_height,
        )
    }

    /// The box whose inscribed ellipse the shackle arc follows.
    pub fn shackle_rect(&self) -> Rect {
        let shackle_x = self.lock_x + self.lock_size.div_euclid(4);
        let shackle_y = self.lock_y;
        let shackle_width = self.lock_size.div_euclid(2);
        let shackle_height = self.lock_size.div_euclid(3);
        Rect::new(
            shackle_x,
            shackle_y,
            shackle_x + shackle_width,
            shackle_y + shackle_height,
        )
    }
}

/// Alpha of gradient ring `step` out of `radius` rings: opaque at the rim,
/// fading toward the center.
///
/// `255 * (radius - step) / radius`, rounded half to even in exact integer
/// arithmetic so ties like 212.5 land on 212.
pub fn gradient_alpha(step: u32, radius: i64) -> u8 {
    if radius <= 0 {
        return 0;
    }
    let numerator = 255 * (radius - i64::from(step)).clamp(0, radius);
    let quotient = numerator / radius;
    let twice_remainder = 2 * (numerator % radius);

    let round_up =
        twice_remainder > radius || (twice_remainder == radius && quotient % 2 == 1);
    let rounded = if round_up {
        quotient + 1
    } else {
        quotient
    };
    rounded as u8
}

/// Paint the padlock icon for `size` onto a fresh transparent canvas.
pub fn render_icon(size: u32) -> RgbaImage {
    let geometry = LockGeometry::new(size);
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

    // Painter's algorithm: each smaller disc replaces the one under it.
    for step in 0..geometry.gradient_steps() {
        let (rect, color) = geometry.gradient_ring(step);
        fill_ellipse(&mut canvas, rect, color);
    }

    fill_rectangle(&mut canvas, geometry.body_rect(), GLYPH_COLOR);
    stroke_arc(
        &mut canvas,
        geometry.shackle_rect(),
        0.0,
        180.0,
        SHACKLE_WIDTH,
        GLYPH_COLOR,
    );

    canvas
}

/// Render the icon for `size` and write it to `path` as PNG, replacing any
/// existing file.
pub fn create_icon(size: u32, path: &Path) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive");
    }

    let canvas = render_icon(size);
    save_png(&canvas, path)?;

    println!("Created {} ({size}x{size})", path.display());
    Ok(())
}

/// Write every size in [`ICON_SIZES`] into `output` as `icon{size}.png`,
/// creating the directory first. Stops at the first failure.
pub fn generate_icons(output: &Path) -> Result<Vec<PathBuf>> {
    create_dir_all(output)
        .with_context(|| format!("Can't create output directory {}", output.display()))?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = output.join(icon_filename(size));
        create_icon(size, &path)?;
        written.push(path);
    }

    println!("All icons created successfully!");
    Ok(written)
}

pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgba8,
        )
        .with_context(|| format!("Failed to encode PNG {}", path.display()))?;
    writer.flush().context("Failed to flush PNG file")?;
    Ok(())
}
