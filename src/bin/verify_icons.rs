use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use lock_icons::icon_gen::{icon_filename, GLYPH_COLOR, ICON_DIR, ICON_SIZES};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        paths = ICON_SIZES
            .iter()
            .map(|&size| Path::new(ICON_DIR).join(icon_filename(size)))
            .collect();
    }

    for path in &paths {
        verify_icon(path)?;
    }

    println!("\n✓ {} icon(s) verified", paths.len());
    Ok(())
}

fn verify_icon(path: &Path) -> Result<()> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path.display());
    println!("  Dimensions: {}x{}", width, height);

    if width != height {
        anyhow::bail!("{} is not square", path.display());
    }
    if !img.color().has_alpha() {
        anyhow::bail!("{} has no alpha channel", path.display());
    }

    // icon48.png must be 48x48
    let expected = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.strip_prefix("icon"))
        .and_then(|digits| digits.parse::<u32>().ok());
    if let Some(expected) = expected {
        if expected != width {
            anyhow::bail!(
                "{} should be {}x{}, found {}x{}",
                path.display(),
                expected,
                expected,
                width,
                height
            );
        }
    }

    let rgba_img = img.to_rgba8();
    let last = width - 1;
    for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
        let pixel = rgba_img.get_pixel(x, y);
        if pixel[3] != 0 {
            anyhow::bail!(
                "{}: corner ({}, {}) should be transparent, alpha was {}",
                path.display(),
                x,
                y,
                pixel[3]
            );
        }
    }

    let center = width / 2;
    let pixel = rgba_img.get_pixel(center, center);
    println!(
        "  Center pixel RGBA: [{}, {}, {}, {}]",
        pixel[0], pixel[1], pixel[2], pixel[3]
    );
    if *pixel != GLYPH_COLOR {
        anyhow::bail!("{}: lock body not found at the center", path.display());
    }

    println!("  ✓ Lock icon looks right");
    Ok(())
}
