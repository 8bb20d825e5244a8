//! Raster rendering and pixel sizing of encoded symbols
//!
//! Each module maps to a `module_size` x `module_size` square. Rows are
//! filled in parallel with rayon.

use crate::error::{Error, Result};
use crate::models::{AztecCode, BitMatrix};
use image::{ImageFormat, Rgba, RgbaImage};
use rayon::prelude::*;
use std::path::Path;

/// Modules per pixel factor used by `preferred_size` below a device pixel ratio of 2
const PREFERRED_SCALE: u32 = 4;
/// Scale used at device pixel ratios of 2 and above
const PREFERRED_SCALE_HIDPI: u32 = 2;

/// Colours and geometry of the rendered raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Colour of dark modules
    pub foreground: Rgba<u8>,
    /// Colour of light modules and the quiet zone
    pub background: Rgba<u8>,
    /// Pixels per module side
    pub module_size: u32,
    /// Light border width in modules
    pub quiet_zone: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
            module_size: 1,
            quiet_zone: 0,
        }
    }
}

impl RenderOptions {
    /// Same options with a different module size (at least 1)
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = module_size.max(1);
        self
    }

    /// Same options with a quiet zone of `modules` modules
    pub fn with_quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    /// Same options with different colours
    pub fn with_colors(mut self, foreground: Rgba<u8>, background: Rgba<u8>) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }
}

/// Pixel length of `modules` modules at `scale` pixels each
fn pixel_extent(modules: usize, scale: u32) -> Result<u32> {
    modules
        .checked_mul(scale as usize)
        .and_then(|px| u32::try_from(px).ok())
        .ok_or(Error::ImageTooLarge {
            modules,
            module_size: scale,
        })
}

/// Render a module matrix to an RGBA image. Fails with
/// `Error::ImageTooLarge` when a side overflows `u32` pixels.
pub fn render_matrix(matrix: &BitMatrix, options: &RenderOptions) -> Result<RgbaImage> {
    let scale = options.module_size.max(1);
    let quiet = options.quiet_zone as usize;
    let border = quiet.saturating_mul(2);
    let width = pixel_extent(matrix.width().saturating_add(border), scale)?;
    let height = pixel_extent(matrix.height().saturating_add(border), scale)?;
    let mut img = RgbaImage::new(width, height);
    if width == 0 || height == 0 {
        return Ok(img);
    }

    let scale = scale as usize;
    let row_bytes = width as usize * 4;
    let fg = options.foreground.0;
    let bg = options.background.0;
    img.par_chunks_mut(row_bytes).enumerate().for_each(|(py, row)| {
        let my = (py / scale).checked_sub(quiet);
        for (px, pixel) in row.chunks_exact_mut(4).enumerate() {
            let mx = (px / scale).checked_sub(quiet);
            let dark = match (mx, my) {
                (Some(x), Some(y)) => matrix.get(x, y),
                _ => false,
            };
            pixel.copy_from_slice(if dark { &fg } else { &bg });
        }
    });

    Ok(img)
}

/// Render a symbol to an RGBA image
pub fn render(code: &AztecCode, options: &RenderOptions) -> Result<RgbaImage> {
    render_matrix(code.modules(), options)
}

/// Smallest image size that shows every module: one pixel per module
pub fn true_minimum_size(code: &AztecCode) -> (u32, u32) {
    let n = code.size() as u32;
    (n, n)
}

/// Comfortable display size for a device pixel ratio
pub fn preferred_size(code: &AztecCode, device_pixel_ratio: f32) -> (u32, u32) {
    let (w, h) = true_minimum_size(code);
    let scale = if device_pixel_ratio < 2.0 {
        PREFERRED_SCALE
    } else {
        PREFERRED_SCALE_HIDPI
    };
    (w * scale, h * scale)
}

/// Render into a `width` x `height` canvas using the largest whole module
/// size that fits, centred. `None` when the canvas is smaller than the grid.
pub fn render_to_size(
    code: &AztecCode,
    width: u32,
    height: u32,
    options: &RenderOptions,
) -> Option<RgbaImage> {
    let modules = options
        .quiet_zone
        .checked_mul(2)?
        .checked_add(u32::try_from(code.size()).ok()?)?;
    let scale = width.min(height) / modules;
    if scale == 0 {
        return None;
    }

    let symbol = render(code, &options.with_module_size(scale)).ok()?;
    let mut canvas = RgbaImage::from_pixel(width, height, options.background);
    let x = (width - symbol.width()) / 2;
    let y = (height - symbol.height()) / 2;
    image::imageops::replace(&mut canvas, &symbol, x as i64, y as i64);
    Some(canvas)
}

/// Render and write a PNG file
pub fn save_png<P: AsRef<Path>>(code: &AztecCode, path: P, options: &RenderOptions) -> Result<()> {
    render(code, options)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(n: usize) -> BitMatrix {
        let mut m = BitMatrix::square(n);
        for y in 0..n {
            for x in 0..n {
                m.set(x, y, (x + y) % 2 == 0);
            }
        }
        m
    }

    #[test]
    fn test_render_scale_and_colours() {
        let options = RenderOptions::default().with_module_size(3);
        let img = render_matrix(&checker(2), &options).unwrap();
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(*img.get_pixel(0, 0), options.foreground);
        assert_eq!(*img.get_pixel(2, 2), options.foreground);
        assert_eq!(*img.get_pixel(3, 0), options.background);
        assert_eq!(*img.get_pixel(5, 5), options.foreground);
    }

    #[test]
    fn test_quiet_zone() {
        let options = RenderOptions::default().with_quiet_zone(2);
        let img = render_matrix(&checker(3), &options).unwrap();
        assert_eq!(img.dimensions(), (7, 7));
        assert_eq!(*img.get_pixel(1, 1), options.background);
        assert_eq!(*img.get_pixel(2, 2), options.foreground);
    }

    #[test]
    fn test_custom_colours() {
        let red = Rgba([255, 0, 0, 255]);
        let clear = Rgba([0, 0, 0, 0]);
        let options = RenderOptions::default().with_colors(red, clear);
        let img = render_matrix(&checker(2), &options).unwrap();
        assert_eq!(*img.get_pixel(0, 0), red);
        assert_eq!(*img.get_pixel(1, 0), clear);
    }

    #[test]
    fn test_oversized_raster_is_rejected() {
        let huge_scale = RenderOptions::default().with_module_size(u32::MAX);
        assert!(matches!(
            render_matrix(&checker(2), &huge_scale),
            Err(Error::ImageTooLarge { modules: 2, module_size: u32::MAX })
        ));

        let huge_border = RenderOptions::default()
            .with_module_size(2)
            .with_quiet_zone(u32::MAX / 2);
        assert!(matches!(
            render_matrix(&checker(2), &huge_border),
            Err(Error::ImageTooLarge { .. })
        ));
    }
}
