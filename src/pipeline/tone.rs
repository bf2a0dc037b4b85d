//! Grayscale conversion, brightness/contrast and binarization
//!
//! The output is strictly two-level: every pixel is pure black or pure white
//! with full alpha, so it serves both as mask source and as a displayable
//! preview of the classification.

use crate::io::configuration::{
    BRIGHTNESS_RANGE, CONTRAST_FACTOR_BASE, CONTRAST_PIVOT, CONTRAST_RANGE, DEFAULT_BRIGHTNESS,
    DEFAULT_CONTRAST, DEFAULT_THRESHOLD, LUMA_WEIGHTS_PER_MILLE, THRESHOLD_RANGE,
};
use crate::io::error::Result;
use crate::raster::resample::resample;
use crate::raster::surface::{RasterBuffer, Size};
use image::Rgba;

/// Sample value of light pixels in the binary buffer
pub const LIGHT: u8 = 255;
/// Sample value of dark pixels in the binary buffer
pub const DARK: u8 = 0;

/// Tone parameters supplied per render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjustments {
    /// Brightness shift, -100..=100
    pub brightness: i32,
    /// Contrast change, -100..=100
    pub contrast: i32,
    /// Light/dark cut-off as a percentage of full scale, 0..=100
    pub threshold: i32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Adjustments {
    /// Create adjustments from brightness, contrast and threshold
    pub const fn new(brightness: i32, contrast: i32, threshold: i32) -> Self {
        Self {
            brightness,
            contrast,
            threshold,
        }
    }

    /// Copy with every field clamped to its documented range
    pub fn clamped(self) -> Self {
        Self {
            brightness: num_traits::clamp(self.brightness, BRIGHTNESS_RANGE.0, BRIGHTNESS_RANGE.1),
            contrast: num_traits::clamp(self.contrast, CONTRAST_RANGE.0, CONTRAST_RANGE.1),
            threshold: num_traits::clamp(self.threshold, THRESHOLD_RANGE.0, THRESHOLD_RANGE.1),
        }
    }

    /// Precomputed per-pixel transfer function
    pub fn curve(self) -> ToneCurve {
        ToneCurve::new(self)
    }
}

/// Brightness/contrast transfer followed by a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    factor: f64,
    offset: f64,
    cutoff: f64,
}

impl ToneCurve {
    /// Build the curve for `adjustments`, clamping them first
    pub fn new(adjustments: Adjustments) -> Self {
        let Adjustments {
            brightness,
            contrast,
            threshold,
        } = adjustments.clamped();

        let c = f64::from(contrast) / 100.0;
        let factor = (CONTRAST_FACTOR_BASE * 255.0f64.mul_add(c, 255.0))
            / (255.0 * 255.0f64.mul_add(-c, CONTRAST_FACTOR_BASE));
        let offset = 255.0 * (f64::from(brightness) / 100.0);
        let cutoff = f64::from(threshold) * 255.0 / 100.0;

        Self {
            factor,
            offset,
            cutoff,
        }
    }

    /// Contrast correction factor
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Adjusted level a luminance value reaches, in 0..=255
    pub fn adjusted(&self, gray: f64) -> f64 {
        (self.factor * (gray - CONTRAST_PIVOT) + CONTRAST_PIVOT + self.offset).clamp(0.0, 255.0)
    }

    /// Level at or above which a pixel counts as light
    pub const fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Whether a luminance value classifies as light
    pub fn is_light(&self, gray: f64) -> bool {
        self.adjusted(gray) >= self.cutoff
    }
}

/// Perceptual luminance of a pixel's color channels
///
/// Weights are applied in integer thousandths so that gray levels land on
/// exact values (a neutral 255 stays exactly 255.0).
pub fn luminance(pixel: Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    let [wr, wg, wb] = LUMA_WEIGHTS_PER_MILLE;
    let weighted = wr * u32::from(r) + wg * u32::from(g) + wb * u32::from(b);
    f64::from(weighted) / 1000.0
}

/// Resample `source` to `target` and binarize it with `adjustments`
///
/// Source alpha is ignored; fully transparent pixels carry whatever color
/// the decoder produced (black for most formats).
///
/// # Errors
///
/// Returns `RenderSurfaceUnavailable` if the working surface cannot be
/// obtained
pub fn adjust(
    source: &RasterBuffer,
    adjustments: Adjustments,
    target: Size,
) -> Result<RasterBuffer> {
    let curve = adjustments.curve();
    let mut buffer = resample(source, target)?;

    for pixel in buffer.pixels_mut() {
        let level = if curve.is_light(luminance(*pixel)) {
            LIGHT
        } else {
            DARK
        };
        *pixel = Rgba([level, level, level, 255]);
    }

    log::debug!(
        "Binarized {}x{} at threshold {:.1} (contrast factor {:.3})",
        target.width,
        target.height,
        curve.cutoff(),
        curve.factor()
    );

    Ok(buffer)
}
