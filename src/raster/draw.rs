//! Coverage rasterization for tile geometry
//!
//! Shapes are tested against a regular grid of sample points inside each
//! pixel and the covered fraction becomes the pixel's alpha. All shapes on a
//! canvas share one color, so overlapping shapes combine with source-over on
//! alpha alone.

use crate::io::configuration::SUPERSAMPLE;
use crate::io::error::Result;
use crate::raster::surface::{RasterBuffer, Size, acquire_transparent};
use crate::style::Color;

/// Point in pixel space, `[x, y]` with y pointing down
pub type Point = [f32; 2];

/// Geometric primitive a canvas can fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled disc
    Circle {
        /// Disc center
        center: Point,
        /// Disc radius
        radius: f32,
    },
    /// Stroked segment with round caps
    Stroke {
        /// Segment start
        from: Point,
        /// Segment end
        to: Point,
        /// Full stroke width
        width: f32,
    },
    /// Axis-aligned filled rectangle
    Rect {
        /// Top-left corner
        origin: Point,
        /// Horizontal extent
        width: f32,
        /// Vertical extent
        height: f32,
    },
}

impl Shape {
    /// Whether `p` lies inside the shape
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Self::Circle { center, radius } => {
                let dx = p[0] - center[0];
                let dy = p[1] - center[1];
                dx.mul_add(dx, dy * dy) <= radius * radius
            }
            Self::Stroke { from, to, width } => {
                let half = width / 2.0;
                segment_distance_squared(p, from, to) <= half * half
            }
            Self::Rect {
                origin,
                width,
                height,
            } => {
                p[0] >= origin[0]
                    && p[0] < origin[0] + width
                    && p[1] >= origin[1]
                    && p[1] < origin[1] + height
            }
        }
    }

    /// Axis-aligned bounds `(min, max)` enclosing the shape
    pub fn bounds(&self) -> (Point, Point) {
        match *self {
            Self::Circle { center, radius } => (
                [center[0] - radius, center[1] - radius],
                [center[0] + radius, center[1] + radius],
            ),
            Self::Stroke { from, to, width } => {
                let half = width / 2.0;
                (
                    [from[0].min(to[0]) - half, from[1].min(to[1]) - half],
                    [from[0].max(to[0]) + half, from[1].max(to[1]) + half],
                )
            }
            Self::Rect {
                origin,
                width,
                height,
            } => (origin, [origin[0] + width, origin[1] + height]),
        }
    }
}

// Squared distance from p to the segment ab
fn segment_distance_squared(p: Point, a: Point, b: Point) -> f32 {
    let abx = b[0] - a[0];
    let aby = b[1] - a[1];
    let apx = p[0] - a[0];
    let apy = p[1] - a[1];

    let length_squared = abx.mul_add(abx, aby * aby);
    let t = if length_squared > 0.0 {
        (apx.mul_add(abx, apy * aby) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let dx = t.mul_add(-abx, apx);
    let dy = t.mul_add(-aby, apy);
    dx.mul_add(dx, dy * dy)
}

/// Single-color drawing surface
pub struct Canvas {
    image: RasterBuffer,
    color: Color,
}

impl Canvas {
    /// Acquire a transparent canvas that paints in `color`
    ///
    /// # Errors
    ///
    /// Returns `RenderSurfaceUnavailable` if the surface cannot be allocated
    pub fn new(size: Size, color: Color) -> Result<Self> {
        Ok(Self {
            image: acquire_transparent(size)?,
            color,
        })
    }

    /// Canvas dimensions
    pub fn size(&self) -> Size {
        Size::of(&self.image)
    }

    /// Paint `shape`, clipped to the canvas
    pub fn fill(&mut self, shape: &Shape) {
        let (min, max) = shape.bounds();
        let (width, height) = self.image.dimensions();

        let x_start = min[0].floor().max(0.0) as u32;
        let y_start = min[1].floor().max(0.0) as u32;
        let x_end = (max[0].ceil().max(0.0) as u32).min(width);
        let y_end = (max[1].ceil().max(0.0) as u32).min(height);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let coverage = pixel_coverage(shape, x, y);
                if coverage == 0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x, y);
                let existing = u32::from(pixel.0[3]);
                // Same color everywhere, so source-over reduces to alpha
                let alpha = coverage + existing * (255 - coverage) / 255;
                *pixel = self.color.with_alpha(alpha.min(255) as u8);
            }
        }
    }

    /// Paint every shape in order
    pub fn fill_all<'a>(&mut self, shapes: impl IntoIterator<Item = &'a Shape>) {
        for shape in shapes {
            self.fill(shape);
        }
    }

    /// Finish drawing and take the pixels
    pub fn into_image(self) -> RasterBuffer {
        self.image
    }
}

// Covered fraction of pixel (x, y) scaled to 0..=255
fn pixel_coverage(shape: &Shape, x: u32, y: u32) -> u32 {
    let step = 1.0 / SUPERSAMPLE as f32;
    let mut hits = 0;
    for sy in 0..SUPERSAMPLE {
        for sx in 0..SUPERSAMPLE {
            let sample = [
                (sx as f32 + 0.5).mul_add(step, x as f32),
                (sy as f32 + 0.5).mul_add(step, y as f32),
            ];
            if shape.contains(sample) {
                hits += 1;
            }
        }
    }

    let total = SUPERSAMPLE * SUPERSAMPLE;
    (hits * 255 + total / 2) / total
}
