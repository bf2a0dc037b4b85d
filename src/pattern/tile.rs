//! Tile generation for each pattern kind
//!
//! A tile is a small square image repeated in both axes to cover any area.
//! Its content depends only on the pattern parameters, never on where it
//! will be placed, so abutting copies form one continuous field. Dot and
//! stripe spacing is `size / 3.2`, which does not divide the tile edge, so
//! faint seams can appear between copies.

use crate::io::configuration::{
    BASE_TILE_SIZE, CROSSHATCH_ANGLE, DOT_RADIUS_DIVISOR, MIN_DOT_RADIUS, MIN_TILE_SIZE,
    PATTERN_SPACING_DIVISOR, TILE_DIVISIONS,
};
use crate::pattern::kind::{PatternOptions, PatternType};
use crate::raster::draw::{Canvas, Point, Shape};
use crate::raster::surface::{RasterBuffer, Size};
use crate::style::Color;
use image::Rgba;

/// Square image meant to be repeated across a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    image: RasterBuffer,
}

impl Tile {
    /// Wrap an existing square image
    ///
    /// Returns `None` if the image is empty or not square.
    pub fn from_image(image: RasterBuffer) -> Option<Self> {
        (image.width() > 0 && image.width() == image.height()).then_some(Self { image })
    }

    /// Edge length in pixels
    pub fn edge(&self) -> u32 {
        self.image.width()
    }

    /// Underlying pixels of one copy
    pub const fn image(&self) -> &RasterBuffer {
        &self.image
    }

    /// Pixel at `(x, y)` of the infinite repetition
    pub fn sample(&self, x: u32, y: u32) -> Rgba<u8> {
        let edge = self.edge();
        *self.image.get_pixel(x % edge, y % edge)
    }
}

/// Tile edge for a pattern scale: `max(24, 80 * scale)` rounded to whole pixels
///
/// The scale is clamped to its documented range first.
pub fn tile_edge(scale: f32) -> u32 {
    let scale = PatternOptions::new(scale, 1.0, 0.0).clamped().scale;
    (BASE_TILE_SIZE * scale).max(MIN_TILE_SIZE).round() as u32
}

/// Generate one tile of `kind` drawn in `color`
///
/// Returns `None` only when the tile surface cannot be acquired; the caller
/// then composites a flat fill instead.
pub fn generate_tile(kind: PatternType, options: PatternOptions, color: Color) -> Option<Tile> {
    let options = options.clamped();
    let edge = tile_edge(options.scale);

    let mut canvas = match Canvas::new(Size::new(edge, edge), color) {
        Ok(canvas) => canvas,
        Err(error) => {
            log::warn!("No tile for {kind} pattern: {error}");
            return None;
        }
    };

    let shapes = pattern_shapes(kind, edge as f32, &options);
    canvas.fill_all(&shapes);
    log::debug!(
        "Generated {kind} tile: edge {edge}px, {} shapes",
        shapes.len()
    );

    Tile::from_image(canvas.into_image())
}

/// Geometry of one tile of `kind` with edge `size`
pub fn pattern_shapes(kind: PatternType, size: f32, options: &PatternOptions) -> Vec<Shape> {
    if size.is_nan() || size <= 0.0 {
        return Vec::new();
    }

    match kind {
        PatternType::Dots => dot_shapes(size, options.scale),
        PatternType::Diagonal => stripe_shapes(size, options.stroke, options.rotation),
        PatternType::Grid => grid_shapes(size, options.stroke),
        PatternType::Checker => checker_shapes(size),
        PatternType::Crosshatch => {
            let mut shapes = stripe_shapes(size, options.stroke, CROSSHATCH_ANGLE);
            shapes.extend(stripe_shapes(size, options.stroke, -CROSSHATCH_ANGLE));
            shapes
        }
    }
}

fn spacing(size: f32) -> f32 {
    size / PATTERN_SPACING_DIVISOR
}

fn dot_shapes(size: f32, scale: f32) -> Vec<Shape> {
    let spacing = spacing(size);
    let radius = (size / DOT_RADIUS_DIVISOR * scale).max(MIN_DOT_RADIUS);
    let centers: Vec<f32> = (0u16..)
        .map(|i| spacing * (f32::from(i) + 0.5))
        .take_while(|&c| c < size)
        .collect();

    centers
        .iter()
        .flat_map(|&y| {
            centers.iter().map(move |&x| Shape::Circle {
                center: [x, y],
                radius,
            })
        })
        .collect()
}

// Vertical lines across a band twice the tile wide, rotated about the tile center
fn stripe_shapes(size: f32, stroke: f32, angle_degrees: f32) -> Vec<Shape> {
    let spacing = spacing(size);
    let center = size / 2.0;
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let rotate = |[x, y]: Point| -> Point {
        [
            x.mul_add(cos, -y * sin) + center,
            x.mul_add(sin, y * cos) + center,
        ]
    };

    (0u16..)
        .map(|i| f32::from(i).mul_add(spacing, -size))
        .take_while(|&x| x <= size)
        .map(|x| Shape::Stroke {
            from: rotate([x, -size]),
            to: rotate([x, size]),
            width: stroke,
        })
        .collect()
}

fn grid_shapes(size: f32, stroke: f32) -> Vec<Shape> {
    let step = size / TILE_DIVISIONS as f32;
    (0..=TILE_DIVISIONS)
        .flat_map(|i| {
            let p = i as f32 * step;
            [
                Shape::Stroke {
                    from: [p, 0.0],
                    to: [p, size],
                    width: stroke,
                },
                Shape::Stroke {
                    from: [0.0, p],
                    to: [size, p],
                    width: stroke,
                },
            ]
        })
        .collect()
}

fn checker_shapes(size: f32) -> Vec<Shape> {
    let cell = size / TILE_DIVISIONS as f32;
    (0..TILE_DIVISIONS)
        .flat_map(|y| (0..TILE_DIVISIONS).map(move |x| (x, y)))
        .filter(|(x, y)| (x + y) % 2 == 0)
        .map(|(x, y)| Shape::Rect {
            origin: [x as f32 * cell, y as f32 * cell],
            width: cell,
            height: cell,
        })
        .collect()
}
