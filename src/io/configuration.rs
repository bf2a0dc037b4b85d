//! Pipeline constants and runtime configuration defaults

// Output sizing
/// Largest edge of a rendered image; larger sources are scaled down to fit
pub const MAX_OUTPUT_DIMENSION: u32 = 1280;

// Tone adjustment
/// Luminance weights in thousandths (red, green, blue)
pub const LUMA_WEIGHTS_PER_MILLE: [u32; 3] = [299, 587, 114];
/// Mid-gray pivot for the contrast curve
pub const CONTRAST_PIVOT: f64 = 128.0;
/// Constant of the classic contrast correction factor
pub const CONTRAST_FACTOR_BASE: f64 = 259.0;

// Tile geometry
/// Tile edge in pixels at scale 1.0
pub const BASE_TILE_SIZE: f32 = 80.0;
/// Smallest tile edge regardless of scale
pub const MIN_TILE_SIZE: f32 = 24.0;
/// Tile edge divided by this gives the dot and stripe spacing
pub const PATTERN_SPACING_DIVISOR: f32 = 3.2;
/// Tile edge divided by this (then multiplied by scale) gives the dot radius
pub const DOT_RADIUS_DIVISOR: f32 = 12.0;
/// Smallest dot radius in pixels
pub const MIN_DOT_RADIUS: f32 = 1.0;
/// Number of cells per axis for grid and checker tiles
pub const TILE_DIVISIONS: u32 = 4;
/// Fixed stripe angle used by crosshatch tiles (degrees)
pub const CROSSHATCH_ANGLE: f32 = 45.0;
/// Samples per axis when estimating pixel coverage of tile geometry
pub const SUPERSAMPLE: u32 = 4;

// Parameter ranges (inclusive); values outside are clamped silently
/// Brightness range
pub const BRIGHTNESS_RANGE: (i32, i32) = (-100, 100);
/// Contrast range
pub const CONTRAST_RANGE: (i32, i32) = (-100, 100);
/// Threshold range
pub const THRESHOLD_RANGE: (i32, i32) = (0, 100);
/// Pattern scale range
pub const SCALE_RANGE: (f32, f32) = (0.5, 3.0);
/// Stroke width range in pixels
pub const STROKE_RANGE: (f32, f32) = (0.5, 6.0);
/// Stripe rotation range in degrees
pub const ROTATION_RANGE: (f32, f32) = (0.0, 180.0);

// Default values for configurable parameters
/// Default brightness
pub const DEFAULT_BRIGHTNESS: i32 = 0;
/// Default contrast
pub const DEFAULT_CONTRAST: i32 = 0;
/// Default threshold
pub const DEFAULT_THRESHOLD: i32 = 50;
/// Default pattern scale
pub const DEFAULT_SCALE: f32 = 1.0;
/// Default stroke width
pub const DEFAULT_STROKE: f32 = 2.0;
/// Default stripe rotation
pub const DEFAULT_ROTATION: f32 = 45.0;
/// Default pattern color
pub const DEFAULT_PATTERN_COLOR: [u8; 3] = [0x00, 0x00, 0x00];
/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

// Output settings
/// Suffix added to rendered output filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// Suffix added to processed preview filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Extension of every written file
pub const OUTPUT_EXTENSION: &str = "png";
/// Source extensions picked up when the target is a directory
pub const SOURCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "webp"];

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
