//! Runtime configuration defaults and limits

use crate::algorithm::walker::Color;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default lattice extent (the lattice is one larger on each axis)
pub const DEFAULT_RESOLUTION: usize = 40;

/// Walkers requested by the random spawn pattern
pub const DEFAULT_WALKER_COUNT: usize = 10;

/// Stroke width in world units
pub const DEFAULT_SIZE: f64 = 4.0;

/// World distance between neighbouring cells
pub const DEFAULT_STEP_SIZE: f64 = 10.0;

/// Blank border around the lattice in world units
pub const DEFAULT_MARGIN: f64 = 20.0;

// Keeps the coordinate index and raster output within sane memory bounds
/// Maximum allowed lattice extent
pub const MAX_RESOLUTION: usize = 4096;

/// Vertex count used to approximate circular clip shapes
pub const CIRCLE_CLIP_SEGMENTS: usize = 64;

/// Walker colors, cycled in registration order
pub const DEFAULT_PALETTE: [Color; 6] = [
    [0x26, 0x46, 0x53, 0xff],
    [0x2a, 0x9d, 0x8f, 0xff],
    [0xe9, 0xc4, 0x6a, 0xff],
    [0xf4, 0xa2, 0x61, 0xff],
    [0xe7, 0x6f, 0x51, 0xff],
    [0x8a, 0xb1, 0x7d, 0xff],
];

/// Canvas background
pub const BACKGROUND_COLOR: Color = [0xf8, 0xf4, 0xe9, 0xff];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of generated file names
pub const OUTPUT_PREFIX: &str = "walk";
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
