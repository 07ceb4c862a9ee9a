//! Transfer-function rasterization.
//!
//! Turns a color curve and an opacity curve into a fixed-width RGBA lookup
//! table. Two modes:
//! - continuous: both curves are interpolated independently and joined per
//!   sample (RGB stays straight, alpha is stored alongside)
//! - discrete: each color stop paints an un-blended band; opacity is paired
//!   with color by authored stop index
//!
//! Quantization is `round(v * 255)` clamped to [0, 255].

mod buffer;
mod color;
mod continuous;
mod discrete;

pub use buffer::Raster;
pub use color::{quantize, Rgba8};
pub use discrete::{discrete_segments, Segment};

use std::num::NonZeroU32;

use crate::error::{LutError, Result};
use crate::points::{ColorPoints, OpacityPoints};

/// Default raster width.
pub const DEFAULT_WIDTH: u32 = 256;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RasterMode {
    /// Piecewise-linear gradients.
    #[default]
    Continuous,
    /// Piecewise-constant bands centered on the color stops.
    Discrete,
}

impl RasterMode {
    #[inline]
    pub fn from_discrete(discrete: bool) -> Self {
        if discrete { RasterMode::Discrete } else { RasterMode::Continuous }
    }

    #[inline]
    pub fn is_discrete(self) -> bool {
        self == RasterMode::Discrete
    }
}

/// Normalized position of sample `i` in a raster of `width` samples.
#[inline]
pub(crate) fn sample_position(i: usize, width: usize) -> f32 {
    if width <= 1 { 0.0 } else { i as f32 / (width - 1) as f32 }
}

/// Rasterizes `color` and `opacity` into `width` samples.
///
/// Both sets are non-empty by construction; the only failure is a zero width.
pub fn rasterize(
    color: &ColorPoints,
    opacity: &OpacityPoints,
    mode: RasterMode,
    width: u32,
) -> Result<Raster> {
    let width = NonZeroU32::new(width).ok_or(LutError::InvalidWidth(width))?;
    Ok(render(color, opacity, mode, width))
}

pub(crate) fn render(
    color: &ColorPoints,
    opacity: &OpacityPoints,
    mode: RasterMode,
    width: NonZeroU32,
) -> Raster {
    log::trace!(
        "rasterize: {mode:?}, width {width}, {} color / {} opacity stops",
        color.len(),
        opacity.len()
    );

    let width = width.get() as usize;
    let samples = match mode {
        RasterMode::Continuous => continuous::fill(color, opacity, width),
        RasterMode::Discrete => discrete::fill(color, opacity, width),
    };
    Raster::from_samples(samples)
}

/// Rasterizes raw `[position, r, g, b]` / `[position, a]` rows.
///
/// Fails with [`LutError::InvalidControlPoints`] if either list is empty or
/// holds non-finite values.
pub fn rasterize_rows(
    color: &[[f32; 4]],
    opacity: &[[f32; 2]],
    mode: RasterMode,
    width: u32,
) -> Result<Raster> {
    let color = ColorPoints::from_rows(color)?;
    let opacity = OpacityPoints::from_rows(opacity)?;
    rasterize(&color, &opacity, mode, width)
}
