use std::num::NonZeroU32;

use crate::raster::RasterMode;

/// Active selection of a [`LutSurface`](super::LutSurface).
///
/// Invariant: both preset names resolved when they were selected, and the
/// surface's raster was produced from exactly this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LutState {
    pub(super) color_preset: String,
    pub(super) opacity_preset: String,
    pub(super) mode: RasterMode,
    pub(super) width: NonZeroU32,
}

impl LutState {
    #[inline]
    pub fn color_preset(&self) -> &str {
        &self.color_preset
    }

    #[inline]
    pub fn opacity_preset(&self) -> &str {
        &self.opacity_preset
    }

    #[inline]
    pub fn mode(&self) -> RasterMode {
        self.mode
    }

    #[inline]
    pub fn is_discrete(&self) -> bool {
        self.mode.is_discrete()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width.get()
    }
}
