use crate::points::{ColorPoints, OpacityPoints};
use crate::raster::DEFAULT_WIDTH;

/// Color preset selected when nothing else is requested.
pub const DEFAULT_COLOR_PRESET: &str = "default";

/// Opacity preset selected when nothing else is requested.
pub const DEFAULT_OPACITY_PRESET: &str = "linear";

/// Initial configuration of a [`LutSurface`](super::LutSurface).
///
/// The preset names chosen here are also the fallback selection when a
/// catalog replacement removes the active preset.
#[derive(Debug, Clone, PartialEq)]
pub struct LutConfig {
    /// Raster width in samples. Must be at least 1.
    pub width: u32,
    pub color_preset: String,
    pub opacity_preset: String,
    pub discrete: bool,
    /// Registered as a user preset under `color_preset` before the first raster.
    pub color_points: Option<ColorPoints>,
    /// Registered as a user preset under `opacity_preset` before the first raster.
    pub opacity_points: Option<OpacityPoints>,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color_preset: DEFAULT_COLOR_PRESET.to_owned(),
            opacity_preset: DEFAULT_OPACITY_PRESET.to_owned(),
            discrete: false,
            color_points: None,
            opacity_points: None,
        }
    }
}

impl LutConfig {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_color_preset(mut self, name: impl Into<String>) -> Self {
        self.color_preset = name.into();
        self
    }

    pub fn with_opacity_preset(mut self, name: impl Into<String>) -> Self {
        self.opacity_preset = name.into();
        self
    }

    pub fn with_discrete(mut self, discrete: bool) -> Self {
        self.discrete = discrete;
        self
    }

    /// Starts on custom color stops, registered under `name`.
    pub fn with_color_points(mut self, name: impl Into<String>, points: ColorPoints) -> Self {
        self.color_preset = name.into();
        self.color_points = Some(points);
        self
    }

    /// Starts on custom opacity stops, registered under `name`.
    pub fn with_opacity_points(mut self, name: impl Into<String>, points: OpacityPoints) -> Self {
        self.opacity_preset = name.into();
        self.opacity_points = Some(points);
        self
    }
}
