//! The LUT surface: active selection, current raster, and the injected
//! drawing surface it repaints.

mod config;
mod draw;
mod lut;
mod state;

pub use config::{LutConfig, DEFAULT_COLOR_PRESET, DEFAULT_OPACITY_PRESET};
pub use draw::{paint, DrawSurface, HeadlessSurface};
pub use lut::LutSurface;
pub use state::LutState;
