//! lutkit: transfer-function rasterizer.
//!
//! Sparse color and opacity control points go in; a dense 1-D RGBA lookup
//! table comes out, ready to be sampled by a volume renderer.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`points`] | `ControlPoint`, `ControlPointSet` |
//! | [`preset`] | `PresetTable`, `PresetRegistry`, built-in catalogs |
//! | [`raster`] | `rasterize`, `Raster`, continuous and discrete modes |
//! | [`surface`] | `LutSurface`, `LutConfig`, `DrawSurface` |
//! | [`texture`] | wgpu descriptors and upload for the 1-D texture |
//! | [`logging`] | optional `env_logger` setup |
//!
//! ```rust
//! use lutkit::raster::{rasterize_rows, RasterMode};
//!
//! let raster = rasterize_rows(
//!     &[[0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]],
//!     &[[0.0, 0.0], [1.0, 1.0]],
//!     RasterMode::Continuous,
//!     4,
//! )
//! .unwrap();
//! assert_eq!(raster.sample(1).unwrap().to_array(), [85, 85, 85, 85]);
//! ```

pub mod error;
pub mod logging;
pub mod points;
pub mod preset;
pub mod raster;
pub mod surface;
pub mod texture;

pub use error::{LutError, Result};
pub use points::{ColorPoints, ControlPoint, ControlPointSet, OpacityPoints};
pub use preset::{Channel, PresetRegistry, PresetTable};
pub use raster::{rasterize, Raster, RasterMode, Rgba8};
pub use surface::{DrawSurface, LutConfig, LutSurface};
