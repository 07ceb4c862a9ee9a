//! Hand-off to a GPU renderer sampling the raster as a 1-D texture.
//!
//! lutkit does not own the device or the texture. It only describes what the
//! texture and sampler must look like and fills a caller-created texture:
//! - `Rgba8Unorm`, one texel per raster sample
//! - clamp-to-edge addressing, nearest filtering (the raster already encodes
//!   interpolation)
//! - straight or premultiplied alpha, chosen by the consumer

mod descriptor;
mod upload;

pub use descriptor::{sampler_descriptor, texture_descriptor, TEXTURE_FORMAT};
pub use upload::{texels, upload, AlphaMode};
