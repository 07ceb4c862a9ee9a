use std::borrow::Cow;

use anyhow::Result;

use crate::raster::Raster;

use super::descriptor::TEXTURE_FORMAT;

/// Alpha interpretation the consuming renderer expects.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AlphaMode {
    /// RGB as rasterized, alpha alongside.
    #[default]
    Straight,
    /// RGB scaled by alpha before upload.
    Premultiplied,
}

/// Texel bytes for `raster` in the requested alpha mode.
pub fn texels(raster: &Raster, mode: AlphaMode) -> Cow<'_, [u8]> {
    match mode {
        AlphaMode::Straight => Cow::Borrowed(raster.as_bytes()),
        AlphaMode::Premultiplied => Cow::Owned(raster.to_premultiplied().as_bytes().to_vec()),
    }
}

/// Writes `raster` into a texture built from
/// [`texture_descriptor`](super::texture_descriptor).
pub fn upload(
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    raster: &Raster,
    mode: AlphaMode,
) -> Result<()> {
    let width = raster.width();
    anyhow::ensure!(
        texture.width() == width,
        "texture is {} texels wide, raster has {width} samples",
        texture.width()
    );
    anyhow::ensure!(
        texture.format() == TEXTURE_FORMAT,
        "texture format {:?} is not {TEXTURE_FORMAT:?}",
        texture.format()
    );

    let data = texels(raster, mode);
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(1),
        },
        wgpu::Extent3d {
            width,
            height: 1,
            depth_or_array_layers: 1,
        },
    );

    log::trace!("uploaded {width} texels ({mode:?})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{rasterize_rows, RasterMode};

    fn half_transparent_white() -> Raster {
        rasterize_rows(&[[0.0, 1.0, 1.0, 1.0]], &[[0.0, 0.5]], RasterMode::Continuous, 2).unwrap()
    }

    #[test]
    fn straight_texels_borrow_raster_bytes() {
        let raster = half_transparent_white();
        let data = texels(&raster, AlphaMode::Straight);
        assert!(matches!(data, Cow::Borrowed(_)));
        assert_eq!(&*data, &[255, 255, 255, 128, 255, 255, 255, 128]);
    }

    #[test]
    fn premultiplied_texels_scale_rgb() {
        let raster = half_transparent_white();
        let data = texels(&raster, AlphaMode::Premultiplied);
        assert_eq!(&*data, &[128, 128, 128, 128, 128, 128, 128, 128]);
        // The raster itself stays straight.
        assert_eq!(raster.as_bytes()[0], 255);
    }
}
