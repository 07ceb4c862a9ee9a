use crate::raster::Raster;

/// Pixel-writable 2-D target the LUT paints itself onto.
///
/// The surface is owned by the host: lutkit never creates, resizes or shows
/// it. The natural size is `raster width × 1`; other sizes are filled by
/// nearest-neighbour stretching with every row identical.
pub trait DrawSurface {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Writes one straight-alpha RGBA pixel.
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);
}

impl DrawSurface for image::RgbaImage {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        image::ImageBuffer::dimensions(self)
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        image::ImageBuffer::put_pixel(self, x, y, image::Rgba(rgba));
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    #[inline]
    fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        (**self).put_pixel(x, y, rgba);
    }
}

/// Zero-sized surface for hosts that only consume the raster or texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HeadlessSurface;

impl DrawSurface for HeadlessSurface {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (0, 0)
    }

    #[inline]
    fn put_pixel(&mut self, _x: u32, _y: u32, _rgba: [u8; 4]) {}
}

/// Copies `raster` onto `surface`, stretching horizontally to fit.
pub fn paint<S: DrawSurface + ?Sized>(raster: &Raster, surface: &mut S) {
    let (w, h) = surface.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    let samples = raster.samples();
    if w != raster.width() {
        log::trace!("stretching {} samples over {w} px", samples.len());
    }

    let n = samples.len() as u64;
    for x in 0..w {
        let i = (x as u64 * n / w as u64) as usize;
        let rgba = samples[i].to_array();
        for y in 0..h {
            surface.put_pixel(x, y, rgba);
        }
    }
}
