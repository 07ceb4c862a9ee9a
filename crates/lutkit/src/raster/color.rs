use bytemuck::{Pod, Zeroable};

/// One raster sample: straight (non-premultiplied) 8-bit RGBA.
///
/// Layout is `#[repr(C)]` so a slice of samples casts directly to the
/// tightly packed `Rgba8Unorm` texel stream the renderer uploads.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Quantizes unit-range color and opacity.
    #[inline]
    pub fn from_unit(rgb: [f32; 3], a: f32) -> Self {
        Self::new(quantize(rgb[0]), quantize(rgb[1]), quantize(rgb[2]), quantize(a))
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// RGB scaled by alpha, rounded to nearest.
    #[inline]
    pub fn premultiplied(self) -> Self {
        let scale = |c: u8| ((c as u16 * self.a as u16 + 127) / 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

/// `round(v * 255)` clamped to the byte range.
#[inline]
pub fn quantize(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
