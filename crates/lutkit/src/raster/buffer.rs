use super::color::Rgba8;

/// Dense 1-D RGBA lookup table.
///
/// Sample `i` represents normalized intensity `i / (width - 1)`. The raster
/// encodes interpolation already, so consumers should sample it with
/// nearest-neighbour filtering and clamp-to-edge addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    samples: Vec<Rgba8>,
}

impl Raster {
    #[inline]
    pub(crate) fn from_samples(samples: Vec<Rgba8>) -> Self {
        debug_assert!(!samples.is_empty(), "raster must have at least one sample");
        Self { samples }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.samples.len() as u32
    }

    #[inline]
    pub fn samples(&self) -> &[Rgba8] {
        &self.samples
    }

    #[inline]
    pub fn sample(&self, index: usize) -> Option<Rgba8> {
        self.samples.get(index).copied()
    }

    /// Nearest sample for intensity `t`, clamped to the edges.
    pub fn lookup(&self, t: f32) -> Rgba8 {
        let last = self.samples.len() - 1;
        let i = if t.is_nan() { 0 } else { (t.clamp(0.0, 1.0) * last as f32).round() as usize };
        self.samples[i.min(last)]
    }

    /// Tightly packed straight-alpha RGBA8 bytes, `4 * width` long.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Copy with RGB scaled by alpha.
    pub fn to_premultiplied(&self) -> Raster {
        Self::from_samples(self.samples.iter().map(|s| s.premultiplied()).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.samples.iter().copied()
    }
}
