/// One anchor of a channel curve.
///
/// `position` is expected in [0, 1]; components are expected in [0, 1] and
/// are clamped when quantized, not here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlPoint<const N: usize> {
    pub position: f32,
    pub components: [f32; N],
}

/// `(position, r, g, b)` stop.
pub type ColorPoint = ControlPoint<3>;

/// `(position, a)` stop.
pub type OpacityPoint = ControlPoint<1>;

impl<const N: usize> ControlPoint<N> {
    #[inline]
    pub const fn new(position: f32, components: [f32; N]) -> Self {
        Self { position, components }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.components.iter().all(|c| c.is_finite())
    }

    /// Component-wise linear blend towards `other`; `t` is not clamped.
    #[inline]
    pub(crate) fn lerp_components(&self, other: &Self, t: f32) -> [f32; N] {
        std::array::from_fn(|k| {
            let a = self.components[k];
            a + (other.components[k] - a) * t
        })
    }
}

impl ColorPoint {
    #[inline]
    pub const fn rgb(position: f32, r: f32, g: f32, b: f32) -> Self {
        Self::new(position, [r, g, b])
    }
}

impl OpacityPoint {
    #[inline]
    pub const fn alpha(position: f32, a: f32) -> Self {
        Self::new(position, [a])
    }

    #[inline]
    pub const fn value(&self) -> f32 {
        self.components[0]
    }
}
