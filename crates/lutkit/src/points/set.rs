use crate::error::{LutError, Result};

use super::point::{ColorPoint, ControlPoint, OpacityPoint};

/// Non-empty list of stops for one channel, in authored order.
///
/// Positions are not required to be ascending or distinct. Equal positions are
/// kept in authored order and produce a hard step; out-of-order positions are
/// sorted (stably) by the rasterizer, which keeps the authored index around
/// for discrete-mode opacity pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet<const N: usize> {
    points: Vec<ControlPoint<N>>,
}

/// Color curve (`r, g, b`).
pub type ColorPoints = ControlPointSet<3>;

/// Opacity curve (`a`).
pub type OpacityPoints = ControlPointSet<1>;

impl<const N: usize> ControlPointSet<N> {
    /// Validates and wraps `points`.
    ///
    /// Fails with [`LutError::InvalidControlPoints`] when `points` is empty or
    /// any position/component is NaN or infinite.
    pub fn new(points: Vec<ControlPoint<N>>) -> Result<Self> {
        if points.is_empty() {
            return Err(LutError::invalid_points("control point set is empty"));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(LutError::invalid_points(format!(
                "stop {i} has a non-finite position or component"
            )));
        }
        Ok(Self { points })
    }

    /// Single stop at position 0; rasterizes to a constant.
    pub fn constant(components: [f32; N]) -> Self {
        Self { points: vec![ControlPoint::new(0.0, components)] }
    }

    #[inline]
    pub fn points(&self) -> &[ControlPoint<N>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &ControlPoint<N> {
        &self.points[0]
    }

    #[inline]
    pub fn last(&self) -> &ControlPoint<N> {
        &self.points[self.points.len() - 1]
    }

    /// Stops ordered by ascending position, each paired with its authored index.
    ///
    /// The sort is stable, so tied positions keep authored order.
    pub fn sorted(&self) -> Vec<(usize, &ControlPoint<N>)> {
        let mut out: Vec<(usize, &ControlPoint<N>)> = self.points.iter().enumerate().collect();
        out.sort_by(|a, b| a.1.position.total_cmp(&b.1.position));
        out
    }
}

impl<const N: usize> TryFrom<Vec<ControlPoint<N>>> for ControlPointSet<N> {
    type Error = LutError;

    fn try_from(points: Vec<ControlPoint<N>>) -> Result<Self> {
        Self::new(points)
    }
}

impl ColorPoints {
    /// Builds a color curve from `[position, r, g, b]` rows.
    pub fn from_rows(rows: &[[f32; 4]]) -> Result<Self> {
        Self::new(rows.iter().map(|&[p, r, g, b]| ColorPoint::rgb(p, r, g, b)).collect())
    }
}

impl OpacityPoints {
    /// Builds an opacity curve from `[position, a]` rows.
    pub fn from_rows(rows: &[[f32; 2]]) -> Result<Self> {
        Self::new(rows.iter().map(|&[p, a]| OpacityPoint::alpha(p, a)).collect())
    }
}
