//! Gradient mode: each channel is interpolated on its own, then the two are
//! joined per sample (color pass, then alpha mask).

use crate::points::{ColorPoints, ControlPoint, OpacityPoints};

use super::color::Rgba8;
use super::sample_position;

/// Piecewise-linear value of a position-sorted curve at `t`.
///
/// Outside the first/last stop the boundary value holds. Between two stops
/// sharing a position the value jumps; at the shared position itself the
/// later stop wins.
pub(super) fn evaluate<const N: usize>(sorted: &[(usize, &ControlPoint<N>)], t: f32) -> [f32; N] {
    let first = sorted[0].1;
    let last = sorted[sorted.len() - 1].1;

    if t <= first.position {
        return first.components;
    }
    if t >= last.position {
        return last.components;
    }

    // first < t < last, so 1 <= hi <= len - 1 and the span is non-zero.
    let hi = sorted.partition_point(|(_, p)| p.position <= t);
    let a = sorted[hi - 1].1;
    let b = sorted[hi].1;
    a.lerp_components(b, (t - a.position) / (b.position - a.position))
}

pub(super) fn fill(color: &ColorPoints, opacity: &OpacityPoints, width: usize) -> Vec<Rgba8> {
    let color = color.sorted();
    let opacity = opacity.sorted();

    (0..width)
        .map(|i| {
            let t = sample_position(i, width);
            let [a] = evaluate(&opacity, t);
            Rgba8::from_unit(evaluate(&color, t), a)
        })
        .collect()
}
