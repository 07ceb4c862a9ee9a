//! Banded mode: every color stop owns a contiguous, un-blended segment.

use crate::points::{ColorPoints, OpacityPoints};

use super::color::Rgba8;
use super::sample_position;

/// Half-open `[from, to)` band owned by one color stop.
///
/// [`contains`](Self::contains) never matches position 1; rasterization
/// assigns that position to the last band of the set.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: f32,
    pub to: f32,
    /// Authored index of the owning color stop (and of its paired opacity stop).
    pub stop: usize,
}

impl Segment {
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.from && t < self.to
    }
}

/// Bands centered on each color stop, meeting at midpoints between neighbours.
///
/// Bands follow ascending position; the first starts at 0 and the last ends
/// at 1, so together they partition the unit interval.
pub fn discrete_segments(color: &ColorPoints) -> Vec<Segment> {
    let sorted = color.sorted();
    let n = sorted.len();

    let mut segments: Vec<Segment> = (0..n)
        .map(|k| {
            let p = sorted[k].1.position;
            let prev = if k == 0 { 0.0 } else { sorted[k - 1].1.position };
            let next = if k + 1 == n { 1.0 } else { sorted[k + 1].1.position };
            Segment {
                from: prev + (p - prev) / 2.0,
                to: p + (next - p) / 2.0,
                stop: sorted[k].0,
            }
        })
        .collect();

    segments[0].from = 0.0;
    segments[n - 1].to = 1.0;
    segments
}

pub(super) fn fill(color: &ColorPoints, opacity: &OpacityPoints, width: usize) -> Vec<Rgba8> {
    let segments = discrete_segments(color);
    let last = segments.len() - 1;
    let mut k = 0;

    (0..width)
        .map(|i| {
            let t = sample_position(i, width);
            // Samples ascend, so the owning band never moves backwards.
            while k < last && t >= segments[k].to {
                k += 1;
            }
            let stop = segments[k].stop;
            let rgb = color.points()[stop].components;
            let a = opacity.points().get(stop).map_or(1.0, |p| p.value());
            Rgba8::from_unit(rgb, a)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stops_split_at_quarter_points() {
        let color = ColorPoints::from_rows(&[
            [0.0, 1.0, 0.0, 0.0],
            [0.5, 0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        let segments = discrete_segments(&color);
        assert_eq!(
            segments,
            [
                Segment { from: 0.0, to: 0.25, stop: 0 },
                Segment { from: 0.25, to: 0.75, stop: 1 },
                Segment { from: 0.75, to: 1.0, stop: 2 },
            ]
        );
    }

    #[test]
    fn segments_partition_unit_interval() {
        let color = ColorPoints::from_rows(&[
            [0.1, 0.0, 0.0, 0.0],
            [0.3, 0.0, 0.0, 0.0],
            [0.35, 0.0, 0.0, 0.0],
            [0.9, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        let segments = discrete_segments(&color);
        assert_eq!(segments[0].from, 0.0);
        assert_eq!(segments[segments.len() - 1].to, 1.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        for i in 0..=1000 {
            let t = i as f32 / 1000.0;
            let owners = segments.iter().filter(|s| s.contains(t)).count();
            let expected = if t == 1.0 { 0 } else { 1 };
            assert_eq!(owners, expected, "t = {t}");
        }
    }

    #[test]
    fn position_one_rasterizes_with_last_band() {
        let color = ColorPoints::from_rows(&[
            [0.0, 0.0, 0.0, 0.0],
            [0.4, 1.0, 0.0, 0.0],
            [0.6, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        let segments = discrete_segments(&color);
        assert!(!segments[2].contains(1.0));
        assert!(segments[2].contains(0.999));

        let samples = fill(&color, &OpacityPoints::constant([1.0]), 2);
        assert_eq!(samples[1], Rgba8::new(0, 0, 255, 255));
    }

    #[test]
    fn boundary_sample_belongs_to_upper_segment() {
        let color = ColorPoints::from_rows(&[[0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]]).unwrap();
        let opacity = OpacityPoints::constant([1.0]);
        // width 3 puts the middle sample exactly on the 0.5 boundary.
        let samples = fill(&color, &opacity, 3);
        assert_eq!(samples[1].to_array()[..3], [255, 255, 255]);
    }

    #[test]
    fn unsorted_stops_keep_authored_opacity_pairing() {
        // Authored order: white at 1.0 first, black at 0.0 second.
        let color = ColorPoints::from_rows(&[[1.0, 1.0, 1.0, 1.0], [0.0, 0.0, 0.0, 0.0]]).unwrap();
        let opacity = OpacityPoints::from_rows(&[[0.0, 0.2], [1.0, 0.6]]).unwrap();
        let segments = discrete_segments(&color);
        assert_eq!(segments[0].stop, 1);
        assert_eq!(segments[1].stop, 0);

        let samples = fill(&color, &opacity, 4);
        // Low band is black with authored opacity stop 1.
        assert_eq!(samples[0], Rgba8::new(0, 0, 0, 153));
        // High band is white with authored opacity stop 0.
        assert_eq!(samples[3], Rgba8::new(255, 255, 255, 51));
    }
}
