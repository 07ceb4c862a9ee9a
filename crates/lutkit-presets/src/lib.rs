//! Built-in transfer-function catalogs for **lutkit**.
//!
//! This crate is intentionally dependency-free: it only carries the named
//! color gradients and opacity curves as constant tables, so catalog browsers
//! and other tooling can enumerate them without linking the rasterizer.
//!
//! # Row formats
//!
//! | Family | Sparse row | Sampled entry |
//! |--------|------------|---------------|
//! | color | `[position, r, g, b]` | `[r, g, b]` bytes |
//! | opacity | `[position, a]` | `a` byte |
//!
//! Sampled tables place entry `i` of `n` at position `i / (n - 1)` and map
//! bytes to `[0, 1]` by dividing by 255.
//!
//! # Quick start
//!
//! ```rust
//! use lutkit_presets::{COLOR_PRESETS, color_preset};
//!
//! assert_eq!(COLOR_PRESETS[0].name, "default");
//! let gold = color_preset("gold").unwrap();
//! assert_eq!(gold.stops.to_rows()[0], [0.0, 0.0, 0.0, 0.0]);
//! ```

mod sampled;

use sampled::{LINEAR_FULL, MUSCLE_BONE};

/// Stops of a built-in color gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColorStops {
    /// Hand-authored `[position, r, g, b]` rows.
    Sparse(&'static [[f32; 4]]),
    /// Evenly spaced 8-bit RGB samples.
    Sampled(&'static [[u8; 3]]),
}

/// Stops of a built-in opacity curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OpacityStops {
    /// Hand-authored `[position, a]` rows.
    Sparse(&'static [[f32; 2]]),
    /// Evenly spaced 8-bit alpha samples.
    Sampled(&'static [u8]),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub stops: ColorStops,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OpacityPreset {
    pub name: &'static str,
    pub stops: OpacityStops,
}

#[inline]
fn sample_position(i: usize, n: usize) -> f32 {
    if n <= 1 { 0.0 } else { i as f32 / (n - 1) as f32 }
}

#[inline]
fn unit(byte: u8) -> f32 {
    byte as f32 / 255.0
}

impl ColorStops {
    pub fn len(&self) -> usize {
        match self {
            ColorStops::Sparse(rows) => rows.len(),
            ColorStops::Sampled(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the stops into `[position, r, g, b]` rows in catalog order.
    pub fn to_rows(&self) -> Vec<[f32; 4]> {
        match *self {
            ColorStops::Sparse(rows) => rows.to_vec(),
            ColorStops::Sampled(samples) => samples
                .iter()
                .enumerate()
                .map(|(i, &[r, g, b])| {
                    [sample_position(i, samples.len()), unit(r), unit(g), unit(b)]
                })
                .collect(),
        }
    }
}

impl OpacityStops {
    pub fn len(&self) -> usize {
        match self {
            OpacityStops::Sparse(rows) => rows.len(),
            OpacityStops::Sampled(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expands the stops into `[position, a]` rows in catalog order.
    pub fn to_rows(&self) -> Vec<[f32; 2]> {
        match *self {
            OpacityStops::Sparse(rows) => rows.to_vec(),
            OpacityStops::Sampled(samples) => samples
                .iter()
                .enumerate()
                .map(|(i, &a)| [sample_position(i, samples.len()), unit(a)])
                .collect(),
        }
    }
}

// ── color catalog ─────────────────────────────────────────────────────────

/// Built-in color gradients, in menu order.
pub const COLOR_PRESETS: &[ColorPreset] = &[
    ColorPreset {
        name: "default",
        stops: ColorStops::Sparse(&[[0.0, 0.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]]),
    },
    ColorPreset {
        name: "spectrum",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.0, 0.0],
            [0.1, 0.0, 0.0, 1.0],
            [0.33, 0.0, 1.0, 1.0],
            [0.5, 0.0, 1.0, 0.0],
            [0.66, 1.0, 1.0, 0.0],
            [0.9, 1.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "hot_and_cold",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.0, 1.0],
            [0.15, 0.0, 1.0, 1.0],
            [0.3, 0.0, 1.0, 0.0],
            [0.45, 0.0, 0.0, 0.0],
            [0.5, 0.0, 0.0, 0.0],
            [0.55, 0.0, 0.0, 0.0],
            [0.7, 1.0, 1.0, 0.0],
            [0.85, 1.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "gold",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.0, 0.0],
            [0.13, 0.19, 0.03, 0.0],
            [0.25, 0.39, 0.12, 0.0],
            [0.38, 0.59, 0.26, 0.0],
            [0.50, 0.80, 0.46, 0.08],
            [0.63, 0.99, 0.71, 0.21],
            [0.75, 0.99, 0.88, 0.34],
            [0.88, 0.99, 0.99, 0.48],
            [1.0, 0.90, 0.95, 0.61],
        ]),
    },
    ColorPreset {
        name: "red",
        stops: ColorStops::Sparse(&[
            [0.0, 0.75, 0.0, 0.0],
            [0.5, 1.0, 0.5, 0.0],
            [0.95, 1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "green",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.75, 0.0],
            [0.5, 0.5, 1.0, 0.0],
            [0.95, 1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "blue",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.0, 1.0],
            [0.5, 0.0, 0.5, 1.0],
            [0.95, 0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "walking_dead",
        stops: ColorStops::Sparse(&[[0.0, 0.1, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0]]),
    },
    ColorPreset {
        name: "random",
        stops: ColorStops::Sparse(&[
            [0.0, 0.0, 0.0, 0.0],
            [0.27, 0.18, 0.18, 0.18],
            [0.41, 1.0, 1.0, 1.0],
            [0.7, 1.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]),
    },
    ColorPreset {
        name: "muscle_bone",
        stops: ColorStops::Sampled(&MUSCLE_BONE),
    },
];

// ── opacity catalog ───────────────────────────────────────────────────────

/// Built-in opacity curves, in menu order.
pub const OPACITY_PRESETS: &[OpacityPreset] = &[
    OpacityPreset {
        name: "linear",
        stops: OpacityStops::Sparse(&[[0.0, 0.0], [1.0, 1.0]]),
    },
    OpacityPreset {
        name: "lowpass",
        stops: OpacityStops::Sparse(&[[0.0, 0.8], [0.2, 0.6], [0.3, 0.1], [1.0, 0.0]]),
    },
    OpacityPreset {
        name: "bandpass",
        stops: OpacityStops::Sparse(&[[0.0, 0.0], [0.4, 0.8], [0.6, 0.8], [1.0, 0.0]]),
    },
    OpacityPreset {
        name: "highpass",
        stops: OpacityStops::Sparse(&[[0.0, 0.0], [0.7, 0.1], [0.8, 0.6], [1.0, 0.8]]),
    },
    OpacityPreset {
        name: "flat",
        stops: OpacityStops::Sparse(&[[0.0, 0.7], [1.0, 1.0]]),
    },
    OpacityPreset {
        name: "random",
        stops: OpacityStops::Sparse(&[
            [0.0, 0.0],
            [0.38, 0.0],
            [0.55, 1.0],
            [0.72, 1.0],
            [1.0, 0.05],
        ]),
    },
    OpacityPreset {
        name: "linear_full",
        stops: OpacityStops::Sampled(&LINEAR_FULL),
    },
];

/// Looks up a built-in color gradient by name.
pub fn color_preset(name: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS.iter().find(|p| p.name == name)
}

/// Looks up a built-in opacity curve by name.
pub fn opacity_preset(name: &str) -> Option<&'static OpacityPreset> {
    OPACITY_PRESETS.iter().find(|p| p.name == name)
}
