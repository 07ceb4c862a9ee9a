//! Named presets for both channel families.
//!
//! Responsibilities:
//! - insertion-ordered name → control-point tables (`table`)
//! - built-in catalog seeding from `lutkit-presets` (`builtin`)
//! - two-layer lookup, user catalog over built-ins (`registry`)

mod builtin;
mod registry;
mod table;

use std::fmt;

pub use registry::{PresetCatalog, PresetRegistry};
pub use table::{ColorPresets, OpacityPresets, PresetTable};

/// Channel family. Color and opacity presets live in independent namespaces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Three components: r, g, b.
    Color,
    /// One component: a.
    Opacity,
}

impl Channel {
    /// Number of components carried by a stop of this family.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Channel::Color => 3,
            Channel::Opacity => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Color => "color",
            Channel::Opacity => "opacity",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
