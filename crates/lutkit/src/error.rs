//! Error types for lutkit.

use thiserror::Error;

use crate::preset::Channel;

/// Failure of a single lutkit call.
///
/// Every error is local to the call that produced it: the owning
/// [`LutSurface`](crate::surface::LutSurface) keeps its previous state and raster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LutError {
    #[error("unknown {channel} preset '{name}'")]
    UnknownPreset { channel: Channel, name: String },

    #[error("invalid control points: {0}")]
    InvalidControlPoints(String),

    #[error("invalid raster width {0}: must be at least 1")]
    InvalidWidth(u32),
}

impl LutError {
    pub(crate) fn unknown(channel: Channel, name: impl Into<String>) -> Self {
        Self::UnknownPreset { channel, name: name.into() }
    }

    pub(crate) fn invalid_points(msg: impl Into<String>) -> Self {
        Self::InvalidControlPoints(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, LutError>;
