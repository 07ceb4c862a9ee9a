//! Seeds preset tables from the `lutkit-presets` catalogs.

use lutkit_presets::{COLOR_PRESETS, OPACITY_PRESETS};

use crate::points::{ColorPoints, OpacityPoints};

use super::table::{ColorPresets, OpacityPresets};

pub(super) fn color_presets() -> ColorPresets {
    COLOR_PRESETS
        .iter()
        .filter_map(|preset| match ColorPoints::from_rows(&preset.stops.to_rows()) {
            Ok(points) => Some((preset.name, points)),
            Err(err) => {
                log::error!("built-in color preset '{}' skipped: {err}", preset.name);
                None
            }
        })
        .collect()
}

pub(super) fn opacity_presets() -> OpacityPresets {
    OPACITY_PRESETS
        .iter()
        .filter_map(|preset| match OpacityPoints::from_rows(&preset.stops.to_rows()) {
            Ok(points) => Some((preset.name, points)),
            Err(err) => {
                log::error!("built-in opacity preset '{}' skipped: {err}", preset.name);
                None
            }
        })
        .collect()
}
