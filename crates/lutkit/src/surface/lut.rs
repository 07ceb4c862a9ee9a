use std::num::NonZeroU32;

use crate::error::{LutError, Result};
use crate::points::{ColorPoints, OpacityPoints};
use crate::preset::{Channel, ColorPresets, OpacityPresets, PresetRegistry};
use crate::raster::{render, Raster, RasterMode};

use super::config::{LutConfig, DEFAULT_COLOR_PRESET, DEFAULT_OPACITY_PRESET};
use super::draw::{paint, DrawSurface, HeadlessSurface};
use super::state::LutState;

/// Transfer-function editor state with its rasterized lookup table.
///
/// Every transition either fails and leaves everything as it was, or
/// commits a new [`LutState`], rasterizes it, repaints the injected surface,
/// and returns the fresh raster. There is no partially-applied state.
///
/// Single writer: wrap in a lock if shared across threads.
///
/// ```
/// use lutkit::surface::{LutConfig, LutSurface};
///
/// let mut lut = LutSurface::headless(LutConfig::default().with_width(4)).unwrap();
/// let raster = lut.set_color_preset("gold").unwrap();
/// assert_eq!(raster.width(), 4);
/// assert!(lut.set_color_preset("no such preset").is_err());
/// assert_eq!(lut.color_preset(), "gold");
/// ```
#[derive(Debug)]
pub struct LutSurface<S: DrawSurface = HeadlessSurface> {
    surface: S,
    registry: PresetRegistry,
    state: LutState,
    /// Selection restored when a catalog replacement drops the active preset.
    seed: (String, String),
    color: ColorPoints,
    opacity: OpacityPoints,
    raster: Raster,
}

impl LutSurface<HeadlessSurface> {
    /// Surface-less LUT; only the raster is produced.
    pub fn headless(config: LutConfig) -> Result<Self> {
        Self::new(HeadlessSurface, config)
    }
}

impl<S: DrawSurface> LutSurface<S> {
    /// Builds the LUT, rasterizes the configured selection and paints `surface`.
    ///
    /// Fails with [`LutError::InvalidWidth`] for a zero width and
    /// [`LutError::UnknownPreset`] when a configured name does not resolve.
    pub fn new(surface: S, config: LutConfig) -> Result<Self> {
        let width = NonZeroU32::new(config.width).ok_or(LutError::InvalidWidth(config.width))?;

        let mut registry = PresetRegistry::new();
        if let Some(points) = config.color_points {
            registry.color_mut().register(config.color_preset.as_str(), points);
        }
        if let Some(points) = config.opacity_points {
            registry.opacity_mut().register(config.opacity_preset.as_str(), points);
        }

        let color = registry.color().resolve(&config.color_preset)?.clone();
        let opacity = registry.opacity().resolve(&config.opacity_preset)?.clone();

        let state = LutState {
            color_preset: config.color_preset,
            opacity_preset: config.opacity_preset,
            mode: RasterMode::from_discrete(config.discrete),
            width,
        };
        let raster = render(&color, &opacity, state.mode, width);

        log::debug!(
            "lut surface: color '{}', opacity '{}', {:?}, width {}",
            state.color_preset,
            state.opacity_preset,
            state.mode,
            width
        );

        let mut lut = Self {
            surface,
            registry,
            seed: (state.color_preset.clone(), state.opacity_preset.clone()),
            state,
            color,
            opacity,
            raster,
        };
        paint(&lut.raster, &mut lut.surface);
        Ok(lut)
    }

    // ── transitions ───────────────────────────────────────────────────────

    /// Selects the color preset `name`.
    pub fn set_color_preset(&mut self, name: &str) -> Result<&Raster> {
        let color = match self.registry.color().resolve(name) {
            Ok(points) => points.clone(),
            Err(err) => {
                log::warn!("{err}; keeping '{}'", self.state.color_preset);
                return Err(err);
            }
        };
        log::debug!("color preset '{}' -> '{name}'", self.state.color_preset);
        self.state.color_preset = name.to_owned();
        self.color = color;
        Ok(self.refresh())
    }

    /// Selects the opacity preset `name`.
    pub fn set_opacity_preset(&mut self, name: &str) -> Result<&Raster> {
        let opacity = match self.registry.opacity().resolve(name) {
            Ok(points) => points.clone(),
            Err(err) => {
                log::warn!("{err}; keeping '{}'", self.state.opacity_preset);
                return Err(err);
            }
        };
        log::debug!("opacity preset '{}' -> '{name}'", self.state.opacity_preset);
        self.state.opacity_preset = name.to_owned();
        self.opacity = opacity;
        Ok(self.refresh())
    }

    pub fn set_discrete(&mut self, discrete: bool) -> &Raster {
        self.set_mode(RasterMode::from_discrete(discrete))
    }

    pub fn set_mode(&mut self, mode: RasterMode) -> &Raster {
        log::debug!("raster mode {:?} -> {mode:?}", self.state.mode);
        self.state.mode = mode;
        self.refresh()
    }

    /// Adds or overwrites one user color preset.
    ///
    /// If `name` is the active color preset the raster picks up the new points;
    /// otherwise the current raster is returned and nothing is repainted.
    pub fn register_color_preset(&mut self, name: &str, points: ColorPoints) -> &Raster {
        let active = name == self.state.color_preset;
        if active {
            self.color = points.clone();
        }
        self.registry.color_mut().register(name, points);
        if active { self.refresh() } else { &self.raster }
    }

    /// Adds or overwrites one user opacity preset.
    ///
    /// If `name` is the active opacity preset the raster picks up the new points;
    /// otherwise the current raster is returned and nothing is repainted.
    pub fn register_opacity_preset(&mut self, name: &str, points: OpacityPoints) -> &Raster {
        let active = name == self.state.opacity_preset;
        if active {
            self.opacity = points.clone();
        }
        self.registry.opacity_mut().register(name, points);
        if active { self.refresh() } else { &self.raster }
    }

    /// Replaces the whole user color catalog; built-ins stay available.
    ///
    /// If the active name no longer resolves, the configured color preset
    /// (or the built-in default) is selected instead.
    pub fn register_color_presets(&mut self, table: ColorPresets) -> &Raster {
        self.registry.replace_color_presets(table);
        self.reselect_color();
        self.refresh()
    }

    /// Replaces the whole user opacity catalog; built-ins stay available.
    ///
    /// If the active name no longer resolves, the configured opacity preset
    /// (or the built-in default) is selected instead.
    pub fn register_opacity_presets(&mut self, table: OpacityPresets) -> &Raster {
        self.registry.replace_opacity_presets(table);
        self.reselect_opacity();
        self.refresh()
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Raster of the current state; never a partial update.
    #[inline]
    pub fn current_raster(&self) -> &Raster {
        &self.raster
    }

    #[inline]
    pub fn state(&self) -> &LutState {
        &self.state
    }

    #[inline]
    pub fn color_preset(&self) -> &str {
        self.state.color_preset()
    }

    #[inline]
    pub fn opacity_preset(&self) -> &str {
        self.state.opacity_preset()
    }

    #[inline]
    pub fn mode(&self) -> RasterMode {
        self.state.mode()
    }

    #[inline]
    pub fn is_discrete(&self) -> bool {
        self.state.is_discrete()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.state.width()
    }

    /// Points behind the active color preset.
    #[inline]
    pub fn color_points(&self) -> &ColorPoints {
        &self.color
    }

    /// Points behind the active opacity preset.
    #[inline]
    pub fn opacity_points(&self) -> &OpacityPoints {
        &self.opacity
    }

    /// Preset names for `channel` in menu order.
    pub fn available_preset_names(&self, channel: Channel) -> Vec<&str> {
        self.registry.list_names(channel)
    }

    #[inline]
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn refresh(&mut self) -> &Raster {
        self.raster = render(&self.color, &self.opacity, self.state.mode, self.state.width);
        paint(&self.raster, &mut self.surface);
        &self.raster
    }

    /// Re-resolves the active color preset after a catalog change.
    fn reselect_color(&mut self) {
        let catalog = self.registry.color();
        let candidates = [self.state.color_preset.as_str(), self.seed.0.as_str(), DEFAULT_COLOR_PRESET];
        let found = candidates
            .into_iter()
            .find_map(|name| Some((name.to_owned(), catalog.resolve(name).ok()?.clone())));
        match found {
            Some((name, points)) => {
                if name != self.state.color_preset {
                    log::warn!("color preset '{}' was removed; using '{name}'", self.state.color_preset);
                }
                self.color = points;
                self.state.color_preset = name;
            }
            None => log::warn!(
                "no color preset resolves; keeping the points of '{}'",
                self.state.color_preset
            ),
        }
    }

    /// Re-resolves the active opacity preset after a catalog change.
    fn reselect_opacity(&mut self) {
        let catalog = self.registry.opacity();
        let candidates =
            [self.state.opacity_preset.as_str(), self.seed.1.as_str(), DEFAULT_OPACITY_PRESET];
        let found = candidates
            .into_iter()
            .find_map(|name| Some((name.to_owned(), catalog.resolve(name).ok()?.clone())));
        match found {
            Some((name, points)) => {
                if name != self.state.opacity_preset {
                    log::warn!(
                        "opacity preset '{}' was removed; using '{name}'",
                        self.state.opacity_preset
                    );
                }
                self.opacity = points;
                self.state.opacity_preset = name;
            }
            None => log::warn!(
                "no opacity preset resolves; keeping the points of '{}'",
                self.state.opacity_preset
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{rasterize, Rgba8};

    fn lut(width: u32) -> LutSurface {
        LutSurface::headless(LutConfig::default().with_width(width)).unwrap()
    }

    fn rgba(raster: &Raster) -> Vec<[u8; 4]> {
        raster.iter().map(Rgba8::to_array).collect()
    }

    /// 1×1 surface that counts pixel writes.
    #[derive(Debug, Default)]
    struct CountingSurface {
        writes: usize,
    }

    impl DrawSurface for CountingSurface {
        fn dimensions(&self) -> (u32, u32) {
            (1, 1)
        }

        fn put_pixel(&mut self, _x: u32, _y: u32, _rgba: [u8; 4]) {
            self.writes += 1;
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn defaults_seed_black_to_white_with_linear_opacity() {
        let lut = lut(4);
        assert_eq!(lut.color_preset(), "default");
        assert_eq!(lut.opacity_preset(), "linear");
        assert!(!lut.is_discrete());
        assert_eq!(
            rgba(lut.current_raster()),
            [[0, 0, 0, 0], [85, 85, 85, 85], [170, 170, 170, 170], [255, 255, 255, 255]]
        );
    }

    #[test]
    fn default_width_is_256() {
        let lut = LutSurface::headless(LutConfig::default()).unwrap();
        assert_eq!(lut.width(), 256);
        assert_eq!(lut.current_raster().width(), 256);
    }

    #[test]
    fn zero_width_rejected() {
        let err = LutSurface::headless(LutConfig::default().with_width(0)).unwrap_err();
        assert_eq!(err, LutError::InvalidWidth(0));
    }

    #[test]
    fn unknown_configured_preset_rejected() {
        let err = LutSurface::headless(LutConfig::default().with_opacity_preset("gold")).unwrap_err();
        assert_eq!(err, LutError::UnknownPreset { channel: Channel::Opacity, name: "gold".into() });
    }

    #[test]
    fn configured_points_become_initial_selection() {
        let color = ColorPoints::from_rows(&[[0.0, 1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 1.0]]).unwrap();
        let config = LutConfig::default().with_width(2).with_color_points("custom", color);
        let lut = LutSurface::headless(config).unwrap();
        assert_eq!(lut.color_preset(), "custom");
        assert_eq!(rgba(lut.current_raster()), [[255, 0, 0, 0], [0, 0, 255, 255]]);
        assert!(lut.available_preset_names(Channel::Color).contains(&"custom"));
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn unknown_color_preset_leaves_raster_unchanged() {
        let mut lut = lut(16);
        lut.set_color_preset("spectrum").unwrap();
        let before = lut.current_raster().clone();

        let err = lut.set_color_preset("nonexistent-name").unwrap_err();
        assert_eq!(
            err,
            LutError::UnknownPreset { channel: Channel::Color, name: "nonexistent-name".into() }
        );
        assert_eq!(lut.current_raster(), &before);
        assert_eq!(lut.color_preset(), "spectrum");
    }

    #[test]
    fn unknown_opacity_preset_leaves_state_unchanged() {
        let mut lut = lut(16);
        let before = lut.state().clone();
        assert!(lut.set_opacity_preset("default").is_err());
        assert_eq!(lut.state(), &before);
    }

    #[test]
    fn selection_matches_direct_rasterization() {
        let mut lut = lut(64);
        let raster = lut.set_opacity_preset("bandpass").unwrap().clone();
        let registry = PresetRegistry::new();
        let expected = rasterize(
            registry.color().resolve("default").unwrap(),
            registry.opacity().resolve("bandpass").unwrap(),
            RasterMode::Continuous,
            64,
        )
        .unwrap();
        assert_eq!(raster, expected);
    }

    #[test]
    fn registered_preset_round_trips() {
        let mut lut = lut(32);
        let points = ColorPoints::from_rows(&[
            [0.0, 0.2, 0.4, 0.6],
            [0.3, 1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0, 0.5],
        ])
        .unwrap();
        lut.register_color_preset("mine", points.clone());
        let raster = lut.set_color_preset("mine").unwrap().clone();

        let expected = rasterize(&points, lut.opacity_points(), RasterMode::Continuous, 32).unwrap();
        assert_eq!(raster, expected);
    }

    #[test]
    fn discrete_toggle_round_trips() {
        let mut lut = lut(4);
        let continuous = lut.current_raster().clone();
        assert_eq!(
            rgba(lut.set_discrete(true)),
            [[0, 0, 0, 0], [0, 0, 0, 0], [255, 255, 255, 255], [255, 255, 255, 255]]
        );
        assert!(lut.is_discrete());
        assert_eq!(lut.set_discrete(false), &continuous);
    }

    // ── catalogs ──────────────────────────────────────────────────────────

    #[test]
    fn overwriting_active_preset_rerasterizes() {
        let mut lut = lut(4);
        lut.register_opacity_preset("mask", OpacityPoints::constant([0.0]));
        lut.set_opacity_preset("mask").unwrap();
        assert!(lut.current_raster().iter().all(|px| px.a == 0));

        lut.register_opacity_preset("mask", OpacityPoints::constant([1.0]));
        assert!(lut.current_raster().iter().all(|px| px.a == 255));
        assert_eq!(lut.opacity_preset(), "mask");
    }

    #[test]
    fn bulk_replacement_does_not_merge() {
        let mut lut = lut(8);
        lut.register_color_preset("first", ColorPoints::constant([1.0, 0.0, 0.0]));
        lut.register_color_presets(
            ColorPresets::new().with("second", ColorPoints::constant([0.0, 1.0, 0.0])),
        );
        let names = lut.available_preset_names(Channel::Color);
        assert!(names.contains(&"second"));
        assert!(!names.contains(&"first"));
        assert!(names.contains(&"muscle_bone"));
        assert!(lut.set_color_preset("first").is_err());
        assert!(lut.set_color_preset("second").is_ok());
    }

    #[test]
    fn bulk_replacement_falls_back_when_active_preset_disappears() {
        let mut lut = lut(4);
        lut.register_opacity_presets(OpacityPresets::new().with("solid", OpacityPoints::constant([1.0])));
        lut.set_opacity_preset("solid").unwrap();
        assert!(lut.current_raster().iter().all(|px| px.a == 255));

        lut.register_opacity_presets(OpacityPresets::new());
        assert_eq!(lut.opacity_preset(), "linear");
        assert_eq!(lut.current_raster().sample(0).map(|px| px.a), Some(0));
        assert_eq!(lut.current_raster().sample(3).map(|px| px.a), Some(255));
    }

    #[test]
    fn bulk_replacement_falls_back_to_configured_preset() {
        let config = LutConfig::default().with_width(2).with_opacity_preset("flat");
        let mut lut = LutSurface::headless(config).unwrap();
        lut.register_opacity_presets(OpacityPresets::new().with("solid", OpacityPoints::constant([1.0])));
        lut.set_opacity_preset("solid").unwrap();

        lut.register_opacity_presets(OpacityPresets::new());
        assert_eq!(lut.opacity_preset(), "flat");
        assert_eq!(lut.current_raster().sample(1).map(|px| px.a), Some(255));
        assert_eq!(lut.opacity_points().len(), 2);
    }

    #[test]
    fn bulk_replacement_keeps_surviving_active_preset() {
        let mut lut = lut(4);
        lut.register_color_presets(ColorPresets::new().with("teal", ColorPoints::constant([0.0, 0.5, 0.5])));
        lut.set_color_preset("teal").unwrap();
        lut.register_color_presets(ColorPresets::new().with("teal", ColorPoints::constant([0.0, 1.0, 1.0])));
        assert_eq!(lut.color_preset(), "teal");
        assert!(lut.current_raster().iter().all(|px| px.g == 255 && px.b == 255));
    }

    #[test]
    fn registering_inactive_preset_skips_repaint() {
        let mut lut = LutSurface::new(CountingSurface::default(), LutConfig::default().with_width(4)).unwrap();
        let before = lut.current_raster().clone();
        let writes = lut.surface().writes;

        let raster = lut.register_color_preset("unused", ColorPoints::constant([1.0, 0.0, 0.0]));
        assert_eq!(raster, &before);
        assert_eq!(lut.surface().writes, writes);

        lut.register_color_preset("default", ColorPoints::constant([1.0, 0.0, 0.0]));
        assert_eq!(lut.surface().writes, writes + 1);
        assert!(lut.current_raster().iter().all(|px| px.r == 255 && px.g == 0));
    }

    #[test]
    fn preset_names_keep_registration_order() {
        let mut lut = lut(4);
        lut.register_color_preset("zebra", ColorPoints::constant([0.0, 0.0, 0.0]));
        lut.register_color_preset("apple", ColorPoints::constant([1.0, 1.0, 1.0]));
        let names = lut.available_preset_names(Channel::Color);
        assert_eq!(&names[..2], ["default", "spectrum"]);
        assert_eq!(&names[names.len() - 2..], ["zebra", "apple"]);
    }

    // ── drawing surface ───────────────────────────────────────────────────

    #[test]
    fn surface_repainted_on_every_transition() {
        let image = image::RgbaImage::new(4, 2);
        let mut lut = LutSurface::new(image, LutConfig::default().with_width(4)).unwrap();
        assert_eq!(lut.surface().get_pixel(1, 1).0, [85, 85, 85, 85]);

        lut.set_opacity_preset("lowpass").unwrap();
        assert_eq!(lut.surface().get_pixel(0, 0).0, [0, 0, 0, 204]);

        let _ = lut.set_color_preset("missing");
        assert_eq!(lut.surface().get_pixel(0, 0).0, [0, 0, 0, 204]);

        let image = lut.into_surface();
        assert_eq!(image.get_pixel(3, 1).0, [255, 255, 255, 0]);
    }

    #[test]
    fn borrowed_surface_is_painted() {
        let mut image = image::RgbaImage::new(2, 1);
        {
            let mut lut = LutSurface::new(&mut image, LutConfig::default().with_width(2)).unwrap();
            lut.set_color_preset("red").unwrap();
        }
        assert_eq!(image.get_pixel(0, 0).0, [191, 0, 0, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }
}
