use crate::error::{LutError, Result};
use crate::points::ControlPointSet;

use super::Channel;
use super::builtin;
use super::table::PresetTable;

/// All presets of one channel family: a fixed built-in layer plus a user layer.
///
/// Lookups consult the user layer first, so a user preset may shadow a
/// built-in of the same name.
#[derive(Debug, Clone)]
pub struct PresetCatalog<const N: usize> {
    channel: Channel,
    builtin: PresetTable<N>,
    user: PresetTable<N>,
}

impl<const N: usize> PresetCatalog<N> {
    fn new(channel: Channel, builtin: PresetTable<N>) -> Self {
        debug_assert_eq!(channel.arity(), N, "channel arity mismatch");
        Self { channel, builtin, user: PresetTable::new() }
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Stores a user preset; an existing user preset of that name is replaced.
    pub fn register(&mut self, name: impl Into<String>, points: ControlPointSet<N>) {
        let name = name.into();
        if self.user.insert(name.as_str(), points).is_some() {
            log::debug!("{} preset '{name}' overwritten", self.channel);
        }
    }

    /// Replaces the whole user layer; built-ins are untouched.
    pub fn replace_user(&mut self, table: PresetTable<N>) {
        log::debug!("{} user catalog replaced ({} presets)", self.channel, table.len());
        self.user.replace_all(table);
    }

    pub fn resolve(&self, name: &str) -> Result<&ControlPointSet<N>> {
        self.user
            .get(name)
            .or_else(|| self.builtin.get(name))
            .ok_or_else(|| LutError::unknown(self.channel, name))
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.user.contains(name) || self.builtin.contains(name)
    }

    /// Built-in names in catalog order, then user names not already listed.
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.builtin.names().collect();
        out.extend(self.user.names().filter(|n| !self.builtin.contains(n)));
        out
    }
}

/// Color and opacity preset catalogs.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    color: PresetCatalog<3>,
    opacity: PresetCatalog<1>,
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetRegistry {
    /// Registry seeded with the built-in catalogs and empty user layers.
    pub fn new() -> Self {
        Self {
            color: PresetCatalog::new(Channel::Color, builtin::color_presets()),
            opacity: PresetCatalog::new(Channel::Opacity, builtin::opacity_presets()),
        }
    }

    /// Registry with no built-ins at all.
    pub fn empty() -> Self {
        Self {
            color: PresetCatalog::new(Channel::Color, PresetTable::new()),
            opacity: PresetCatalog::new(Channel::Opacity, PresetTable::new()),
        }
    }

    #[inline]
    pub fn color(&self) -> &PresetCatalog<3> {
        &self.color
    }

    #[inline]
    pub fn color_mut(&mut self) -> &mut PresetCatalog<3> {
        &mut self.color
    }

    #[inline]
    pub fn opacity(&self) -> &PresetCatalog<1> {
        &self.opacity
    }

    #[inline]
    pub fn opacity_mut(&mut self) -> &mut PresetCatalog<1> {
        &mut self.opacity
    }

    /// Replaces the user color catalog wholesale; built-ins are untouched.
    pub fn replace_color_presets(&mut self, table: PresetTable<3>) {
        self.color.replace_user(table);
    }

    /// Replaces the user opacity catalog wholesale; built-ins are untouched.
    pub fn replace_opacity_presets(&mut self, table: PresetTable<1>) {
        self.opacity.replace_user(table);
    }

    pub fn list_names(&self, channel: Channel) -> Vec<&str> {
        match channel {
            Channel::Color => self.color.names(),
            Channel::Opacity => self.opacity.names(),
        }
    }

    pub fn contains(&self, channel: Channel, name: &str) -> bool {
        match channel {
            Channel::Color => self.color.contains(name),
            Channel::Opacity => self.opacity.contains(name),
        }
    }
}
