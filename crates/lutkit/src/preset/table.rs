use crate::points::ControlPointSet;

/// Name → control points, enumerated in insertion order.
///
/// Menus render straight from [`names`](Self::names), so order is part of the
/// contract. Re-inserting an existing name replaces its points but keeps its
/// original slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable<const N: usize> {
    entries: Vec<(String, ControlPointSet<N>)>,
}

pub type ColorPresets = PresetTable<3>;
pub type OpacityPresets = PresetTable<1>;

impl<const N: usize> Default for PresetTable<N> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<const N: usize> PresetTable<N> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, points: ControlPointSet<N>) -> Self {
        self.insert(name, points);
        self
    }

    /// Stores `points` under `name`, returning the points it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        points: ControlPointSet<N>,
    ) -> Option<ControlPointSet<N>> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, points)),
            None => {
                self.entries.push((name, points));
                None
            }
        }
    }

    /// Drops every entry and takes over the entries of `table`, in its order.
    pub fn replace_all(&mut self, table: PresetTable<N>) {
        self.entries = table.entries;
    }

    pub fn get(&self, name: &str) -> Option<&ControlPointSet<N>> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlPointSet<N>)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, const N: usize> FromIterator<(S, ControlPointSet<N>)> for PresetTable<N> {
    fn from_iter<I: IntoIterator<Item = (S, ControlPointSet<N>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, points) in iter {
            table.insert(name, points);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::OpacityPoints;

    fn flat(a: f32) -> OpacityPoints {
        OpacityPoints::constant([a])
    }

    #[test]
    fn names_follow_insertion_order() {
        let table = OpacityPresets::new().with("zeta", flat(0.1)).with("alpha", flat(0.2)).with("mid", flat(0.3));
        assert_eq!(table.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn overwrite_keeps_slot_and_returns_old() {
        let mut table = OpacityPresets::new().with("a", flat(0.1)).with("b", flat(0.2));
        let old = table.insert("a", flat(0.9));
        assert_eq!(old, Some(flat(0.1)));
        assert_eq!(table.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(table.get("a"), Some(&flat(0.9)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_name() {
        let table = OpacityPresets::new().with("a", flat(0.1));
        assert!(table.get("A").is_none());
        assert!(!table.contains("b"));
    }

    #[test]
    fn collect_from_pairs() {
        let table: OpacityPresets = [("x", flat(0.0)), ("y", flat(1.0)), ("x", flat(0.5))].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x"), Some(&flat(0.5)));
    }

    #[test]
    fn replace_all_discards_previous_entries() {
        let mut table = OpacityPresets::new().with("old", flat(0.1));
        table.replace_all(OpacityPresets::new().with("new", flat(0.4)).with("newer", flat(0.6)));
        assert_eq!(table.names().collect::<Vec<_>>(), ["new", "newer"]);
        assert!(!table.contains("old"));
    }
}
