use std::collections::BTreeMap;

use crate::types::{clamp_layer, Layer, WindowId, MAX_LAYER, MIN_LAYER};

/// Window id to layer association
#[derive(Clone, Debug, Default)]
pub struct LayerTable {
    layers: BTreeMap<WindowId, Layer>,
}

impl LayerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer of a window
    pub fn get(&self, window: WindowId) -> Option<Layer> {
        self.layers.get(&window).copied()
    }

    /// Set a window's layer, clamped into range. Inserts the entry if needed.
    pub fn set(&mut self, window: WindowId, layer: Layer) {
        self.layers.insert(window, clamp_layer(layer));
    }

    /// Step a window up one layer. Returns false at `MAX_LAYER` or for unknown windows.
    pub fn raise(&mut self, window: WindowId) -> bool {
        match self.layers.get_mut(&window) {
            Some(layer) if *layer < MAX_LAYER => {
                *layer += 1;
                true
            }
            _ => false,
        }
    }

    /// Step a window down one layer. Returns false at `MIN_LAYER` or for unknown windows.
    pub fn lower(&mut self, window: WindowId) -> bool {
        match self.layers.get_mut(&window) {
            Some(layer) if *layer > MIN_LAYER => {
                *layer -= 1;
                true
            }
            _ => false,
        }
    }

    /// Drop a window's entry. Missing entries are ignored.
    pub fn remove(&mut self, window: WindowId) -> Option<Layer> {
        self.layers.remove(&window)
    }

    /// Whether a window has an entry
    pub fn contains(&self, window: WindowId) -> bool {
        self.layers.contains_key(&window)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when the table is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Entries in window id order
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, Layer)> + '_ {
        self.layers.iter().map(|(&w, &l)| (w, l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clamps() {
        let mut table = LayerTable::new();
        table.set(1, 0);
        table.set(2, 42);
        assert_eq!(table.get(1), Some(MIN_LAYER));
        assert_eq!(table.get(2), Some(MAX_LAYER));
    }

    #[test]
    fn test_raise_stops_at_max() {
        let mut table = LayerTable::new();
        table.set(1, MAX_LAYER - 1);

        assert!(table.raise(1));
        assert_eq!(table.get(1), Some(MAX_LAYER));
        assert!(!table.raise(1));
        assert_eq!(table.get(1), Some(MAX_LAYER));
    }

    #[test]
    fn test_lower_stops_at_min() {
        let mut table = LayerTable::new();
        table.set(1, MIN_LAYER + 1);

        assert!(table.lower(1));
        assert!(!table.lower(1));
        assert_eq!(table.get(1), Some(MIN_LAYER));
    }

    #[test]
    fn test_unknown_window_untouched() {
        let mut table = LayerTable::new();
        assert!(!table.raise(7));
        assert!(!table.lower(7));
        assert_eq!(table.remove(7), None);
        assert!(table.is_empty());
    }
}
