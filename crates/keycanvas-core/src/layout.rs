//! The ordered key collection owned by the layout surface.

use crate::keys::{Key, KeyCategory, KeyId};
use kurbo::Point;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised when building a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("key {0} is already present in the layout")]
    DuplicateKey(KeyId),
}

/// All keys on the surface, keyed by ID, with paint order.
#[derive(Debug, Clone, Default)]
pub struct KeyLayout {
    keys: HashMap<KeyId, Key>,
    /// Insertion order (back to front).
    order: Vec<KeyId>,
}

impl KeyLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the start-up layout: a single "A" letter key at (50, 50).
    pub fn seeded() -> Self {
        let mut layout = Self::new();
        let key = Key::new("A", Point::new(50.0, 50.0), 40.0, 40.0)
            .with_category(KeyCategory::Letter);
        // A fresh layout cannot hold a duplicate.
        let _ = layout.insert(key);
        layout
    }

    /// Add a key on top of the existing ones.
    pub fn insert(&mut self, key: Key) -> Result<(), LayoutError> {
        let id = key.id();
        if self.keys.contains_key(&id) {
            return Err(LayoutError::DuplicateKey(id));
        }
        self.order.push(id);
        self.keys.insert(id, key);
        Ok(())
    }

    /// Get a key by ID.
    pub fn get(&self, id: KeyId) -> Option<&Key> {
        self.keys.get(&id)
    }

    /// Get a mutable reference to a key by ID.
    pub fn get_mut(&mut self, id: KeyId) -> Option<&mut Key> {
        self.keys.get_mut(&id)
    }

    pub fn contains(&self, id: KeyId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Keys in insertion order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.order.iter().filter_map(|id| self.keys.get(id))
    }

    /// Position of a key in paint order.
    pub fn paint_index(&self, id: KeyId) -> Option<usize> {
        self.order.iter().position(|&key_id| key_id == id)
    }

    /// Topmost key containing a surface-local point, by insertion order.
    pub fn key_at(&self, point: Point) -> Option<KeyId> {
        self.order
            .iter()
            .rev()
            .copied()
            .find(|id| self.keys.get(id).is_some_and(|key| key.hit_test(point)))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
