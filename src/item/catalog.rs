use log::{info, warn};

use super::types::{ItemType, ItemTypeId};

/// Central catalog of all item type descriptors
///
/// This is the single source of truth for what item types exist. All item
/// instances reference it by numeric id; every derived property of an item
/// (flags, combat stats, weight, decay target) is a lookup through here.
///
/// The catalog is populated once at startup by the external type loader and
/// is immutable afterwards. Readers only ever hold `&ItemCatalog`, so it
/// can be shared freely without synchronization.
///
/// # Preconditions
///
/// Lookups do not validate ids. The surrounding system guarantees that every
/// id reaching this core was registered; an out-of-range id is a programming
/// error and panics.
pub struct ItemCatalog {
    types: Vec<ItemType>,
}

impl ItemCatalog {
    /// Creates a new empty catalog
    pub fn new() -> Self {
        ItemCatalog { types: Vec::new() }
    }

    /// Registers a type descriptor at its id
    ///
    /// The table grows with blank descriptors as needed so that ids can be
    /// registered in any order. Re-registering an id replaces the previous
    /// descriptor (the loader treats later data files as overrides).
    pub fn register(&mut self, item_type: ItemType) {
        let index = item_type.id.0 as usize;

        if index >= self.types.len() {
            self.types.resize_with(index + 1, ItemType::default);
        }

        if !self.types[index].name.is_empty() {
            warn!(
                "item type {} ('{}') re-registered as '{}'",
                item_type.id, self.types[index].name, item_type.name
            );
        }

        self.types[index] = item_type;
    }

    /// Registers every descriptor from an iterator
    pub fn register_all(&mut self, types: impl IntoIterator<Item = ItemType>) {
        let before = self.types.len();
        for item_type in types {
            self.register(item_type);
        }
        info!(
            "item catalog extended from {} to {} entries",
            before,
            self.types.len()
        );
    }

    /// Gets the descriptor for a type id
    ///
    /// Pure lookup with no side effects.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never registered. Callers are required to only
    /// pass ids that came from the pre-validated catalog (see the type-level
    /// docs).
    pub fn get(&self, id: ItemTypeId) -> &ItemType {
        &self.types[id.0 as usize]
    }

    /// Returns true if a descriptor exists at this id
    ///
    /// Only the loader should need this; runtime code may assume validity.
    pub fn contains(&self, id: ItemTypeId) -> bool {
        (id.0 as usize) < self.types.len()
    }

    /// Number of slots in the table (highest registered id + 1)
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing was registered yet
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new()
    }
}
