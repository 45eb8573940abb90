// Item system module
//
// This module provides the core item model, including:
// - Item type descriptors and the catalog that holds them
// - The runtime Item entity with its container/teleport variants
// - The decay transform protocol
// - Look-description text generation

pub mod catalog;
pub mod container;
pub mod describe;
pub mod entity;
pub mod transform;
pub mod types;

// Re-export main types for convenient access
pub use catalog::ItemCatalog;
pub use container::Container;
pub use entity::{CountSlot, DEFAULT_THROW_RANGE, Item, ItemPayload, Teleport};
pub use types::{AmmoKind, ItemType, ItemTypeId, ShootKind, WeaponKind, slot};
