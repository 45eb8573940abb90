//! Game item model
//!
//! The runtime item core of the game: a data-driven type catalog, the item
//! entity with its container and teleporter variants, the decay transform
//! protocol, and attribute-node persistence.
//!
//! # Architecture
//!
//! - [`item`]: type descriptors ([`item::ItemType`]), the
//!   [`item::ItemCatalog`] lookup table, the [`item::Item`] entity and its
//!   factory, decay transforms, and description text
//! - [`position`]: the world coordinate items carry
//! - [`save`]: item-node serialization and the on-disk save manager
//!
//! The catalog is populated once at startup (by the external type loader)
//! and then only shared references are passed around: every derived
//! property of an item is a pure lookup through `&ItemCatalog`, while the
//! item itself stores only its per-instance state: type id, the tagged
//! count slot, position, throw range, and the container/teleport payload.
//!
//! # Example
//!
//! ```
//! use itemsys::item::{Item, ItemCatalog, ItemType, ItemTypeId};
//!
//! let mut types = ItemCatalog::new();
//! types.register(ItemType {
//!     stackable: true,
//!     weight: 0.1,
//!     ..ItemType::new(ItemTypeId(100), "gold coin")
//! });
//!
//! let coins = Item::create(&types, ItemTypeId(100), 50);
//! assert_eq!(coins.item_count_or_subtype(&types), 50);
//! assert!(coins.description(&types).starts_with("You see 50 gold coins."));
//! ```

pub mod item;
pub mod position;
pub mod save;

// Re-export the types almost every caller needs
pub use item::{Item, ItemCatalog, ItemType, ItemTypeId};
pub use position::Position;
pub use save::{ItemNode, SaveManager};
