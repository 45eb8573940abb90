//! Item-to-node serialization
//!
//! Converts items to and from [`ItemNode`] elements. Only state that cannot
//! be re-derived from the type catalog is persisted: the type id, the count
//! attribute when it carries information, and a teleporter's destination.
//!
//! Two long-standing quirks of the format are kept on purpose (and pinned by
//! the tests below): a fluid container's level is never written, and a
//! `count` attribute on a non-stackable type always loads as a charge; the
//! fluid-container flag is not consulted on read.

use crate::item::{CountSlot, Item, ItemCatalog, ItemTypeId};
use crate::position::Position;

use super::node::ItemNode;

impl Item {
    /// Serializes this item to an attribute node
    ///
    /// Always emits `id`. Emits `count` in exactly two cases: the item is
    /// stackable (stack size), or it is not stackable and holds a nonzero
    /// charge. Teleporters additionally emit `destx`/`desty`/`destz`.
    pub fn serialize(&self, types: &ItemCatalog) -> ItemNode {
        let mut node = ItemNode::new();
        node.set_attr("id", self.type_id());

        if self.is_stackable(types) {
            node.set_attr("count", self.stack_count());
        } else if self.charge_count() > 0 {
            node.set_attr("count", self.charge_count());
        }

        if let Some(teleport) = self.as_teleport() {
            node.set_attr("destx", teleport.destination.x);
            node.set_attr("desty", teleport.destination.y);
            node.set_attr("destz", teleport.destination.z);
        }

        node
    }

    /// Restores this item's persisted fields from an attribute node
    ///
    /// Reads `id` unconditionally (a missing attribute yields type id 0,
    /// per the lenient parsing rules). Reads `count` only when present:
    /// into the stack slot if the current type is stackable, into the
    /// charge slot otherwise. Teleporters read their destination, with
    /// absent coordinates defaulting to 0.
    pub fn unserialize(&mut self, types: &ItemCatalog, node: &ItemNode) {
        self.set_type_id(ItemTypeId(node.int_attr("id") as u16));

        if node.has_attr("count") {
            let count = node.int_attr("count") as u8;
            if self.is_stackable(types) {
                self.set_count_slot(CountSlot::Stack(count));
            } else {
                self.set_count_slot(CountSlot::Charge(count));
            }
        }

        if let Some(teleport) = self.as_teleport_mut() {
            teleport.destination = Position::new(
                node.int_attr("destx") as i32,
                node.int_attr("desty") as i32,
                node.int_attr("destz") as i32,
            );
        }
    }
}
