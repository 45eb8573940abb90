//! Decay transform protocol
//!
//! Items whose type descriptor names a decay successor are periodically
//! replaced by a fresh item of that successor type. The transform builds the
//! replacement; the caller decides what to do with the husk.

use super::catalog::ItemCatalog;
use super::entity::Item;

impl Item {
    /// Produces this item's decay successor, or None if the type does not
    /// decay
    ///
    /// The successor is factory-built from the descriptor's `decay_to` id
    /// and takes over the source's world position. If both the source and
    /// the successor are containers, every child moves to the successor,
    /// front-to-back order preserved; if the source is a container but the
    /// successor is not, the children simply stay behind on the source.
    ///
    /// The source itself is not destroyed or otherwise changed beyond the
    /// child migration; disposing of it is the caller's responsibility.
    pub fn transform(&mut self, types: &ItemCatalog) -> Option<Item> {
        let decay_to = types.get(self.type_id()).decay_to;
        if decay_to.0 == 0 {
            return None;
        }

        let mut successor = Item::create_simple(types, decay_to);
        successor.set_position(self.position());

        if let Some(to) = successor.as_container_mut() {
            if let Some(from) = self.as_container_mut() {
                for child in from.drain_items() {
                    to.add_item(child);
                }
            }
        }

        Some(successor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemType, ItemTypeId};
    use crate::position::Position;

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        // Fresh crate decays into a worn crate, both containers
        catalog.register(ItemType {
            is_container: true,
            decay_to: ItemTypeId(201),
            ..ItemType::new(ItemTypeId(200), "crate")
        });
        catalog.register(ItemType {
            is_container: true,
            ..ItemType::new(ItemTypeId(201), "worn crate")
        });
        // Container that decays into a plain item
        catalog.register(ItemType {
            is_container: true,
            decay_to: ItemTypeId(301),
            ..ItemType::new(ItemTypeId(202), "ice chest")
        });
        catalog.register(ItemType {
            decay_to: ItemTypeId(301),
            ..ItemType::new(ItemTypeId(300), "torch")
        });
        catalog.register(ItemType::new(ItemTypeId(301), "burnt torch"));
        catalog.register(ItemType::new(ItemTypeId(302), "apple"));
        catalog
    }

    #[test]
    fn test_no_successor_yields_none() {
        let types = catalog();
        let mut item = Item::create_simple(&types, ItemTypeId(301));
        assert!(item.transform(&types).is_none());
    }

    #[test]
    fn test_successor_takes_type_and_position() {
        let types = catalog();
        let mut torch = Item::create_simple(&types, ItemTypeId(300));
        torch.set_position(Position::new(10, 20, 7));

        let burnt = torch.transform(&types).unwrap();
        assert_eq!(burnt.type_id(), ItemTypeId(301));
        assert_eq!(burnt.position(), Position::new(10, 20, 7));
    }

    #[test]
    fn test_container_children_migrate_in_order() {
        let types = catalog();
        let mut crate_item = Item::create_simple(&types, ItemTypeId(200));
        {
            let inside = crate_item.as_container_mut().unwrap();
            inside.add_item(Item::create_simple(&types, ItemTypeId(300)));
            inside.add_item(Item::create_simple(&types, ItemTypeId(301)));
            inside.add_item(Item::create_simple(&types, ItemTypeId(302)));
        }

        let worn = crate_item.transform(&types).unwrap();
        assert_eq!(worn.type_id(), ItemTypeId(201));

        let ids: Vec<ItemTypeId> = worn
            .as_container()
            .unwrap()
            .items()
            .map(|i| i.type_id())
            .collect();
        assert_eq!(
            ids,
            vec![ItemTypeId(300), ItemTypeId(301), ItemTypeId(302)]
        );
        assert!(crate_item.as_container().unwrap().is_empty());
    }

    #[test]
    fn test_children_stay_when_successor_is_not_a_container() {
        let types = catalog();
        let mut chest = Item::create_simple(&types, ItemTypeId(202));
        chest
            .as_container_mut()
            .unwrap()
            .add_item(Item::create_simple(&types, ItemTypeId(302)));

        let melted = chest.transform(&types).unwrap();
        assert!(melted.as_container().is_none());
        assert_eq!(chest.as_container().unwrap().item_count(), 1);
    }
}
