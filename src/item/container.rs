use super::entity::Item;

/// Ordered collection of items owned by a container item
///
/// Children are kept in insertion order, which is also display and iteration
/// order. Ownership is exclusive: moving a child out of one container and
/// into another is a plain value move, so an item is never reachable from
/// two owners at once.
///
/// Only the minimal surface the item core needs is exposed: append, indexed
/// removal, forward iteration, and an order-preserving drain (used by the
/// decay transform to migrate children wholesale).
#[derive(Debug, Default)]
pub struct Container {
    items: Vec<Item>,
}

impl Container {
    /// Creates a new empty container
    pub fn new() -> Self {
        Container { items: Vec::new() }
    }

    /// Appends an item at the back, taking ownership of it
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, or None if out of range
    ///
    /// Later items shift forward, preserving relative order.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Iterates the children front to back
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Empties the container, yielding the children front to back
    pub fn drain_items(&mut self) -> impl Iterator<Item = Item> + '_ {
        self.items.drain(..)
    }

    /// Number of items directly inside this container
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the container holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemCatalog, ItemType, ItemTypeId};

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        catalog.register(ItemType::new(ItemTypeId(300), "apple"));
        catalog.register(ItemType::new(ItemTypeId(301), "pear"));
        catalog
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let types = catalog();
        let mut container = Container::new();
        container.add_item(Item::create_simple(&types, ItemTypeId(300)));
        container.add_item(Item::create_simple(&types, ItemTypeId(301)));

        let ids: Vec<ItemTypeId> = container.items().map(|i| i.type_id()).collect();
        assert_eq!(ids, vec![ItemTypeId(300), ItemTypeId(301)]);
    }

    #[test]
    fn test_remove_shifts_later_items_forward() {
        let types = catalog();
        let mut container = Container::new();
        container.add_item(Item::create_simple(&types, ItemTypeId(300)));
        container.add_item(Item::create_simple(&types, ItemTypeId(301)));

        let removed = container.remove_item(0).unwrap();
        assert_eq!(removed.type_id(), ItemTypeId(300));
        assert_eq!(container.item_count(), 1);
        assert_eq!(container.items().next().unwrap().type_id(), ItemTypeId(301));
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut container = Container::new();
        assert!(container.remove_item(0).is_none());
    }

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let types = catalog();
        let mut container = Container::new();
        container.add_item(Item::create_simple(&types, ItemTypeId(301)));
        container.add_item(Item::create_simple(&types, ItemTypeId(300)));
        container.add_item(Item::create_simple(&types, ItemTypeId(301)));

        let ids: Vec<ItemTypeId> = container.drain_items().map(|i| i.type_id()).collect();
        assert_eq!(ids, vec![ItemTypeId(301), ItemTypeId(300), ItemTypeId(301)]);
        assert!(container.is_empty());
    }
}
