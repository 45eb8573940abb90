use crate::position::Position;

use super::catalog::ItemCatalog;
use super::container::Container;
use super::types::{AmmoKind, ItemTypeId, ShootKind, WeaponKind};

/// Default throw range for every freshly created item
pub const DEFAULT_THROW_RANGE: u8 = 6;

/// The single mutable count slot of an item, tagged with its meaning
///
/// Every item carries exactly one byte of count-like state, but what that
/// byte *means* depends on the type descriptor's flags: the stack size of a
/// stackable, the fill level of a fluid container, or the remaining charges
/// of anything else. The tag makes the active interpretation explicit; the
/// accessors return 0 whenever asked for a meaning the slot does not
/// currently hold.
///
/// Changing an item's type id re-interprets the slot without re-tagging or
/// migrating it: two items with the same raw value can mean "6 stacked
/// items" or "6 charges" depending solely on their current type id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSlot {
    /// Stack size (stackable or multi-type items)
    Stack(u8),
    /// Fluid level (fluid containers)
    Fluid(u8),
    /// Remaining charges (everything else)
    Charge(u8),
}

impl CountSlot {
    /// Stack size, or 0 if the slot holds something else
    pub fn stack_count(&self) -> u8 {
        match self {
            CountSlot::Stack(n) => *n,
            _ => 0,
        }
    }

    /// Fluid level, or 0 if the slot holds something else
    pub fn fluid_level(&self) -> u8 {
        match self {
            CountSlot::Fluid(n) => *n,
            _ => 0,
        }
    }

    /// Charge count, or 0 if the slot holds something else
    pub fn charge_count(&self) -> u8 {
        match self {
            CountSlot::Charge(n) => *n,
            _ => 0,
        }
    }
}

impl Default for CountSlot {
    fn default() -> Self {
        CountSlot::Charge(0)
    }
}

/// Teleporter payload: where stepping on the item sends you
///
/// The destination is independent of the teleporter's own position and
/// defaults to the origin until set (or loaded from a save).
#[derive(Debug, Clone, Copy, Default)]
pub struct Teleport {
    pub destination: Position,
}

impl Teleport {
    pub fn new() -> Self {
        Teleport::default()
    }
}

/// Variant-specific state of an item
///
/// Exactly one variant is chosen per instance, by the factory, from the type
/// descriptor's flags, and never changed afterwards. Only containers and
/// teleporters carry extra state; everything else is `Plain`.
#[derive(Debug, Default)]
pub enum ItemPayload {
    #[default]
    Plain,
    Container(Container),
    Teleport(Teleport),
}

/// A runtime item instance
///
/// An `Item` is a type id plus the little state that can vary per instance:
/// the tagged count slot, a world position, a throw range, and (for
/// containers and teleporters) the variant payload. All other properties are
/// derived by looking the type id up in the [`ItemCatalog`], which is why
/// the query methods all take `&ItemCatalog`.
///
/// # Construction
///
/// Items must be built through [`Item::create`] (or
/// [`Item::create_simple`]). The factory is the only place allowed to pick
/// the payload variant, because every later container/teleport behavior
/// assumes the variant matches the descriptor's flags.
#[derive(Debug)]
pub struct Item {
    type_id: ItemTypeId,
    count: CountSlot,
    position: Position,
    throw_range: u8,
    payload: ItemPayload,
}

impl Item {
    /// Creates an item of the given type, routing `count` into the slot the
    /// type's flags select
    ///
    /// - container type → container payload (children start empty)
    /// - teleporter type → teleport payload (destination starts at origin)
    /// - otherwise plain, with `count` stored as stack size if the type is
    ///   stackable or multi-type, as fluid level if it is a fluid container,
    ///   and as charge count in every other case
    pub fn create(types: &ItemCatalog, type_id: ItemTypeId, count: u8) -> Item {
        let descriptor = types.get(type_id);

        let (payload, slot) = if descriptor.is_container {
            (ItemPayload::Container(Container::new()), CountSlot::default())
        } else if descriptor.is_teleport {
            (ItemPayload::Teleport(Teleport::new()), CountSlot::default())
        } else if descriptor.stackable || descriptor.multi_type {
            (ItemPayload::Plain, CountSlot::Stack(count))
        } else if descriptor.fluid_container {
            (ItemPayload::Plain, CountSlot::Fluid(count))
        } else {
            (ItemPayload::Plain, CountSlot::Charge(count))
        };

        Item {
            type_id,
            count: slot,
            position: Position::default(),
            throw_range: DEFAULT_THROW_RANGE,
            payload,
        }
    }

    /// Creates an item with all count slots at zero
    pub fn create_simple(types: &ItemCatalog, type_id: ItemTypeId) -> Item {
        Item::create(types, type_id, 0)
    }

    // --- identity ---------------------------------------------------------

    /// The id of this item's type descriptor
    pub fn type_id(&self) -> ItemTypeId {
        self.type_id
    }

    /// Changes the type id, re-interpreting every derived property
    ///
    /// The count slot is left untouched: its stored value keeps whatever
    /// meaning the *new* type's flags give it. The payload variant also
    /// stays; variant selection happens only at creation.
    pub fn set_type_id(&mut self, type_id: ItemTypeId) {
        self.type_id = type_id;
    }

    // --- instance state ---------------------------------------------------

    /// The raw tagged count slot
    pub fn count_slot(&self) -> CountSlot {
        self.count
    }

    /// Stack size, or 0 if the slot holds something else
    pub fn stack_count(&self) -> u8 {
        self.count.stack_count()
    }

    /// Fluid level, or 0 if the slot holds something else
    pub fn fluid_level(&self) -> u8 {
        self.count.fluid_level()
    }

    /// Charge count, or 0 if the slot holds something else
    pub fn charge_count(&self) -> u8 {
        self.count.charge_count()
    }

    /// Overwrites the count slot with an explicit tagged value
    pub fn set_count_slot(&mut self, slot: CountSlot) {
        self.count = slot;
    }

    /// The canonical "what number should be shown or persisted" query
    ///
    /// Priority order: stack size if stackable or multi-type, else fluid
    /// level if fluid container, else nonzero charge count, else 0.
    pub fn item_count_or_subtype(&self, types: &ItemCatalog) -> u8 {
        let descriptor = types.get(self.type_id);
        if descriptor.stackable || descriptor.multi_type {
            self.stack_count()
        } else if descriptor.fluid_container {
            self.fluid_level()
        } else if self.charge_count() != 0 {
            self.charge_count()
        } else {
            0
        }
    }

    /// Writes `value` into whichever slot the type's flags select,
    /// mirroring the factory's routing for an existing instance
    pub fn set_item_count_or_subtype(&mut self, types: &ItemCatalog, value: u8) {
        let descriptor = types.get(self.type_id);
        self.count = if descriptor.stackable || descriptor.multi_type {
            CountSlot::Stack(value)
        } else if descriptor.fluid_container {
            CountSlot::Fluid(value)
        } else {
            CountSlot::Charge(value)
        };
    }

    /// World position of the item
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// How far the item can be thrown (instance field, defaults to 6)
    pub fn throw_range(&self) -> u8 {
        self.throw_range
    }

    pub fn set_throw_range(&mut self, range: u8) {
        self.throw_range = range;
    }

    // --- payload probes ---------------------------------------------------

    /// Container payload, if this item was created as a container
    pub fn as_container(&self) -> Option<&Container> {
        match &self.payload {
            ItemPayload::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.payload {
            ItemPayload::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Teleport payload, if this item was created as a teleporter
    pub fn as_teleport(&self) -> Option<&Teleport> {
        match &self.payload {
            ItemPayload::Teleport(teleport) => Some(teleport),
            _ => None,
        }
    }

    pub fn as_teleport_mut(&mut self) -> Option<&mut Teleport> {
        match &mut self.payload {
            ItemPayload::Teleport(teleport) => Some(teleport),
            _ => None,
        }
    }

    // --- derived properties (pure projections of the type descriptor) -----

    /// Display name of the type (empty if the type is unnamed)
    pub fn name<'a>(&self, types: &'a ItemCatalog) -> &'a str {
        &types.get(self.type_id).name
    }

    pub fn is_stackable(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).stackable
    }

    pub fn is_multi_type(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).multi_type
    }

    pub fn is_fluid_container(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).fluid_container
    }

    pub fn is_blocking(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).blocking
    }

    pub fn is_blocking_projectile(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).blocking_projectile
    }

    pub fn is_always_on_top(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).always_on_top
    }

    pub fn is_not_movable(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).not_movable
    }

    pub fn is_ground_tile(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).ground_tile
    }

    pub fn is_pickupable(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).pickupable
    }

    pub fn no_floor_change(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).no_floor_change
    }

    pub fn floor_change_north(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).floor_change_north
    }

    pub fn floor_change_south(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).floor_change_south
    }

    pub fn floor_change_east(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).floor_change_east
    }

    pub fn floor_change_west(&self, types: &ItemCatalog) -> bool {
        types.get(self.type_id).floor_change_west
    }

    /// Returns true if the item is any kind of weapon
    ///
    /// Shields count as weapons here; only `None` and `Ammo` are excluded.
    /// Check `weapon_kind` too when you need something that actually attacks.
    pub fn is_weapon(&self, types: &ItemCatalog) -> bool {
        let kind = types.get(self.type_id).weapon_kind;
        kind != WeaponKind::None && kind != WeaponKind::Ammo
    }

    pub fn weapon_kind(&self, types: &ItemCatalog) -> WeaponKind {
        types.get(self.type_id).weapon_kind
    }

    pub fn ammo_kind(&self, types: &ItemCatalog) -> AmmoKind {
        types.get(self.type_id).ammo_kind
    }

    pub fn shoot_kind(&self, types: &ItemCatalog) -> ShootKind {
        types.get(self.type_id).shoot_kind
    }

    pub fn attack(&self, types: &ItemCatalog) -> i32 {
        types.get(self.type_id).attack
    }

    pub fn armor(&self, types: &ItemCatalog) -> i32 {
        types.get(self.type_id).armor
    }

    pub fn defense(&self, types: &ItemCatalog) -> i32 {
        types.get(self.type_id).defense
    }

    /// Equip-slot bitmask (see `item::types::slot`)
    pub fn slot_position(&self, types: &ItemCatalog) -> u32 {
        types.get(self.type_id).slot_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();
        catalog.register(ItemType {
            stackable: true,
            weight: 0.1,
            ..ItemType::new(ItemTypeId(100), "gold coin")
        });
        catalog.register(ItemType {
            is_container: true,
            ..ItemType::new(ItemTypeId(200), "bag")
        });
        catalog.register(ItemType {
            is_teleport: true,
            ..ItemType::new(ItemTypeId(210), "magic portal")
        });
        catalog.register(ItemType {
            fluid_container: true,
            ..ItemType::new(ItemTypeId(220), "vial")
        });
        catalog.register(ItemType {
            weapon_kind: WeaponKind::Sword,
            attack: 14,
            ..ItemType::new(ItemTypeId(230), "sword")
        });
        catalog.register(ItemType {
            weapon_kind: WeaponKind::Shield,
            defense: 12,
            ..ItemType::new(ItemTypeId(231), "wooden shield")
        });
        catalog.register(ItemType {
            weapon_kind: WeaponKind::Ammo,
            ..ItemType::new(ItemTypeId(232), "bolt")
        });
        catalog.register(ItemType::new(ItemTypeId(300), "apple"));
        catalog
    }

    #[test]
    fn test_factory_builds_container_variant() {
        let types = catalog();
        let item = Item::create_simple(&types, ItemTypeId(200));
        assert!(item.as_container().is_some());
        assert!(item.as_teleport().is_none());
    }

    #[test]
    fn test_factory_builds_teleport_variant() {
        let types = catalog();
        let item = Item::create_simple(&types, ItemTypeId(210));
        assert!(item.as_teleport().is_some());
        assert!(item.as_container().is_none());
    }

    #[test]
    fn test_factory_builds_plain_variant() {
        let types = catalog();
        let item = Item::create(&types, ItemTypeId(100), 3);
        assert!(item.as_container().is_none());
        assert!(item.as_teleport().is_none());
    }

    #[test]
    fn test_factory_routes_count_by_flags() {
        let types = catalog();

        let coins = Item::create(&types, ItemTypeId(100), 50);
        assert_eq!(coins.count_slot(), CountSlot::Stack(50));

        let vial = Item::create(&types, ItemTypeId(220), 7);
        assert_eq!(vial.count_slot(), CountSlot::Fluid(7));

        let apple = Item::create(&types, ItemTypeId(300), 2);
        assert_eq!(apple.count_slot(), CountSlot::Charge(2));
    }

    #[test]
    fn test_fresh_item_defaults() {
        let types = catalog();
        let item = Item::create_simple(&types, ItemTypeId(300));
        assert_eq!(item.stack_count(), 0);
        assert_eq!(item.fluid_level(), 0);
        assert_eq!(item.charge_count(), 0);
        assert_eq!(item.throw_range(), DEFAULT_THROW_RANGE);
        assert_eq!(item.position(), Position::default());
    }

    #[test]
    fn test_count_slot_accessors_are_exclusive() {
        let slot = CountSlot::Stack(6);
        assert_eq!(slot.stack_count(), 6);
        assert_eq!(slot.fluid_level(), 0);
        assert_eq!(slot.charge_count(), 0);
    }

    #[test]
    fn test_item_count_or_subtype_priority() {
        let types = catalog();

        let coins = Item::create(&types, ItemTypeId(100), 50);
        assert_eq!(coins.item_count_or_subtype(&types), 50);

        let vial = Item::create(&types, ItemTypeId(220), 7);
        assert_eq!(vial.item_count_or_subtype(&types), 7);

        let apple = Item::create(&types, ItemTypeId(300), 4);
        assert_eq!(apple.item_count_or_subtype(&types), 4);

        let plain = Item::create_simple(&types, ItemTypeId(300));
        assert_eq!(plain.item_count_or_subtype(&types), 0);
    }

    #[test]
    fn test_set_item_count_or_subtype_routes_like_factory() {
        let types = catalog();
        let mut vial = Item::create_simple(&types, ItemTypeId(220));
        vial.set_item_count_or_subtype(&types, 9);
        assert_eq!(vial.count_slot(), CountSlot::Fluid(9));
    }

    #[test]
    fn test_set_type_id_keeps_count_slot() {
        let types = catalog();
        let mut item = Item::create(&types, ItemTypeId(100), 6);
        assert_eq!(item.item_count_or_subtype(&types), 6);

        // Same stored value, new interpretation: the apple type is neither
        // stackable nor a fluid container, and the slot is still tagged
        // Stack, so the charge read comes back 0.
        item.set_type_id(ItemTypeId(300));
        assert_eq!(item.count_slot(), CountSlot::Stack(6));
        assert_eq!(item.item_count_or_subtype(&types), 0);
    }

    #[test]
    fn test_is_weapon_includes_shields() {
        let types = catalog();
        let shield = Item::create_simple(&types, ItemTypeId(231));
        assert!(shield.is_weapon(&types));
    }

    #[test]
    fn test_is_weapon_excludes_ammo_and_none() {
        let types = catalog();
        let bolt = Item::create_simple(&types, ItemTypeId(232));
        let apple = Item::create_simple(&types, ItemTypeId(300));
        assert!(!bolt.is_weapon(&types));
        assert!(!apple.is_weapon(&types));
    }

    #[test]
    fn test_descriptor_queries_follow_type_id() {
        let types = catalog();
        let sword = Item::create_simple(&types, ItemTypeId(230));
        assert_eq!(sword.name(&types), "sword");
        assert_eq!(sword.attack(&types), 14);
        assert_eq!(sword.weapon_kind(&types), WeaponKind::Sword);
        assert!(!sword.is_blocking(&types));
    }
}
