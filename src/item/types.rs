use serde::{Serialize, Deserialize};

/// Numeric identifier for an item type in the catalog
///
/// Every item instance carries one of these; all static properties (flags,
/// combat stats, weight, decay target) are looked up through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemTypeId(pub u16);

impl std::fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weapon category of an item type
///
/// Note that `Shield` is a weapon kind: `Item::is_weapon()` deliberately
/// treats shields as weapons (only `None` and `Ammo` are excluded). Callers
/// that need an actual attacking weapon must also check the kind itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum WeaponKind {
    #[default]
    None,
    Sword,
    Club,
    Axe,
    Shield,
    Distance,
    Magic,
    Ammo,
}

/// Ammunition category consumed by distance weapons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum AmmoKind {
    #[default]
    None,
    Bolt,
    Arrow,
}

/// Projectile kind a ranged item shoots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum ShootKind {
    #[default]
    None,
    Spear,
    Bolt,
    Arrow,
    Fire,
    Energy,
}

/// Bit constants for `ItemType::slot_position` (equip-slot mask)
pub mod slot {
    pub const HEAD: u32 = 1 << 0;
    pub const NECKLACE: u32 = 1 << 1;
    pub const BACKPACK: u32 = 1 << 2;
    pub const ARMOR: u32 = 1 << 3;
    pub const RIGHT_HAND: u32 = 1 << 4;
    pub const LEFT_HAND: u32 = 1 << 5;
    pub const LEGS: u32 = 1 << 6;
    pub const FEET: u32 = 1 << 7;
    pub const RING: u32 = 1 << 8;
    pub const AMMO: u32 = 1 << 9;
}

/// The static blueprint for an item type
///
/// This defines the properties shared by every instance of one numeric type
/// id. Think of it as the "class" and `Item` as the "instance": an `Item`
/// stores only what can vary at runtime, everything else is read from here.
///
/// Descriptors are immutable once registered in the
/// [`ItemCatalog`](crate::item::ItemCatalog); the external catalog loader
/// deserializes them from data files, which is why every field has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ItemType {
    /// Unique identifier (index into the catalog)
    pub id: ItemTypeId,

    /// Display name; empty = the type is unnamed and described generically
    pub name: String,

    /// Free-text description shown after the name and weight lines
    pub description: String,

    // --- capability flags -------------------------------------------------
    /// Instances are containers holding other items
    pub is_container: bool,

    /// Instances are teleporters with a destination coordinate
    pub is_teleport: bool,

    /// Instances stack; the count slot holds the stack size
    pub stackable: bool,

    /// Variant forms share this id; the count slot selects the current form
    pub multi_type: bool,

    /// Instances hold a fluid; the count slot holds the fluid level
    pub fluid_container: bool,

    /// Blocks creature movement
    pub blocking: bool,

    /// Blocks projectiles
    pub blocking_projectile: bool,

    /// Always rendered above other items on the same tile
    pub always_on_top: bool,

    /// Cannot be moved once placed
    pub not_movable: bool,

    /// Forms the ground layer of a tile
    pub ground_tile: bool,

    /// Can be picked up into an inventory
    pub pickupable: bool,

    /// Stepping on it moves the creature one tile in the given direction
    pub floor_change_north: bool,
    pub floor_change_south: bool,
    pub floor_change_east: bool,
    pub floor_change_west: bool,

    /// Prevents floor changes on this tile
    pub no_floor_change: bool,

    // --- combat -----------------------------------------------------------
    pub weapon_kind: WeaponKind,
    pub ammo_kind: AmmoKind,
    pub shoot_kind: ShootKind,
    pub attack: i32,
    pub armor: i32,
    pub defense: i32,

    /// Equip-slot bitmask (see the `slot` module constants)
    pub slot_position: u32,

    // --- economy / magic --------------------------------------------------
    /// Weight per unit in ounces (stackables multiply by stack size)
    pub weight: f64,

    /// Magic level required to use the rune, -1 if not a rune
    pub rune_mag_level: i32,

    // --- decay ------------------------------------------------------------
    /// Type id this item decays into; 0 = does not decay
    pub decay_to: ItemTypeId,

    /// Decay delay in milliseconds (carried in the record, not yet consumed
    /// by any behavior here)
    pub decay_time: u32,
}

impl Default for ItemType {
    fn default() -> Self {
        ItemType {
            id: ItemTypeId(0),
            name: String::new(),
            description: String::new(),
            is_container: false,
            is_teleport: false,
            stackable: false,
            multi_type: false,
            fluid_container: false,
            blocking: false,
            blocking_projectile: false,
            always_on_top: false,
            not_movable: false,
            ground_tile: false,
            pickupable: false,
            floor_change_north: false,
            floor_change_south: false,
            floor_change_east: false,
            floor_change_west: false,
            no_floor_change: false,
            weapon_kind: WeaponKind::None,
            ammo_kind: AmmoKind::None,
            shoot_kind: ShootKind::None,
            attack: 0,
            armor: 0,
            defense: 0,
            slot_position: 0,
            weight: 0.0,
            rune_mag_level: -1, // -1 = not a rune; 0 is a valid magic level
            decay_to: ItemTypeId(0),
            decay_time: 0,
        }
    }
}

impl ItemType {
    /// Creates a blank descriptor with the given id and name
    ///
    /// Convenient starting point for struct-update syntax:
    ///
    /// ```ignore
    /// let coin = ItemType {
    ///     stackable: true,
    ///     weight: 0.1,
    ///     ..ItemType::new(ItemTypeId(100), "gold coin")
    /// };
    /// ```
    pub fn new(id: ItemTypeId, name: impl Into<String>) -> Self {
        ItemType {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns true if this type decays into another type
    pub fn decays(&self) -> bool {
        self.decay_to != ItemTypeId(0)
    }

    /// Returns true if this type is a spell rune
    pub fn is_rune(&self) -> bool {
        self.rune_mag_level != -1
    }
}
