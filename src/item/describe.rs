//! Look-description text generation
//!
//! Builds the multi-line text a player sees when looking at an item. The
//! wording (including the "They weight" phrasing for stacks) is part of the
//! game's established surface and is reproduced exactly.

use super::catalog::ItemCatalog;
use super::entity::Item;

impl Item {
    /// Builds the human-readable description of this item
    ///
    /// Line selection, in priority order:
    ///
    /// 1. unnamed type: a generic "item of type N" line, nothing else;
    /// 2. stackable with more than one in the stack: plural sentence plus
    ///    the total weight;
    /// 3. otherwise exactly one of: rune (magic level and charges), weapon
    ///    with a nonzero attack or defense, armor, or a plain sentence,
    ///    followed by the unit weight (when positive) and the type's
    ///    free-text description (when present).
    ///
    /// Weights are always formatted with exactly one fractional digit.
    pub fn description(&self, types: &ItemCatalog) -> String {
        let descriptor = types.get(self.type_id());

        if descriptor.name.is_empty() {
            return format!("You see an item of type {}.", self.type_id());
        }

        if descriptor.stackable && self.stack_count() > 1 {
            let count = self.stack_count();
            return format!(
                "You see {} {}s.\nThey weight {:.1} oz.",
                count,
                descriptor.name,
                count as f64 * descriptor.weight
            );
        }

        let mut s = if descriptor.is_rune() {
            let charges = match self.charge_count() {
                0 => 1,
                n => n,
            };
            format!(
                "You see a spell rune for level {}.\nIt's an \"{}\" spell ({}x).\n",
                descriptor.rune_mag_level, descriptor.name, charges
            )
        } else if self.is_weapon(types) && (descriptor.attack != 0 || descriptor.defense != 0) {
            if descriptor.attack != 0 {
                format!(
                    "You see a {} (Atk:{} Def:{}).\n",
                    descriptor.name, descriptor.attack, descriptor.defense
                )
            } else {
                format!(
                    "You see a {} (Def:{}).\n",
                    descriptor.name, descriptor.defense
                )
            }
        } else if descriptor.armor != 0 {
            format!(
                "You see a {} (Arm:{}).\n",
                descriptor.name, descriptor.armor
            )
        } else {
            format!("You see a {}.\n", descriptor.name)
        };

        if descriptor.weight > 0.0 {
            s.push_str(&format!("It weighs {:.1} oz.", descriptor.weight));
        }

        if !descriptor.description.is_empty() {
            s.push('\n');
            s.push_str(&descriptor.description);
        }

        s
    }
}
