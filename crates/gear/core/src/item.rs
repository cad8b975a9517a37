//! Equipped-item input types.
//!
//! The engine does not own equipment: the surrounding build container equips,
//! caps, and annotates items, and the engine only reads the result. Common
//! fields live on [`EquippedItem`]; the food/gear distinction is carried by a
//! kind enum so food's pre-scaled bonus travels with the item.

use crate::materia::MateriaAssignment;
use crate::schema::SlotId;
use crate::stats::AttributeSet;

/// Item category with category-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquippedKind {
    /// A meldable piece of gear.
    Gear,

    /// A consumable food item. `effective_stats` is the bonus after the
    /// food's stat-rate-and-cap rule has been applied to the wearer,
    /// computed by the build collaborator.
    Food { effective_stats: AttributeSet },
}

/// One equipped item as seen by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub slot: SlotId,
    pub item_level: u16,
    /// Base stats, already clamped against the slot caps at equip time.
    pub stats: AttributeSet,
    pub kind: EquippedKind,
    /// Materia slots in order; `None` is an empty slot.
    pub materia: Vec<Option<MateriaAssignment>>,
}

impl EquippedItem {
    /// A gear item with no melds.
    pub fn gear(slot: SlotId, item_level: u16, stats: AttributeSet) -> Self {
        Self {
            slot,
            item_level,
            stats,
            kind: EquippedKind::Gear,
            materia: Vec::new(),
        }
    }

    /// A food item with its pre-scaled effective bonus.
    pub fn food(item_level: u16, effective_stats: AttributeSet) -> Self {
        Self {
            slot: SlotId::FOOD,
            item_level,
            stats: AttributeSet::new(),
            kind: EquippedKind::Food { effective_stats },
            materia: Vec::new(),
        }
    }

    /// Attaches materia assignments (builder pattern).
    #[must_use]
    pub fn with_materia(mut self, materia: Vec<Option<MateriaAssignment>>) -> Self {
        self.materia = materia;
        self
    }

    pub fn is_food(&self) -> bool {
        matches!(self.kind, EquippedKind::Food { .. })
    }

    /// Food's effective bonus for an attribute, 0 for gear or an attribute
    /// the food does not touch.
    pub fn food_bonus(&self, attribute: crate::stats::Attribute) -> i32 {
        match &self.kind {
            EquippedKind::Food { effective_stats } => {
                effective_stats.get(attribute).unwrap_or(0)
            }
            EquippedKind::Gear => 0,
        }
    }
}
