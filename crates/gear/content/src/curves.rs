//! Stat-cap scaling curves.
//!
//! A cap is `round(level_factor * slot_factor * role_factor / 10_000)`. The
//! built-in table covers the item levels the default job ranges reach; full
//! tables for other expansions load from RON through
//! [`crate::loaders::CurveLoader`]. Slot factors apply uniformly across
//! attributes; only vitality has a role-specific curve.

use std::collections::BTreeMap;

use gear_core::{Attribute, CapCurveOracle, Role, SlotId};

/// Per-attribute level factors, slot percentages, and role rows.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapCurves {
    levels: BTreeMap<u16, BTreeMap<Attribute, u32>>,
    slots: BTreeMap<u8, u32>,
    roles: BTreeMap<Attribute, Vec<u32>>,
}

impl CapCurves {
    pub fn new(
        levels: BTreeMap<u16, BTreeMap<Attribute, u32>>,
        slots: BTreeMap<u8, u32>,
        roles: BTreeMap<Attribute, Vec<u32>>,
    ) -> Self {
        Self {
            levels,
            slots,
            roles,
        }
    }

    /// Number of item levels the level table covers.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The compiled-in curve table.
    pub fn builtin() -> Self {
        // (item level, main, vit, sub, craftsmanship, control, cp, gathering, gp)
        const LEVEL_ROWS: [(u16, u32, u32, u32, u32, u32, u32, u32, u32); 17] = [
            (270, 216, 231, 216, 391, 218, 7, 432, 18),
            (430, 360, 386, 360, 627, 350, 9, 693, 26),
            (440, 376, 403, 376, 645, 360, 10, 713, 27),
            (450, 392, 420, 392, 663, 370, 10, 733, 28),
            (455, 401, 430, 401, 672, 375, 10, 743, 28),
            (460, 410, 439, 410, 681, 380, 10, 753, 29),
            (465, 419, 449, 419, 690, 385, 11, 763, 29),
            (470, 428, 458, 428, 699, 390, 11, 773, 30),
            (475, 437, 468, 437, 708, 395, 11, 783, 30),
            (480, 446, 478, 446, 717, 400, 11, 793, 31),
            (485, 455, 487, 455, 726, 405, 11, 803, 31),
            (490, 464, 497, 464, 735, 410, 12, 813, 32),
            (495, 473, 507, 473, 744, 415, 12, 823, 32),
            (500, 482, 516, 482, 753, 420, 12, 833, 33),
            (505, 491, 526, 491, 762, 425, 12, 843, 33),
            (510, 500, 536, 500, 771, 430, 13, 853, 34),
            (515, 509, 545, 509, 780, 435, 13, 863, 34),
        ];
        // Accessories and the waist carry reduced caps; the soul crystal
        // holds no stats at all.
        const SLOT_ROWS: [(u8, u32); 14] = [
            (1, 100),
            (2, 100),
            (3, 100),
            (4, 100),
            (5, 100),
            (6, 73),
            (7, 100),
            (8, 100),
            (9, 73),
            (10, 73),
            (11, 73),
            (12, 73),
            (13, 100),
            (17, 0),
        ];
        const VIT_ROLES: [u32; 13] = [90, 100, 100, 100, 100, 90, 90, 100, 90, 100, 100, 100, 100];

        let levels = LEVEL_ROWS
            .iter()
            .map(|&(level, main, vit, sub, cms, crl, cp, gth, gp)| {
                (level, level_row(main, vit, sub, cms, crl, cp, gth, gp))
            })
            .collect();
        let slots = SLOT_ROWS.iter().copied().collect();
        let roles = BTreeMap::from([(Attribute::Vitality, VIT_ROLES.to_vec())]);
        Self::new(levels, slots, roles)
    }
}

#[allow(clippy::too_many_arguments)]
fn level_row(
    main: u32,
    vit: u32,
    sub: u32,
    craftsmanship: u32,
    control: u32,
    cp: u32,
    gathering: u32,
    gp: u32,
) -> BTreeMap<Attribute, u32> {
    use Attribute::*;
    let mut row = BTreeMap::new();
    for attr in [Strength, Dexterity, Intelligence, Mind] {
        row.insert(attr, main);
    }
    row.insert(Vitality, vit);
    for attr in [
        CriticalHit,
        DirectHit,
        Determination,
        SkillSpeed,
        SpellSpeed,
        Tenacity,
        Piety,
    ] {
        row.insert(attr, sub);
    }
    row.insert(Craftsmanship, craftsmanship);
    row.insert(Control, control);
    row.insert(CraftingPoints, cp);
    row.insert(Gathering, gathering);
    row.insert(Perception, gathering);
    row.insert(GatheringPoints, gp);
    row
}

impl CapCurveOracle for CapCurves {
    fn level_factor(&self, attribute: Attribute, item_level: u16) -> Option<u32> {
        self.levels.get(&item_level)?.get(&attribute).copied()
    }

    fn slot_factor(&self, _attribute: Attribute, slot: SlotId) -> Option<u32> {
        self.slots.get(&(slot.index() as u8)).copied()
    }

    fn role_factor(&self, attribute: Attribute, role: Role) -> Option<u32> {
        self.roles
            .get(&attribute)
            .and_then(|row| row.get(role.0 as usize))
            .copied()
    }
}
