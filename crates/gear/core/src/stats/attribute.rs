//! Attribute kinds and sparse attribute sets.
//!
//! An [`Attribute`] is one named character statistic; an [`AttributeSet`] maps
//! attributes to integer values with "absent = not applicable" semantics.
//! Absent attributes surface as NaN in the floating-point views so the
//! closed-form metric formulas propagate unavailability instead of failing.

/// The atomic numeric stat kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    // Main attributes
    Strength = 0,
    Dexterity = 1,
    Intelligence = 2,
    Mind = 3,
    Vitality = 4,
    // Combat substats
    CriticalHit = 5,
    DirectHit = 6,
    Determination = 7,
    SkillSpeed = 8,
    SpellSpeed = 9,
    Tenacity = 10,
    Piety = 11,
    // Crafting
    Craftsmanship = 12,
    Control = 13,
    CraftingPoints = 14,
    // Gathering
    Gathering = 15,
    Perception = 16,
    GatheringPoints = 17,
    // Weapon characteristics
    PhysicalDamage = 18,
    MagicalDamage = 19,
    Delay = 20,
}

/// How a job derives an attribute's base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Baseline {
    /// Scaled from the bracket's main-stat baseline.
    MainScaled,
    /// Scaled from the bracket's sub-stat baseline.
    SubScaled,
    /// A literal base value independent of level.
    Fixed(i32),
}

impl Attribute {
    /// Total number of attributes.
    pub const COUNT: usize = 21;

    /// Returns all attributes in index order.
    pub const fn all() -> [Attribute; Self::COUNT] {
        use Attribute::*;
        [
            Strength,
            Dexterity,
            Intelligence,
            Mind,
            Vitality,
            CriticalHit,
            DirectHit,
            Determination,
            SkillSpeed,
            SpellSpeed,
            Tenacity,
            Piety,
            Craftsmanship,
            Control,
            CraftingPoints,
            Gathering,
            Perception,
            GatheringPoints,
            PhysicalDamage,
            MagicalDamage,
            Delay,
        ]
    }

    /// Returns the attribute as an array index.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// The intrinsic baseline classification used by base-stat derivation.
    pub const fn baseline(self) -> Baseline {
        use Attribute::*;
        match self {
            Strength | Dexterity | Intelligence | Mind | Vitality | Determination | Piety => {
                Baseline::MainScaled
            }
            CriticalHit | DirectHit | SkillSpeed | SpellSpeed | Tenacity => Baseline::SubScaled,
            CraftingPoints => Baseline::Fixed(180),
            GatheringPoints => Baseline::Fixed(400),
            Craftsmanship | Control | Gathering | Perception => Baseline::Fixed(0),
            PhysicalDamage | MagicalDamage | Delay => Baseline::Fixed(0),
        }
    }

    /// Whether per-slot stat caps apply. Weapon power and delay are treated
    /// as unbounded.
    pub const fn is_capped(self) -> bool {
        use Attribute::*;
        !matches!(self, PhysicalDamage | MagicalDamage | Delay)
    }
}

/// A sparse mapping from [`Attribute`] to an integer value.
///
/// Backed by a fixed array in attribute index order, following the fixed-size
/// profile storage used elsewhere in the engine. `None` means the attribute
/// does not apply; insertion order is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    values: [Option<i32>; Attribute::COUNT],
}

impl AttributeSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            values: [None; Attribute::COUNT],
        }
    }

    /// Builds a set from attribute/value pairs.
    pub fn from_pairs(pairs: &[(Attribute, i32)]) -> Self {
        let mut set = Self::new();
        for &(attr, value) in pairs {
            set.insert(attr, value);
        }
        set
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, attribute: Attribute, value: i32) {
        self.values[attribute.as_index()] = Some(value);
    }

    /// Returns the value, or `None` when the attribute does not apply.
    #[inline]
    pub fn get(&self, attribute: Attribute) -> Option<i32> {
        self.values[attribute.as_index()]
    }

    /// Returns the value as `f64`, NaN when the attribute does not apply.
    ///
    /// The metric formulas rely on NaN propagation: any formula touching an
    /// inapplicable attribute yields NaN, which callers read as "metric
    /// unavailable".
    #[inline]
    pub fn value_f64(&self, attribute: Attribute) -> f64 {
        match self.get(attribute) {
            Some(value) => f64::from(value),
            None => f64::NAN,
        }
    }

    /// True when the attribute has a value.
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.get(attribute).is_some()
    }

    /// True when no attribute has a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates over present (attribute, value) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all()
            .into_iter()
            .filter_map(|attr| self.get(attr).map(|value| (attr, value)))
    }
}

/// Per-slot attribute ceilings.
///
/// Uncapped attributes carry `+∞` so a plain `min` clamp leaves them alone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatCaps {
    pub(crate) values: [f64; Attribute::COUNT],
}

impl StatCaps {
    /// Returns the ceiling for an attribute (`+∞` when uncapped).
    #[inline]
    pub fn get(&self, attribute: Attribute) -> f64 {
        self.values[attribute.as_index()]
    }

    /// Clamps every value in `stats` to its ceiling.
    ///
    /// This is the equip-time clamp the build collaborator applies before
    /// handing items to the aggregator; the aggregator itself never re-clamps.
    pub fn clamp_set(&self, stats: &AttributeSet) -> AttributeSet {
        let mut clamped = AttributeSet::new();
        for (attr, value) in stats.iter() {
            let cap = self.get(attr);
            let bounded = if f64::from(value) > cap {
                cap as i32
            } else {
                value
            };
            clamped.insert(attr, bounded);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attribute_reads_as_nan() {
        let set = AttributeSet::from_pairs(&[(Attribute::CriticalHit, 2000)]);
        assert_eq!(set.get(Attribute::CriticalHit), Some(2000));
        assert_eq!(set.value_f64(Attribute::CriticalHit), 2000.0);
        assert!(set.value_f64(Attribute::Tenacity).is_nan());
        assert!(!set.contains(Attribute::Tenacity));
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = AttributeSet::from_pairs(&[
            (Attribute::Strength, 100),
            (Attribute::Vitality, 200),
        ]);
        let b = AttributeSet::from_pairs(&[
            (Attribute::Vitality, 200),
            (Attribute::Strength, 100),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn baseline_classification() {
        assert_eq!(Attribute::Strength.baseline(), Baseline::MainScaled);
        assert_eq!(Attribute::CriticalHit.baseline(), Baseline::SubScaled);
        assert_eq!(Attribute::CraftingPoints.baseline(), Baseline::Fixed(180));
        assert_eq!(Attribute::GatheringPoints.baseline(), Baseline::Fixed(400));
    }

    #[test]
    fn weapon_characteristics_are_uncapped() {
        assert!(!Attribute::PhysicalDamage.is_capped());
        assert!(!Attribute::MagicalDamage.is_capped());
        assert!(!Attribute::Delay.is_capped());
        assert!(Attribute::CriticalHit.is_capped());
    }

    #[test]
    fn clamp_leaves_uncapped_values_alone() {
        let mut values = [f64::INFINITY; Attribute::COUNT];
        values[Attribute::CriticalHit.as_index()] = 300.0;
        let caps = StatCaps { values };

        let stats = AttributeSet::from_pairs(&[
            (Attribute::CriticalHit, 450),
            (Attribute::PhysicalDamage, 134),
        ]);
        let clamped = caps.clamp_set(&stats);
        assert_eq!(clamped.get(Attribute::CriticalHit), Some(300));
        assert_eq!(clamped.get(Attribute::PhysicalDamage), Some(134));
    }
}
