//! Job schemas, slot layouts, and level-bracket constants.
//!
//! These are plain reference records: the engine never mutates them, and the
//! concrete tables live in the content crate behind [`crate::env::DataOracle`].

use crate::stats::{Attribute, AttributeSet};

/// The playable jobs the reference tables describe.
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
pub enum Job {
    // Tanks
    Paladin,
    Warrior,
    DarkKnight,
    Gunbreaker,
    // Healers
    WhiteMage,
    Scholar,
    Astrologian,
    // Melee DPS
    Monk,
    Dragoon,
    Ninja,
    Samurai,
    // Physical ranged DPS
    Bard,
    Machinist,
    Dancer,
    // Casters
    BlackMage,
    Summoner,
    RedMage,
    BlueMage,
    // Crafters
    Carpenter,
    Blacksmith,
    Armorer,
    Goldsmith,
    Leatherworker,
    Weaver,
    Alchemist,
    Culinarian,
    // Gatherers
    Miner,
    Botanist,
    Fisher,
}

impl Job {
    /// The conventional three-letter acronym for this job.
    pub const fn acronym(self) -> &'static str {
        use Job::*;
        match self {
            Paladin => "PLD",
            Warrior => "WAR",
            DarkKnight => "DRK",
            Gunbreaker => "GNB",
            WhiteMage => "WHM",
            Scholar => "SCH",
            Astrologian => "AST",
            Monk => "MNK",
            Dragoon => "DRG",
            Ninja => "NIN",
            Samurai => "SAM",
            Bard => "BRD",
            Machinist => "MCH",
            Dancer => "DNC",
            BlackMage => "BLM",
            Summoner => "SMN",
            RedMage => "RDM",
            BlueMage => "BLU",
            Carpenter => "CRP",
            Blacksmith => "BSM",
            Armorer => "ARM",
            Goldsmith => "GSM",
            Leatherworker => "LTW",
            Weaver => "WVR",
            Alchemist => "ALC",
            Culinarian => "CUL",
            Miner => "MIN",
            Botanist => "BTN",
            Fisher => "FSH",
        }
    }
}

/// An equipment slot identifier.
///
/// Positive ids follow the reference numbering (tools 1/2, armor 3..8,
/// accessories 9..12, weapon 13, soul crystal 17). Negative ids mark derived
/// positions: `-12` is the second ring and `-1` is the food slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotId(pub i8);

impl SlotId {
    pub const MAIN_TOOL: SlotId = SlotId(1);
    pub const OFF_TOOL: SlotId = SlotId(2);
    pub const HEAD: SlotId = SlotId(3);
    pub const BODY: SlotId = SlotId(4);
    pub const HANDS: SlotId = SlotId(5);
    pub const WAIST: SlotId = SlotId(6);
    pub const LEGS: SlotId = SlotId(7);
    pub const FEET: SlotId = SlotId(8);
    pub const EARRINGS: SlotId = SlotId(9);
    pub const NECKLACE: SlotId = SlotId(10);
    pub const BRACELET: SlotId = SlotId(11);
    pub const RING: SlotId = SlotId(12);
    pub const RING_ALT: SlotId = SlotId(-12);
    pub const WEAPON: SlotId = SlotId(13);
    pub const SOUL_CRYSTAL: SlotId = SlotId(17);
    pub const FOOD: SlotId = SlotId(-1);

    /// True for the food slot.
    pub const fn is_food(self) -> bool {
        self.0 == -1
    }

    /// True for the main/off tool slots, whose melds are repeated across
    /// every duplicate tool a crafting or gathering job carries.
    pub const fn is_tool(self) -> bool {
        matches!(self.0, 1 | 2)
    }

    /// Index into slot-keyed curve tables. The second ring shares the curve
    /// of the first, so the sign is dropped.
    pub const fn index(self) -> usize {
        self.0.unsigned_abs() as usize
    }
}

/// A slot position within a job's equipment layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotSchema {
    pub slot: SlotId,
    /// Weight of this slot in the equipped-level average. Weapons typically
    /// weigh 2, food and soul crystals 0.
    pub level_weight: u8,
}

impl SlotSchema {
    /// A slot with the default weight of 1.
    pub const fn new(slot: SlotId) -> Self {
        Self {
            slot,
            level_weight: 1,
        }
    }

    pub const fn with_weight(slot: SlotId, level_weight: u8) -> Self {
        Self { slot, level_weight }
    }
}

/// Percentage modifiers a combat job applies on top of the level baselines.
///
/// `attributes` holds per-attribute percentages (100 = unmodified); `ap` is
/// the attack-power coefficient and `gcd` the recast-time haste percentage
/// granted by a job trait (100 = no haste).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobModifiers {
    pub attributes: AttributeSet,
    pub hp: i32,
    pub ap: i32,
    pub gcd: Option<i32>,
}

/// Immutable description of one job: which attributes matter, which slots
/// exist, and the coefficients its combat formulas use.
///
/// Crafting and gathering jobs carry no `modifiers`/`main_attribute`/
/// `trait_multiplier`; every combat metric is unavailable for them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobSchema {
    pub job: Job,
    /// Attributes relevant to this job, in display order.
    pub attributes: Vec<Attribute>,
    pub slots: Vec<SlotSchema>,
    /// Item-level range a fresh build of this job starts from.
    pub default_item_level: (u16, u16),
    pub modifiers: Option<JobModifiers>,
    pub main_attribute: Option<Attribute>,
    /// Damage multiplier from the job's trait (1.0 = none).
    pub trait_multiplier: Option<f64>,
    /// Main-stat bonus from a full party. Defaults to 1.05.
    pub party_bonus: Option<f64>,
    /// Effective character level; defaults to 80.
    pub job_level: Option<u8>,
    /// Gear in each slot shares one stat skeleton, so building is mostly
    /// materia choice rather than gear choice.
    pub skeleton_gears: bool,
    /// Number of identical tools the meld plan must cover (8 for crafting
    /// tools, 2 for gathering tools).
    pub tool_materia_copies: Option<u8>,
}

impl JobSchema {
    /// Effective character level for bracket lookup.
    pub fn effective_level(&self) -> u8 {
        self.job_level.unwrap_or(80)
    }

    /// Main-stat party bonus factor.
    pub fn party_bonus(&self) -> f64 {
        self.party_bonus.unwrap_or(1.05)
    }

    /// Meld copies required for a given slot (1 unless it is a tool slot of
    /// a job with duplicated tools).
    pub fn materia_copies(&self, slot: SlotId) -> u32 {
        if slot.is_tool() {
            u32::from(self.tool_materia_copies.unwrap_or(1))
        } else {
            1
        }
    }
}

/// Constants of one character-level bracket.
///
/// `main`/`sub` are the attribute baselines, `div` the scaling divisor shared
/// by every substat formula, and `vit`/`vit_tank` the HP-per-vitality
/// coefficients for non-tank and tank jobs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelBracket {
    pub main: i32,
    pub sub: i32,
    pub div: i32,
    pub hp: i32,
    pub vit: f64,
    pub vit_tank: f64,
}

/// A clan index into the racial attribute-adjustment rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clan(pub u8);

/// An item role index into role-specific cap curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role(pub u8);
