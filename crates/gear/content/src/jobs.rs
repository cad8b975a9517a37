//! The job schema catalog.
//!
//! Jobs of one role share an attribute list and slot layout; only the
//! per-job combat coefficients differ.

use gear_core::{Attribute, AttributeSet, Job, JobModifiers, JobSchema, SlotId, SlotSchema};

const COMBAT_ITEM_LEVEL: (u16, u16) = (480, 505);
const HAND_ITEM_LEVEL: (u16, u16) = (490, 500);

fn tank_attributes() -> Vec<Attribute> {
    use Attribute::*;
    vec![
        Strength,
        CriticalHit,
        Determination,
        DirectHit,
        SkillSpeed,
        Tenacity,
        Vitality,
    ]
}

fn healer_attributes() -> Vec<Attribute> {
    use Attribute::*;
    vec![
        Mind,
        CriticalHit,
        Determination,
        DirectHit,
        SpellSpeed,
        Piety,
        Vitality,
    ]
}

fn dps_attributes(main: Attribute, speed: Attribute) -> Vec<Attribute> {
    use Attribute::*;
    vec![main, CriticalHit, Determination, DirectHit, speed, Vitality]
}

fn crafting_attributes() -> Vec<Attribute> {
    use Attribute::*;
    vec![Craftsmanship, Control, CraftingPoints]
}

fn gathering_attributes() -> Vec<Attribute> {
    use Attribute::*;
    vec![Gathering, Perception, GatheringPoints]
}

/// Armor, accessories, the paired ring, and food. Food never counts toward
/// the equipped level.
fn common_slots() -> Vec<SlotSchema> {
    vec![
        SlotSchema::new(SlotId::HEAD),
        SlotSchema::new(SlotId::BODY),
        SlotSchema::new(SlotId::HANDS),
        SlotSchema::new(SlotId::WAIST),
        SlotSchema::new(SlotId::LEGS),
        SlotSchema::new(SlotId::FEET),
        SlotSchema::new(SlotId::EARRINGS),
        SlotSchema::new(SlotId::NECKLACE),
        SlotSchema::new(SlotId::BRACELET),
        SlotSchema::new(SlotId::RING),
        SlotSchema::new(SlotId::RING_ALT),
        SlotSchema::with_weight(SlotId::FOOD, 0),
    ]
}

fn combat_slots() -> Vec<SlotSchema> {
    let mut slots = vec![SlotSchema::with_weight(SlotId::WEAPON, 2)];
    slots.extend(common_slots());
    slots
}

/// Paladins carry a one-handed weapon and a shield instead of the combined
/// weapon slot.
fn paladin_slots() -> Vec<SlotSchema> {
    let mut slots = vec![
        SlotSchema::new(SlotId::MAIN_TOOL),
        SlotSchema::new(SlotId::OFF_TOOL),
    ];
    slots.extend(common_slots());
    slots
}

fn gathering_slots() -> Vec<SlotSchema> {
    let mut slots = vec![
        SlotSchema::new(SlotId::MAIN_TOOL),
        SlotSchema::new(SlotId::OFF_TOOL),
    ];
    slots.extend(common_slots());
    slots
}

fn crafting_slots() -> Vec<SlotSchema> {
    let mut slots = gathering_slots();
    // The soul crystal sits between the accessories and food.
    slots.pop();
    slots.push(SlotSchema::with_weight(SlotId::SOUL_CRYSTAL, 0));
    slots.push(SlotSchema::with_weight(SlotId::FOOD, 0));
    slots
}

fn modifiers(
    main: (Attribute, i32),
    vit: i32,
    hp: i32,
    ap: i32,
    gcd: Option<i32>,
) -> Option<JobModifiers> {
    Some(JobModifiers {
        attributes: AttributeSet::from_pairs(&[main, (Attribute::Vitality, vit)]),
        hp,
        ap,
        gcd,
    })
}

fn combat(
    job: Job,
    attributes: Vec<Attribute>,
    slots: Vec<SlotSchema>,
    main_attribute: Attribute,
    trait_multiplier: f64,
    modifiers: Option<JobModifiers>,
) -> JobSchema {
    JobSchema {
        job,
        attributes,
        slots,
        default_item_level: COMBAT_ITEM_LEVEL,
        modifiers,
        main_attribute: Some(main_attribute),
        trait_multiplier: Some(trait_multiplier),
        party_bonus: None,
        job_level: None,
        skeleton_gears: false,
        tool_materia_copies: None,
    }
}

fn crafter(job: Job) -> JobSchema {
    JobSchema {
        job,
        attributes: crafting_attributes(),
        slots: crafting_slots(),
        default_item_level: HAND_ITEM_LEVEL,
        modifiers: None,
        main_attribute: None,
        trait_multiplier: None,
        party_bonus: None,
        job_level: None,
        skeleton_gears: true,
        tool_materia_copies: Some(8),
    }
}

fn gatherer(job: Job, tool_materia_copies: Option<u8>) -> JobSchema {
    JobSchema {
        job,
        attributes: gathering_attributes(),
        slots: gathering_slots(),
        default_item_level: HAND_ITEM_LEVEL,
        modifiers: None,
        main_attribute: None,
        trait_multiplier: None,
        party_bonus: None,
        job_level: None,
        skeleton_gears: true,
        tool_materia_copies,
    }
}

/// Builds every job schema.
pub fn catalog() -> Vec<JobSchema> {
    use Attribute::*;
    use Job::*;

    let tank = |job, str_mod, hp| {
        combat(
            job,
            tank_attributes(),
            combat_slots(),
            Vitality,
            1.0,
            modifiers((Strength, str_mod), 110, hp, 115, None),
        )
    };
    let healer = |job| {
        combat(
            job,
            healer_attributes(),
            combat_slots(),
            Mind,
            1.3,
            modifiers((Mind, 115), 100, 105, 165, None),
        )
    };
    let caster = |job| {
        combat(
            job,
            dps_attributes(Intelligence, SpellSpeed),
            combat_slots(),
            Intelligence,
            1.3,
            modifiers((Intelligence, 115), 100, 105, 165, None),
        )
    };
    let ranged = |job| {
        combat(
            job,
            dps_attributes(Dexterity, SkillSpeed),
            combat_slots(),
            Dexterity,
            1.2,
            modifiers((Dexterity, 115), 100, 105, 165, None),
        )
    };

    let mut blue_mage = caster(BlueMage);
    blue_mage.default_item_level = (270, 270);
    blue_mage.party_bonus = Some(1.01);
    blue_mage.job_level = Some(60);

    vec![
        // Tanks. The paladin splits its weapon slot into sword and shield.
        combat(
            Paladin,
            tank_attributes(),
            paladin_slots(),
            Vitality,
            1.0,
            modifiers((Strength, 100), 110, 120, 115, None),
        ),
        tank(Warrior, 105, 125),
        tank(DarkKnight, 105, 120),
        tank(Gunbreaker, 100, 120),
        // Healers
        healer(WhiteMage),
        healer(Scholar),
        healer(Astrologian),
        // Melee DPS; monk, ninja, and samurai carry recast-haste traits.
        combat(
            Monk,
            dps_attributes(Strength, SkillSpeed),
            combat_slots(),
            Strength,
            1.0,
            modifiers((Strength, 110), 100, 110, 165, Some(80)),
        ),
        combat(
            Dragoon,
            dps_attributes(Strength, SkillSpeed),
            combat_slots(),
            Strength,
            1.0,
            modifiers((Strength, 115), 105, 115, 165, None),
        ),
        combat(
            Ninja,
            dps_attributes(Dexterity, SkillSpeed),
            combat_slots(),
            Dexterity,
            1.0,
            modifiers((Dexterity, 110), 100, 108, 165, Some(85)),
        ),
        combat(
            Samurai,
            dps_attributes(Strength, SkillSpeed),
            combat_slots(),
            Strength,
            1.0,
            modifiers((Strength, 112), 100, 109, 165, Some(87)),
        ),
        // Physical ranged DPS
        ranged(Bard),
        ranged(Machinist),
        ranged(Dancer),
        // Casters
        caster(BlackMage),
        caster(Summoner),
        caster(RedMage),
        blue_mage,
        // Crafters meld the same plan into all eight tools.
        crafter(Carpenter),
        crafter(Blacksmith),
        crafter(Armorer),
        crafter(Goldsmith),
        crafter(Leatherworker),
        crafter(Weaver),
        crafter(Alchemist),
        crafter(Culinarian),
        // Gatherers; the fisher's tools take no materia.
        gatherer(Miner, Some(2)),
        gatherer(Botanist, Some(2)),
        gatherer(Fisher, None),
    ]
}
