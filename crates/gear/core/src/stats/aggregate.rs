//! Attribute aggregation over a job's baselines and equipped items.

use crate::env::DataOracle;
use crate::item::EquippedItem;
use crate::schema::{Clan, JobSchema, LevelBracket};
use crate::stats::attribute::{Attribute, AttributeSet, Baseline};

/// Bonus granted on the job's main attribute on top of its baseline.
const MAIN_ATTRIBUTE_BONUS: i32 = 48;

/// Derives the naked base stats for a job at a level bracket.
///
/// For each attribute in the job's list: a fixed baseline is used verbatim;
/// scaled baselines take `floor(bracket_baseline * modifier / 100)` plus the
/// main-attribute bonus and the clan adjustment. Physical and magical weapon
/// power start at 0 so weapon stats can accumulate onto them.
pub fn base_stats(
    schema: &JobSchema,
    bracket: &LevelBracket,
    clan: Clan,
    data: &dyn DataOracle,
) -> AttributeSet {
    let mut stats = AttributeSet::new();
    stats.insert(Attribute::PhysicalDamage, 0);
    stats.insert(Attribute::MagicalDamage, 0);

    for &attr in &schema.attributes {
        let value = match attr.baseline() {
            Baseline::Fixed(base) => base,
            scaled => {
                let baseline = match scaled {
                    Baseline::MainScaled => bracket.main,
                    Baseline::SubScaled => bracket.sub,
                    Baseline::Fixed(_) => unreachable!(),
                };
                let modifier = schema
                    .modifiers
                    .as_ref()
                    .and_then(|m| m.attributes.get(attr))
                    .unwrap_or(100);
                let main_bonus = if schema.main_attribute == Some(attr) {
                    MAIN_ATTRIBUTE_BONUS
                } else {
                    0
                };
                baseline * modifier / 100 + main_bonus + data.clan_adjustment(attr, clan)
            }
        };
        stats.insert(attr, value);
    }
    stats
}

/// Sums every equipped non-food item's stats onto the base set.
///
/// Items are pre-capped at equip time; no re-clamping happens here. Only
/// attributes the base set carries accumulate: an off-schema stat on an item
/// stays "not applicable" for the job.
pub fn equipped_stats_without_food(base: &AttributeSet, items: &[EquippedItem]) -> AttributeSet {
    let mut stats = base.clone();
    for item in items.iter().filter(|item| !item.is_food()) {
        for (attr, value) in item.stats.iter() {
            if let Some(current) = stats.get(attr) {
                stats.insert(attr, current + value);
            }
        }
    }
    stats
}

/// Equipped stats including the food bonus, when a food item is equipped.
pub fn equipped_stats(base: &AttributeSet, items: &[EquippedItem]) -> AttributeSet {
    let without_food = equipped_stats_without_food(base, items);
    let Some(food) = items.iter().find(|item| item.is_food()) else {
        return without_food;
    };

    let mut stats = AttributeSet::new();
    for (attr, value) in without_food.iter() {
        stats.insert(attr, value + food.food_bonus(attr));
    }
    stats
}

/// Weighted average item level across the job's slot layout.
///
/// Empty slots count as level 0, so an incomplete build reports a lower
/// equipped level rather than ignoring the gap.
pub fn equipped_level(schema: &JobSchema, items: &[EquippedItem]) -> u16 {
    let mut total: u32 = 0;
    let mut weights: u32 = 0;
    for slot in &schema.slots {
        weights += u32::from(slot.level_weight);
        let level = items
            .iter()
            .find(|item| item.slot == slot.slot)
            .map_or(0, |item| u32::from(item.item_level));
        total += level * u32::from(slot.level_weight);
    }
    if weights == 0 {
        0
    } else {
        (total / weights) as u16
    }
}
