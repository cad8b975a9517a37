//! Closed-form combat metrics.
//!
//! Every formula truncates with `floor` at fixed stages; reordering the
//! divisions would change the discretized results, so the staging is
//! load-bearing.

use crate::schema::{JobSchema, LevelBracket};
use crate::stats::{Attribute, AttributeSet};

/// Derived combat performance of one build.
///
/// Multipliers are expressed as factors (1.0 = neutral), chances as
/// fractions of 1. Fields are NaN when the underlying attribute does not
/// apply to the job; callers must treat NaN as "metric unavailable".
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEffects {
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub determination: f64,
    pub direct_hit_chance: f64,
    pub tenacity: f64,
    pub weapon_damage: f64,
    pub attack_multiplier: f64,
    /// Expected damage of a 100-potency action, folding in crit and direct
    /// hit expectations.
    pub damage_per_hundred: f64,
    /// Global recast time in seconds after speed and job haste traits.
    pub recast_time: f64,
    /// Damage-over-time / auto-attack multiplier from the speed attribute.
    pub speed_multiplier: f64,
    pub hp: f64,
    pub mp: f64,
}

/// Computes combat metrics from aggregated stats.
///
/// Returns `None` when the job defines no combat modifiers (crafters and
/// gatherers have no combat formulas at all).
pub fn combat_effects(
    stats: &AttributeSet,
    schema: &JobSchema,
    bracket: &LevelBracket,
) -> Option<CombatEffects> {
    let modifiers = schema.modifiers.as_ref()?;
    let main_attribute = schema.main_attribute?;
    let trait_multiplier = schema.trait_multiplier?;

    let main = f64::from(bracket.main);
    let sub = f64::from(bracket.sub);
    let div = f64::from(bracket.div);

    let crt = stats.value_f64(Attribute::CriticalHit);
    let det = stats.value_f64(Attribute::Determination);
    let dht = stats.value_f64(Attribute::DirectHit);
    let vit = stats.value_f64(Attribute::Vitality);

    // Tanks attack with strength even though vitality is their main stat.
    let attack_attribute = if main_attribute == Attribute::Vitality {
        Attribute::Strength
    } else {
        main_attribute
    };

    let crit_chance = (200.0 * (crt - sub) / div + 50.0).floor() / 1000.0;
    let crit_damage = (200.0 * (crt - sub) / div + 1400.0).floor() / 1000.0;
    let determination = (130.0 * (det - main) / div + 1000.0).floor() / 1000.0;
    let direct_hit_chance = (550.0 * (dht - sub) / div).floor() / 1000.0;

    // Tenacity falls back to the sub baseline (neutral) for non-tanks.
    let ten = stats
        .get(Attribute::Tenacity)
        .map_or(sub, f64::from);
    let tenacity = (100.0 * (ten - sub) / div + 1000.0).floor() / 1000.0;

    let power = if matches!(main_attribute, Attribute::Mind | Attribute::Intelligence) {
        stats.get(Attribute::MagicalDamage)
    } else {
        stats.get(Attribute::PhysicalDamage)
    };
    let weapon_damage = (main * modifiers.attributes.value_f64(attack_attribute) / 1000.0).floor()
        + f64::from(power.unwrap_or(0));

    let attack_stat = f64::from(stats.get(attack_attribute).unwrap_or(0));
    let ap = f64::from(modifiers.ap);
    let attack_multiplier =
        (ap * ((attack_stat * schema.party_bonus()).floor() - main) / main + 100.0).floor() / 100.0;

    let damage_per_hundred = 0.01
        * weapon_damage
        * attack_multiplier
        * determination
        * tenacity
        * trait_multiplier
        * ((crit_damage - 1.0) * crit_chance + 1.0)
        * (0.25 * direct_hit_chance + 1.0);

    // Skill speed when the job has any, otherwise spell speed.
    let sks = stats.value_f64(Attribute::SkillSpeed);
    let speed = if sks.is_nan() || sks == 0.0 {
        stats.value_f64(Attribute::SpellSpeed)
    } else {
        sks
    };
    let gcd_modifier = f64::from(modifiers.gcd.unwrap_or(100));
    let recast_time = (((1000.0 - (130.0 * (speed - sub) / div).floor()) * 2500.0 / 1000.0).floor()
        * gcd_modifier
        / 1000.0)
        .floor()
        / 100.0;
    let speed_multiplier = (130.0 * (speed - sub) / div + 1000.0).floor() / 1000.0;

    let vit_coefficient = if main_attribute == Attribute::Vitality {
        bracket.vit_tank
    } else {
        bracket.vit
    };
    let hp = (f64::from(bracket.hp) * f64::from(modifiers.hp) / 100.0
        + vit_coefficient * (vit - main))
        .floor();

    let pie = stats.get(Attribute::Piety).map_or(main, f64::from);
    let mp = (200.0 + (pie - main) / 22.0).floor();

    Some(CombatEffects {
        crit_chance,
        crit_damage,
        determination,
        direct_hit_chance,
        tenacity,
        weapon_damage,
        attack_multiplier,
        damage_per_hundred,
        recast_time,
        speed_multiplier,
        hp,
        mp,
    })
}
