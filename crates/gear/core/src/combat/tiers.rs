//! Tier windows around the current discretized metric values.
//!
//! Every substat formula truncates, so stat points inside a tier are wasted.
//! A [`TierWindow`] reports how far the current value sits from the tier
//! boundaries on either side.

use std::collections::BTreeMap;

use crate::schema::{JobSchema, LevelBracket};
use crate::stats::{Attribute, AttributeSet};

/// Distance to the surrounding tier boundaries of one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierWindow {
    /// Points removable without losing the current tier. Zero means the
    /// build sits exactly on a boundary and every point is working.
    pub prev: i32,
    /// Points needed to reach the next tier.
    pub next: i32,
}

/// Tier window for a plain truncating formula `floor(value / multiplier)`.
///
/// `value` is the attribute's excess over its baseline; returns `None` when
/// the attribute does not apply (NaN input).
pub fn calc_tier(value: f64, multiplier: f64) -> Option<TierWindow> {
    if value.is_nan() {
        return None;
    }
    let quotient = (value / multiplier).floor();
    let prev = value - (quotient * multiplier).ceil();
    let next = ((quotient + 1.0) * multiplier).ceil() - value;
    Some(TierWindow {
        prev: prev as i32,
        next: next as i32,
    })
}

/// Tier window for the recast-time formula, which truncates twice more
/// (centisecond rounding and the job haste percentage) on top of the speed
/// step.
///
/// `modifier` is the haste factor (1.0 = no haste trait). Boundaries are
/// found by inverting the recast computation around the current centisecond
/// value, so tiers that collapse under haste are skipped correctly.
pub fn calc_gcd_tier(value: f64, multiplier: f64, modifier: f64) -> Option<TierWindow> {
    if value.is_nan() {
        return None;
    }
    let gcdc = (((1000.0 - (value / multiplier).floor()) * 2.5).floor() * modifier).floor();
    let prev = value
        - (((1000.0 - ((gcdc + 1.0) / modifier).ceil() / 2.5).floor() + 1.0) * multiplier).ceil();
    let next = (((1000.0 - (gcdc / modifier).ceil() / 2.5).floor() + 1.0) * multiplier).ceil()
        - value;
    Some(TierWindow {
        prev: prev as i32,
        next: next as i32,
    })
}

/// Tier windows for every tiered attribute of a build.
///
/// Returns `None` for jobs without combat modifiers. Attributes absent from
/// the stat set are omitted from the map.
pub fn stat_tiers(
    stats: &AttributeSet,
    schema: &JobSchema,
    bracket: &LevelBracket,
) -> Option<BTreeMap<Attribute, TierWindow>> {
    let modifiers = schema.modifiers.as_ref()?;

    let main = f64::from(bracket.main);
    let sub = f64::from(bracket.sub);
    let div = f64::from(bracket.div);
    let gcd_modifier = f64::from(modifiers.gcd.unwrap_or(100)) / 1000.0;

    let mut tiers = BTreeMap::new();
    let mut push = |attr: Attribute, window: Option<TierWindow>| {
        if let Some(window) = window {
            tiers.insert(attr, window);
        }
    };

    let sub_excess = |attr: Attribute| stats.value_f64(attr) - sub;
    let main_excess = |attr: Attribute| stats.value_f64(attr) - main;

    push(
        Attribute::CriticalHit,
        calc_tier(sub_excess(Attribute::CriticalHit), div / 200.0),
    );
    push(
        Attribute::Determination,
        calc_tier(main_excess(Attribute::Determination), div / 130.0),
    );
    push(
        Attribute::DirectHit,
        calc_tier(sub_excess(Attribute::DirectHit), div / 550.0),
    );
    push(
        Attribute::Tenacity,
        calc_tier(sub_excess(Attribute::Tenacity), div / 100.0),
    );
    push(
        Attribute::SkillSpeed,
        calc_gcd_tier(sub_excess(Attribute::SkillSpeed), div / 130.0, gcd_modifier),
    );
    push(
        Attribute::SpellSpeed,
        calc_gcd_tier(sub_excess(Attribute::SpellSpeed), div / 130.0, gcd_modifier),
    );
    push(
        Attribute::Piety,
        calc_tier(main_excess(Attribute::Piety), 22.0),
    );

    Some(tiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Job, JobModifiers};

    fn bracket() -> LevelBracket {
        LevelBracket {
            main: 340,
            sub: 380,
            div: 3300,
            hp: 4400,
            vit: 22.1,
            vit_tank: 31.5,
        }
    }

    fn combat_schema(gcd: Option<i32>) -> JobSchema {
        JobSchema {
            job: Job::Warrior,
            attributes: vec![],
            slots: vec![],
            default_item_level: (480, 505),
            modifiers: Some(JobModifiers {
                attributes: AttributeSet::new(),
                hp: 125,
                ap: 115,
                gcd,
            }),
            main_attribute: Some(Attribute::Vitality),
            trait_multiplier: Some(1.0),
            party_bonus: None,
            job_level: None,
            skeleton_gears: false,
            tool_materia_copies: None,
        }
    }

    #[test]
    fn crit_window_brackets_the_current_tier() {
        // CRT 2000: excess 1620, multiplier 16.5. 1620/16.5 = 98.18, so 3
        // points are slack and 14 reach tier 99.
        let window = calc_tier(1620.0, 3300.0 / 200.0).unwrap();
        assert_eq!(window, TierWindow { prev: 3, next: 14 });
    }

    #[test]
    fn boundary_value_has_zero_slack() {
        // Piety multiplier is exactly 22: a 44-point excess sits on a tier.
        let window = calc_tier(44.0, 22.0).unwrap();
        assert_eq!(window.prev, 0);
        assert_eq!(window.next, 22);
    }

    #[test]
    fn nan_input_yields_no_window() {
        assert_eq!(calc_tier(f64::NAN, 16.5), None);
        assert_eq!(calc_gcd_tier(f64::NAN, 16.5, 0.1), None);
    }

    #[test]
    fn gcd_window_inverts_the_recast_formula() {
        // Spell speed 1045 (excess 665) gives a 2.43s recast; the tier spans
        // values 635..=736 of that excess.
        let window = calc_gcd_tier(665.0, 3300.0 / 130.0, 0.1).unwrap();
        assert_eq!(window, TierWindow { prev: 30, next: 72 });
    }

    #[test]
    fn windows_are_never_negative() {
        for excess in [0, 1, 13, 250, 665, 1620, 2400] {
            let plain = calc_tier(f64::from(excess), 3300.0 / 200.0).unwrap();
            assert!(plain.prev >= 0, "prev at {excess}");
            assert!(plain.next > 0, "next at {excess}");
            let gcd = calc_gcd_tier(f64::from(excess), 3300.0 / 130.0, 0.1).unwrap();
            assert!(gcd.prev >= 0, "gcd prev at {excess}");
            assert!(gcd.next > 0, "gcd next at {excess}");
        }
    }

    #[test]
    fn tier_map_skips_absent_attributes() {
        let stats = AttributeSet::from_pairs(&[
            (Attribute::CriticalHit, 2000),
            (Attribute::Determination, 340),
            (Attribute::SkillSpeed, 380),
            (Attribute::Tenacity, 380),
        ]);
        let tiers = stat_tiers(&stats, &combat_schema(None), &bracket()).unwrap();

        assert_eq!(
            tiers.get(&Attribute::CriticalHit),
            Some(&TierWindow { prev: 3, next: 14 })
        );
        // DET at its baseline sits on the tier floor.
        assert_eq!(tiers[&Attribute::Determination].prev, 0);
        // No spell speed or piety on this build.
        assert!(!tiers.contains_key(&Attribute::SpellSpeed));
        assert!(!tiers.contains_key(&Attribute::Piety));
    }

    #[test]
    fn crafting_jobs_have_no_tier_map() {
        let schema = JobSchema {
            modifiers: None,
            main_attribute: None,
            trait_multiplier: None,
            ..combat_schema(None)
        };
        assert_eq!(stat_tiers(&AttributeSet::new(), &schema, &bracket()), None);
    }
}
