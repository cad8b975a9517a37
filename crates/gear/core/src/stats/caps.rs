//! Per-slot stat cap table.
//!
//! Caps depend only on reference curves, so each `(item_level, slot, role)`
//! combination is computed once and cached for the table's lifetime. The
//! cache is an owned, write-once map: entries are never replaced, so repeated
//! lookups return bit-identical results.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::env::CapCurveOracle;
use crate::error::DataError;
use crate::schema::{Role, SlotId};
use crate::stats::attribute::{Attribute, StatCaps};

/// Composite cache key for one cap computation.
///
/// Role is part of the key: role rarely varies across a build, but folding it
/// into a `(level, slot)` bucket would return stale vitality caps when it
/// does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CapKey {
    pub item_level: u16,
    pub slot: SlotId,
    pub role: Role,
}

/// Memoizing view over a [`CapCurveOracle`].
pub struct StatCapTable<'a> {
    curves: &'a dyn CapCurveOracle,
    cache: RefCell<HashMap<CapKey, StatCaps>>,
}

impl<'a> StatCapTable<'a> {
    pub fn new(curves: &'a dyn CapCurveOracle) -> Self {
        Self {
            curves,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Maximum permissible value of every attribute for an item of the given
    /// level, slot, and role.
    ///
    /// Uncapped attributes (weapon power and delay) come back as `+∞`. A
    /// missing level or slot curve is a reference-data bug and aborts the
    /// computation.
    pub fn caps_for(
        &self,
        item_level: u16,
        slot: SlotId,
        role: Role,
    ) -> Result<StatCaps, DataError> {
        let key = CapKey {
            item_level,
            slot,
            role,
        };
        if let Some(caps) = self.cache.borrow().get(&key) {
            return Ok(*caps);
        }

        let mut values = [f64::INFINITY; Attribute::COUNT];
        for attr in Attribute::all() {
            if !attr.is_capped() {
                continue;
            }
            let level = self.curves.level_factor(attr, item_level).ok_or(
                DataError::MissingLevelCurve {
                    attribute: attr,
                    item_level,
                },
            )?;
            let slot_factor = self
                .curves
                .slot_factor(attr, slot)
                .ok_or(DataError::MissingSlotCurve {
                    attribute: attr,
                    slot,
                })?;
            let role_factor = self.curves.role_factor(attr, role).unwrap_or(100);
            values[attr.as_index()] =
                (level as f64 * slot_factor as f64 * role_factor as f64 / 10_000.0).round();
        }

        let caps = StatCaps { values };
        self.cache.borrow_mut().insert(key, caps);
        Ok(caps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Flat synthetic curves with a lookup counter to observe memoization.
    struct FlatCurves {
        lookups: AtomicU32,
    }

    impl FlatCurves {
        fn new() -> Self {
            Self {
                lookups: AtomicU32::new(0),
            }
        }
    }

    impl CapCurveOracle for FlatCurves {
        fn level_factor(&self, _attribute: Attribute, item_level: u16) -> Option<u32> {
            self.lookups.fetch_add(1, Ordering::Relaxed);
            (item_level == 505).then_some(400)
        }

        fn slot_factor(&self, _attribute: Attribute, _slot: SlotId) -> Option<u32> {
            Some(100)
        }

        fn role_factor(&self, attribute: Attribute, _role: Role) -> Option<u32> {
            (attribute == Attribute::Vitality).then_some(90)
        }
    }

    #[test]
    fn caps_follow_the_curve_product() {
        let curves = FlatCurves::new();
        let table = StatCapTable::new(&curves);
        let caps = table
            .caps_for(505, SlotId::WEAPON, Role::default())
            .unwrap();

        // 400 * 100 * 100 / 10_000
        assert_eq!(caps.get(Attribute::CriticalHit), 400.0);
        // VIT has a role curve: 400 * 100 * 90 / 10_000
        assert_eq!(caps.get(Attribute::Vitality), 360.0);
    }

    #[test]
    fn uncapped_attributes_are_infinite() {
        let curves = FlatCurves::new();
        let table = StatCapTable::new(&curves);
        let caps = table
            .caps_for(505, SlotId::WEAPON, Role::default())
            .unwrap();
        assert_eq!(caps.get(Attribute::PhysicalDamage), f64::INFINITY);
        assert_eq!(caps.get(Attribute::MagicalDamage), f64::INFINITY);
        assert_eq!(caps.get(Attribute::Delay), f64::INFINITY);
    }

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let curves = FlatCurves::new();
        let table = StatCapTable::new(&curves);

        let first = table
            .caps_for(505, SlotId::BODY, Role::default())
            .unwrap();
        let lookups_after_first = curves.lookups.load(Ordering::Relaxed);
        let second = table
            .caps_for(505, SlotId::BODY, Role::default())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(curves.lookups.load(Ordering::Relaxed), lookups_after_first);
    }

    #[test]
    fn missing_level_curve_is_fatal() {
        let curves = FlatCurves::new();
        let table = StatCapTable::new(&curves);
        let err = table
            .caps_for(123, SlotId::WEAPON, Role::default())
            .unwrap_err();
        assert!(matches!(err, DataError::MissingLevelCurve { .. }));
    }
}
