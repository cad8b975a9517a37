//! Materia consumption forecasting.
//!
//! Overmeld slots can fail, and a failed meld destroys the materia, so the
//! interesting question is not "how many melds" but "how many materia must
//! be stocked". The model buckets melds per (attribute, grade) and reports a
//! guaranteed floor, a closed-form expectation, and 90%/99% retry budgets
//! from a dynamic program over the sequential melding plan.

use std::collections::BTreeMap;

use crate::item::EquippedItem;
use crate::materia::MateriaGrade;
use crate::schema::JobSchema;
use crate::stats::Attribute;

/// Forecast for one (attribute, grade) bucket.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumptionBucket {
    /// Melds with a 100% rate; consumed exactly once each.
    pub safe: u32,
    /// Expected total consumption, risky melds modeled as geometric trials.
    pub expectation: u32,
    /// Smallest stock giving at least 90% probability of completing every
    /// meld in the bucket.
    pub confidence90: u32,
    /// Smallest stock giving at least 99% probability.
    pub confidence99: u32,
    /// Success probabilities of the risky melds, in plan order.
    pub rates: Vec<f64>,
}

/// Consumption forecast keyed by (attribute, grade).
pub type ConsumptionReport = BTreeMap<(Attribute, MateriaGrade), ConsumptionBucket>;

/// Tallies materia consumption across every equipped gear item.
///
/// Tool-slot melds are multiplied by the job's duplicate tool count, since
/// the same plan is executed once per tool.
pub fn consumption(schema: &JobSchema, items: &[EquippedItem]) -> ConsumptionReport {
    let mut report = ConsumptionReport::new();
    for item in items.iter().filter(|item| !item.is_food()) {
        let copies = schema.materia_copies(item.slot);
        for assignment in item.materia.iter().flatten() {
            let bucket = report
                .entry((assignment.attribute, assignment.grade))
                .or_default();
            for _ in 0..copies {
                if assignment.is_safe() {
                    bucket.safe += 1;
                } else {
                    bucket.rates.push(f64::from(assignment.success_rate) / 100.0);
                }
            }
        }
    }

    for bucket in report.values_mut() {
        let expected_retries: f64 = bucket.rates.iter().map(|p| 1.0 / p).sum();
        bucket.expectation = bucket.safe + expected_retries.round() as u32;
        let (n90, n99) = confidence_budgets(&bucket.rates);
        bucket.confidence90 = bucket.safe + n90;
        bucket.confidence99 = bucket.safe + n99;
    }
    report
}

/// Smallest attempt budgets completing every risky meld with ≥90% and ≥99%
/// probability.
///
/// `rates` holds per-slot success probabilities in plan order; each slot is
/// retried until it succeeds before the next is attempted. `ps[n][i]` is the
/// probability that `n` attempts finish slots `i..`; the recurrence spends
/// `j` attempts on slot `i` (j-1 failures then a success) and the remainder
/// on the tail:
///
/// ```text
/// ps[n][i] = Σ_{j=1}^{n-(len-i)+1} (1-p[i])^(j-1) · p[i] · ps[n-j][i+1]
/// ```
///
/// `n` grows until `ps[n][0]` crosses 0.99, which terminates for any
/// positive rates.
pub fn confidence_budgets(rates: &[f64]) -> (u32, u32) {
    if rates.is_empty() {
        return (0, 0);
    }
    let len = rates.len();
    let last = rates[len - 1];

    // ps[0] exists only to keep indices aligned with the attempt count.
    let mut ps: Vec<Vec<f64>> = vec![vec![0.0; len]];
    let mut n = 0;
    let mut n90 = 0;
    loop {
        n += 1;
        let mut row = vec![0.0; len];
        row[len - 1] = 1.0 - (1.0 - last).powi(n as i32);
        for i in (0..len.saturating_sub(1)).rev() {
            if len - i > n {
                break;
            }
            let p = rates[i];
            let mut total = 0.0;
            for j in 1..=(n - (len - i) + 1) {
                total += (1.0 - p).powi(j as i32 - 1) * p * ps[n - j][i + 1];
            }
            row[i] = total;
        }
        let complete = row[0];
        ps.push(row);

        if complete > 0.9 && n90 == 0 {
            n90 = n;
        }
        if complete > 0.99 {
            return (n90 as u32, n as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materia::MateriaAssignment;
    use crate::schema::{Job, SlotId};
    use crate::stats::AttributeSet;

    fn grade(n: u8) -> MateriaGrade {
        MateriaGrade::new(n).unwrap()
    }

    fn crafter_schema() -> JobSchema {
        JobSchema {
            job: Job::Culinarian,
            attributes: vec![],
            slots: vec![],
            default_item_level: (490, 500),
            modifiers: None,
            main_attribute: None,
            trait_multiplier: None,
            party_bonus: None,
            job_level: None,
            skeleton_gears: true,
            tool_materia_copies: Some(8),
        }
    }

    #[test]
    fn coin_flip_meld_budgets() {
        // One 50% slot: P(n attempts suffice) = 1 - 0.5^n, so 4 attempts
        // clear 90% and 7 clear 99%. Expectation is the geometric mean of 2.
        assert_eq!(confidence_budgets(&[0.5]), (4, 7));

        let items = vec![EquippedItem::gear(
            SlotId::BODY,
            500,
            AttributeSet::new(),
        )
        .with_materia(vec![Some(MateriaAssignment::new(
            Attribute::CriticalHit,
            grade(7),
            50,
        ))])];
        let report = consumption(&crafter_schema(), &items);
        let bucket = &report[&(Attribute::CriticalHit, grade(7))];
        assert_eq!(bucket.safe, 0);
        assert_eq!(bucket.expectation, 2);
        assert_eq!(bucket.confidence90, 4);
        assert_eq!(bucket.confidence99, 7);
    }

    #[test]
    fn all_safe_melds_collapse_to_the_safe_count() {
        let items = vec![EquippedItem::gear(
            SlotId::BODY,
            500,
            AttributeSet::new(),
        )
        .with_materia(vec![
            Some(MateriaAssignment::new(Attribute::CriticalHit, grade(8), 100)),
            Some(MateriaAssignment::new(Attribute::CriticalHit, grade(8), 100)),
            None,
        ])];
        let report = consumption(&crafter_schema(), &items);
        let bucket = &report[&(Attribute::CriticalHit, grade(8))];
        assert_eq!(bucket.safe, 2);
        assert_eq!(bucket.expectation, 2);
        assert_eq!(bucket.confidence90, 2);
        assert_eq!(bucket.confidence99, 2);
    }

    #[test]
    fn budgets_are_monotone_in_risk() {
        let (low90, low99) = confidence_budgets(&[0.9, 0.9]);
        let (high90, high99) = confidence_budgets(&[0.2, 0.2]);
        assert!(low90 <= high90);
        assert!(low99 <= high99);
        // A budget is never below the slot count and confidences are ordered.
        assert!(low90 >= 2 && high90 >= 2);
        assert!(low90 <= low99 && high90 <= high99);
    }

    #[test]
    fn tool_slots_multiply_by_duplicate_tool_count() {
        let items = vec![
            EquippedItem::gear(SlotId::MAIN_TOOL, 500, AttributeSet::new()).with_materia(vec![
                Some(MateriaAssignment::new(Attribute::Control, grade(8), 100)),
                Some(MateriaAssignment::new(Attribute::Control, grade(7), 40)),
            ]),
            EquippedItem::gear(SlotId::BODY, 500, AttributeSet::new()).with_materia(vec![Some(
                MateriaAssignment::new(Attribute::Control, grade(8), 100),
            )]),
        ];
        let report = consumption(&crafter_schema(), &items);

        // 8 copies of the tool meld plus 1 body meld.
        assert_eq!(report[&(Attribute::Control, grade(8))].safe, 9);
        let risky = &report[&(Attribute::Control, grade(7))];
        assert_eq!(risky.rates.len(), 8);
        // 8 slots at 40%: expected 2.5 materia each.
        assert_eq!(risky.expectation, 20);
    }

    #[test]
    fn buckets_separate_attribute_and_grade() {
        let items = vec![EquippedItem::gear(
            SlotId::LEGS,
            500,
            AttributeSet::new(),
        )
        .with_materia(vec![
            Some(MateriaAssignment::new(Attribute::CriticalHit, grade(8), 100)),
            Some(MateriaAssignment::new(Attribute::CriticalHit, grade(7), 100)),
            Some(MateriaAssignment::new(Attribute::Determination, grade(8), 100)),
        ])];
        let report = consumption(&crafter_schema(), &items);
        assert_eq!(report.len(), 3);
        assert!(report.contains_key(&(Attribute::CriticalHit, grade(8))));
        assert!(report.contains_key(&(Attribute::CriticalHit, grade(7))));
        assert!(report.contains_key(&(Attribute::Determination, grade(8))));
    }

    #[test]
    fn food_is_ignored() {
        let items = vec![EquippedItem::food(455, AttributeSet::new()).with_materia(vec![Some(
            MateriaAssignment::new(Attribute::CriticalHit, grade(8), 100),
        )])];
        assert!(consumption(&crafter_schema(), &items).is_empty());
    }
}
