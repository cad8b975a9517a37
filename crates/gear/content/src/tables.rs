//! Reference constant tables.
//!
//! Level-bracket constants, racial clan adjustments, and the materia tables
//! (per-grade potency, required equipment level, overmeld success rates).

use gear_core::{Attribute, Clan, LevelBracket, MateriaGrade};

/// Level-bracket constants keyed by character level.
pub const LEVEL_BRACKETS: [(u8, LevelBracket); 4] = [
    (
        50,
        LevelBracket {
            main: 202,
            sub: 341,
            div: 341,
            hp: 1700,
            vit: 10.2,
            vit_tank: 14.5,
        },
    ),
    (
        60,
        LevelBracket {
            main: 218,
            sub: 354,
            div: 858,
            hp: 2600,
            vit: 15.4,
            vit_tank: 20.5,
        },
    ),
    (
        70,
        LevelBracket {
            main: 292,
            sub: 364,
            div: 2170,
            hp: 3600,
            vit: 15.9,
            vit_tank: 21.5,
        },
    ),
    (
        80,
        LevelBracket {
            main: 340,
            sub: 380,
            div: 3300,
            hp: 4400,
            vit: 22.1,
            vit_tank: 31.5,
        },
    ),
];

/// Looks up the bracket for a character level.
pub fn level_bracket(job_level: u8) -> Option<LevelBracket> {
    LEVEL_BRACKETS
        .iter()
        .find(|(level, _)| *level == job_level)
        .map(|(_, bracket)| *bracket)
}

pub const CLAN_COUNT: usize = 16;

// Racial adjustments per clan, as offsets from the neutral 20.
const CLAN_STRENGTH: [i32; CLAN_COUNT] = [2, 3, 0, 0, -1, -1, 2, -1, 2, 0, -1, 3, 3, 3, 0, -1];
const CLAN_DEXTERITY: [i32; CLAN_COUNT] = [-1, 0, 3, 0, 3, 1, 3, 2, -1, -2, 2, 0, -3, -3, 3, 0];
const CLAN_VITALITY: [i32; CLAN_COUNT] = [0, 2, -1, -1, -1, -2, 0, -2, 3, 3, -1, 2, 3, 3, -2, -1];
const CLAN_INTELLIGENCE: [i32; CLAN_COUNT] = [3, -2, 2, 3, 2, 2, -1, 1, -2, 0, 0, 0, -3, -3, 1, 3];
const CLAN_MIND: [i32; CLAN_COUNT] = [-1, 0, -1, 1, 0, 3, -1, 3, 1, 2, 3, -2, 3, 3, 1, 2];

/// Racial adjustment for an attribute (0 for attributes without a clan row
/// or clans outside the table).
pub fn clan_adjustment(attribute: Attribute, clan: Clan) -> i32 {
    let row = match attribute {
        Attribute::Strength => &CLAN_STRENGTH,
        Attribute::Dexterity => &CLAN_DEXTERITY,
        Attribute::Vitality => &CLAN_VITALITY,
        Attribute::Intelligence => &CLAN_INTELLIGENCE,
        Attribute::Mind => &CLAN_MIND,
        _ => return 0,
    };
    row.get(clan.0 as usize).copied().unwrap_or(0)
}

/// Per-grade materia potency rows, grade I first.
const POTENCY_PIETY: [i32; 8] = [1, 2, 3, 6, 11, 40, 20, 60];
const POTENCY_COMBAT_SUB: [i32; 8] = [2, 4, 6, 9, 12, 40, 20, 60];
const POTENCY_DETERMINATION: [i32; 8] = [1, 3, 4, 6, 12, 40, 20, 60];
const POTENCY_CRAFTSMANSHIP: [i32; 8] = [3, 4, 5, 6, 11, 16, 14, 21];
const POTENCY_CONTROL: [i32; 8] = [1, 2, 3, 4, 7, 10, 9, 13];
const POTENCY_GATHERING: [i32; 8] = [3, 4, 5, 6, 10, 15, 12, 20];
const POTENCY_POINTS: [i32; 8] = [1, 2, 3, 4, 6, 8, 7, 9];

/// Points a materia of the given attribute and grade grants, `None` for
/// attributes without materia.
pub fn materia_potency(attribute: Attribute, grade: MateriaGrade) -> Option<i32> {
    use Attribute::*;
    let row = match attribute {
        Piety => &POTENCY_PIETY,
        CriticalHit | DirectHit | SkillSpeed | SpellSpeed | Tenacity => &POTENCY_COMBAT_SUB,
        Determination => &POTENCY_DETERMINATION,
        Craftsmanship => &POTENCY_CRAFTSMANSHIP,
        Control => &POTENCY_CONTROL,
        Gathering | Perception => &POTENCY_GATHERING,
        CraftingPoints | GatheringPoints => &POTENCY_POINTS,
        _ => return None,
    };
    Some(row[grade.index()])
}

/// Minimum equipment level required to meld each grade, grade I first.
pub const MATERIA_REQUIRED_LEVELS: [u16; 8] = [15, 30, 45, 70, 160, 290, 420, 420];

/// Minimum equipment level for melding a grade.
pub fn materia_required_level(grade: MateriaGrade) -> u16 {
    MATERIA_REQUIRED_LEVELS[grade.index()]
}

/// Overmeld success percentages: rows are overmeld positions 0..3, columns
/// grades I..VIII. A 0 entry means the grade cannot go into that position.
pub const MATERIA_SUCCESS_RATES: [[u8; 8]; 4] = [
    [90, 82, 70, 58, 17, 17, 17, 17],
    [48, 44, 38, 32, 10, 0, 10, 0],
    [28, 26, 22, 20, 7, 0, 7, 0],
    [16, 16, 14, 12, 5, 0, 5, 0],
];

/// Success percentage for melding `grade` into the given overmeld position.
/// Guaranteed slots never consult this table.
pub fn meld_success_rate(grade: MateriaGrade, overmeld_index: u8) -> Option<u8> {
    MATERIA_SUCCESS_RATES
        .get(overmeld_index as usize)
        .map(|row| row[grade.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(n: u8) -> MateriaGrade {
        MateriaGrade::new(n).unwrap()
    }

    #[test]
    fn brackets_cover_the_supported_levels() {
        for level in [50, 60, 70, 80] {
            assert!(level_bracket(level).is_some(), "level {level}");
        }
        assert_eq!(level_bracket(75), None);
        assert_eq!(level_bracket(80).unwrap().div, 3300);
    }

    #[test]
    fn clan_rows_offset_from_neutral() {
        // Highlander: +3 STR, +2 VIT, -2 INT.
        assert_eq!(clan_adjustment(Attribute::Strength, Clan(1)), 3);
        assert_eq!(clan_adjustment(Attribute::Vitality, Clan(1)), 2);
        assert_eq!(clan_adjustment(Attribute::Intelligence, Clan(1)), -2);
        // No clan rows for substats.
        assert_eq!(clan_adjustment(Attribute::CriticalHit, Clan(1)), 0);
        // Out-of-table clans are neutral.
        assert_eq!(clan_adjustment(Attribute::Strength, Clan(40)), 0);
    }

    #[test]
    fn potencies_follow_the_grade_rows() {
        assert_eq!(materia_potency(Attribute::CriticalHit, grade(8)), Some(60));
        assert_eq!(materia_potency(Attribute::CriticalHit, grade(6)), Some(40));
        assert_eq!(materia_potency(Attribute::Determination, grade(1)), Some(1));
        assert_eq!(materia_potency(Attribute::Craftsmanship, grade(8)), Some(21));
        assert_eq!(materia_potency(Attribute::Strength, grade(8)), None);
    }

    #[test]
    fn overmeld_rates_fall_off_by_position() {
        let g8 = grade(8);
        assert_eq!(meld_success_rate(g8, 0), Some(17));
        assert_eq!(meld_success_rate(g8, 1), Some(0));
        assert_eq!(meld_success_rate(grade(1), 0), Some(90));
        assert_eq!(meld_success_rate(grade(1), 3), Some(16));
        assert_eq!(meld_success_rate(g8, 4), None);
    }

    #[test]
    fn high_grades_unlock_late() {
        assert_eq!(materia_required_level(grade(1)), 15);
        assert_eq!(materia_required_level(grade(7)), 420);
        assert_eq!(materia_required_level(grade(8)), 420);
    }
}
