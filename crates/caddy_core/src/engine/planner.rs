//! Shot-planning engine.
//!
//! All functions are pure - they take the hole yardage, the club table and
//! the driver/override selections as input and return a finished plan. This
//! allows unit testing without any session state.
//!
//! Planning never fails: degenerate input (empty table, unknown club names,
//! zero yardage) degrades to sentinel slots instead of errors.

use super::shot_plan::{PlanSlot, ShotPlan, MAX_STROKES, PLAN_LEN};
use crate::models::course::{Course, HOLE_COUNT};
use crate::models::{ClubCapability, ClubDistanceTable};

/// Literal label the driver-once restriction keys on. The restriction
/// compares club names against this label case-insensitively, independent of
/// which club is selected as the default driver.
const DRIVER_LABEL: &str = "Drive";

/// Preferred follow-up clubs for the strokes after the driver, tried in
/// threshold-descending table order.
const DRIVER_FALLBACKS: [&str; 4] = ["3 Wood", "5 Wood", "4 Hybrid", "5 Iron"];

/// Simulate one hole stroke by stroke.
///
/// Returns the fixed 13-slot plan: starting yardage, then six (club,
/// yardage-after) pairs. `override_club` replaces the club for the first
/// stroke only and is taken as-is, with no carry-distance validation; an
/// empty string counts as no override.
pub fn plan_hole(
    yardage: u32,
    clubs: &ClubDistanceTable,
    default_driver: &str,
    override_club: Option<&str>,
) -> ShotPlan {
    let override_club = override_club.filter(|c| !c.is_empty());

    let mut slots: [PlanSlot; PLAN_LEN] = std::array::from_fn(|_| PlanSlot::Empty);
    let mut remaining = yardage as i32;
    let mut putts_taken = 0u32;
    let mut zero_streak = 0u32;
    let mut terminated = false;
    let mut driver_consumed = false;

    slots[0] = if remaining > 0 { PlanSlot::Yardage(remaining) } else { PlanSlot::Holed };
    if remaining == 0 {
        zero_streak += 1;
    }

    for stroke in 0..MAX_STROKES {
        let club = if terminated {
            PlanSlot::Inactive
        } else if remaining <= 0 {
            if putts_taken < 2 {
                putts_taken += 1;
                PlanSlot::Putt
            } else {
                terminated = true;
                PlanSlot::Inactive
            }
        } else if stroke == 0 {
            match override_club {
                Some(name) => PlanSlot::Club(name.to_string()),
                None => first_stroke_club(clubs, default_driver, remaining, &mut driver_consumed),
            }
        } else {
            later_stroke_club(clubs, remaining, driver_consumed)
        };

        let mut after = match &club {
            PlanSlot::Inactive => PlanSlot::Inactive,
            PlanSlot::Putt => {
                remaining = 0;
                PlanSlot::Holed
            }
            chosen => {
                // Carry distance comes from the table entry named like the
                // chosen club; a miss (override not in the table, or an
                // Unknown slot) subtracts nothing.
                let carry = match chosen {
                    PlanSlot::Club(name) => {
                        clubs.get(name).map(|c| c.threshold as i32).unwrap_or(0)
                    }
                    _ => 0,
                };
                remaining -= carry;
                if remaining > 0 { PlanSlot::Yardage(remaining) } else { PlanSlot::Holed }
            }
        };

        // Three consecutive zero-yardage steps force early termination; the
        // step that crossed the limit shows the inactive marker instead of 0.
        if matches!(after, PlanSlot::Holed) {
            zero_streak += 1;
            if zero_streak > 2 {
                terminated = true;
                after = PlanSlot::Inactive;
            }
        }

        slots[1 + 2 * stroke] = club;
        slots[2 + 2 * stroke] = after;

        if terminated {
            for slot in slots.iter_mut().skip(3 + 2 * stroke) {
                *slot = PlanSlot::Inactive;
            }
            break;
        }
    }

    ShotPlan::from_slots(slots)
}

/// Plan all 18 holes of a course with per-hole first-stroke overrides.
pub fn plan_course(
    course: &Course,
    clubs: &ClubDistanceTable,
    default_driver: &str,
    overrides: &[Option<String>; HOLE_COUNT],
) -> [ShotPlan; HOLE_COUNT] {
    std::array::from_fn(|h| {
        plan_hole(course.yardages[h], clubs, default_driver, overrides[h].as_deref())
    })
}

/// First stroke without an override: the selected default driver whenever the
/// hole is long enough for it, otherwise the best fit over the full table.
fn first_stroke_club(
    clubs: &ClubDistanceTable,
    default_driver: &str,
    remaining: i32,
    driver_consumed: &mut bool,
) -> PlanSlot {
    if let Some(driver) = clubs.get(default_driver) {
        if driver.usable_for(remaining) {
            if driver.name.eq_ignore_ascii_case(DRIVER_LABEL) {
                *driver_consumed = true;
            }
            return PlanSlot::Club(driver.name.clone());
        }
    }
    best_fit(&clubs.by_threshold_desc(), remaining)
}

/// Strokes 2..6: the driver-labeled club is excluded once consumed, and the
/// preferred follow-up subset is tried first after a drive.
fn later_stroke_club(clubs: &ClubDistanceTable, remaining: i32, driver_consumed: bool) -> PlanSlot {
    let candidates: Vec<&ClubCapability> = clubs
        .by_threshold_desc()
        .into_iter()
        .filter(|c| !driver_consumed || !c.name.eq_ignore_ascii_case(DRIVER_LABEL))
        .collect();

    if driver_consumed {
        let preferred = candidates.iter().find(|c| {
            c.usable_for(remaining)
                && DRIVER_FALLBACKS.iter().any(|f| c.name.eq_ignore_ascii_case(f))
        });
        if let Some(club) = preferred {
            return PlanSlot::Club(club.name.clone());
        }
    }
    best_fit(&candidates, remaining)
}

/// First candidate whose threshold fits the remaining distance; the
/// smallest-threshold candidate as a floor fallback; `Unknown` when there are
/// no candidates at all. `candidates` must be sorted threshold-descending.
fn best_fit(candidates: &[&ClubCapability], remaining: i32) -> PlanSlot {
    if let Some(club) = candidates.iter().find(|c| c.usable_for(remaining)) {
        return PlanSlot::Club(club.name.clone());
    }
    match candidates.last() {
        Some(club) => PlanSlot::Club(club.name.clone()),
        None => PlanSlot::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ClubDistanceTable {
        ClubDistanceTable::from_entries([
            ClubCapability::new("Drive", 230),
            ClubCapability::new("3 Wood", 215),
            ClubCapability::new("5 Iron", 180),
            ClubCapability::new("7 Iron", 150),
            ClubCapability::new("Wedge", 90),
        ])
        .unwrap()
    }

    fn clubs_of(plan: &ShotPlan) -> Vec<PlanSlot> {
        (0..MAX_STROKES).map(|s| plan.club(s).clone()).collect()
    }

    #[test]
    fn test_long_hole_uses_default_driver_then_best_fit() {
        let clubs = ClubDistanceTable::from_entries([
            ClubCapability::new("Drive", 230),
            ClubCapability::new("7 Iron", 150),
            ClubCapability::new("Putt-range", 0),
        ])
        .unwrap();
        let plan = plan_hole(400, &clubs, "Drive", None);

        assert_eq!(*plan.club(0), PlanSlot::Club("Drive".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Yardage(170));
        // Second stroke: best fit <= 170 with Drive excluded.
        assert_eq!(*plan.club(1), PlanSlot::Club("7 Iron".to_string()));
        assert_eq!(*plan.yardage_after(1), PlanSlot::Yardage(20));
    }

    #[test]
    fn test_zero_yardage_hole_is_two_putts_then_inactive() {
        let plan = plan_hole(0, &table(), "Drive", None);

        assert_eq!(plan.slots()[0], PlanSlot::Holed);
        assert_eq!(
            clubs_of(&plan),
            vec![
                PlanSlot::Putt,
                PlanSlot::Putt,
                PlanSlot::Inactive,
                PlanSlot::Inactive,
                PlanSlot::Inactive,
                PlanSlot::Inactive,
            ]
        );
        // The putt that crossed the zero-streak limit shows the marker.
        assert_eq!(*plan.yardage_after(0), PlanSlot::Holed);
        assert_eq!(*plan.yardage_after(1), PlanSlot::Inactive);
    }

    #[test]
    fn test_empty_table_degrades_to_unknown() {
        let clubs = ClubDistanceTable::new();
        let plan = plan_hole(300, &clubs, "Drive", None);

        for stroke in 0..MAX_STROKES {
            assert_eq!(*plan.club(stroke), PlanSlot::Unknown);
            // Unknown carries nothing, so the yardage never moves.
            assert_eq!(*plan.yardage_after(stroke), PlanSlot::Yardage(300));
        }
    }

    #[test]
    fn test_driver_excluded_after_first_drive() {
        let plan = plan_hole(520, &table(), "Drive", None);

        assert_eq!(*plan.club(0), PlanSlot::Club("Drive".to_string()));
        for stroke in 1..MAX_STROKES {
            assert_ne!(*plan.club(stroke), PlanSlot::Club("Drive".to_string()));
        }
        // 290 left after the drive: the preferred follow-up subset wins.
        assert_eq!(*plan.club(1), PlanSlot::Club("3 Wood".to_string()));
    }

    #[test]
    fn test_driver_restriction_keys_on_literal_label() {
        // Default driver named "Driver" never trips the driver-consumed
        // restriction, so nothing is excluded on later strokes.
        let clubs = ClubDistanceTable::from_entries([
            ClubCapability::new("Driver", 230),
            ClubCapability::new("Wedge", 90),
        ])
        .unwrap();
        let plan = plan_hole(700, &clubs, "Driver", None);

        assert_eq!(*plan.club(0), PlanSlot::Club("Driver".to_string()));
        assert_eq!(*plan.club(1), PlanSlot::Club("Driver".to_string()));
    }

    #[test]
    fn test_short_hole_skips_default_driver() {
        let plan = plan_hole(160, &table(), "Drive", None);

        // 160 < 230: fall back to best fit over the full table. Since the
        // default-driver rule never chose the driver, nothing is excluded.
        assert_eq!(*plan.club(0), PlanSlot::Club("7 Iron".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Yardage(10));
    }

    #[test]
    fn test_floor_fallback_picks_smallest_threshold() {
        let plan = plan_hole(40, &table(), "Drive", None);

        // Nothing fits 40 yards; the smallest-threshold club is the floor.
        assert_eq!(*plan.club(0), PlanSlot::Club("Wedge".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Holed);
        assert_eq!(*plan.club(1), PlanSlot::Putt);
        assert_eq!(*plan.club(2), PlanSlot::Putt);
        assert_eq!(*plan.club(3), PlanSlot::Inactive);
    }

    #[test]
    fn test_override_replaces_first_stroke_without_validation() {
        let plan = plan_hole(400, &table(), "Drive", Some("Wedge"));

        assert_eq!(*plan.club(0), PlanSlot::Club("Wedge".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Yardage(310));
    }

    #[test]
    fn test_override_unknown_club_carries_nothing() {
        let plan = plan_hole(400, &table(), "Drive", Some("Borrowed Putter"));

        assert_eq!(*plan.club(0), PlanSlot::Club("Borrowed Putter".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Yardage(400));
    }

    #[test]
    fn test_empty_override_means_no_override() {
        let plan = plan_hole(400, &table(), "Drive", Some(""));
        assert_eq!(*plan.club(0), PlanSlot::Club("Drive".to_string()));
    }

    #[test]
    fn test_override_does_not_consume_driver() {
        // The driver-consumed flag is only set by the default-driver rule, so
        // an explicit "Drive" override leaves the driver available later.
        let plan = plan_hole(700, &table(), "3 Wood", Some("Drive"));

        assert_eq!(*plan.club(0), PlanSlot::Club("Drive".to_string()));
        assert_eq!(*plan.yardage_after(0), PlanSlot::Yardage(470));
        assert_eq!(*plan.club(1), PlanSlot::Club("Drive".to_string()));
    }

    #[test]
    fn test_plan_course_applies_per_hole_overrides() {
        let course = Course::from_parts(
            "Pine Ridge",
            "Blue",
            6400,
            72,
            70.8,
            128,
            vec![1; 18],
            vec![4; 18],
            vec![400; 18],
        )
        .unwrap();
        let mut overrides: [Option<String>; HOLE_COUNT] = std::array::from_fn(|_| None);
        overrides[2] = Some("Wedge".to_string());

        let plans = plan_course(&course, &table(), "Drive", &overrides);

        assert_eq!(*plans[0].club(0), PlanSlot::Club("Drive".to_string()));
        assert_eq!(*plans[2].club(0), PlanSlot::Club("Wedge".to_string()));
    }
}
