//! Derived stroke statistics over finished shot plans.

use super::shot_plan::{ShotPlan, MAX_STROKES};
use crate::models::course::HOLE_COUNT;

/// Strokes taken in one plan: club slots that are not the inactive marker.
pub fn count_strokes(plan: &ShotPlan) -> u32 {
    (0..MAX_STROKES).filter(|&s| plan.club(s).is_stroke()).count() as u32
}

/// Per-hole stroke counts for a full course of plans.
pub fn count_course(plans: &[ShotPlan; HOLE_COUNT]) -> [u32; HOLE_COUNT] {
    std::array::from_fn(|h| count_strokes(&plans[h]))
}

/// Running total over per-hole counts.
pub fn total_strokes(counts: &[u32; HOLE_COUNT]) -> u32 {
    counts.iter().sum()
}
