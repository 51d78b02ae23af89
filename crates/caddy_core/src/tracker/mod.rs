//! Recalculation & Highlight Tracker
//!
//! Keeps the per-session planning state - previous per-hole stroke counts,
//! the selected default driver, per-hole override selections and the current
//! highlight markers - and recomputes plans when an input changes.
//!
//! The state is an explicit owned value passed into and returned from every
//! operation; there is no ambient or static state. Callers serialize access
//! (the driving event source is sequential user input).
//!
//! Two recompute kinds exist: a global pass over all 18 holes (driver change,
//! override reset, initial plan) that diffs against the remembered baseline
//! and marks changed holes as global changes, and a single-hole pass
//! (override change) that marks only the affected hole as a local change.
//! The tracker emits highlight categories; colors belong to the presentation
//! layer.

use serde::{Deserialize, Serialize};

use crate::engine::{count_course, count_strokes, plan_course, plan_hole, total_strokes, ShotPlan};
use crate::models::course::{Course, HOLE_COUNT};
use crate::models::ClubDistanceTable;

/// Why a hole's stroke count is visually distinguished. Categories are
/// mutually exclusive per hole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// No change to distinguish.
    #[default]
    None,
    /// Count changed under a course-wide input change (driver swap or
    /// override reset).
    GlobalChange,
    /// Count changed under this hole's own override selection.
    LocalChange,
}

/// Result of a global recompute over all 18 holes.
#[derive(Debug, Clone)]
pub struct CourseRecalculation {
    pub plans: [ShotPlan; HOLE_COUNT],
    pub counts: [u32; HOLE_COUNT],
    pub highlights: [Highlight; HOLE_COUNT],
    pub total: u32,
}

/// Result of a single-hole recompute.
#[derive(Debug, Clone)]
pub struct HoleRecalculation {
    /// 0-based hole index.
    pub hole: usize,
    pub plan: ShotPlan,
    pub count: u32,
    pub highlight: Highlight,
}

/// Mutable planning-session state, scoped to one course and one sitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculationState {
    default_driver: String,
    overrides: [Option<String>; HOLE_COUNT],
    previous_counts: Option<[u32; HOLE_COUNT]>,
    highlights: [Highlight; HOLE_COUNT],
}

impl RecalculationState {
    /// Fresh session state with no baseline and no overrides.
    pub fn new(default_driver: impl Into<String>) -> Self {
        Self {
            default_driver: default_driver.into(),
            overrides: std::array::from_fn(|_| None),
            previous_counts: None,
            highlights: [Highlight::None; HOLE_COUNT],
        }
    }

    pub fn default_driver(&self) -> &str {
        &self.default_driver
    }

    /// Override selection for a 0-based hole index, if any.
    pub fn override_for(&self, hole: usize) -> Option<&str> {
        self.overrides[hole].as_deref()
    }

    pub fn highlights(&self) -> &[Highlight; HOLE_COUNT] {
        &self.highlights
    }

    /// Remembered per-hole counts; absent until the first global recompute.
    pub fn previous_counts(&self) -> Option<&[u32; HOLE_COUNT]> {
        self.previous_counts.as_ref()
    }

    /// Running stroke total over the remembered counts.
    pub fn total(&self) -> Option<u32> {
        self.previous_counts.as_ref().map(total_strokes)
    }

    /// Global recompute: plan all 18 holes with each hole's own override and
    /// the current default driver, then diff against the remembered baseline.
    ///
    /// Holes whose count changed are marked [`Highlight::GlobalChange`]; all
    /// other markers are cleared. With no baseline yet (first plan of the
    /// session) nothing is marked - the baseline is established silently.
    pub fn recompute_all(
        &mut self,
        course: &Course,
        clubs: &ClubDistanceTable,
    ) -> CourseRecalculation {
        let plans = plan_course(course, clubs, &self.default_driver, &self.overrides);
        let counts = count_course(&plans);

        let mut highlights = [Highlight::None; HOLE_COUNT];
        if let Some(previous) = self.previous_counts {
            for hole in 0..HOLE_COUNT {
                if previous[hole] != counts[hole] {
                    highlights[hole] = Highlight::GlobalChange;
                }
            }
        }
        log::debug!(
            "global recompute for {}: {} holes changed",
            course.name,
            highlights.iter().filter(|h| **h != Highlight::None).count()
        );

        self.previous_counts = Some(counts);
        self.highlights = highlights;
        CourseRecalculation { plans, counts, highlights, total: total_strokes(&counts) }
    }

    /// Driver-change event: select a new default driver, drop every per-hole
    /// override, and run a global recompute.
    pub fn change_default_driver(
        &mut self,
        driver: impl Into<String>,
        course: &Course,
        clubs: &ClubDistanceTable,
    ) -> CourseRecalculation {
        self.default_driver = driver.into();
        self.overrides = std::array::from_fn(|_| None);
        self.recompute_all(course, clubs)
    }

    /// Override-reset event: drop every per-hole override and run a global
    /// recompute.
    pub fn clear_overrides(
        &mut self,
        course: &Course,
        clubs: &ClubDistanceTable,
    ) -> CourseRecalculation {
        self.overrides = std::array::from_fn(|_| None);
        self.recompute_all(course, clubs)
    }

    /// Override-change event for one hole (0-based index; out of range is a
    /// programming error and panics).
    ///
    /// Replans only the affected hole. Its marker becomes
    /// [`Highlight::LocalChange`] only if the count changed from the
    /// remembered value, superseding any stale global marker; an unchanged
    /// count leaves the existing marker in place. Other holes are untouched.
    pub fn change_hole_override(
        &mut self,
        hole: usize,
        club: Option<&str>,
        course: &Course,
        clubs: &ClubDistanceTable,
    ) -> HoleRecalculation {
        self.overrides[hole] = club.map(str::to_string);

        let plan = plan_hole(
            course.yardages[hole],
            clubs,
            &self.default_driver,
            self.overrides[hole].as_deref(),
        );
        let count = count_strokes(&plan);

        let changed = match &mut self.previous_counts {
            Some(previous) => {
                let changed = previous[hole] != count;
                previous[hole] = count;
                changed
            }
            // No baseline yet: nothing to diff against, nothing to mark.
            None => false,
        };
        if changed {
            self.highlights[hole] = Highlight::LocalChange;
        }
        log::debug!(
            "hole {} override set to {:?}: count {} ({})",
            hole + 1,
            club,
            count,
            if changed { "changed" } else { "unchanged" }
        );

        HoleRecalculation { hole, plan, count, highlight: self.highlights[hole] }
    }
}
