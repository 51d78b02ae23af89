//! Shot-Planning Engine
//!
//! Deterministic per-hole stroke simulation. Given a hole's yardage, the
//! club distance table, the selected default driver and an optional
//! first-stroke override, [`plan_hole`] produces the fixed 13-slot
//! [`ShotPlan`] for that hole; [`scoring`] derives stroke counts from it.
//!
//! The engine is stateless across holes: every invocation reads only its
//! arguments and builds a fresh plan. Session state (previous counts,
//! override selections, highlight markers) lives in [`crate::tracker`].

pub mod planner;
pub mod scoring;
pub mod shot_plan;


pub use planner::{plan_course, plan_hole};
pub use scoring::{count_course, count_strokes, total_strokes};
pub use shot_plan::{PlanSlot, ShotPlan, MAX_STROKES, PLAN_LEN};
