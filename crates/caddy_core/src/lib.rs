//! # caddy_core - Deterministic Golf Shot-Planning Engine
//!
//! This library plans club usage per hole of an 18-hole golf course and
//! tracks how changing club choices affects stroke counts, with a JSON API
//! for easy integration with host UIs.
//!
//! ## Features
//! - 100% deterministic planning (same inputs = same plan)
//! - Fixed 13-slot per-hole shot plans ready for grid rendering
//! - Change tracking that classifies stroke-count changes as global
//!   (driver swap) or local (single-hole override)
//! - JSON API carrying session state in and out of every call
//!
//! Rendering, PDF export, persistence and file sync are host concerns; this
//! crate consumes parsed course/club data and produces computed results.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod tracker;

// Re-export main API functions
pub use api::{change_club_json, change_driver_json, plan_course_json};

// Re-export the planning core
pub use engine::{
    count_course, count_strokes, plan_course, plan_hole, total_strokes, PlanSlot, ShotPlan,
    MAX_STROKES, PLAN_LEN,
};

// Re-export models and errors
pub use error::{ClubTableError, CourseError};
pub use models::{ClubCapability, ClubDistanceTable, Course, HOLE_COUNT};

// Re-export session tracking
pub use tracker::{CourseRecalculation, Highlight, HoleRecalculation, RecalculationState};
