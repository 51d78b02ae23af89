use serde::{Deserialize, Serialize};

use crate::engine::PLAN_LEN;
use crate::models::course::HOLE_COUNT;
use crate::models::{ClubCapability, ClubDistanceTable, Course};
use crate::tracker::{CourseRecalculation, Highlight, RecalculationState};

/// Course record as supplied over the wire: per-hole lists arrive as plain
/// sequences and are validated during conversion.
#[derive(Debug, Deserialize)]
pub struct CourseData {
    pub name: String,
    pub tee: String,
    pub yardage: u32,
    pub par: u32,
    pub rating: f64,
    pub slope: u32,
    pub handicaps: Vec<u32>,
    pub pars: Vec<u32>,
    pub yardages: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PlanCourseRequest {
    pub schema_version: u8,
    pub course: CourseData,
    pub clubs: Vec<ClubCapability>,
    pub default_driver: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeDriverRequest {
    pub schema_version: u8,
    pub course: CourseData,
    pub clubs: Vec<ClubCapability>,
    pub default_driver: String,
    pub state: RecalculationState,
}

#[derive(Debug, Deserialize)]
pub struct ChangeClubRequest {
    pub schema_version: u8,
    pub course: CourseData,
    pub clubs: Vec<ClubCapability>,
    /// 1-based hole number, 1..=18.
    pub hole: usize,
    /// Override club for the hole's first stroke; null clears the override.
    #[serde(default)]
    pub club: Option<String>,
    pub state: RecalculationState,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    /// 18 rendered 13-string rows, one per hole.
    pub rows: Vec<[String; PLAN_LEN]>,
    pub stroke_counts: Vec<u32>,
    pub total_strokes: u32,
    pub highlights: Vec<Highlight>,
    pub state: RecalculationState,
}

#[derive(Debug, Serialize)]
pub struct ChangeClubResponse {
    /// 1-based hole number the event applied to.
    pub hole: usize,
    pub row: [String; PLAN_LEN],
    pub stroke_count: u32,
    pub highlights: Vec<Highlight>,
    pub total_strokes: Option<u32>,
    pub state: RecalculationState,
}

/// Plan a course from scratch: builds a fresh session state, runs the silent
/// baseline pass, and returns the rendered rows plus the state to carry into
/// later change events.
pub fn plan_course_json(request_json: &str) -> Result<String, String> {
    let request: PlanCourseRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let course = convert_course(request.course)?;
    let clubs = convert_clubs(request.clubs)?;
    log::debug!("planning course '{}' with driver '{}'", course.name, request.default_driver);

    let mut state = RecalculationState::new(request.default_driver);
    let recalc = state.recompute_all(&course, &clubs);
    to_json(&course_response(recalc, state))
}

/// Driver-change event against a carried session state.
pub fn change_driver_json(request_json: &str) -> Result<String, String> {
    let request: ChangeDriverRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let course = convert_course(request.course)?;
    let clubs = convert_clubs(request.clubs)?;

    let mut state = request.state;
    let recalc = state.change_default_driver(request.default_driver, &course, &clubs);
    to_json(&course_response(recalc, state))
}

/// Single-hole override event against a carried session state.
pub fn change_club_json(request_json: &str) -> Result<String, String> {
    let request: ChangeClubRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    if request.hole < 1 || request.hole > HOLE_COUNT {
        return Err(format!("Hole number out of range 1..=18: {}", request.hole));
    }
    let course = convert_course(request.course)?;
    let clubs = convert_clubs(request.clubs)?;

    let mut state = request.state;
    let recalc =
        state.change_hole_override(request.hole - 1, request.club.as_deref(), &course, &clubs);

    let response = ChangeClubResponse {
        hole: request.hole,
        row: recalc.plan.render_row(),
        stroke_count: recalc.count,
        highlights: state.highlights().to_vec(),
        total_strokes: state.total(),
        state,
    };
    to_json(&response)
}

fn check_schema_version(version: u8) -> Result<(), String> {
    if version != 1 {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

fn convert_course(data: CourseData) -> Result<Course, String> {
    Course::from_parts(
        data.name,
        data.tee,
        data.yardage,
        data.par,
        data.rating,
        data.slope,
        data.handicaps,
        data.pars,
        data.yardages,
    )
    .map_err(|e| format!("Course validation failed: {}", e))
}

fn convert_clubs(entries: Vec<ClubCapability>) -> Result<ClubDistanceTable, String> {
    ClubDistanceTable::from_entries(entries)
        .map_err(|e| format!("Club table validation failed: {}", e))
}

fn course_response(recalc: CourseRecalculation, state: RecalculationState) -> CourseResponse {
    CourseResponse {
        rows: recalc.plans.iter().map(|p| p.render_row()).collect(),
        stroke_counts: recalc.counts.to_vec(),
        total_strokes: recalc.total,
        highlights: recalc.highlights.to_vec(),
        state,
    }
}

fn to_json<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| format!("Serialization error: {}", e))
}
