use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// Holes per course. Courses with any other hole count are rejected at the
/// model boundary.
pub const HOLE_COUNT: usize = 18;

/// One course as played from one tee: header data plus the three per-hole
/// arrays the planner consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub tee: String,
    pub yardage: u32,
    pub par: u32,
    pub rating: f64,
    pub slope: u32,
    pub handicaps: [u32; HOLE_COUNT],
    pub pars: [u32; HOLE_COUNT],
    pub yardages: [u32; HOLE_COUNT],
}

impl Course {
    /// Build a course from collaborator-supplied sequences, validating what
    /// the planner assumes: non-empty name and tee, exactly 18 entries per
    /// per-hole list.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        name: impl Into<String>,
        tee: impl Into<String>,
        yardage: u32,
        par: u32,
        rating: f64,
        slope: u32,
        handicaps: Vec<u32>,
        pars: Vec<u32>,
        yardages: Vec<u32>,
    ) -> Result<Self, CourseError> {
        let name = name.into();
        let tee = tee.into();
        if name.trim().is_empty() {
            return Err(CourseError::EmptyName);
        }
        if tee.trim().is_empty() {
            return Err(CourseError::EmptyTee);
        }

        Ok(Self {
            name,
            tee,
            yardage,
            par,
            rating,
            slope,
            handicaps: hole_array("handicap", handicaps)?,
            pars: hole_array("par", pars)?,
            yardages: hole_array("yardage", yardages)?,
        })
    }

    /// Total par over the 18 holes.
    pub fn par_total(&self) -> u32 {
        self.pars.iter().sum()
    }
}

fn hole_array(field: &'static str, values: Vec<u32>) -> Result<[u32; HOLE_COUNT], CourseError> {
    <[u32; HOLE_COUNT]>::try_from(values).map_err(|v: Vec<u32>| CourseError::WrongHoleCount {
        field,
        expected: HOLE_COUNT,
        found: v.len(),
    })
}
