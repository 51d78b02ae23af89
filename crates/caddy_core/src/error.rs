use thiserror::Error;

/// Validation failures for course records handed in by collaborators.
///
/// The planning engine itself never fails (it degrades to sentinel slots);
/// these errors only arise at the model boundary, before planning starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("course name must not be empty")]
    EmptyName,

    #[error("tee name must not be empty")]
    EmptyTee,

    #[error("course must have exactly {expected} hole {field} entries, found {found}")]
    WrongHoleCount { field: &'static str, expected: usize, found: usize },
}

/// Validation failures for the club distance table.
///
/// Uniqueness of club names is the only invariant the table enforces;
/// parseability of source data is a caller concern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClubTableError {
    #[error("duplicate club name: {0}")]
    DuplicateName(String),
}
