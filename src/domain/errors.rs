//! Domain errors.
//!
//! `RatingError` explains a refused protocol call; `DomainError` covers the
//! roster/scenario plumbing around it. Adapters map their failures into
//! `DomainError`.

use thiserror::Error;

/// Why a rating attempt was refused. Never surfaced as a failure of the
/// boolean protocol calls, only through their `try_*` forms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    #[error("grade {0} is outside 1..=10")]
    GradeOutOfRange(i32),

    #[error("target is not a lecturer")]
    NotALecturer,

    #[error("target is not a student")]
    NotAStudent,

    #[error("course is not among the student's finished courses")]
    CourseNotFinished,

    #[error("course is not among the student's courses in progress")]
    CourseNotInProgress,

    #[error("course is not attached to the mentor")]
    CourseNotAttached,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    #[error("Duplicate roster id: {0}")]
    DuplicateId(String),

    #[error("Report error: {0}")]
    Report(String),
}
