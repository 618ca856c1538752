//! Core domain layer. No I/O.
//!
//! Entities, the grade book capability and the rating rules live here.
//! Dependencies flow inward.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod grade_book;
pub mod presentation;
pub mod rating;
pub mod roster;

pub use aggregate::course_average_grade;
pub use entities::{Lecturer, Mentor, Person, Reviewer, Student};
pub use errors::{DomainError, RatingError};
pub use grade_book::{Gradable, Grade, GradeBook, by_average};
pub use presentation::{Labels, Locale, Render};
pub use rating::{GRADE_RANGE, HomeworkTarget, LecturerTarget};
pub use roster::{Entry, RatingAction, Roster, Scenario};
