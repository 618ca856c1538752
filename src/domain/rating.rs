//! Rating protocol. The only place grades are validated.
//!
//! - Student -> Lecturer: only for a finished course the lecturer is attached to.
//! - Reviewer -> Student: only for an in-progress course the reviewer is attached to.
//!
//! Targets are tagged by role, so a reviewer handed to `rate_lecturer` (or a
//! lecturer handed to `rate_hw`) is refused even though it looks the same.
//! A refused call leaves every grade book untouched.

use super::entities::{Lecturer, Mentor, Person, Reviewer, Student};
use super::errors::RatingError;
use super::grade_book::{Gradable, Grade};
use std::ops::RangeInclusive;
use tracing::debug;

/// Grades accepted by the protocol.
pub const GRADE_RANGE: RangeInclusive<Grade> = 1..=10;

/// Mentor handed to a student for rating.
#[derive(Debug)]
pub enum LecturerTarget<'a> {
    Lecturer(&'a mut Lecturer),
    Reviewer(&'a mut Reviewer),
}

impl<'a> From<&'a mut Lecturer> for LecturerTarget<'a> {
    fn from(lecturer: &'a mut Lecturer) -> Self {
        Self::Lecturer(lecturer)
    }
}

impl<'a> From<&'a mut Reviewer> for LecturerTarget<'a> {
    fn from(reviewer: &'a mut Reviewer) -> Self {
        Self::Reviewer(reviewer)
    }
}

/// Gradable person handed to a reviewer for homework grading.
#[derive(Debug)]
pub enum HomeworkTarget<'a> {
    Student(&'a mut Student),
    Lecturer(&'a mut Lecturer),
}

impl<'a> From<&'a mut Student> for HomeworkTarget<'a> {
    fn from(student: &'a mut Student) -> Self {
        Self::Student(student)
    }
}

impl<'a> From<&'a mut Lecturer> for HomeworkTarget<'a> {
    fn from(lecturer: &'a mut Lecturer) -> Self {
        Self::Lecturer(lecturer)
    }
}

fn check_range(grade: Grade) -> Result<(), RatingError> {
    if GRADE_RANGE.contains(&grade) {
        Ok(())
    } else {
        Err(RatingError::GradeOutOfRange(grade))
    }
}

impl Student {
    /// Rate a lecturer for a finished course.
    pub fn try_rate_lecturer<'a>(
        &self,
        target: impl Into<LecturerTarget<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        check_range(grade)?;
        let lecturer = match target.into() {
            LecturerTarget::Lecturer(lecturer) => lecturer,
            LecturerTarget::Reviewer(_) => return Err(RatingError::NotALecturer),
        };
        if !self.has_finished(course) {
            return Err(RatingError::CourseNotFinished);
        }
        if !lecturer.is_attached_to(course) {
            return Err(RatingError::CourseNotAttached);
        }
        lecturer.record_grade(course, grade);
        Ok(())
    }

    /// Boolean form of [`Student::try_rate_lecturer`].
    pub fn rate_lecturer<'a>(
        &self,
        target: impl Into<LecturerTarget<'a>>,
        course: &str,
        grade: Grade,
    ) -> bool {
        match self.try_rate_lecturer(target, course, grade) {
            Ok(()) => {
                debug!(student = %self.surname(), course, grade, "lecturer rated");
                true
            }
            Err(reason) => {
                debug!(
                    student = %self.surname(),
                    course,
                    grade,
                    %reason,
                    "lecturer rating refused"
                );
                false
            }
        }
    }
}

impl Reviewer {
    /// Grade a student's homework for a course in progress.
    pub fn try_rate_hw<'a>(
        &self,
        target: impl Into<HomeworkTarget<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        check_range(grade)?;
        let student = match target.into() {
            HomeworkTarget::Student(student) => student,
            HomeworkTarget::Lecturer(_) => return Err(RatingError::NotAStudent),
        };
        if !self.is_attached_to(course) {
            return Err(RatingError::CourseNotAttached);
        }
        if !student.is_studying(course) {
            return Err(RatingError::CourseNotInProgress);
        }
        student.record_grade(course, grade);
        Ok(())
    }

    /// Boolean form of [`Reviewer::try_rate_hw`].
    pub fn rate_hw<'a>(
        &self,
        target: impl Into<HomeworkTarget<'a>>,
        course: &str,
        grade: Grade,
    ) -> bool {
        match self.try_rate_hw(target, course, grade) {
            Ok(()) => {
                debug!(reviewer = %self.surname(), course, grade, "homework graded");
                true
            }
            Err(reason) => {
                debug!(
                    reviewer = %self.surname(),
                    course,
                    grade,
                    %reason,
                    "homework grade refused"
                );
                false
            }
        }
    }
}
