//! Grade book capability shared by students and lecturers.
//!
//! A grade book maps course name -> grades in the order they were given.
//! Recording is unchecked: range and eligibility belong to the rating protocol.
//! Anything holding a grade book is `Gradable` and is ordered by its average,
//! across roles.

use super::entities::{Lecturer, Student};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Single grade value. Valid protocol grades are 1..=10;
/// the book itself stores whatever it is given.
pub type Grade = i32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeBook {
    courses: BTreeMap<String, Vec<Grade>>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `grade` to `course`, creating the course entry on first use.
    pub fn record(&mut self, course: &str, grade: Grade) {
        self.courses
            .entry(course.to_string())
            .or_default()
            .push(grade);
    }

    /// Grades for `course`; empty when the course has none.
    pub fn grades(&self, course: &str) -> &[Grade] {
        self.courses.get(course).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Grade])> {
        self.courses
            .iter()
            .map(|(course, grades)| (course.as_str(), grades.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.courses.values().all(Vec::is_empty)
    }

    /// (sum, count) of the grades recorded for one course.
    pub fn course_totals(&self, course: &str) -> (i64, usize) {
        let grades = self.grades(course);
        (grades.iter().map(|&g| i64::from(g)).sum(), grades.len())
    }

    /// (sum, count) over every course.
    pub fn totals(&self) -> (i64, usize) {
        self.courses.values().fold((0, 0), |(sum, count), grades| {
            (
                sum + grades.iter().map(|&g| i64::from(g)).sum::<i64>(),
                count + grades.len(),
            )
        })
    }

    /// Mean over all courses. 0.0 when nothing has been recorded.
    pub fn average(&self) -> f64 {
        mean(self.totals())
    }
}

/// `sum / count`, or 0.0 for an empty set.
pub(crate) fn mean((sum, count): (i64, usize)) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Anything that owns a grade book.
pub trait Gradable {
    fn grade_book(&self) -> &GradeBook;

    fn grade_book_mut(&mut self) -> &mut GradeBook;

    /// Computed on every call, never cached.
    fn average_grade(&self) -> f64 {
        self.grade_book().average()
    }

    /// Unchecked append. Use the rating protocol for validated grading.
    fn record_grade(&mut self, course: &str, grade: Grade) {
        self.grade_book_mut().record(course, grade);
    }
}

/// Total comparator by average grade, for sorting mixed collections.
pub fn by_average<A, B>(a: &A, b: &B) -> Ordering
where
    A: Gradable + ?Sized,
    B: Gradable + ?Sized,
{
    a.average_grade().total_cmp(&b.average_grade())
}

impl<'a> PartialEq for dyn Gradable + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl<'a> PartialOrd for dyn Gradable + 'a {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

// Equality and order come from the average alone, so a student can be
// compared with a lecturer directly.
macro_rules! ordered_by_average {
    ($($lhs:ty => $rhs:ty),+ $(,)?) => {$(
        impl PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                self.average_grade() == other.average_grade()
            }
        }

        impl PartialOrd<$rhs> for $lhs {
            fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                self.average_grade().partial_cmp(&other.average_grade())
            }
        }
    )+};
}

ordered_by_average!(
    Student => Student,
    Student => Lecturer,
    Lecturer => Student,
    Lecturer => Lecturer,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_book_averages_zero() {
        let book = GradeBook::new();
        assert!(book.is_empty());
        assert_eq!(book.average(), 0.0);
        assert_eq!(book.grades("Python"), &[] as &[Grade]);
        assert_eq!(book.course_totals("Python"), (0, 0));
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut book = GradeBook::new();
        book.record("TypeScript", 9);
        book.record("PHP", 8);
        book.record("TypeScript", 6);

        assert_eq!(book.grades("TypeScript"), &[9, 6]);
        assert_eq!(book.grades("PHP"), &[8]);
        assert_eq!(book.courses().collect::<Vec<_>>(), vec!["PHP", "TypeScript"]);
        assert_eq!(book.totals(), (23, 3));
        assert!((book.average() - 7.666_667).abs() < 1e-5);
    }

    #[test]
    fn test_record_is_unchecked() {
        let mut book = GradeBook::new();
        book.record("Python", 15);
        book.record("Python", -1);
        assert_eq!(book.grades("Python"), &[15, -1]);
        assert_eq!(book.average(), 7.0);
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut book = GradeBook::new();
        book.record("Python", 9);
        book.record("Python", 10);
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"Python":[9,10]}"#);
    }

    #[test]
    fn test_cross_role_ordering() {
        let mut student = Student::new("John", "Miller", "male");
        let mut lecturer = Lecturer::new("James", "Martin");
        assert!(student == lecturer);

        student.record_grade("Python", 9);
        lecturer.record_grade("PHP", 8);
        assert!(student > lecturer);
        assert!(lecturer < student);
        assert!(student != lecturer);

        lecturer.record_grade("PHP", 10);
        // both average 9.0 now
        assert!(student == lecturer);
        assert!(student <= lecturer && student >= lecturer);
    }

    #[test]
    fn test_dyn_gradable_comparison_and_sort() {
        let mut a = Student::new("Jane", "Moore", "female");
        a.record_grade("PHP", 6);
        let mut b = Lecturer::new("Jennifer", "Martinez");
        b.record_grade("PHP", 8);
        let c = Student::new("John", "Miller", "male");

        let mut people: Vec<&dyn Gradable> = vec![&b, &c, &a];
        people.sort_by(|x, y| by_average(*x, *y));
        let averages: Vec<f64> = people.iter().map(|p| p.average_grade()).collect();
        assert_eq!(averages, vec![0.0, 6.0, 8.0]);
        assert!(people[0] < people[1]);
        assert!(people[2] > people[1]);
    }
}
