//! Domain entities. People who give and receive grades.
//!
//! Course lists are plain appendable vectors: duplicates are allowed and
//! nothing checks a course name against a registry.

use super::grade_book::{Gradable, GradeBook};
use serde::{Deserialize, Serialize};

/// Identity shared by every role.
pub trait Person {
    fn name(&self) -> &str;
    fn surname(&self) -> &str;
}

/// A person attached to courses: lecturers and reviewers.
pub trait Mentor: Person {
    fn courses_attached(&self) -> &[String];

    fn is_attached_to(&self, course: &str) -> bool {
        self.courses_attached().iter().any(|c| c == course)
    }
}

/// A student. Receives homework grades from reviewers, rates lecturers for finished courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    name: String,
    surname: String,
    pub gender: String,
    #[serde(default)]
    pub courses_in_progress: Vec<String>,
    #[serde(default)]
    pub finished_courses: Vec<String>,
    #[serde(default)]
    pub grades: GradeBook,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender: gender.into(),
            courses_in_progress: Vec::new(),
            finished_courses: Vec::new(),
            grades: GradeBook::new(),
        }
    }

    /// Append to `courses_in_progress`.
    pub fn enroll(&mut self, course: impl Into<String>) {
        self.courses_in_progress.push(course.into());
    }

    /// Append to `finished_courses`. The course stays in progress if it was there.
    pub fn finish_course(&mut self, course: impl Into<String>) {
        self.finished_courses.push(course.into());
    }

    pub fn is_studying(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    pub fn has_finished(&self, course: &str) -> bool {
        self.finished_courses.iter().any(|c| c == course)
    }
}

/// A mentor who is graded by students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecturer {
    name: String,
    surname: String,
    #[serde(default)]
    pub courses_attached: Vec<String>,
    #[serde(default)]
    pub grades: GradeBook,
}

impl Lecturer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            courses_attached: Vec::new(),
            grades: GradeBook::new(),
        }
    }

    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.courses_attached.push(course.into());
    }
}

/// A mentor who grades student homework. Holds no grade book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    name: String,
    surname: String,
    #[serde(default)]
    pub courses_attached: Vec<String>,
}

impl Reviewer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            courses_attached: Vec::new(),
        }
    }

    pub fn attach_course(&mut self, course: impl Into<String>) {
        self.courses_attached.push(course.into());
    }
}

impl Person for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }
}

impl Person for Lecturer {
    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }
}

impl Person for Reviewer {
    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }
}

impl Mentor for Lecturer {
    fn courses_attached(&self) -> &[String] {
        &self.courses_attached
    }
}

impl Mentor for Reviewer {
    fn courses_attached(&self) -> &[String] {
        &self.courses_attached
    }
}

impl Gradable for Student {
    fn grade_book(&self) -> &GradeBook {
        &self.grades
    }

    fn grade_book_mut(&mut self) -> &mut GradeBook {
        &mut self.grades
    }
}

impl Gradable for Lecturer {
    fn grade_book(&self) -> &GradeBook {
        &self.grades
    }

    fn grade_book_mut(&mut self) -> &mut GradeBook {
        &mut self.grades
    }
}
