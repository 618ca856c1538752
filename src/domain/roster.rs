//! Roster of people keyed by id, and the serialized scenario that builds it.
//!
//! Ids are unique across all three roles so a rating action can name its
//! target without saying which role it expects.

use super::entities::{Lecturer, Reviewer, Student};
use super::errors::{DomainError, RatingError};
use super::grade_book::Grade;
use super::rating::{GRADE_RANGE, HomeworkTarget, LecturerTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A person plus the id it is referred to by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: String,
    #[serde(flatten)]
    pub person: T,
}

impl<T> Entry<T> {
    pub fn new(id: impl Into<String>, person: T) -> Self {
        Self {
            id: id.into(),
            person,
        }
    }
}

/// One rating attempt, as read from a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RatingAction {
    /// Student rates a lecturer. `lecturer` may name anyone; only a lecturer is graded.
    Lecture {
        student: String,
        lecturer: String,
        course: String,
        grade: Grade,
    },
    /// Reviewer grades homework. `student` may name anyone; only a student is graded.
    Homework {
        reviewer: String,
        student: String,
        course: String,
        grade: Grade,
    },
}

/// Serialized roster plus the rating attempts to replay against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub students: Vec<Entry<Student>>,
    #[serde(default)]
    pub lecturers: Vec<Entry<Lecturer>>,
    #[serde(default)]
    pub reviewers: Vec<Entry<Reviewer>>,
    #[serde(default)]
    pub ratings: Vec<RatingAction>,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Entry<Student>>,
    lecturers: Vec<Entry<Lecturer>>,
    reviewers: Vec<Entry<Reviewer>>,
}

impl Roster {
    /// Fails with `DuplicateId` if any id appears twice, in any role.
    pub fn new(
        students: Vec<Entry<Student>>,
        lecturers: Vec<Entry<Lecturer>>,
        reviewers: Vec<Entry<Reviewer>>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let ids = students
            .iter()
            .map(|e| &e.id)
            .chain(lecturers.iter().map(|e| &e.id))
            .chain(reviewers.iter().map(|e| &e.id));
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(DomainError::DuplicateId(id.clone()));
            }
        }
        Ok(Self {
            students,
            lecturers,
            reviewers,
        })
    }

    pub fn students(&self) -> &[Entry<Student>] {
        &self.students
    }

    pub fn lecturers(&self) -> &[Entry<Lecturer>] {
        &self.lecturers
    }

    pub fn reviewers(&self) -> &[Entry<Reviewer>] {
        &self.reviewers
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        find(&self.students, id)
    }

    pub fn lecturer(&self, id: &str) -> Option<&Lecturer> {
        find(&self.lecturers, id)
    }

    pub fn reviewer(&self, id: &str) -> Option<&Reviewer> {
        find(&self.reviewers, id)
    }

    /// Every course name mentioned anywhere on the roster, sorted and deduplicated.
    pub fn courses(&self) -> Vec<String> {
        let mut courses: Vec<String> = self
            .students
            .iter()
            .flat_map(|e| {
                let s = &e.person;
                s.courses_in_progress
                    .iter()
                    .chain(&s.finished_courses)
                    .cloned()
                    .chain(s.grades.courses().map(str::to_string))
            })
            .chain(self.lecturers.iter().flat_map(|e| {
                e.person
                    .courses_attached
                    .iter()
                    .cloned()
                    .chain(e.person.grades.courses().map(str::to_string))
            }))
            .chain(
                self.reviewers
                    .iter()
                    .flat_map(|e| e.person.courses_attached.iter().cloned()),
            )
            .collect();
        courses.sort();
        courses.dedup();
        courses
    }

    /// Replay one action through the rating protocol.
    ///
    /// `Ok(false)` is a refused rating; `Err` means an id did not resolve.
    pub fn apply(&mut self, action: &RatingAction) -> Result<bool, DomainError> {
        match action {
            RatingAction::Lecture {
                student,
                lecturer,
                course,
                grade,
            } => {
                let rater = find(&self.students, student)
                    .ok_or_else(|| DomainError::UnknownPerson(student.clone()))?;
                let target = if let Some(l) = find_mut(&mut self.lecturers, lecturer) {
                    LecturerTarget::Lecturer(l)
                } else if let Some(r) = find_mut(&mut self.reviewers, lecturer) {
                    LecturerTarget::Reviewer(r)
                } else if find(&self.students, lecturer).is_some() {
                    return Ok(refuse(lecturer, *grade, RatingError::NotALecturer));
                } else {
                    return Err(DomainError::UnknownPerson(lecturer.clone()));
                };
                Ok(rater.rate_lecturer(target, course, *grade))
            }
            RatingAction::Homework {
                reviewer,
                student,
                course,
                grade,
            } => {
                let rater = find(&self.reviewers, reviewer)
                    .ok_or_else(|| DomainError::UnknownPerson(reviewer.clone()))?;
                let target = if let Some(s) = find_mut(&mut self.students, student) {
                    HomeworkTarget::Student(s)
                } else if let Some(l) = find_mut(&mut self.lecturers, student) {
                    HomeworkTarget::Lecturer(l)
                } else if find(&self.reviewers, student).is_some() {
                    return Ok(refuse(student, *grade, RatingError::NotAStudent));
                } else {
                    return Err(DomainError::UnknownPerson(student.clone()));
                };
                Ok(rater.rate_hw(target, course, *grade))
            }
        }
    }
}

impl TryFrom<Scenario> for Roster {
    type Error = DomainError;

    fn try_from(scenario: Scenario) -> Result<Self, Self::Error> {
        Roster::new(scenario.students, scenario.lecturers, scenario.reviewers)
    }
}

/// Target is on the roster but in a role the protocol has no arm for.
/// Range still takes precedence over role, as in the protocol itself.
fn refuse(id: &str, grade: Grade, role: RatingError) -> bool {
    let reason = if GRADE_RANGE.contains(&grade) {
        role
    } else {
        RatingError::GradeOutOfRange(grade)
    };
    debug!(id, grade, %reason, "rating refused");
    false
}

fn find<'a, T>(entries: &'a [Entry<T>], id: &str) -> Option<&'a T> {
    entries.iter().find(|e| e.id == id).map(|e| &e.person)
}

fn find_mut<'a, T>(entries: &'a mut [Entry<T>], id: &str) -> Option<&'a mut T> {
    entries
        .iter_mut()
        .find(|e| e.id == id)
        .map(|e| &mut e.person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gradable;

    fn roster() -> Roster {
        let mut s = Student::new("John", "Miller", "male");
        s.enroll("Python");
        s.finish_course("PHP");
        let mut l = Lecturer::new("Jennifer", "Martinez");
        l.attach_course("PHP");
        let mut r = Reviewer::new("Joseph", "Mitchell");
        r.attach_course("PHP");
        r.attach_course("Python");
        Roster::new(
            vec![Entry::new("student_1", s)],
            vec![Entry::new("lecturer_1", l)],
            vec![Entry::new("reviewer_1", r)],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Roster::new(
            vec![Entry::new("x", Student::new("A", "B", "male"))],
            vec![],
            vec![Entry::new("x", Reviewer::new("C", "D"))],
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn test_apply_lecture_and_homework() {
        let mut roster = roster();
        let lecture = RatingAction::Lecture {
            student: "student_1".into(),
            lecturer: "lecturer_1".into(),
            course: "PHP".into(),
            grade: 8,
        };
        let homework = RatingAction::Homework {
            reviewer: "reviewer_1".into(),
            student: "student_1".into(),
            course: "Python".into(),
            grade: 9,
        };
        assert!(roster.apply(&lecture).unwrap());
        assert!(roster.apply(&homework).unwrap());
        assert_eq!(roster.lecturer("lecturer_1").unwrap().average_grade(), 8.0);
        assert_eq!(roster.student("student_1").unwrap().average_grade(), 9.0);
    }

    #[test]
    fn test_apply_misdirected_roles_are_refused() {
        let mut roster = roster();
        let at_reviewer = RatingAction::Lecture {
            student: "student_1".into(),
            lecturer: "reviewer_1".into(),
            course: "PHP".into(),
            grade: 8,
        };
        let at_lecturer = RatingAction::Homework {
            reviewer: "reviewer_1".into(),
            student: "lecturer_1".into(),
            course: "PHP".into(),
            grade: 8,
        };
        assert!(!roster.apply(&at_reviewer).unwrap());
        assert!(!roster.apply(&at_lecturer).unwrap());
        assert!(roster.lecturer("lecturer_1").unwrap().grades.is_empty());
    }

    #[test]
    fn test_apply_wrong_role_on_roster_is_refused_not_unknown() {
        let mut roster = roster();
        roster
            .students
            .push(Entry::new("student_2", Student::new("Jane", "Moore", "female")));
        let at_student = RatingAction::Lecture {
            student: "student_1".into(),
            lecturer: "student_2".into(),
            course: "PHP".into(),
            grade: 8,
        };
        let at_reviewer = RatingAction::Homework {
            reviewer: "reviewer_1".into(),
            student: "reviewer_1".into(),
            course: "PHP".into(),
            grade: 8,
        };
        assert!(!roster.apply(&at_student).unwrap());
        assert!(!roster.apply(&at_reviewer).unwrap());
        assert!(roster.student("student_2").unwrap().grades.is_empty());
        assert!(roster.student("student_1").unwrap().grades.is_empty());
    }

    #[test]
    fn test_apply_unknown_id() {
        let mut roster = roster();
        let action = RatingAction::Homework {
            reviewer: "nobody".into(),
            student: "student_1".into(),
            course: "Python".into(),
            grade: 9,
        };
        let err = roster.apply(&action).unwrap_err();
        assert!(matches!(err, DomainError::UnknownPerson(id) if id == "nobody"));
    }

    #[test]
    fn test_courses_collects_everything() {
        let roster = roster();
        assert_eq!(roster.courses(), vec!["PHP", "Python"]);
    }

    #[test]
    fn test_scenario_json_shape() {
        let json = r#"{
            "students": [{"id": "s", "name": "John", "surname": "Miller", "gender": "male",
                          "courses_in_progress": ["Python"]}],
            "reviewers": [{"id": "r", "name": "Joseph", "surname": "Mitchell",
                           "courses_attached": ["Python"]}],
            "ratings": [{"kind": "homework", "reviewer": "r", "student": "s",
                         "course": "Python", "grade": 9}]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert!(scenario.lecturers.is_empty());
        assert_eq!(scenario.ratings.len(), 1);

        let actions = scenario.ratings.clone();
        let mut roster = Roster::try_from(scenario).unwrap();
        assert!(roster.apply(&actions[0]).unwrap());
        assert_eq!(roster.student("s").unwrap().grades.grades("Python"), &[9]);
    }
}
