//! Built-in reference scenario: two students, two lecturers, two reviewers,
//! eighteen rating attempts that must be refused followed by eight that succeed.

use crate::domain::{
    DomainError, Entry, Grade, Lecturer, RatingAction, Reviewer, Scenario, Student,
};
use crate::ports::ScenarioSource;

/// Number of leading actions in [`ReferenceScenario`] that the protocol refuses.
pub const REFUSED_ATTEMPTS: usize = 18;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceScenario;

impl ReferenceScenario {
    pub fn new() -> Self {
        Self
    }

    pub fn scenario() -> Scenario {
        let mut john = Student::new("John", "Miller", "male");
        john.enroll("Python");
        john.finish_course("PHP");
        john.finish_course("TypeScript");

        let mut jane = Student::new("Jane", "Moore", "female");
        jane.enroll("PHP");
        jane.enroll("Python");
        jane.finish_course("TypeScript");

        let mut james = Lecturer::new("James", "Martin");
        james.attach_course("Python");

        let mut jennifer = Lecturer::new("Jennifer", "Martinez");
        jennifer.attach_course("PHP");
        jennifer.attach_course("TypeScript");

        let mut joseph = Reviewer::new("Joseph", "Mitchell");
        joseph.attach_course("PHP");
        joseph.attach_course("Python");

        let mut jessica = Reviewer::new("Jessica", "Morris");
        jessica.attach_course("Python");
        jessica.attach_course("TypeScript");

        let ratings = vec![
            // refused: wrong course, unattached lecturer or out-of-range grade
            lecture("student_1", "lecturer_1", "Python", 10),
            lecture("student_1", "lecturer_1", "PHP", 10),
            lecture("student_1", "lecturer_2", "Python", 10),
            lecture("student_1", "lecturer_2", "TypeScript", 0),
            lecture("student_1", "lecturer_2", "TypeScript", -1),
            lecture("student_2", "lecturer_1", "Python", 5),
            lecture("student_2", "lecturer_1", "TypeScript", 5),
            lecture("student_2", "lecturer_2", "PHP", 5),
            lecture("student_2", "lecturer_2", "TypeScript", 15),
            homework("reviewer_1", "student_1", "PHP", 1),
            homework("reviewer_1", "student_1", "Python", -1),
            homework("reviewer_1", "student_1", "TypeScript", 10),
            homework("reviewer_1", "student_2", "TypeScript", 5),
            homework("reviewer_1", "student_2", "PHP", 15),
            homework("reviewer_2", "student_1", "TypeScript", 10),
            homework("reviewer_2", "student_1", "PHP", 10),
            homework("reviewer_2", "student_2", "PHP", 10),
            homework("reviewer_2", "student_2", "TypeScript", 10),
            // accepted
            lecture("student_1", "lecturer_2", "PHP", 8),
            lecture("student_1", "lecturer_2", "TypeScript", 9),
            lecture("student_2", "lecturer_2", "TypeScript", 6),
            homework("reviewer_1", "student_1", "Python", 9),
            homework("reviewer_1", "student_2", "PHP", 6),
            homework("reviewer_1", "student_2", "Python", 8),
            homework("reviewer_2", "student_1", "Python", 10),
            homework("reviewer_2", "student_2", "Python", 10),
        ];

        Scenario {
            students: vec![Entry::new("student_1", john), Entry::new("student_2", jane)],
            lecturers: vec![
                Entry::new("lecturer_1", james),
                Entry::new("lecturer_2", jennifer),
            ],
            reviewers: vec![
                Entry::new("reviewer_1", joseph),
                Entry::new("reviewer_2", jessica),
            ],
            ratings,
        }
    }
}

impl ScenarioSource for ReferenceScenario {
    fn describe(&self) -> String {
        "built-in reference scenario".to_string()
    }

    fn load(&self) -> Result<Scenario, DomainError> {
        Ok(Self::scenario())
    }
}

fn lecture(student: &str, lecturer: &str, course: &str, grade: Grade) -> RatingAction {
    RatingAction::Lecture {
        student: student.to_string(),
        lecturer: lecturer.to_string(),
        course: course.to_string(),
        grade,
    }
}

fn homework(reviewer: &str, student: &str, course: &str, grade: Grade) -> RatingAction {
    RatingAction::Homework {
        reviewer: reviewer.to_string(),
        student: student.to_string(),
        course: course.to_string(),
        grade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let scenario = ReferenceScenario::new().load().unwrap();
        assert_eq!(scenario.students.len(), 2);
        assert_eq!(scenario.lecturers.len(), 2);
        assert_eq!(scenario.reviewers.len(), 2);
        assert_eq!(scenario.ratings.len(), REFUSED_ATTEMPTS + 8);
        assert!(scenario.students.iter().all(|e| e.person.grades.is_empty()));
    }
}
