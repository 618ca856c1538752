//! Course-level averages across an externally supplied group of people.

use super::grade_book::{Gradable, mean};

/// Average of every grade recorded for `course` across `people`.
///
/// People without grades for the course are ignored; returns 0.0 when nobody has any.
/// Accepts homogeneous slices (`&[Student]`) and mixed `&dyn Gradable` collections alike.
pub fn course_average_grade<'a, G, I>(course: &str, people: I) -> f64
where
    G: Gradable + ?Sized + 'a,
    I: IntoIterator<Item = &'a G>,
{
    let totals = people
        .into_iter()
        .map(|person| person.grade_book().course_totals(course))
        .fold((0i64, 0usize), |(sum, count), (s, c)| (sum + s, count + c));
    mean(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Lecturer, Student};

    #[test]
    fn test_empty_group_is_zero() {
        let nobody: Vec<Student> = Vec::new();
        assert_eq!(course_average_grade("PHP", &nobody), 0.0);
    }

    #[test]
    fn test_ignores_people_without_the_course() {
        let s1 = Student::new("John", "Miller", "male");
        let mut s2 = Student::new("Jane", "Moore", "female");
        s2.record_grade("PHP", 6);
        s2.record_grade("Python", 10);
        assert_eq!(course_average_grade("PHP", [&s1, &s2]), 6.0);
        assert_eq!(course_average_grade("TypeScript", [&s1, &s2]), 0.0);
    }

    #[test]
    fn test_pools_grades_not_person_averages() {
        let mut s1 = Student::new("John", "Miller", "male");
        s1.record_grade("Python", 9);
        s1.record_grade("Python", 10);
        let mut s2 = Student::new("Jane", "Moore", "female");
        s2.record_grade("Python", 8);
        s2.record_grade("Python", 10);
        // (9 + 10 + 8 + 10) / 4
        assert_eq!(course_average_grade("Python", vec![&s1, &s2]), 9.25);
    }

    #[test]
    fn test_mixed_roles() {
        let mut s = Student::new("John", "Miller", "male");
        s.record_grade("PHP", 4);
        let mut l = Lecturer::new("Jennifer", "Martinez");
        l.record_grade("PHP", 8);
        let people: [&dyn Gradable; 2] = [&s, &l];
        assert_eq!(course_average_grade("PHP", people), 6.0);
    }
}
