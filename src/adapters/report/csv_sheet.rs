//! Grade sheet export. Uses the `csv` crate for safe serialization.
//!
//! Format: `Role;Name;Surname;Course;Grades;Average`, one row per person per graded course.

use crate::domain::{Gradable, GradeBook, Person, Roster, course_average_grade};

/// Render every grade book on the roster as a semicolon-delimited sheet.
///
/// Students come first, then lecturers, in roster order. Grades are space-joined in the
/// order given; `Average` is the person's average for that course with one decimal.
/// Reviewers hold no grades and never appear.
pub fn grade_sheet_csv(roster: &Roster) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Role", "Name", "Surname", "Course", "Grades", "Average"])?;

    for entry in roster.students() {
        write_person(&mut wtr, "student", &entry.person)?;
    }
    for entry in roster.lecturers() {
        write_person(&mut wtr, "lecturer", &entry.person)?;
    }

    wtr.flush()?;
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

fn write_person<W, P>(wtr: &mut csv::Writer<W>, role: &str, person: &P) -> Result<(), csv::Error>
where
    W: std::io::Write,
    P: Person + Gradable,
{
    let book: &GradeBook = person.grade_book();
    for (course, grades) in book.iter() {
        if grades.is_empty() {
            continue;
        }
        let joined = grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let average = format!("{:.1}", course_average_grade(course, [person]));
        wtr.write_record([
            role,
            person.name(),
            person.surname(),
            course,
            joined.as_str(),
            average.as_str(),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entry, Lecturer, Reviewer, Student};

    #[test]
    fn test_empty_roster_has_header_only() {
        let csv = grade_sheet_csv(&Roster::default()).unwrap();
        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            vec!["Role;Name;Surname;Course;Grades;Average"]
        );
    }

    #[test]
    fn test_rows_per_graded_course() {
        let mut s = Student::new("Jane", "Moore", "female");
        s.record_grade("Python", 8);
        s.record_grade("Python", 10);
        s.record_grade("PHP", 6);
        let mut l = Lecturer::new("Jennifer", "Martinez");
        l.record_grade("TypeScript", 9);
        l.record_grade("TypeScript", 6);
        let roster = Roster::new(
            vec![
                Entry::new("s", s),
                Entry::new("idle", Student::new("John", "Miller", "male")),
            ],
            vec![Entry::new("l", l)],
            vec![Entry::new("r", Reviewer::new("Joseph", "Mitchell"))],
        )
        .unwrap();

        let csv = grade_sheet_csv(&roster).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Role;Name;Surname;Course;Grades;Average",
                "student;Jane;Moore;PHP;6;6.0",
                "student;Jane;Moore;Python;8 10;9.0",
                "lecturer;Jennifer;Martinez;TypeScript;9 6;7.5",
            ]
        );
    }

    #[test]
    fn test_special_chars_are_quoted() {
        let mut s = Student::new("Anne;Marie", "O\"Neil", "female");
        s.record_grade("C; the hard way", 7);
        let roster = Roster::new(vec![Entry::new("s", s)], vec![], vec![]).unwrap();
        let csv = grade_sheet_csv(&roster).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"Anne;Marie\""));
        assert!(csv.contains("\"C; the hard way\""));
    }
}
