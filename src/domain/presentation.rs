//! Multi-line text rendering of people.
//!
//! `Locale::Ru` reproduces the reference labels exactly and backs `Display`.

use super::entities::{Lecturer, Person, Reviewer, Student};
use super::grade_book::Gradable;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Label set for one locale.
#[derive(Debug)]
pub struct Labels {
    pub name: &'static str,
    pub surname: &'static str,
    pub homework_average: &'static str,
    pub lecture_average: &'static str,
    pub courses_in_progress: &'static str,
    pub finished_courses: &'static str,
}

static RU: Labels = Labels {
    name: "Имя",
    surname: "Фамилия",
    homework_average: "Средняя оценка за домашние задания",
    lecture_average: "Средняя оценка за лекции",
    courses_in_progress: "Курсы в процессе изучения",
    finished_courses: "Завершенные курсы",
};

static EN: Labels = Labels {
    name: "Name",
    surname: "Surname",
    homework_average: "Average homework grade",
    lecture_average: "Average lecture grade",
    courses_in_progress: "Courses in progress",
    finished_courses: "Finished courses",
};

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}

/// Render a person with the labels of `locale`.
pub trait Render {
    fn render(&self, locale: Locale) -> String;
}

fn identity_lines(person: &impl Person, labels: &Labels) -> [String; 2] {
    [
        format!("{}: {}", labels.name, person.name()),
        format!("{}: {}", labels.surname, person.surname()),
    ]
}

impl Render for Student {
    fn render(&self, locale: Locale) -> String {
        let labels = locale.labels();
        let [name, surname] = identity_lines(self, labels);
        [
            name,
            surname,
            format!("{}: {:.1}", labels.homework_average, self.average_grade()),
            format!(
                "{}: {}",
                labels.courses_in_progress,
                self.courses_in_progress.join(", ")
            ),
            format!("{}: {}", labels.finished_courses, self.finished_courses.join(", ")),
        ]
        .join("\n")
    }
}

impl Render for Lecturer {
    fn render(&self, locale: Locale) -> String {
        let labels = locale.labels();
        let [name, surname] = identity_lines(self, labels);
        [
            name,
            surname,
            format!("{}: {:.1}", labels.lecture_average, self.average_grade()),
        ]
        .join("\n")
    }
}

impl Render for Reviewer {
    fn render(&self, locale: Locale) -> String {
        identity_lines(self, locale.labels()).join("\n")
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}
