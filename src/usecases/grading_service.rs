//! Grading session: load a scenario, replay its ratings, report averages.
//!
//! - Resolves rating actions against the roster and runs the rating protocol
//! - Refused ratings are counted, never treated as failures
//! - Course averages are computed separately for students and lecturers

use crate::adapters::report::grade_sheet_csv;
use crate::domain::{
    DomainError, Locale, RatingAction, Render, Roster, Scenario, course_average_grade,
};
use crate::ports::ScenarioSource;
use tracing::{debug, info};

/// Grading service. Owns the roster for the length of a session.
pub struct GradingService {
    roster: Roster,
    pending: Vec<RatingAction>,
}

impl GradingService {
    /// Build from a scenario; its ratings are queued for [`GradingService::run`].
    pub fn from_scenario(scenario: Scenario) -> Result<Self, DomainError> {
        let pending = scenario.ratings.clone();
        let roster = Roster::try_from(scenario)?;
        Ok(Self { roster, pending })
    }

    pub fn load(source: &dyn ScenarioSource) -> Result<Self, DomainError> {
        info!(source = %source.describe(), "loading scenario");
        Self::from_scenario(source.load()?)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Apply one rating. `Ok(false)` means the protocol refused it.
    pub fn apply(&mut self, action: &RatingAction) -> Result<bool, DomainError> {
        let accepted = self.roster.apply(action)?;
        debug!(?action, accepted, "rating applied");
        Ok(accepted)
    }

    /// Apply actions in order, stopping at the first unresolvable id.
    pub fn apply_all<'a, I>(&mut self, actions: I) -> Result<SessionStats, DomainError>
    where
        I: IntoIterator<Item = &'a RatingAction>,
    {
        let mut stats = SessionStats::default();
        for action in actions {
            if self.apply(action)? {
                stats.accepted += 1;
            } else {
                stats.refused += 1;
            }
        }
        info!(
            accepted = stats.accepted,
            refused = stats.refused,
            "ratings applied"
        );
        Ok(stats)
    }

    /// Replay the ratings that came with the scenario. Subsequent calls are no-ops.
    pub fn run(&mut self) -> Result<SessionStats, DomainError> {
        let pending = std::mem::take(&mut self.pending);
        self.apply_all(&pending)
    }

    /// Student and lecturer averages for every course on the roster, sorted by course.
    pub fn course_averages(&self) -> Vec<CourseSummary> {
        let students: Vec<_> = self.roster.students().iter().map(|e| &e.person).collect();
        let lecturers: Vec<_> = self.roster.lecturers().iter().map(|e| &e.person).collect();
        self.roster
            .courses()
            .into_iter()
            .map(|course| CourseSummary {
                students: course_average_grade(&course, students.iter().copied()),
                lecturers: course_average_grade(&course, lecturers.iter().copied()),
                course,
            })
            .collect()
    }

    /// Every person rendered with `locale`, in roster order: students, lecturers, reviewers.
    pub fn render_all(&self, locale: Locale) -> Vec<String> {
        let students = self.roster.students().iter().map(|e| e.person.render(locale));
        let lecturers = self.roster.lecturers().iter().map(|e| e.person.render(locale));
        let reviewers = self.roster.reviewers().iter().map(|e| e.person.render(locale));
        students.chain(lecturers).chain(reviewers).collect()
    }

    /// CSV grade sheet of the current roster.
    pub fn grade_sheet(&self) -> Result<String, DomainError> {
        grade_sheet_csv(&self.roster)
            .map_err(|e| DomainError::Report(format!("Failed to generate grade sheet: {}", e)))
    }
}

/// Outcome counts of a batch of ratings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub accepted: usize,
    pub refused: usize,
}

/// Per-course averages, split by role.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course: String,
    pub students: f64,
    pub lecturers: f64,
}
