//! Implements ScenarioSource using a JSON file.
//!
//! Layout: `{"students": [...], "lecturers": [...], "reviewers": [...], "ratings": [...]}`.
//! Every person carries an `id`; ratings are tagged by `kind` (`lecture` / `homework`).

use crate::domain::{DomainError, Scenario};
use crate::ports::ScenarioSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct JsonScenarioFile {
    path: PathBuf,
}

impl JsonScenarioFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ScenarioSource for JsonScenarioFile {
    fn describe(&self) -> String {
        format!("scenario file {}", self.path.display())
    }

    fn load(&self) -> Result<Scenario, DomainError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Scenario(format!("read {}: {}", self.path.display(), e))
        })?;
        let scenario: Scenario = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Scenario(format!("parse {}: {}", self.path.display(), e))
        })?;
        info!(
            path = %self.path.display(),
            students = scenario.students.len(),
            lecturers = scenario.lecturers.len(),
            reviewers = scenario.reviewers.len(),
            ratings = scenario.ratings.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }
}
