//! Scenario sources: built-in reference data and JSON files.

pub mod json_file;
pub mod reference;

pub use json_file::JsonScenarioFile;
pub use reference::{REFUSED_ATTEMPTS, ReferenceScenario};
