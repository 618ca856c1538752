//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Scenario};

/// Where a roster and its rating attempts come from (built-in data, a JSON file, ...).
pub trait ScenarioSource {
    /// Short label for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Scenario, DomainError>;
}
