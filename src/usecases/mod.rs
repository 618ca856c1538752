//! Application use cases. Orchestrate domain logic via ports.

pub mod grading_service;

pub use grading_service::{CourseSummary, GradingService, SessionStats};
