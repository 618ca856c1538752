//! Infrastructure adapters. Implement outbound ports.
//!
//! Scenario sources and report rendering. Map errors to DomainError.

pub mod report;
pub mod scenario;
