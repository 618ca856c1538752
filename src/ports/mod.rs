//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application asks infrastructure for a scenario to replay.

pub mod outbound;

pub use outbound::ScenarioSource;
