//! Two-team roster assignment for recurring in-game events.
//!
//! Selections are joined against a player directory, ranked, and placed onto team A, team B
//! or the bench by a strategy looked up in an [assignment::registry::AlgorithmCatalog].

pub mod assignment;
pub mod cli;
pub mod data;
pub mod error;
pub mod export;
pub mod server;
