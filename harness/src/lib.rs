//! Wayfind Harness: fixture worlds and run reports for the search core.
//!
//! The harness builds a world, hands it to one of the search strategies,
//! and packages the run as a [`report::RunReport`] whose canonical JSON
//! bytes hash to a stable digest.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wayfind_search`. Worlds provide domain data only; the runner owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod contract;
pub mod digest;
pub mod report;
pub mod runner;
pub mod worlds;
