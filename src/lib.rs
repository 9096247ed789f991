//! Teamforge: team-formation engine for event rosters.
//!
//! Ingests a delimited-text roster of event participants, checks whether a
//! set of organizational constraints can be satisfied, and runs a randomized
//! multi-restart constructive heuristic to produce a small set of ranked,
//! balanced team partitions.
//!
//! ## Pipeline
//!
//! raw CSV text -> [`roster::parse_roster`] -> participants + row errors
//! -> [`formation::feasibility_check`] -> feasible/infeasible + diagnostics
//! -> [`formation::generate_teams`] -> ranked [`formation::TeamOption`]s
//! -> [`export::export_teams_to_csv`] and/or a [`publish`] snapshot
//!
//! All engine functions are pure over their inputs; the only I/O lives in
//! the [`publish`] store port and the CLI surface.

pub mod color;
pub mod config;
pub mod export;
pub mod formation;
pub mod log;
pub mod publish;
pub mod roster;
#[doc(hidden)]
pub mod testutil;
