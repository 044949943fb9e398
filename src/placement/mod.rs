//! Placement engine for computing hover box coordinates
//!
//! Every my/at pairing is evaluated against the measured geometry, then a
//! collision policy picks the final coordinates.

pub mod candidates;
pub mod config;
pub mod evaluator;
pub mod resolver;
pub mod types;

pub use candidates::{generate_candidates, CandidateSet, CANDIDATE_COUNT};
pub use config::{
    AlignmentDefaults, BestFitPreference, CollisionPolicy, FlipSource, PlacementOptions,
};
pub use evaluator::{evaluate_axis, evaluate_left, evaluate_top, Edge};
pub use resolver::resolve;
pub use types::*;
