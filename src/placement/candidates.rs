//! Enumeration of every my/at alignment pairing

use log::trace;

use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};

use super::evaluator::{evaluate_left, evaluate_top};
use super::types::{FitPositionData, Geometry};

/// Number of candidates: 9 `my` alignments times 9 `at` alignments
pub const CANDIDATE_COUNT: usize = 81;

/// All 81 evaluated candidates for one geometry, in enumeration order
///
/// The order is my.vertical, my.horizontal, at.vertical, at.horizontal (outer
/// to inner), each axis as listed in `VerticalAlignment::ALL` /
/// `HorizontalAlignment::ALL`. Tie-breaks in the resolver rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    candidates: Vec<FitPositionData>,
}

/// Evaluate every my/at pairing against `geometry`
pub fn generate_candidates(geometry: &Geometry) -> CandidateSet {
    let mut candidates = Vec::with_capacity(CANDIDATE_COUNT);

    for my_v in VerticalAlignment::ALL {
        for my_h in HorizontalAlignment::ALL {
            for at_v in VerticalAlignment::ALL {
                for at_h in HorizontalAlignment::ALL {
                    candidates.push(FitPositionData {
                        my: Alignment::new(my_v, my_h),
                        at: Alignment::new(at_v, at_h),
                        top: evaluate_top(my_v, at_v, geometry),
                        left: evaluate_left(my_h, at_h, geometry),
                    });
                }
            }
        }
    }

    trace!(
        "generated {} candidates ({} colliding)",
        candidates.len(),
        candidates.iter().filter(|c| c.collides()).count()
    );

    CandidateSet { candidates }
}

impl CandidateSet {
    /// The candidate for an exact my/at pair
    pub fn find(&self, my: Alignment, at: Alignment) -> &FitPositionData {
        let index = ((my.vertical.ordinal() * 3 + my.horizontal.ordinal()) * 3
            + at.vertical.ordinal())
            * 3
            + at.horizontal.ordinal();
        &self.candidates[index]
    }

    /// Candidates passing the collision-free filter, in enumeration order
    pub fn collision_free(&self, tolerate_top_overflow: bool) -> Vec<&FitPositionData> {
        self.candidates
            .iter()
            .filter(|c| c.fits(tolerate_top_overflow))
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FitPositionData> {
        self.candidates.iter()
    }

    pub fn as_slice(&self) -> &[FitPositionData] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a FitPositionData;
    type IntoIter = std::slice::Iter<'a, FitPositionData>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
