//! Collision resolution: picks one candidate under a collision policy
//!
//! Best-fit is a fixed cascade of narrowing stages over the candidate set.
//! Each stage either narrows the set or falls back to the requested
//! placement; ties are settled by enumeration order, never by distance.

use log::debug;

use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};

use super::candidates::CandidateSet;
use super::config::{BestFitPreference, CollisionPolicy, PlacementOptions};
use super::types::{FitPositionData, Placement};

/// Resolve the requested pair under `policy`
///
/// `policy` is passed separately from `options` so a retry can override it
/// without touching the caller's options.
pub fn resolve(
    my: Alignment,
    at: Alignment,
    policy: CollisionPolicy,
    options: &PlacementOptions,
    candidates: &CandidateSet,
) -> Placement {
    let requested = candidates.find(my, at);

    match policy {
        CollisionPolicy::Ignore => requested.placement(),
        _ if !requested.collides() => {
            debug!("requested {} / {} fits", my, at);
            requested.placement()
        }
        CollisionPolicy::FlipFit => {
            debug!(
                "requested {} / {} collides, flipping to {} / {}",
                my,
                at,
                my.flip(),
                at.flip()
            );
            resolve(
                my.flip(),
                at.flip(),
                CollisionPolicy::Ignore,
                options,
                candidates,
            )
        }
        CollisionPolicy::BestFit => best_fit(requested, options, candidates).placement(),
    }
}

fn best_fit<'a>(
    requested: &'a FitPositionData,
    options: &PlacementOptions,
    candidates: &'a CandidateSet,
) -> &'a FitPositionData {
    let (my, at) = (requested.my, requested.at);

    let fits = candidates.collision_free(options.tolerate_top_overflow);
    debug!(
        "requested {} / {} collides, {} collision-free candidates",
        my,
        at,
        fits.len()
    );
    match fits.len() {
        0 => return requested,
        1 => return fits[0],
        _ => {}
    }

    let narrowed = narrow(my, at, &fits, options);
    debug!("{} candidates after narrowing", narrowed.len());

    match narrowed.len() {
        0 => requested,
        1 => narrowed[0],
        _ => tie_break(narrowed, my, at).unwrap_or(requested),
    }
}

/// Keep one axis of the request if any survivor allows it
fn narrow<'a>(
    my: Alignment,
    at: Alignment,
    fits: &[&'a FitPositionData],
    options: &PlacementOptions,
) -> Vec<&'a FitPositionData> {
    // Keep the vertical edges, move sideways
    let alt_horizontal = filter(fits, |f| {
        f.my.vertical == my.vertical && f.at.vertical == at.vertical
    });
    // Keep the horizontal edges, move up or down
    let alt_vertical = filter(fits, |f| {
        f.my.horizontal == my.horizontal && f.at.horizontal == at.horizontal
    });

    match (alt_horizontal.is_empty(), alt_vertical.is_empty()) {
        (false, false) => match options.best_fit_preference {
            Some(BestFitPreference::Vertical) => alt_vertical,
            _ => alt_horizontal,
        },
        (false, true) => alt_horizontal,
        (true, false) => alt_vertical,
        (true, true) => directional_fallback(my, at, fits, options),
    }
}

/// Neither axis can be kept: push the box to the other side of the anchor
fn directional_fallback<'a>(
    my: Alignment,
    at: Alignment,
    fits: &[&'a FitPositionData],
    options: &PlacementOptions,
) -> Vec<&'a FitPositionData> {
    match options.best_fit_preference {
        Some(BestFitPreference::Vertical) => {
            let both_center = my.horizontal == HorizontalAlignment::Center
                && at.horizontal == HorizontalAlignment::Center;
            let (flipped_my, flipped_at) = if both_center {
                (HorizontalAlignment::Left, HorizontalAlignment::Left)
            } else {
                (
                    my.horizontal.flip(),
                    options.flip_source.pick(my.horizontal, at.horizontal).flip(),
                )
            };
            debug!("directional fallback to {} / {}", flipped_my, flipped_at);

            let on_side = |m: HorizontalAlignment, a: HorizontalAlignment| {
                filter(fits, |f| f.my.horizontal == m && f.at.horizontal == a)
            };
            let narrowed = on_side(flipped_my, flipped_at);
            if narrowed.is_empty() && both_center {
                on_side(flipped_my.flip(), flipped_at.flip())
            } else {
                narrowed
            }
        }
        _ => {
            let both_center = my.vertical == VerticalAlignment::Center
                && at.vertical == VerticalAlignment::Center;
            let (flipped_my, flipped_at) = if both_center {
                (VerticalAlignment::Top, VerticalAlignment::Top)
            } else {
                (
                    my.vertical.flip(),
                    options.flip_source.pick(my.vertical, at.vertical).flip(),
                )
            };
            debug!("directional fallback to {} / {}", flipped_my, flipped_at);

            let on_side = |m: VerticalAlignment, a: VerticalAlignment| {
                filter(fits, |f| f.my.vertical == m && f.at.vertical == a)
            };
            let narrowed = on_side(flipped_my, flipped_at);
            if narrowed.is_empty() && both_center {
                on_side(flipped_my.flip(), flipped_at.flip())
            } else {
                narrowed
            }
        }
    }
}

/// Prefer the requested `my`, then the requested `at`, then enumeration order
fn tie_break(
    mut pool: Vec<&FitPositionData>,
    my: Alignment,
    at: Alignment,
) -> Option<&FitPositionData> {
    let same_my = filter(&pool, |f| f.my == my);
    if !same_my.is_empty() {
        pool = same_my;
    }
    let same_at = filter(&pool, |f| f.at == at);
    if !same_at.is_empty() {
        pool = same_at;
    }

    let winner = pool.first().copied();
    if let Some(w) = winner {
        debug!("tie-break winner {} / {}", w.my, w.at);
    }
    winner
}

fn filter<'a>(
    pool: &[&'a FitPositionData],
    predicate: impl Fn(&FitPositionData) -> bool,
) -> Vec<&'a FitPositionData> {
    pool.iter().copied().filter(|f| predicate(*f)).collect()
}
