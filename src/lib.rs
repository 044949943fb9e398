//! Hover Position - collision-aware placement of tooltips, popovers and menus
//!
//! Given the measured anchor, box and container rectangles, this library
//! computes where the box should go so that its `my` point sits on the
//! anchor's `at` point, adjusting the alignment when the box would leave the
//! container.
//!
//! # Example
//!
//! ```rust
//! use hover_position::{place, Geometry, PlacementOptions, Rect};
//!
//! let geometry = Geometry::new(
//!     Rect::new(100.0, 100.0, 80.0, 20.0),
//!     Rect::sized(120.0, 40.0),
//!     Rect::sized(800.0, 600.0),
//! );
//! let placement = place(&geometry, &PlacementOptions::default()).unwrap();
//! assert_eq!(placement.top_px(), "120px");
//! assert_eq!(placement.left_px(), "80px");
//! ```

pub mod alignment;
pub mod error;
pub mod placement;
pub mod profile;

pub use alignment::{
    parse_to_alignment, parse_to_combined, Alignment, AlignmentSpec, HorizontalAlignment,
    VerticalAlignment,
};
pub use error::{AlignmentError, PlaceError, SpecRole};
pub use placement::{
    generate_candidates, BestFitPreference, CandidateSet, CollisionPolicy, FlipSource, Geometry,
    Measure, Placement, PlacementOptions, Rect,
};
pub use profile::PlacementProfile;

/// Resolve the `my` and `at` specs of `options` to alignments
///
/// Single-keyword specs take their other axis from `options.defaults`, or from
/// `top center` / `bottom center`.
pub fn resolve_alignments(
    options: &PlacementOptions,
) -> Result<(Alignment, Alignment), PlaceError> {
    let defaults = options.defaults.unwrap_or_default();

    let my = parse_to_alignment(&options.my, Some(defaults.my))
        .map_err(|e| PlaceError::alignment(SpecRole::My, e))?;
    let at = parse_to_alignment(&options.at, Some(defaults.at))
        .map_err(|e| PlaceError::alignment(SpecRole::At, e))?;

    Ok((my, at))
}

/// Compute the box position for already-measured geometry
///
/// # Example
///
/// ```rust
/// use hover_position::{place, CollisionPolicy, Geometry, PlacementOptions, Rect};
///
/// // Box would sit above-left of the anchor, outside the container
/// let geometry = Geometry::new(
///     Rect::new(0.0, 0.0, 100.0, 100.0),
///     Rect::sized(50.0, 50.0),
///     Rect::sized(1000.0, 1000.0),
/// );
/// let options = PlacementOptions::new()
///     .with_my("bottom right")
///     .with_at("top left")
///     .with_collision(CollisionPolicy::FlipFit);
///
/// let placement = place(&geometry, &options).unwrap();
/// assert_eq!((placement.top, placement.left), (100.0, 100.0));
/// ```
pub fn place(geometry: &Geometry, options: &PlacementOptions) -> Result<Placement, PlaceError> {
    geometry.validate()?;
    let (my, at) = resolve_alignments(options)?;

    let candidates = generate_candidates(geometry);

    // Flipping center/center is a no-op, so flip-fit is plain ignore there
    let policy = match options.collision {
        CollisionPolicy::FlipFit if my == Alignment::CENTER && at == Alignment::CENTER => {
            CollisionPolicy::Ignore
        }
        policy => policy,
    };

    let result = placement::resolve(my, at, policy, options, &candidates);
    log::debug!(
        "placed {} / {} with {}: {}",
        my,
        at,
        options.collision,
        result
    );
    Ok(result)
}

/// Measure through a host adapter, then [`place`]
pub fn place_with<M: Measure + ?Sized>(
    measure: &M,
    options: &PlacementOptions,
) -> Result<Placement, PlaceError> {
    place(&measure.measure(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(
            Rect::new(200.0, 300.0, 100.0, 40.0),
            Rect::sized(60.0, 30.0),
            Rect::sized(1000.0, 800.0),
        )
    }

    #[test]
    fn test_place_defaults() {
        let p = place(&geometry(), &PlacementOptions::default()).unwrap();
        // top center of the box on bottom center of the anchor
        assert_eq!(p.top, 240.0);
        assert_eq!(p.left, 320.0);
    }

    #[test]
    fn test_single_keywords_use_builtin_defaults() {
        let options = PlacementOptions::new().with_my("bottom").with_at("top");
        let (my, at) = resolve_alignments(&options).unwrap();
        assert_eq!(my.to_string(), "bottom center");
        assert_eq!(at.to_string(), "top center");
    }

    #[test]
    fn test_single_keywords_use_caller_defaults() {
        let options = PlacementOptions::new()
            .with_my("right")
            .with_at("left")
            .with_defaults("top left".parse().unwrap(), "bottom left".parse().unwrap());
        let (my, at) = resolve_alignments(&options).unwrap();
        assert_eq!(my.to_string(), "top right");
        assert_eq!(at.to_string(), "bottom left");
    }

    #[test]
    fn test_invalid_my_reports_role() {
        let options = PlacementOptions::new().with_my("upper left");
        let err = place(&geometry(), &options).unwrap_err();
        assert!(matches!(
            err,
            PlaceError::Alignment {
                role: SpecRole::My,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_at_reports_role() {
        let options = PlacementOptions::new().with_at("bottom top");
        let err = place(&geometry(), &options).unwrap_err();
        assert!(matches!(
            err,
            PlaceError::Alignment {
                role: SpecRole::At,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let g = Geometry::new(
            Rect::new(0.0, f64::INFINITY, 1.0, 1.0),
            Rect::sized(1.0, 1.0),
            Rect::sized(10.0, 10.0),
        );
        let err = place(&g, &PlacementOptions::default()).unwrap_err();
        assert!(matches!(err, PlaceError::InvalidGeometry { rect: "anchor", .. }));
    }

    #[test]
    fn test_center_flipfit_is_ignore() {
        // Box larger than the container so center/center collides
        let g = Geometry::new(
            Rect::new(10.0, 10.0, 20.0, 20.0),
            Rect::sized(100.0, 100.0),
            Rect::sized(50.0, 50.0),
        );
        let flipfit = PlacementOptions::new()
            .with_my("center")
            .with_at("center")
            .with_collision(CollisionPolicy::FlipFit);
        let ignore = flipfit.clone().with_collision(CollisionPolicy::Ignore);
        let p = place(&g, &flipfit).unwrap();
        assert_eq!(p, place(&g, &ignore).unwrap());
        assert_eq!((p.top, p.left), (-30.0, -30.0));
    }

    struct FixedHost(Geometry);

    impl Measure for FixedHost {
        fn measure(&self) -> Geometry {
            self.0
        }
    }

    #[test]
    fn test_place_with_measure() {
        let host = FixedHost(geometry());
        let options = PlacementOptions::default();
        assert_eq!(
            place_with(&host, &options).unwrap(),
            place(&geometry(), &options).unwrap()
        );
    }
}
