//! Core types for the placement engine

use std::fmt;

use crate::alignment::Alignment;
use crate::error::PlaceError;

/// Side length of the square anchor used for pointer positions
pub const POINTER_SIZE: f64 = 10.0;

/// An axis-aligned rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// A small square anchor at a pointer position
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::new(y, x, POINTER_SIZE, POINTER_SIZE)
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    fn validate(&self, name: &'static str) -> Result<(), PlaceError> {
        let fields = [
            ("top", self.top),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PlaceError::invalid_geometry(
                    name,
                    format!("{} is not finite ({})", field, value),
                ));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PlaceError::invalid_geometry(
                name,
                format!("negative size {}x{}", self.width, self.height),
            ));
        }
        Ok(())
    }
}

/// The three measured rectangles of one placement request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Element the box is positioned against
    pub anchor: Rect,
    /// The floating box; only its size matters
    pub hover_box: Rect,
    /// Bounds the box should stay within; only its size matters
    pub container: Rect,
}

impl Geometry {
    /// Box and container are normalized to the origin
    pub fn new(anchor: Rect, hover_box: Rect, container: Rect) -> Self {
        Self {
            anchor,
            hover_box: Rect::sized(hover_box.width, hover_box.height),
            container: Rect::sized(container.width, container.height),
        }
    }

    pub fn validate(&self) -> Result<(), PlaceError> {
        self.anchor.validate("anchor")?;
        self.hover_box.validate("box")?;
        self.container.validate("container")
    }
}

/// Source of measured geometry
///
/// Host adapters implement this to measure the anchor, the box (while forced
/// visible) and the container, with ancestor scroll offsets already removed
/// from the anchor.
pub trait Measure {
    fn measure(&self) -> Geometry;
}

impl Measure for Geometry {
    fn measure(&self) -> Geometry {
        *self
    }
}

/// One axis offset of a candidate placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationOutcome {
    pub value: f64,
    /// The box would leave the container on this axis
    pub will_collide: bool,
    /// Vertical axis only: the box hangs from its top edge, so an overflow
    /// past the bottom may be tolerated
    pub may_overflow: bool,
}

/// One my/at pairing with both axis outcomes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPositionData {
    pub my: Alignment,
    pub at: Alignment,
    pub top: CalculationOutcome,
    pub left: CalculationOutcome,
}

impl FitPositionData {
    /// Collides on either axis
    pub fn collides(&self) -> bool {
        self.top.will_collide || self.left.will_collide
    }

    /// Passes the collision-free filter
    ///
    /// With `tolerate_top_overflow`, a vertical collision is accepted when the
    /// outcome is flagged `may_overflow`.
    pub fn fits(&self, tolerate_top_overflow: bool) -> bool {
        let vertical_ok =
            !self.top.will_collide || (tolerate_top_overflow && self.top.may_overflow);
        vertical_ok && !self.left.will_collide
    }

    pub fn placement(&self) -> Placement {
        Placement {
            top: self.top.value,
            left: self.left.value,
        }
    }
}

/// Final coordinates for the box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

impl Placement {
    /// `top` as a CSS pixel length, e.g. `"100px"`
    pub fn top_px(&self) -> String {
        px(self.top)
    }

    /// `left` as a CSS pixel length
    pub fn left_px(&self) -> String {
        px(self.left)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top: {}; left: {}", self.top_px(), self.left_px())
    }
}

fn px(value: f64) -> String {
    // -0.0 + 0.0 is 0.0
    format!("{}px", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.bottom(), 50.0);
        assert_eq!(r.right(), 50.0);
    }

    #[test]
    fn test_pointer_rect() {
        let r = Rect::pointer(120.0, 45.0);
        assert_eq!(r, Rect::new(45.0, 120.0, 10.0, 10.0));
    }

    #[test]
    fn test_geometry_normalizes_origins() {
        let g = Geometry::new(
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(3.0, 4.0, 50.0, 60.0),
            Rect::new(1.0, 2.0, 800.0, 600.0),
        );
        assert_eq!(g.hover_box, Rect::sized(50.0, 60.0));
        assert_eq!(g.container, Rect::sized(800.0, 600.0));
        assert_eq!(g.anchor, Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_geometry_validation() {
        let ok = Geometry::new(
            Rect::sized(1.0, 1.0),
            Rect::sized(1.0, 1.0),
            Rect::sized(10.0, 10.0),
        );
        assert!(ok.validate().is_ok());

        let nan = Geometry::new(
            Rect::new(f64::NAN, 0.0, 1.0, 1.0),
            Rect::sized(1.0, 1.0),
            Rect::sized(10.0, 10.0),
        );
        assert!(nan.validate().unwrap_err().to_string().contains("anchor"));

        let negative = Geometry::new(
            Rect::sized(1.0, 1.0),
            Rect::sized(-1.0, 1.0),
            Rect::sized(10.0, 10.0),
        );
        assert!(negative.validate().unwrap_err().to_string().contains("box"));
    }

    #[test]
    fn test_placement_px() {
        let p = Placement {
            top: 100.0,
            left: 12.5,
        };
        assert_eq!(p.top_px(), "100px");
        assert_eq!(p.left_px(), "12.5px");
        assert_eq!(p.to_string(), "top: 100px; left: 12.5px");
    }

    #[test]
    fn test_negative_zero_formats_as_zero() {
        let p = Placement {
            top: -0.0,
            left: -15.0,
        };
        assert_eq!(p.top_px(), "0px");
        assert_eq!(p.left_px(), "-15px");
    }

    #[test]
    fn test_fits_tolerance() {
        let outcome = |value, will_collide, may_overflow| CalculationOutcome {
            value,
            will_collide,
            may_overflow,
        };
        let candidate = FitPositionData {
            my: Alignment::CENTER,
            at: Alignment::CENTER,
            top: outcome(570.0, true, true),
            left: outcome(20.0, false, false),
        };
        assert!(candidate.collides());
        assert!(candidate.fits(true));
        assert!(!candidate.fits(false));
    }
}
