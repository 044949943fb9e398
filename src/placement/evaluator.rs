//! Per-axis offset and collision computation

use crate::alignment::{HorizontalAlignment, VerticalAlignment};

use super::types::{CalculationOutcome, Geometry};

/// An alignment reduced to its position along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `top` or `left`
    Start,
    Center,
    /// `bottom` or `right`
    End,
}

impl From<VerticalAlignment> for Edge {
    fn from(v: VerticalAlignment) -> Self {
        match v {
            VerticalAlignment::Top => Edge::Start,
            VerticalAlignment::Center => Edge::Center,
            VerticalAlignment::Bottom => Edge::End,
        }
    }
}

impl From<HorizontalAlignment> for Edge {
    fn from(h: HorizontalAlignment) -> Self {
        match h {
            HorizontalAlignment::Left => Edge::Start,
            HorizontalAlignment::Center => Edge::Center,
            HorizontalAlignment::Right => Edge::End,
        }
    }
}

/// Offset of the box along one axis
///
/// The box's `my` edge is placed on the anchor's `at` edge. Collides when the
/// box starts before 0 or ends past `container_size`.
pub fn evaluate_axis(
    my: Edge,
    at: Edge,
    box_size: f64,
    anchor_origin: f64,
    anchor_size: f64,
    container_size: f64,
) -> CalculationOutcome {
    let adjustment = match my {
        Edge::Start => 0.0,
        Edge::Center => -box_size / 2.0,
        Edge::End => -box_size,
    };
    let position = match at {
        Edge::Start => anchor_origin,
        Edge::Center => anchor_origin + anchor_size / 2.0,
        Edge::End => anchor_origin + anchor_size,
    };
    let value = adjustment + position;

    CalculationOutcome {
        value,
        will_collide: value < 0.0 || value + box_size > container_size,
        may_overflow: false,
    }
}

/// Vertical offset (`top`) for a my/at pair
pub fn evaluate_top(
    my: VerticalAlignment,
    at: VerticalAlignment,
    geometry: &Geometry,
) -> CalculationOutcome {
    let outcome = evaluate_axis(
        my.into(),
        at.into(),
        geometry.hover_box.height,
        geometry.anchor.top,
        geometry.anchor.height,
        geometry.container.height,
    );
    CalculationOutcome {
        may_overflow: my == VerticalAlignment::Top,
        ..outcome
    }
}

/// Horizontal offset (`left`) for a my/at pair
pub fn evaluate_left(
    my: HorizontalAlignment,
    at: HorizontalAlignment,
    geometry: &Geometry,
) -> CalculationOutcome {
    evaluate_axis(
        my.into(),
        at.into(),
        geometry.hover_box.width,
        geometry.anchor.left,
        geometry.anchor.width,
        geometry.container.width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::types::Rect;

    fn geometry() -> Geometry {
        Geometry::new(
            Rect::new(100.0, 200.0, 40.0, 20.0),
            Rect::sized(60.0, 30.0),
            Rect::sized(400.0, 300.0),
        )
    }

    #[test]
    fn test_axis_start_on_end() {
        let o = evaluate_axis(Edge::Start, Edge::End, 30.0, 100.0, 20.0, 300.0);
        assert_eq!(o.value, 120.0);
        assert!(!o.will_collide);
    }

    #[test]
    fn test_axis_end_on_start() {
        let o = evaluate_axis(Edge::End, Edge::Start, 30.0, 100.0, 20.0, 300.0);
        assert_eq!(o.value, 70.0);
    }

    #[test]
    fn test_axis_center_on_center() {
        let o = evaluate_axis(Edge::Center, Edge::Center, 30.0, 100.0, 20.0, 300.0);
        assert_eq!(o.value, 95.0);
    }

    #[test]
    fn test_axis_collides_before_origin() {
        let o = evaluate_axis(Edge::End, Edge::Start, 30.0, 10.0, 20.0, 300.0);
        assert_eq!(o.value, -20.0);
        assert!(o.will_collide);
    }

    #[test]
    fn test_axis_collides_past_container() {
        let o = evaluate_axis(Edge::Start, Edge::End, 30.0, 260.0, 20.0, 300.0);
        assert!(o.will_collide);
        // touching the far edge is not a collision
        let o = evaluate_axis(Edge::Start, Edge::End, 30.0, 250.0, 20.0, 300.0);
        assert_eq!(o.value, 270.0);
        assert!(!o.will_collide);
    }

    #[test]
    fn test_top_uses_vertical_dimensions() {
        let o = evaluate_top(VerticalAlignment::Top, VerticalAlignment::Bottom, &geometry());
        assert_eq!(o.value, 120.0);
        assert!(o.may_overflow);

        let o = evaluate_top(VerticalAlignment::Bottom, VerticalAlignment::Top, &geometry());
        assert_eq!(o.value, 70.0);
        assert!(!o.may_overflow);
    }

    #[test]
    fn test_left_uses_horizontal_dimensions() {
        let o = evaluate_left(
            HorizontalAlignment::Center,
            HorizontalAlignment::Center,
            &geometry(),
        );
        assert_eq!(o.value, 190.0);
        assert!(!o.may_overflow);

        let o = evaluate_left(
            HorizontalAlignment::Left,
            HorizontalAlignment::Right,
            &geometry(),
        );
        assert_eq!(o.value, 240.0);
        assert!(!o.will_collide);
    }
}
