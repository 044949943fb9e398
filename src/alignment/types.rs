//! Alignment value types

use std::fmt;

/// Vertical edge (or midpoint) of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// All vertical alignments in candidate enumeration order
    pub const ALL: [Self; 3] = [Self::Top, Self::Bottom, Self::Center];

    /// Mirror to the opposite edge; `center` stays put
    pub fn flip(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Center => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    /// Position within [`Self::ALL`]
    pub(crate) fn ordinal(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Center => 2,
        }
    }
}

/// Horizontal edge (or midpoint) of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// All horizontal alignments in candidate enumeration order
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Center];

    /// Mirror to the opposite edge; `center` stays put
    pub fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Position within [`Self::ALL`]
    pub(crate) fn ordinal(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Center => 2,
        }
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for HorizontalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A point on an element's bounding box, one edge per axis
///
/// The `Display` form is the canonical combined string, e.g. `"top left"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub vertical: VerticalAlignment,
    pub horizontal: HorizontalAlignment,
}

impl Alignment {
    /// `center center`
    pub const CENTER: Self = Self::new(VerticalAlignment::Center, HorizontalAlignment::Center);

    pub const fn new(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Mirror both axes independently
    pub fn flip(self) -> Self {
        Self::new(self.vertical.flip(), self.horizontal.flip())
    }

    /// All nine alignments, vertical-major in enumeration order
    pub fn all() -> impl Iterator<Item = Alignment> {
        VerticalAlignment::ALL.into_iter().flat_map(|vertical| {
            HorizontalAlignment::ALL
                .into_iter()
                .map(move |horizontal| Alignment::new(vertical, horizontal))
        })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{} {}", self.vertical, self.horizontal))
    }
}
