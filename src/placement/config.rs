//! Configuration for placement requests

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
use crate::error::UnknownOption;

/// How a colliding placement is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Use the requested placement even if it collides
    Ignore,
    /// Mirror my/at once, then accept the result
    #[serde(alias = "flip-fit")]
    FlipFit,
    /// Search all candidates for a non-colliding alternative
    #[default]
    #[serde(alias = "best-fit")]
    BestFit,
}

impl FromStr for CollisionPolicy {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "flipfit" | "flip-fit" => Ok(Self::FlipFit),
            "bestfit" | "best-fit" => Ok(Self::BestFit),
            _ => Err(UnknownOption {
                kind: "collision policy",
                value: s.to_string(),
                expected: "ignore, flipfit, bestfit",
            }),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::FlipFit => f.write_str("flipfit"),
            Self::BestFit => f.write_str("bestfit"),
        }
    }
}

/// Which axis best-fit may move along when both are possible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestFitPreference {
    /// Prefer keeping the vertical edges and moving sideways
    Horizontal,
    /// Prefer keeping the horizontal edges and moving up or down
    Vertical,
}

impl FromStr for BestFitPreference {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(UnknownOption {
                kind: "best-fit preference",
                value: s.to_string(),
                expected: "horizontal, vertical",
            }),
        }
    }
}

impl fmt::Display for BestFitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Which requested alignment the directional fallback mirrors for `at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipSource {
    /// `at` is mirrored from the requested `at`
    #[default]
    Independent,
    /// `at` is mirrored from the requested `my`, as early releases did
    MirrorMy,
}

impl FlipSource {
    pub(crate) fn pick<T>(self, my: T, at: T) -> T {
        match self {
            Self::Independent => at,
            Self::MirrorMy => my,
        }
    }
}

/// Fallback axes for single-keyword specs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentDefaults {
    pub my: Alignment,
    pub at: Alignment,
}

impl Default for AlignmentDefaults {
    fn default() -> Self {
        Self {
            my: Alignment::new(VerticalAlignment::Top, HorizontalAlignment::Center),
            at: Alignment::new(VerticalAlignment::Bottom, HorizontalAlignment::Center),
        }
    }
}

/// Options for one placement request
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOptions {
    /// Point on the box, e.g. `"top center"` or `"left"`
    pub my: String,

    /// Point on the anchor the box's `my` point is placed at
    pub at: String,

    pub collision: CollisionPolicy,

    pub best_fit_preference: Option<BestFitPreference>,

    /// Defaults for single-keyword specs; `top center` / `bottom center` when unset
    pub defaults: Option<AlignmentDefaults>,

    /// Accept vertical overflow of top-anchored candidates in best-fit
    pub tolerate_top_overflow: bool,

    pub flip_source: FlipSource,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            my: "top center".to_string(),
            at: "bottom center".to_string(),
            collision: CollisionPolicy::default(),
            best_fit_preference: None,
            defaults: None,
            tolerate_top_overflow: true,
            flip_source: FlipSource::default(),
        }
    }
}

impl PlacementOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the box alignment spec
    pub fn with_my(mut self, my: impl Into<String>) -> Self {
        self.my = my.into();
        self
    }

    /// Set the anchor alignment spec
    pub fn with_at(mut self, at: impl Into<String>) -> Self {
        self.at = at.into();
        self
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_preference(mut self, preference: BestFitPreference) -> Self {
        self.best_fit_preference = Some(preference);
        self
    }

    pub fn with_defaults(mut self, my: Alignment, at: Alignment) -> Self {
        self.defaults = Some(AlignmentDefaults { my, at });
        self
    }

    pub fn with_tolerate_top_overflow(mut self, tolerate: bool) -> Self {
        self.tolerate_top_overflow = tolerate;
        self
    }

    pub fn with_flip_source(mut self, source: FlipSource) -> Self {
        self.flip_source = source;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PlacementOptions::default();
        assert_eq!(options.my, "top center");
        assert_eq!(options.at, "bottom center");
        assert_eq!(options.collision, CollisionPolicy::BestFit);
        assert_eq!(options.best_fit_preference, None);
        assert_eq!(options.defaults, None);
        assert!(options.tolerate_top_overflow);
        assert_eq!(options.flip_source, FlipSource::Independent);
    }

    #[test]
    fn test_builder_pattern() {
        let options = PlacementOptions::new()
            .with_my("bottom")
            .with_at("top")
            .with_collision(CollisionPolicy::FlipFit)
            .with_preference(BestFitPreference::Vertical)
            .with_tolerate_top_overflow(false);

        assert_eq!(options.my, "bottom");
        assert_eq!(options.at, "top");
        assert_eq!(options.collision, CollisionPolicy::FlipFit);
        assert_eq!(options.best_fit_preference, Some(BestFitPreference::Vertical));
        assert!(!options.tolerate_top_overflow);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("ignore".parse::<CollisionPolicy>(), Ok(CollisionPolicy::Ignore));
        assert_eq!("FlipFit".parse::<CollisionPolicy>(), Ok(CollisionPolicy::FlipFit));
        assert_eq!("flip-fit".parse::<CollisionPolicy>(), Ok(CollisionPolicy::FlipFit));
        assert_eq!("best-fit".parse::<CollisionPolicy>(), Ok(CollisionPolicy::BestFit));
        assert!("bounce".parse::<CollisionPolicy>().is_err());
    }

    #[test]
    fn test_preference_from_str() {
        assert_eq!(
            "vertical".parse::<BestFitPreference>(),
            Ok(BestFitPreference::Vertical)
        );
        assert_eq!(
            "Horizontal".parse::<BestFitPreference>(),
            Ok(BestFitPreference::Horizontal)
        );
        assert!("diagonal".parse::<BestFitPreference>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for policy in [
            CollisionPolicy::Ignore,
            CollisionPolicy::FlipFit,
            CollisionPolicy::BestFit,
        ] {
            assert_eq!(policy.to_string().parse::<CollisionPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_flip_source_pick() {
        assert_eq!(FlipSource::Independent.pick("my", "at"), "at");
        assert_eq!(FlipSource::MirrorMy.pick("my", "at"), "my");
    }

    #[test]
    fn test_builtin_defaults() {
        let defaults = AlignmentDefaults::default();
        assert_eq!(defaults.my.to_string(), "top center");
        assert_eq!(defaults.at.to_string(), "bottom center");
    }
}
