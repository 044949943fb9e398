//! Placement profiles: named presets of placement options
//!
//! A profile is a TOML document mapping preset names (`tooltip`,
//! `context-menu`, ...) to alignment specs and collision settings, so hosts
//! can keep placement policy out of code.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::alignment::parse_to_alignment;
use crate::error::AlignmentError;
use crate::placement::{BestFitPreference, CollisionPolicy, FlipSource, PlacementOptions};

/// Errors that can occur when loading a profile or reading a preset
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown preset '{name}' (available: {})", available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },
    #[error("invalid {field} in preset '{preset}': {source}")]
    InvalidPreset {
        preset: String,
        field: &'static str,
        #[source]
        source: AlignmentError,
    },
}

/// A set of named placement presets
#[derive(Debug, Clone)]
pub struct PlacementProfile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Presets by name
    pub presets: BTreeMap<String, Preset>,
}

/// One named set of placement options
///
/// Unset fields fall back to [`PlacementOptions::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub my: Option<String>,
    pub at: Option<String>,
    pub collision: Option<CollisionPolicy>,
    pub prefer: Option<BestFitPreference>,
    pub defaults: Option<PresetDefaults>,
    pub tolerate_top_overflow: Option<bool>,
    /// Mirror `at` from `my` in the directional fallback
    #[serde(default)]
    pub mirror_my: bool,
}

/// Single-keyword defaults as written in TOML
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDefaults {
    pub my: String,
    pub at: String,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    presets: BTreeMap<String, Preset>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in presets for common hover widgets
const DEFAULT_PROFILE: &str = r#"
[metadata]
name = "default"
description = "Built-in presets for common hover widgets"

# Below the anchor, centered; may hang off the bottom of a scrolling page
[presets.tooltip]
my = "top center"
at = "bottom center"
collision = "bestfit"
prefer = "vertical"

# Left-aligned under the anchor, mirrored above it when it does not fit
[presets.popover]
my = "top left"
at = "bottom left"
collision = "flipfit"

# Must stay fully on screen
[presets.dropdown]
my = "top left"
at = "bottom left"
collision = "bestfit"
prefer = "horizontal"
tolerate_top_overflow = false

# Opens to the lower right of the pointer
[presets.context-menu]
my = "top left"
at = "bottom right"
collision = "bestfit"
prefer = "horizontal"
tolerate_top_overflow = false
"#;

impl PlacementProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    ///
    /// Alignment specs in every preset are checked here, so a profile that
    /// loads can only fail later on an unknown preset name.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;

        let profile = PlacementProfile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            presets: parsed.presets,
        };
        for (name, preset) in &profile.presets {
            preset.to_options(name)?;
        }
        Ok(profile)
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Placement options for a named preset
    pub fn options(&self, name: &str) -> Result<PlacementOptions, ProfileError> {
        match self.preset(name) {
            Some(preset) => preset.to_options(name),
            None => Err(ProfileError::UnknownPreset {
                name: name.to_string(),
                available: self.presets.keys().cloned().collect(),
            }),
        }
    }

    /// Merge another profile on top of this one; its presets win on name clashes
    pub fn merged_with(mut self, other: PlacementProfile) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        self.presets.extend(other.presets);
        self
    }
}

impl Default for PlacementProfile {
    fn default() -> Self {
        Self::from_str(DEFAULT_PROFILE).expect("Default profile should be valid TOML")
    }
}

impl Preset {
    /// Convert to placement options, validating the alignment specs
    ///
    /// `name` is only used for error reporting.
    pub fn to_options(&self, name: &str) -> Result<PlacementOptions, ProfileError> {
        let invalid = |field: &'static str| {
            move |source: AlignmentError| ProfileError::InvalidPreset {
                preset: name.to_string(),
                field,
                source,
            }
        };

        let mut options = PlacementOptions::default();

        if let Some(defaults) = &self.defaults {
            let my = parse_to_alignment(&defaults.my, None).map_err(invalid("defaults.my"))?;
            let at = parse_to_alignment(&defaults.at, None).map_err(invalid("defaults.at"))?;
            options = options.with_defaults(my, at);
        }
        let fallback = options.defaults.unwrap_or_default();

        if let Some(my) = &self.my {
            parse_to_alignment(my, Some(fallback.my)).map_err(invalid("my"))?;
            options = options.with_my(my.as_str());
        }
        if let Some(at) = &self.at {
            parse_to_alignment(at, Some(fallback.at)).map_err(invalid("at"))?;
            options = options.with_at(at.as_str());
        }
        if let Some(collision) = self.collision {
            options = options.with_collision(collision);
        }
        if let Some(prefer) = self.prefer {
            options = options.with_preference(prefer);
        }
        if let Some(tolerate) = self.tolerate_top_overflow {
            options = options.with_tolerate_top_overflow(tolerate);
        }
        if self.mirror_my {
            options = options.with_flip_source(FlipSource::MirrorMy);
        }

        Ok(options)
    }
}
