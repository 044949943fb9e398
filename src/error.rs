//! Error types for alignment parsing and placement

use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

pub use crate::alignment::lexer::Span;

/// An alignment spec outside the `top`/`bottom`/`left`/`right`/`center` vocabulary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignmentError {
    #[error("invalid alignment spec '{input}': {reason}")]
    InvalidAlignmentSpec {
        input: String,
        span: Span,
        reason: String,
    },
}

impl AlignmentError {
    pub fn invalid(input: impl Into<String>, span: Span, reason: impl Into<String>) -> Self {
        Self::InvalidAlignmentSpec {
            input: input.into(),
            span,
            reason: reason.into(),
        }
    }

    /// The offending byte range within the spec
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidAlignmentSpec { span, .. } => span,
        }
    }

    /// Format the error with the spec highlighted using ariadne
    ///
    /// `label` names the input in the report header (e.g. `--my`).
    pub fn format(&self, label: &str) -> String {
        let Self::InvalidAlignmentSpec {
            input,
            span,
            reason,
        } = self;

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, label, span.start)
            .with_message(format!("invalid alignment spec '{}'", input))
            .with_label(
                Label::new((label, span.clone()))
                    .with_message(reason)
                    .with_color(Color::Red),
            )
            .with_note("expected one keyword or '<top|center|bottom> <left|center|right>'")
            .finish()
            .write((label, Source::from(input.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Which alignment spec of a placement request was being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecRole {
    My,
    At,
}

impl fmt::Display for SpecRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecRole::My => f.write_str("my"),
            SpecRole::At => f.write_str("at"),
        }
    }
}

/// Errors that can occur while placing a hover box
#[derive(Error, Debug)]
pub enum PlaceError {
    /// The `my` or `at` spec could not be parsed
    #[error("invalid '{role}' alignment: {source}")]
    Alignment {
        role: SpecRole,
        #[source]
        source: AlignmentError,
    },

    /// A measured rectangle is unusable
    #[error("invalid {rect} rectangle: {reason}")]
    InvalidGeometry { rect: &'static str, reason: String },
}

impl PlaceError {
    pub fn alignment(role: SpecRole, source: AlignmentError) -> Self {
        Self::Alignment { role, source }
    }

    pub fn invalid_geometry(rect: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            rect,
            reason: reason.into(),
        }
    }
}

/// An unrecognized option name, e.g. a collision policy
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
