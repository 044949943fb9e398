//! Resolution of user-supplied alignment specs
//!
//! A spec is either a single keyword (`top`, `left`, `center`, ...) or a
//! combined `"<vertical> <horizontal>"` pair. Single keywords only pin one axis
//! (except `center`, which pins both); the other axis is taken from a default.

use std::fmt;

use crate::error::AlignmentError;

use super::lexer::{lex, Span, Token};
use super::types::{Alignment, HorizontalAlignment, VerticalAlignment};

/// A parsed, not yet resolved, alignment spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentSpec {
    /// `top` or `bottom` alone
    Vertical(VerticalAlignment),
    /// `left` or `right` alone
    Horizontal(HorizontalAlignment),
    /// `center` alone, applies to both axes
    Center,
    /// `"<vertical> <horizontal>"`
    Combined(Alignment),
}

impl AlignmentSpec {
    /// Parse a spec string
    pub fn parse(input: &str) -> Result<Self, AlignmentError> {
        let tokens = tokenize(input)?;

        match tokens.as_slice() {
            [] => Err(AlignmentError::invalid(
                input,
                0..input.len(),
                "expected an alignment keyword",
            )),
            [(keyword, _)] => Ok(match keyword {
                Keyword::Top => Self::Vertical(VerticalAlignment::Top),
                Keyword::Bottom => Self::Vertical(VerticalAlignment::Bottom),
                Keyword::Left => Self::Horizontal(HorizontalAlignment::Left),
                Keyword::Right => Self::Horizontal(HorizontalAlignment::Right),
                Keyword::Center => Self::Center,
            }),
            [(first, first_span), (second, second_span)] => {
                let vertical = vertical_slot(input, first, first_span)?;
                let horizontal = horizontal_slot(input, second, second_span)?;
                Ok(Self::Combined(Alignment::new(vertical, horizontal)))
            }
            [_, _, (_, extra), ..] => Err(AlignmentError::invalid(
                input,
                extra.start..input.len(),
                "expected at most two keywords",
            )),
        }
    }

    /// Fill in the unspecified axis from `defaults` (or `center` without defaults)
    pub fn resolve(self, defaults: Option<Alignment>) -> Alignment {
        let fallback = defaults.unwrap_or(Alignment::CENTER);
        match self {
            Self::Vertical(vertical) => Alignment::new(vertical, fallback.horizontal),
            Self::Horizontal(horizontal) => Alignment::new(fallback.vertical, horizontal),
            Self::Center => Alignment::CENTER,
            Self::Combined(alignment) => alignment,
        }
    }
}

/// Parse and resolve a spec to an [`Alignment`]
pub fn parse_to_alignment(
    input: &str,
    defaults: Option<Alignment>,
) -> Result<Alignment, AlignmentError> {
    Ok(AlignmentSpec::parse(input)?.resolve(defaults))
}

/// Parse and resolve a spec to its canonical `"<vertical> <horizontal>"` string
pub fn parse_to_combined(
    input: &str,
    defaults: Option<Alignment>,
) -> Result<String, AlignmentError> {
    parse_to_alignment(input, defaults).map(|a| a.to_string())
}

impl std::str::FromStr for Alignment {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_to_alignment(s, None)
    }
}

/// A lexed token known to be one of the five alignment keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keyword::Top => f.write_str("top"),
            Keyword::Bottom => f.write_str("bottom"),
            Keyword::Left => f.write_str("left"),
            Keyword::Right => f.write_str("right"),
            Keyword::Center => f.write_str("center"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Keyword, Span)>, AlignmentError> {
    lex(input)
        .map(|(token, span)| {
            let keyword = match token {
                Ok(Token::Top) => Keyword::Top,
                Ok(Token::Bottom) => Keyword::Bottom,
                Ok(Token::Left) => Keyword::Left,
                Ok(Token::Right) => Keyword::Right,
                Ok(Token::Center) => Keyword::Center,
                Ok(Token::Word(word)) => {
                    return Err(AlignmentError::invalid(
                        input,
                        span,
                        format!("unknown alignment keyword '{}'", word),
                    ))
                }
                Err(()) => {
                    return Err(AlignmentError::invalid(input, span, "unexpected character"))
                }
            };
            Ok((keyword, span))
        })
        .collect()
}

fn vertical_slot(
    input: &str,
    keyword: &Keyword,
    span: &Span,
) -> Result<VerticalAlignment, AlignmentError> {
    match keyword {
        Keyword::Top => Ok(VerticalAlignment::Top),
        Keyword::Bottom => Ok(VerticalAlignment::Bottom),
        Keyword::Center => Ok(VerticalAlignment::Center),
        other => Err(AlignmentError::invalid(
            input,
            span.clone(),
            format!("{} cannot be a vertical alignment (expected top, center or bottom)", other),
        )),
    }
}

fn horizontal_slot(
    input: &str,
    keyword: &Keyword,
    span: &Span,
) -> Result<HorizontalAlignment, AlignmentError> {
    match keyword {
        Keyword::Left => Ok(HorizontalAlignment::Left),
        Keyword::Right => Ok(HorizontalAlignment::Right),
        Keyword::Center => Ok(HorizontalAlignment::Center),
        other => Err(AlignmentError::invalid(
            input,
            span.clone(),
            format!("{} cannot be a horizontal alignment (expected left, center or right)", other),
        )),
    }
}
