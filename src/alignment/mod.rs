//! Alignment model: keyword vocabulary, spec parsing and flipping

pub mod lexer;
pub mod parser;
pub mod types;

pub use parser::{parse_to_alignment, parse_to_combined, AlignmentSpec};
pub use types::{Alignment, HorizontalAlignment, VerticalAlignment};
