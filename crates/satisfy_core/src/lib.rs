//! satisfy_core: Core utilities shared by the exports-satisfy crates.
//!
//! Provides source positions, line maps for diagnostics, and string
//! interning for identifiers.

pub mod intern;
pub mod text;

// Re-export commonly used types
pub use intern::{InternedString, StringInterner};
pub use text::{LineAndColumn, LineMap, TextRange, TextSpan};
