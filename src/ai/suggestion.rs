//! Suggestion parsing for AI responses

pub mod parser;

pub use parser::{SUGGESTION_COUNT, parse_suggestions};
