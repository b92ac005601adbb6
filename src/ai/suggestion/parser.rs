//! Suggestion parsing for AI responses
//!
//! The completion is expected to hold exactly three suggestions separated
//! by `|`:
//! ```text
//! Conquer the grocery run | Fuel up with Eggos | Breakfast victory awaits
//! ```
//! Anything that does not normalize to exactly three non-empty pieces is
//! unusable and yields an empty list. That is a validation gate, not an
//! error: the caller decides how to present "no suggestions".

/// Number of suggestions a usable response must contain
pub const SUGGESTION_COUNT: usize = 3;

/// Parse suggestions from the completion text
///
/// Splits on `|`, trims each piece, drops empty pieces, and returns the
/// result only when exactly [`SUGGESTION_COUNT`] pieces remain. No partial
/// credit: two or four usable pieces both yield an empty list.
pub fn parse_suggestions(content: &str) -> Vec<String> {
    let options: Vec<String> = content
        .trim()
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if options.len() == SUGGESTION_COUNT {
        options
    } else {
        Vec::new()
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
