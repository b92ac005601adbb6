//! Prompt construction for the suggestion request
//!
//! The system prompt pins the response contract: exactly three versions,
//! `|`-separated, under five words each. The parser on the other side
//! enforces the same contract.

/// Inputs shorter than this never produce a request
pub const MIN_INPUT_CHARS: usize = 3;

/// Fixed system instruction for task suggestions
pub const SYSTEM_PROMPT: &str = "You are a motivational assistant. Provide exactly 3 brief inspiring versions of tasks, separated by '|' characters. Keep each version under 5 words.";

/// Build the user message framing the title as a transformation request
pub fn build_user_prompt(source_text: &str) -> String {
    format!(
        "Transform this todo item into 3 different inspiring versions:\nOriginal: {}\n3 Inspiring versions:\n",
        source_text
    )
}

/// Check whether an input is long enough to justify an API call
pub fn is_requestable(source_text: &str) -> bool {
    source_text.chars().count() >= MIN_INPUT_CHARS
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
