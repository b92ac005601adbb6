//! AI suggestion subsystem
//!
//! Generates three short "inspiring" rephrasings of a task title via a
//! chat-completion API. The client is stateless per call; the worker thread
//! keeps the TUI responsive while a request is in flight.

pub mod ai_state;
pub mod prompt;
pub mod provider;
pub mod suggestion;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, SuggestionState};
pub use provider::{AiError, OpenAiClient};
pub use worker::spawn_worker;
