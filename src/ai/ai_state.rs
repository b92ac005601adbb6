//! Suggestion state management
//!
//! Tracks the in-flight request, the three returned options, and which one
//! the user has highlighted. Owns the channel handles to the worker thread
//! and filters stale responses by request id.

use std::sync::mpsc::{Receiver, Sender};

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    /// Ask for three rephrasings of a task title
    Suggest {
        source_text: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    /// Exactly three suggestions, or empty when the completion was unusable
    Suggestions {
        options: Vec<String>,
        request_id: u64,
    },
    /// A typed client error, rendered for display
    Error(String),
    /// The request was cancelled
    Cancelled { request_id: u64 },
}

/// Suggestion panel state
pub struct SuggestionState {
    /// Whether AI features are enabled (from config)
    pub enabled: bool,
    /// Whether the client could be constructed (has API key)
    pub configured: bool,
    /// Whether a request is waiting on the network
    pub loading: bool,
    /// Current error message (if any)
    pub error: Option<String>,
    /// The three options from the last completed request
    pub options: Vec<String>,
    /// True when the last request completed with zero usable suggestions
    pub empty_result: bool,
    /// Currently highlighted option (None = no selection)
    selected: Option<usize>,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<AiRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<AiResponse>>,
    /// Current request ID, incremented for each new request
    request_id: u64,
    /// ID of the currently in-flight request, if any
    in_flight_request_id: Option<u64>,
}

impl SuggestionState {
    pub fn new(enabled: bool, configured: bool) -> Self {
        Self {
            enabled,
            configured,
            loading: false,
            error: None,
            options: Vec::new(),
            empty_result: false,
            selected: None,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(&mut self, request_tx: Sender<AiRequest>, response_rx: Receiver<AiResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Send a suggestion request for the given title
    ///
    /// Every call re-issues a network request; identical inputs are not
    /// deduplicated. Returns true if the request was handed to the worker.
    pub fn send_request(&mut self, source_text: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.start_request();
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(AiRequest::Suggest {
                source_text,
                request_id,
            })
            .is_ok()
        {
            return true;
        }
        self.loading = false;
        self.in_flight_request_id = None;
        false
    }

    /// Begin a new request: bump the id, clear stale output
    fn start_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.options.clear();
        self.empty_result = false;
        self.selected = None;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
    }

    /// Handle a worker response, dropping anything from a stale request
    pub fn handle_response(&mut self, response: AiResponse) {
        match response {
            AiResponse::Suggestions {
                options,
                request_id,
            } => {
                if request_id != self.request_id {
                    log::debug!("Dropping stale suggestions for request {}", request_id);
                    return;
                }
                self.loading = false;
                self.in_flight_request_id = None;
                self.empty_result = options.is_empty();
                self.options = options;
                self.selected = if self.options.is_empty() { None } else { Some(0) };
            }
            AiResponse::Error(message) => {
                self.loading = false;
                self.in_flight_request_id = None;
                self.error = Some(message);
            }
            AiResponse::Cancelled { request_id } => {
                if self.in_flight_request_id == Some(request_id) {
                    self.loading = false;
                    self.in_flight_request_id = None;
                }
            }
        }
    }

    /// Cancel any in-flight request
    ///
    /// Returns true if a cancel was sent. The worker may still deliver a
    /// result for the cancelled id; request-id filtering discards it.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        if let Some(request_id) = self.in_flight_request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(AiRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
            self.loading = false;
            self.in_flight_request_id = None;
            // Make sure a late result for this id cannot be applied
            self.request_id = self.request_id.wrapping_add(1);
            return true;
        }
        false
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Clear options, selection, and any error or empty-result note
    pub fn clear(&mut self) {
        self.options.clear();
        self.empty_result = false;
        self.selected = None;
        self.error = None;
        self.loading = false;
    }

    /// Currently highlighted option index
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Currently highlighted option text
    pub fn selected_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Move the highlight to the next option, wrapping at the end
    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(current) => (current + 1) % self.options.len(),
            None => 0,
        });
    }

    /// Move the highlight to the previous option, wrapping at the start
    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.options.len() - 1,
            Some(current) => current - 1,
        });
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn three_options() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    fn state_with_channel() -> (SuggestionState, mpsc::Receiver<AiRequest>) {
        let mut state = SuggestionState::new(true, true);
        let (tx, rx) = mpsc::channel();
        state.request_tx = Some(tx);
        (state, rx)
    }

    // =====================================================================
    // Request lifecycle
    // =====================================================================

    #[test]
    fn test_new_state_is_idle() {
        let state = SuggestionState::new(true, false);
        assert!(state.enabled);
        assert!(!state.configured);
        assert!(!state.loading);
        assert!(state.options.is_empty());
        assert!(state.selected_index().is_none());
        assert!(!state.has_in_flight_request());
    }

    #[test]
    fn test_send_request_without_channel_fails() {
        let mut state = SuggestionState::new(true, true);
        assert!(!state.send_request("buy milk".to_string()));
        assert!(!state.loading);
    }

    #[test]
    fn test_send_request_bumps_id_and_sets_loading() {
        let (mut state, rx) = state_with_channel();

        assert!(state.send_request("buy milk".to_string()));
        assert!(state.loading);
        assert_eq!(state.current_request_id(), 1);
        assert!(state.has_in_flight_request());

        match rx.recv().unwrap() {
            AiRequest::Suggest {
                source_text,
                request_id,
            } => {
                assert_eq!(source_text, "buy milk");
                assert_eq!(request_id, 1);
            }
            other => panic!("Expected Suggest, got {:?}", other),
        }
    }

    #[test]
    fn test_identical_inputs_each_send_a_request() {
        let (mut state, rx) = state_with_channel();

        assert!(state.send_request("buy milk".to_string()));
        assert!(state.send_request("buy milk".to_string()));

        // No dedupe: two sends for the same text, with distinct ids
        let first = rx.recv().unwrap();
        let second = rx.recv().unwrap();
        match (first, second) {
            (
                AiRequest::Suggest { request_id: a, .. },
                AiRequest::Suggest { request_id: b, .. },
            ) => assert_ne!(a, b),
            other => panic!("Expected two Suggest messages, got {:?}", other),
        }
    }

    #[test]
    fn test_send_request_clears_previous_output() {
        let (mut state, _rx) = state_with_channel();
        state.options = three_options();
        state.selected = Some(2);
        state.error = Some("old error".to_string());
        state.empty_result = true;

        state.send_request("buy milk".to_string());

        assert!(state.options.is_empty());
        assert!(state.selected_index().is_none());
        assert!(state.error.is_none());
        assert!(!state.empty_result);
    }

    // =====================================================================
    // Response handling
    // =====================================================================

    #[test]
    fn test_suggestions_response_selects_first_option() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());

        state.handle_response(AiResponse::Suggestions {
            options: three_options(),
            request_id: 1,
        });

        assert!(!state.loading);
        assert_eq!(state.options, three_options());
        assert_eq!(state.selected_index(), Some(0));
        assert!(!state.empty_result);
    }

    #[test]
    fn test_empty_suggestions_set_empty_result_not_error() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());

        state.handle_response(AiResponse::Suggestions {
            options: Vec::new(),
            request_id: 1,
        });

        assert!(!state.loading);
        assert!(state.options.is_empty());
        assert!(state.empty_result);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_suggestions_dropped() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());
        state.send_request("walk the dog".to_string());

        // Late result from the first request must not be applied
        state.handle_response(AiResponse::Suggestions {
            options: three_options(),
            request_id: 1,
        });

        assert!(state.loading);
        assert!(state.options.is_empty());
    }

    #[test]
    fn test_error_response_sets_error() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());

        state.handle_response(AiResponse::Error("Network error: timeout".to_string()));

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network error: timeout"));
        assert!(!state.has_in_flight_request());
    }

    #[test]
    fn test_cancelled_response_clears_loading() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());

        state.handle_response(AiResponse::Cancelled { request_id: 1 });

        assert!(!state.loading);
        assert!(!state.has_in_flight_request());
    }

    // =====================================================================
    // Cancellation
    // =====================================================================

    #[test]
    fn test_cancel_in_flight_request_sends_cancel() {
        let (mut state, rx) = state_with_channel();
        state.send_request("buy milk".to_string());
        let _ = rx.recv().unwrap();

        assert!(state.cancel_in_flight_request());
        assert!(!state.loading);
        assert!(!state.has_in_flight_request());

        match rx.recv().unwrap() {
            AiRequest::Cancel { request_id } => assert_eq!(request_id, 1),
            other => panic!("Expected Cancel, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_without_in_flight_request() {
        let (mut state, rx) = state_with_channel();
        assert!(!state.cancel_in_flight_request());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_result_arriving_after_cancel_is_dropped() {
        let (mut state, _rx) = state_with_channel();
        state.send_request("buy milk".to_string());
        state.cancel_in_flight_request();

        state.handle_response(AiResponse::Suggestions {
            options: three_options(),
            request_id: 1,
        });

        assert!(state.options.is_empty());
    }

    // =====================================================================
    // Selection
    // =====================================================================

    #[test]
    fn test_select_next_wraps() {
        let mut state = SuggestionState::new(true, true);
        state.options = three_options();

        state.select_next();
        assert_eq!(state.selected_index(), Some(0));
        state.select_next();
        assert_eq!(state.selected_index(), Some(1));
        state.select_next();
        assert_eq!(state.selected_index(), Some(2));
        state.select_next();
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_select_previous_wraps() {
        let mut state = SuggestionState::new(true, true);
        state.options = three_options();

        state.select_previous();
        assert_eq!(state.selected_index(), Some(2));
        state.select_previous();
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_selection_noop_without_options() {
        let mut state = SuggestionState::new(true, true);
        state.select_next();
        state.select_previous();
        assert!(state.selected_index().is_none());
    }

    #[test]
    fn test_selected_option_text() {
        let mut state = SuggestionState::new(true, true);
        state.options = three_options();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_option(), Some("B"));
    }

    #[test]
    fn test_clear() {
        let mut state = SuggestionState::new(true, true);
        state.options = three_options();
        state.selected = Some(1);
        state.error = Some("boom".to_string());
        state.empty_result = true;

        state.clear();

        assert!(state.options.is_empty());
        assert!(state.selected_index().is_none());
        assert!(state.error.is_none());
        assert!(!state.empty_result);
    }
}
