//! Ask Panel State Machine
//!
//! Explicit state for the question/answer side panel: `Closed ↔ Open`, and
//! within Open `Idle → Asking → Answered` (or back to `Idle` on failure,
//! with the answer slot holding a synthetic error string). Keeping this a
//! plain struct makes the transition rules testable without a DOM and puts
//! the one-request-at-a-time guard in the state itself rather than in a
//! disabled button.

use crate::api::AskResponse;

/// Suggested questions shown under the input; selecting one only overwrites
/// the question text, it never submits.
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "Why is the rand weak?",
    "How does repo rate affect me?",
    "Is SA in recession?",
];

/// Request phase within the open panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AskPhase {
    Idle,
    Asking,
    Answered,
}

/// Full panel state. Question and answer persist across close/reopen and
/// are cleared only by reload; each new ask overwrites the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct AskPanelState {
    pub open: bool,
    pub question: String,
    pub answer: Option<String>,
    pub sources: Vec<String>,
    pub confidence: Option<String>,
    pub phase: AskPhase,
}

impl Default for AskPanelState {
    fn default() -> Self {
        Self {
            open: false,
            question: String::new(),
            answer: None,
            sources: Vec::new(),
            confidence: None,
            phase: AskPhase::Idle,
        }
    }
}

impl AskPanelState {
    /// Flip the panel open/closed. Nothing else is reset.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_question(&mut self, text: &str) {
        self.question = text.to_string();
    }

    /// Overwrite the question with a suggestion. Requires an explicit
    /// submit afterwards.
    pub fn select_suggestion(&mut self, text: &str) {
        self.question = text.to_string();
    }

    /// True when a submit would currently be accepted.
    pub fn can_submit(&self) -> bool {
        !self.question.is_empty() && self.phase != AskPhase::Asking
    }

    /// Attempt to start a submit. Returns the question to send, or `None`
    /// if the question is empty or a request is already in flight — callers
    /// must issue exactly one outbound request per `Some`.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.phase = AskPhase::Asking;
        Some(self.question.clone())
    }

    /// Settle the in-flight request. Success shows the answer verbatim;
    /// failure returns to idle with the answer slot holding an error string.
    pub fn resolve(&mut self, result: Result<AskResponse, String>) {
        match result {
            Ok(response) => {
                self.answer = Some(response.answer);
                self.sources = response.sources_used;
                self.confidence = response.confidence;
                self.phase = AskPhase::Answered;
            }
            Err(message) => {
                self.answer = Some(format!("Error: {}", message));
                self.sources.clear();
                self.confidence = None;
                self.phase = AskPhase::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(text: &str) -> Result<AskResponse, String> {
        Ok(AskResponse {
            answer: text.to_string(),
            sources_used: Vec::new(),
            confidence: None,
        })
    }

    #[test]
    fn test_toggle_preserves_question_and_answer() {
        let mut state = AskPanelState::default();
        state.toggle();
        assert!(state.open);

        state.set_question("Why is the rand weak?");
        state.begin_submit();
        state.resolve(answered("Load shedding, mostly."));

        state.toggle();
        state.toggle();
        assert_eq!(state.question, "Why is the rand weak?");
        assert_eq!(state.answer.as_deref(), Some("Load shedding, mostly."));
        assert_eq!(state.phase, AskPhase::Answered);
    }

    #[test]
    fn test_empty_question_does_not_submit() {
        let mut state = AskPanelState::default();
        assert!(!state.can_submit());
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.phase, AskPhase::Idle);
    }

    #[test]
    fn test_submit_while_asking_is_ignored() {
        let mut state = AskPanelState::default();
        state.set_question("Is SA in recession?");

        assert_eq!(
            state.begin_submit().as_deref(),
            Some("Is SA in recession?")
        );
        assert_eq!(state.phase, AskPhase::Asking);

        // Second logical submit while in flight: no second request.
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.phase, AskPhase::Asking);
    }

    #[test]
    fn test_resubmit_allowed_after_answer() {
        let mut state = AskPanelState::default();
        state.set_question("How does repo rate affect me?");
        state.begin_submit();
        state.resolve(answered("Through your bond repayments."));

        assert_eq!(state.phase, AskPhase::Answered);
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_failure_sets_error_answer_and_returns_to_idle() {
        let mut state = AskPanelState::default();
        state.open = true;
        state.set_question("Is SA in recession?");
        state.begin_submit();
        state.resolve(Err("Network error: connection refused".to_string()));

        assert_eq!(state.phase, AskPhase::Idle);
        assert_eq!(
            state.answer.as_deref(),
            Some("Error: Network error: connection refused")
        );
        // Panel stays open and usable; the user may retry.
        assert!(state.open);
        assert!(state.can_submit());
    }

    #[test]
    fn test_new_answer_overwrites_previous_exchange() {
        let mut state = AskPanelState::default();
        state.set_question("first");
        state.begin_submit();
        state.resolve(Ok(AskResponse {
            answer: "one".to_string(),
            sources_used: vec!["SARB".to_string()],
            confidence: Some("high".to_string()),
        }));

        state.set_question("second");
        state.begin_submit();
        state.resolve(Err("timeout".to_string()));

        assert_eq!(state.answer.as_deref(), Some("Error: timeout"));
        assert!(state.sources.is_empty());
        assert_eq!(state.confidence, None);
    }

    #[test]
    fn test_suggestion_overwrites_without_submitting() {
        let mut state = AskPanelState::default();
        state.set_question("typed by hand");
        state.select_suggestion(SUGGESTED_QUESTIONS[0]);

        assert_eq!(state.question, "Why is the rand weak?");
        assert_eq!(state.phase, AskPhase::Idle);
        assert_eq!(state.answer, None);
    }
}
