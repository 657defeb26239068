//! State Management
//!
//! Global signal state and the ask-panel state machine.

pub mod ask;
pub mod global;

pub use ask::{AskPanelState, AskPhase, SUGGESTED_QUESTIONS};
pub use global::{expect_global_state, provide_global_state, GlobalState};
