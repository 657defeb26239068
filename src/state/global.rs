//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard payload and
//! the ask panel are independent: the only thing they share is the theme.

use leptos::*;

use crate::model::DashboardPayload;
use crate::state::ask::AskPanelState;

/// Global application state provided to all components via context.
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Raw dashboard payload, `None` until the initial fetch settles.
    pub payload: RwSignal<Option<DashboardPayload>>,
    /// True while the initial dashboard fetch is outstanding.
    pub loading: RwSignal<bool>,
    /// Ask panel state machine.
    pub ask: RwSignal<AskPanelState>,
}

/// Provide global state to the component tree.
pub fn provide_global_state() {
    let state = GlobalState {
        payload: create_rw_signal(None),
        loading: create_rw_signal(true),
        ask: create_rw_signal(AskPanelState::default()),
    };

    provide_context(state);
}

/// Fetch the global state from context. Panics if the tree was mounted
/// without `provide_global_state`, which is a programming error.
pub fn expect_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
