//! App Root Component
//!
//! Header with the ask-panel toggle, the dashboard page, and the panel
//! itself. Global state is provided here.

use leptos::*;

use crate::components::AskPanel;
use crate::pages::Dashboard;
use crate::state::{expect_global_state, provide_global_state};
use crate::theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = expect_global_state();

    view! {
        <style>{theme::GLOBAL_CSS}</style>

        <div>
            <header class="app-header">
                <h1>"🇿🇦 SA Economic " <span class="accent">"Tracker"</span></h1>
                <button
                    class="btn-primary"
                    on:click=move |_| state.ask.update(|a| a.toggle())
                >
                    "🤖 Ask AI"
                </button>
            </header>

            <main class="app-main">
                <Dashboard />
            </main>

            // The panel mounts only while open; its state lives in the
            // global store, so question and answer survive close/reopen.
            {move || state.ask.with(|a| a.open).then(|| view! { <AskPanel /> })}
        </div>
    }
}
