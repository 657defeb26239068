//! Loading Component
//!
//! Loading spinner shown while the initial dashboard fetch is outstanding.

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-row">
            <div class="loading-spinner" />
        </div>
    }
}
