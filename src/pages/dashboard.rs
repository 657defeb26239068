//! Dashboard Page
//!
//! Fetches the aggregate payload once on mount and renders indicator cards
//! plus the four fixed trend charts from the bound render model.

use leptos::*;

use crate::api;
use crate::components::{IndicatorCard, Loading, TrendCard};
use crate::model::render::{bind, RenderModel};
use crate::state::expect_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_global_state();

    // Fetch the payload on mount. Fire-and-forget: a failure is logged and
    // leaves the view in the no-data state with the loading flag cleared.
    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_dashboard().await {
                Ok(payload) => {
                    state.payload.set(Some(payload));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard: {}", e).into(),
                    );
                }
            }
            state.loading.set(false);
        });
    });

    let model = create_memo(move |_| bind(state.payload.get().as_ref()));

    view! {
        {move || {
            if state.loading.get() {
                return view! { <Loading /> }.into_view();
            }
            match model.get() {
                RenderModel::Loading => view! {
                    // Fetch settled without a payload.
                    <p class="no-data">"No data"</p>
                }
                .into_view(),
                RenderModel::Ready(dashboard) => view! {
                    <div class="card-grid">
                        {dashboard
                            .indicators
                            .into_iter()
                            .map(|indicator| view! { <IndicatorCard indicator=indicator /> })
                            .collect_view()}
                    </div>

                    <h2 class="section-label">"Historical Trends"</h2>
                    <div class="trend-grid">
                        {dashboard
                            .trends
                            .into_iter()
                            .map(|trend| view! { <TrendCard trend=trend /> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
            }
        }}
    }
}
