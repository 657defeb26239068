//! Indicator Card Component
//!
//! Displays a single economic indicator summary card. The view-model arrives
//! fully formatted from the render binding; the card shows it as-is.

use leptos::*;

use crate::model::render::IndicatorView;

/// Summary card for one indicator
#[component]
pub fn IndicatorCard(indicator: IndicatorView) -> impl IntoView {
    view! {
        <div class="indicator-card">
            <div class="indicator-icon">{indicator.icon}</div>
            <div class="indicator-name">{indicator.name}</div>
            <div class="indicator-value">
                {indicator.value_text}
                " "
                <span class="indicator-unit">{indicator.unit}</span>
            </div>
            <div class="indicator-description">{indicator.description}</div>
        </div>
    }
}
