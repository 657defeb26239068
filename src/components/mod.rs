//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod ask_panel;
pub mod indicator_card;
pub mod loading;
pub mod trend_chart;

pub use ask_panel::AskPanel;
pub use indicator_card::IndicatorCard;
pub use loading::Loading;
pub use trend_chart::TrendCard;
