//! Data Model
//!
//! Payload types for the backend JSON and the pure binding that turns a
//! payload into a presentation-ready render model.

pub mod payload;
pub mod render;

pub use payload::{DashboardPayload, Indicator, IndicatorValue, TimePoint};
pub use render::{bind, RenderModel, TrendData, TrendView};
