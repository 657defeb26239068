//! Pages
//!
//! Top-level page components. The tracker is a single page.

pub mod dashboard;

pub use dashboard::Dashboard;
