//! API Layer
//!
//! HTTP client for the backend endpoints.

mod client;

pub use client::{ask_question, fetch_dashboard, AskResponse};
