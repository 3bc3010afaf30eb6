//! Dashboard module
//!
//! Provides a per-year overview of income and expenses with summary cards and
//! charts. Switching the year re-renders only the dashboard content.

pub(crate) mod aggregation;
mod cards;
mod charts;
mod handlers;

pub use handlers::get_dashboard_page;
