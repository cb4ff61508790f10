//! Display formatting for terminal output
//!
//! Plain-text rendering of wizard steps and the dashboard.

pub mod dashboard;
pub mod step;

pub use dashboard::format_dashboard;
pub use step::{format_errors, format_field_prompt, format_step_header, format_summary};
