//! Application-level configuration constants.

// UI text
pub const APP_TITLE: &str = "Countdown Timer";
pub const DURATION_PLACEHOLDER: &str = "Enter duration (seconds)";
