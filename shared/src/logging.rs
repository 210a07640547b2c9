//! Shared logging utilities for consistent tracing across the editor

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::types::HypervideoId;

/// Build the filter directive used for the editor's own crates
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("hypervideo={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = filter_directive(log_level);

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for hypervideo-aware info logging
#[macro_export]
macro_rules! hv_info {
    ($hypervideo_id:expr, $($arg:tt)*) => {
        tracing::info!(
            hypervideo = %$hypervideo_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for hypervideo-aware warning logging
#[macro_export]
macro_rules! hv_warn {
    ($hypervideo_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            hypervideo = %$hypervideo_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for hypervideo-aware error logging
#[macro_export]
macro_rules! hv_error {
    ($hypervideo_id:expr, $($arg:tt)*) => {
        tracing::error!(
            hypervideo = %$hypervideo_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for hypervideo-aware debug logging
#[macro_export]
macro_rules! hv_debug {
    ($hypervideo_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            hypervideo = %$hypervideo_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for error conditions
pub fn log_error(hypervideo_id: &HypervideoId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        hypervideo = %hypervideo_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(hypervideo_id: &HypervideoId, message: &str) {
    info!(
        hypervideo = %hypervideo_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
