#![deny(missing_docs)]
//! Shared logging utilities for the BlogBuddy workspace.
//!
//! This crate provides the `buddy_*` logging macros used across the codebase,
//! a helper for keeping credentials out of log lines, and a minimal test
//! initializer for the global logger.

#[doc(hidden)]
pub use log;

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! buddy_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! buddy_info {
    ($($arg:tt)*) => {{
        $crate::log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! buddy_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! buddy_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! buddy_error {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
    }};
}

/// Renders a credential for log output without revealing it.
///
/// Absent or empty values render as `<unset>`; anything else keeps only its
/// length, e.g. `<set:32>`.
pub fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        Some(value) if !value.is_empty() => format!("<set:{}>", value.len()),
        _ => "<unset>".to_string(),
    }
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::mask_secret;

    #[test]
    fn masked_secret_keeps_only_length() {
        assert_eq!(mask_secret(Some("abcd1234")), "<set:8>");
    }

    #[test]
    fn missing_or_empty_secret_is_unset() {
        assert_eq!(mask_secret(None), "<unset>");
        assert_eq!(mask_secret(Some("")), "<unset>");
    }
}
