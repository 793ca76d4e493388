//! Utility modules.

/// Log sanitization for bodies and tokens.
pub mod log_sanitizer;
