//! Keeps response bodies and bearer tokens out of logs in full.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading token characters left visible.
const TOKEN_VISIBLE: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Cut a body down to [`TRUNCATE_LIMIT`] bytes, noting the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
        s.len()
    )
}

/// Show only the first few characters of a token.
///
/// Tokens no longer than the visible prefix are masked entirely.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= TOKEN_VISIBLE {
        return "*".repeat(token.chars().count());
    }
    let visible: String = token.chars().take(TOKEN_VISIBLE).collect();
    format!("{visible}***")
}
