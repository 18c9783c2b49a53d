//! # Query Sanitization
//!
//! Turns a caller-supplied free-text query into a safe FTS5 MATCH
//! expression.
//!
//! FTS5 has its own query language (`AND`, `NEAR`, `caret^`, column
//! filters). Callers of the search endpoint send arbitrary text, so every
//! whitespace-separated token is wrapped in double quotes, which makes it
//! a plain term. Multiple terms combine with FTS5's implicit AND.

/// Builds an FTS5 MATCH expression from free text.
///
/// Returns `None` for queries with no tokens at all; the caller decides
/// what an empty query means (this service treats it as match-all).
pub fn to_match_expr(query: &str) -> Option<String> {
    let terms: Vec<String> = query
        .split_whitespace()
        // Punctuation-only tokens would quote down to an empty phrase;
        // drop them instead.
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
        .map(|token| format!("\"{}\"", token.replace('"', "\"\"")))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" "))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
