//! Structural checks on bearer tokens.
//!
//! Only the shape is inspected: signatures, claims and expiry are the issuer's
//! business.

/// Scheme prefix used in `Authorization` headers, including the trailing space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Separator between the segments of a signed token.
pub const TOKEN_SEGMENT_SEPARATOR: char = '.';

/// Whether `token` looks like a segmented signed token.
#[must_use]
pub fn is_structurally_valid(token: &str) -> bool {
    token.contains(TOKEN_SEGMENT_SEPARATOR)
}

/// Render the `Authorization` header value for `token`.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmented_tokens_are_valid() {
        assert!(is_structurally_valid("a.b.c"));
        assert!(is_structurally_valid("header.payload"));
        assert!(is_structurally_valid("."));
    }

    #[test]
    fn unsegmented_tokens_are_invalid() {
        assert!(!is_structurally_valid("abcdef"));
        assert!(!is_structurally_valid(""));
    }

    #[test]
    fn bearer_value_prefixes_scheme() {
        assert_eq!(bearer_value("a.b.c"), "Bearer a.b.c");
    }
}
