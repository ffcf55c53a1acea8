/// Identifier Sanitization Module
///
/// Table and column identifiers cannot be supplied as bound parameters in
/// SQLite's parameterized-query API, so any identifier interpolated into
/// statement text is first reduced to a safe character set here.

/// Reduces a string to its alphanumeric characters, in original order.
///
/// This is a blunt allowlist filter, not an escaping scheme: statement
/// separators, quotes, and whitespace are silently dropped rather than
/// rejected. The result is safe to interpolate into statement text.
///
/// # Examples
///
/// ```
/// use litetab::ident::scrub;
///
/// assert_eq!(scrub("users"), "users");
/// assert_eq!(scrub("users; DROP TABLE users; --"), "usersDROPTABLEusers");
/// ```
pub fn scrub(field: &str) -> String {
    field.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_passes_alphanumerics_through() {
        assert_eq!(scrub("users"), "users");
        assert_eq!(scrub("table42"), "table42");
    }

    #[test]
    fn test_scrub_strips_injection_attempt() {
        let scrubbed = scrub("\"; DROP TABLE users; --");
        assert!(scrubbed.chars().all(|c| c.is_alphanumeric()));
        assert!(!scrubbed.contains(';'));
        assert!(!scrubbed.contains('"'));
        assert_eq!(scrubbed, "DROPTABLEusers");
    }

    #[test]
    fn test_scrub_is_idempotent() {
        for input in ["users", "a b c", "x_y-z", "; -- '\""] {
            assert_eq!(scrub(&scrub(input)), scrub(input));
        }
    }

    #[test]
    fn test_scrub_unsafe_only_input_yields_empty() {
        assert_eq!(scrub("; -- '\"\t\n"), "");
    }
}
