//! Identifier sanitization
//!
//! Free-text names from the model are turned into safe source identifiers by
//! replacing everything outside `[A-Za-z0-9_]` with `_`. The diagram-text
//! generator uses the variant that additionally keeps `~`, which Mermaid
//! reserves for generic parameters.

/// Fallback for class-derived identifiers.
pub const CLASS_FALLBACK: &str = "Unnamed";
/// Fallback for member-derived identifiers.
pub const MEMBER_FALLBACK: &str = "unnamed";
/// Fallback for parameter-derived identifiers.
pub const PARAM_FALLBACK: &str = "arg";

/// Trimmed text, or the fallback when the trimmed text is empty.
pub fn trimmed_or<'a>(raw: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Sanitize free text into a source identifier.
///
/// Empty input is replaced by the caller-supplied fallback word before
/// sanitization.
pub fn sanitize_identifier(raw: &str, fallback: &str) -> String {
    trimmed_or(raw, fallback)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Sanitize free text into a Mermaid class identifier.
///
/// Same as [`sanitize_identifier`] but preserves `~`, the Mermaid generic
/// marker (e.g. `Predator~Prey~`).
pub fn sanitize_diagram_identifier(raw: &str, fallback: &str) -> String {
    trimmed_or(raw, fallback)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '~' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_clean_identifiers_through() {
        assert_eq!(sanitize_identifier("Animal", CLASS_FALLBACK), "Animal");
        assert_eq!(sanitize_identifier("snake_case_9", MEMBER_FALLBACK), "snake_case_9");
    }

    #[test]
    fn test_replaces_unsafe_characters() {
        assert_eq!(sanitize_identifier("My Class!", CLASS_FALLBACK), "My_Class_");
        assert_eq!(sanitize_identifier("a-b.c", MEMBER_FALLBACK), "a_b_c");
        assert_eq!(sanitize_identifier("café", MEMBER_FALLBACK), "caf_");
    }

    #[test]
    fn test_empty_input_uses_fallback() {
        assert_eq!(sanitize_identifier("", CLASS_FALLBACK), "Unnamed");
        assert_eq!(sanitize_identifier("   ", MEMBER_FALLBACK), "unnamed");
        assert_eq!(sanitize_identifier("\t", PARAM_FALLBACK), "arg");
    }

    #[test]
    fn test_diagram_variant_keeps_tilde() {
        assert_eq!(
            sanitize_diagram_identifier("Predator~Prey~", CLASS_FALLBACK),
            "Predator~Prey~"
        );
        assert_eq!(
            sanitize_diagram_identifier("My Class~T~", CLASS_FALLBACK),
            "My_Class~T~"
        );
    }

    #[test]
    fn test_trimmed_or() {
        assert_eq!(trimmed_or("  x  ", "fb"), "x");
        assert_eq!(trimmed_or("   ", "fb"), "fb");
    }
}
