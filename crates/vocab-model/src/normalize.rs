//! Spelling normalization.
//!
//! [`normalize_spelling`] is the single source of truth for whether two
//! different-looking spellings address the same registry entry. It is pure
//! and total; an input of nothing but punctuation normalizes to the empty
//! string, which callers must treat as "do not index".

/// Reduces a spelling to a lower-cased alphanumeric key, keeping `#` and `-`
/// and dropping a leading `http`/`https` scheme remnant.
///
/// `"Scientific_Name"`, `"SCIENTIFICNAME"` and `"scientificName"` all map to
/// `"scientificname"`.
pub fn normalize_spelling(spelling: &str) -> String {
    let kept: String = spelling
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '-'))
        .collect();
    kept.strip_prefix("https")
        .or_else(|| kept.strip_prefix("http"))
        .unwrap_or(&kept)
        .to_ascii_lowercase()
}
