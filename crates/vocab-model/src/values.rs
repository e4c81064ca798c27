//! Helpers for term-keyed record values.

use std::collections::HashMap;

use crate::term::Term;

/// True when a raw value should be treated as absent in the context of a
/// term-keyed record: empty, whitespace-only, or one of the literal null
/// markers (`\N`, `NULL`, `\NULL`) commonly left behind by text exports.
pub fn is_value_blank(value: &str) -> bool {
    matches!(value.trim(), "" | "\\N" | "NULL" | "\\NULL")
}

/// Tries the given terms in order and returns the first non-blank value.
pub fn first_value<'a>(record: &'a HashMap<Term, String>, terms: &[Term]) -> Option<&'a str> {
    terms
        .iter()
        .filter_map(|term| record.get(term))
        .map(|value| value.trim())
        .find(|value| !is_value_blank(value))
}
