//! Fabrication of term identities for spellings no vocabulary knows.
//!
//! Synthesis is deterministic: the same spelling (or any spelling reducing to
//! the same qualified name) always yields a value-equal term, so concurrent
//! fabrication of one spelling cannot produce diverging identities.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;
use vocab_model::{Result, Term, TermError};

/// Namespace under which fabricated terms without a recognized authority live.
pub const UNKNOWN_NAMESPACE: &str = "http://unknown.org/";

/// Characters kept verbatim when a bare word is qualified under the unknown
/// namespace.
const QUALIFY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Rejects spellings that cannot become part of a well-formed identifier.
pub(crate) fn validate(spelling: &str) -> Result<()> {
    if spelling.trim().is_empty() {
        return Err(TermError::BlankSpelling);
    }
    if spelling.chars().any(char::is_whitespace) {
        return Err(TermError::EmbeddedWhitespace {
            spelling: spelling.to_string(),
        });
    }
    Ok(())
}

/// Turns an arbitrary unmatched spelling into a well-formed term.
///
/// In order: `prefix:localPart` spellings keep their prefix under the unknown
/// namespace; absolute URIs with an authority are taken as the qualified name
/// verbatim; scheme-only URIs are rewritten under the unknown namespace with
/// the scheme as a pseudo-prefix; bare words are percent-encoded and
/// qualified under the unknown namespace directly.
pub fn synthesize(spelling: &str, is_class: bool) -> Result<Term> {
    validate(spelling)?;
    let spelling = spelling.trim();

    if let Some((prefix, local)) = split_prefixed(spelling) {
        let url = parse_absolute(&format!("{UNKNOWN_NAMESPACE}{prefix}/{local}"), spelling)?;
        return Ok(Term::unknown_prefixed(
            prefix,
            &url.origin().ascii_serialization(),
            url.as_str(),
            local,
            is_class,
        ));
    }

    match Url::parse(spelling) {
        // absolute URI with an authority: taken as the qualified name
        Ok(url) if url.has_host() => from_absolute(&url, is_class, spelling),
        // scheme-only URI, e.g. mailto:...: rewrite the scheme-specific part
        // under the unknown namespace and derive from there
        Ok(url) => {
            let rest = spelling[url.scheme().len() + 1..].trim_start_matches('/');
            let scheme = url.scheme();
            let url = parse_absolute(&format!("{UNKNOWN_NAMESPACE}{scheme}/{rest}"), spelling)?;
            from_absolute(&url, is_class, spelling)
        }
        // bare identifier or relative path: qualify under the unknown namespace
        Err(_) => {
            let name: Cow<'_, str> = if spelling.contains('/') || spelling.contains('#') {
                Cow::Borrowed(spelling)
            } else {
                Cow::Owned(utf8_percent_encode(spelling, QUALIFY).to_string())
            };
            let url = parse_absolute(&format!("{UNKNOWN_NAMESPACE}{name}"), spelling)?;
            from_absolute(&url, is_class, spelling)
        }
    }
}

fn from_absolute(url: &Url, is_class: bool, spelling: &str) -> Result<Term> {
    let simple_name = match url.fragment().filter(|f| !f.is_empty()) {
        Some(fragment) => fragment.to_string(),
        None => last_path_segment(url).ok_or_else(|| TermError::InvalidIdentifier {
            spelling: spelling.to_string(),
            message: "a path or fragment is needed to derive a simple name".to_string(),
        })?,
    };
    Ok(Term::unknown(
        &url.origin().ascii_serialization(),
        url.as_str(),
        &simple_name,
        is_class,
    ))
}

fn last_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Splits `prefix:localPart` where the prefix is a short alphanumeric token
/// and the local part carries no further `:` or `/` (which would make the
/// spelling a URI, not a prefixed name).
fn split_prefixed(spelling: &str) -> Option<(&str, &str)> {
    let (prefix, local) = spelling.split_once(':')?;
    if prefix.is_empty() || local.is_empty() || local.contains(':') || local.contains('/') {
        return None;
    }
    if !prefix.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        || !prefix.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some((prefix, local))
}

fn parse_absolute(candidate: &str, spelling: &str) -> Result<Url> {
    Url::parse(candidate).map_err(|source| TermError::InvalidIdentifier {
        spelling: spelling.to_string(),
        message: source.to_string(),
    })
}
