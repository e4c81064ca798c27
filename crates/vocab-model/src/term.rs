//! The canonical identity of one vocabulary concept.
//!
//! A [`Term`] is an immutable value describing a single concept of a metadata
//! vocabulary: its simple name, the namespace it lives in, an optional short
//! prefix, and whether the spelling denotes a class (a row/record type) or a
//! property (a field of a record).
//!
//! Identity and equality are defined solely by the qualified name
//! (`namespace + simpleName`). Two terms with the same qualified name are the
//! same term no matter how they were constructed, which is what lets the
//! registry hand out a stable singleton per fabricated spelling.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Whether a term belongs to a compiled-in vocabulary or was fabricated at
/// runtime for a spelling no vocabulary knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Known,
    Unknown,
}

/// Canonical identity for one vocabulary concept.
///
/// Cheap to clone: the payload sits behind an `Arc`, so terms can be passed
/// around and used as map keys freely. Clones of the same registry entry also
/// share the allocation, see [`Term::same_instance`].
#[derive(Debug, Clone)]
pub struct Term {
    inner: Arc<TermInner>,
}

#[derive(Debug)]
struct TermInner {
    prefix: Option<String>,
    namespace: String,
    simple_name: String,
    qualified_name: String,
    prefixed_name: String,
    is_class: bool,
    kind: TermKind,
    deprecated: bool,
    vocabulary: bool,
}

impl Term {
    /// A member of a compiled-in vocabulary.
    ///
    /// The namespace must end with its separator so that
    /// `namespace + simple_name` forms the qualified name.
    pub fn known(prefix: &str, namespace: &str, simple_name: &str, is_class: bool) -> Self {
        Self::known_flagged(prefix, namespace, simple_name, is_class, false, false)
    }

    pub(crate) fn known_flagged(
        prefix: &str,
        namespace: &str,
        simple_name: &str,
        is_class: bool,
        deprecated: bool,
        vocabulary: bool,
    ) -> Self {
        Self {
            inner: Arc::new(TermInner {
                prefix: Some(prefix.to_string()),
                namespace: namespace.to_string(),
                simple_name: simple_name.to_string(),
                qualified_name: format!("{namespace}{simple_name}"),
                prefixed_name: format!("{prefix}:{simple_name}"),
                is_class,
                kind: TermKind::Known,
                deprecated,
                vocabulary,
            }),
        }
    }

    /// A fabricated identity for a spelling outside every known vocabulary.
    ///
    /// Such terms carry no prefix; their prefixed name falls back to the
    /// qualified name.
    pub fn unknown(namespace: &str, qualified_name: &str, simple_name: &str, is_class: bool) -> Self {
        Self {
            inner: Arc::new(TermInner {
                prefix: None,
                namespace: namespace.to_string(),
                simple_name: simple_name.to_string(),
                qualified_name: qualified_name.to_string(),
                prefixed_name: qualified_name.to_string(),
                is_class,
                kind: TermKind::Unknown,
                deprecated: false,
                vocabulary: false,
            }),
        }
    }

    /// A fabricated identity that keeps the prefix it was spelled with,
    /// e.g. `tim:Eva` resolved under the unknown namespace.
    pub fn unknown_prefixed(
        prefix: &str,
        namespace: &str,
        qualified_name: &str,
        simple_name: &str,
        is_class: bool,
    ) -> Self {
        Self {
            inner: Arc::new(TermInner {
                prefix: Some(prefix.to_string()),
                namespace: namespace.to_string(),
                simple_name: simple_name.to_string(),
                qualified_name: qualified_name.to_string(),
                prefixed_name: format!("{prefix}:{simple_name}"),
                is_class,
                kind: TermKind::Unknown,
                deprecated: false,
                vocabulary: false,
            }),
        }
    }

    /// Short namespace abbreviation, e.g. `dwc`. Absent for fabricated terms
    /// without a recognized authority.
    pub fn prefix(&self) -> Option<&str> {
        self.inner.prefix.as_deref()
    }

    /// Base URI the term lives under.
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    /// Bare identifier, unique within one (namespace, class-vs-property) pair.
    pub fn simple_name(&self) -> &str {
        &self.inner.simple_name
    }

    /// Full URI of the term, the global identity key.
    pub fn qualified_name(&self) -> &str {
        &self.inner.qualified_name
    }

    /// `prefix:simpleName`, or the qualified name when no prefix is known.
    pub fn prefixed_name(&self) -> &str {
        &self.inner.prefixed_name
    }

    /// True when the spelling denotes a record/row type rather than a field.
    pub fn is_class(&self) -> bool {
        self.inner.is_class
    }

    pub fn kind(&self) -> TermKind {
        self.inner.kind
    }

    /// True for historic terms kept only so old data keeps resolving.
    pub fn is_deprecated(&self) -> bool {
        self.inner.deprecated
    }

    /// True when the term's values are backed by a controlled vocabulary.
    pub fn is_vocabulary_backed(&self) -> bool {
        self.inner.vocabulary
    }

    /// True when both values are clones of the same registry entry, not just
    /// value-equal reconstructions.
    pub fn same_instance(&self, other: &Term) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.inner.qualified_name == other.inner.qualified_name
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.qualified_name.hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.qualified_name.cmp(&other.inner.qualified_name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefixed_name())
    }
}

/// Terms serialize as their qualified name; deserialization goes back through
/// a registry, see the registry crate's serde helpers.
impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.qualified_name())
    }
}
