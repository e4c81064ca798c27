//! Data-driven vocabulary tables.
//!
//! A vocabulary is just an ordered list of rows: `(simpleName, isClass,
//! alternativeNames[])` plus per-row flags, owned by one prefix/namespace
//! pair. The registry consumes these tables through `register_vocabulary`
//! and has no opinion on how they were produced (compiled-in tables,
//! configuration, generated data).

use crate::term::Term;

/// One row of a vocabulary table.
#[derive(Debug, Clone)]
pub struct CatalogTerm {
    pub simple_name: String,
    pub is_class: bool,
    /// Historic names, misspellings and deprecated synonyms that must resolve
    /// to this row's identity.
    pub alternatives: Vec<String>,
    /// Kept only so old data keeps resolving.
    pub deprecated: bool,
    /// Values of this term are backed by a controlled vocabulary.
    pub vocabulary: bool,
}

impl CatalogTerm {
    pub fn deprecated(&mut self) -> &mut Self {
        self.deprecated = true;
        self
    }

    pub fn vocabulary(&mut self) -> &mut Self {
        self.vocabulary = true;
        self
    }
}

/// An ordered catalog of known terms sharing one namespace.
///
/// `name` is the catalog's identity for idempotent registration; registering
/// the same name twice is a no-op.
#[derive(Debug, Clone)]
pub struct VocabularyCatalog {
    pub name: String,
    pub prefix: String,
    pub namespace: String,
    pub terms: Vec<CatalogTerm>,
}

impl VocabularyCatalog {
    /// Creates an empty catalog. The namespace gets a trailing `/` appended
    /// when it does not already end in a separator, preserving the invariant
    /// `namespace + simpleName == qualifiedName`.
    pub fn new(name: &str, prefix: &str, namespace: &str) -> Self {
        let mut namespace = namespace.to_string();
        if !namespace.ends_with('/') && !namespace.ends_with('#') {
            namespace.push('/');
        }
        Self {
            name: name.to_string(),
            prefix: prefix.to_string(),
            namespace,
            terms: Vec::new(),
        }
    }

    /// Adds a class (row type) row.
    pub fn class(&mut self, simple_name: &str, alternatives: &[&str]) -> &mut CatalogTerm {
        self.push(simple_name, true, alternatives)
    }

    /// Adds a property (field) row.
    pub fn property(&mut self, simple_name: &str, alternatives: &[&str]) -> &mut CatalogTerm {
        self.push(simple_name, false, alternatives)
    }

    fn push(&mut self, simple_name: &str, is_class: bool, alternatives: &[&str]) -> &mut CatalogTerm {
        debug_assert!(
            !simple_name.is_empty() && !simple_name.chars().any(char::is_whitespace),
            "catalog simple names are pre-validated: {simple_name:?}"
        );
        self.terms.push(CatalogTerm {
            simple_name: simple_name.to_string(),
            is_class,
            alternatives: alternatives.iter().map(|a| (*a).to_string()).collect(),
            deprecated: false,
            vocabulary: false,
        });
        let last = self.terms.len() - 1;
        &mut self.terms[last]
    }

    /// Materializes the term identity for one table row.
    pub fn term(&self, row: &CatalogTerm) -> Term {
        Term::known_flagged(
            &self.prefix,
            &self.namespace,
            &row.simple_name,
            row.is_class,
            row.deprecated,
            row.vocabulary,
        )
    }

    /// Materializes every row of the catalog, in table order.
    pub fn all_terms(&self) -> impl Iterator<Item = Term> {
        self.terms.iter().map(|row| self.term(row))
    }
}
