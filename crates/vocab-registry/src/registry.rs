//! Process-wide index from spellings to term identities.
//!
//! The registry keeps two disjoint lookup maps, one for class terms (row
//! types) and one for property terms (fields), because the same spelling may
//! legitimately name a different concept in each space. Within a space every
//! key is indexed twice, verbatim and normalized (see
//! [`vocab_model::normalize_spelling`]), and verbatim matches in either space
//! beat normalized ones.
//!
//! Known vocabularies are bulk-loaded through [`TermRegistry::register_vocabulary`];
//! spellings that match nothing are fabricated once and cached for the
//! lifetime of the process, so repeated resolution of the same spelling hands
//! out the identical instance. This is a correctness cache: nothing is ever
//! evicted.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use parking_lot::RwLock;
use vocab_model::{Result, Term, TermError, VocabularyCatalog, normalize_spelling};

use crate::unknown;
use crate::vocabularies;

/// Spelling-to-term resolver over a set of registered vocabularies.
///
/// Cheap reads, synchronized insert-if-absent writes: after the initial bulk
/// load the only mutation is caching freshly fabricated unknown terms.
/// Construct an empty one with [`TermRegistry::new`], a pre-populated one
/// with [`TermRegistry::with_known_vocabularies`], or share the process-wide
/// instance via [`default_registry`].
pub struct TermRegistry {
    index: RwLock<Index>,
}

#[derive(Default)]
struct Index {
    classes: Space,
    properties: Space,
    catalogs: HashSet<String>,
    open_namespaces: Vec<OpenNamespace>,
}

/// One lookup space. Exact keys are kept apart from normalized ones so that
/// an exact match in either space always beats a normalized match: a bare
/// `identifier` must find the Dublin Core property even though `Identifier`
/// is also a row type.
#[derive(Default)]
struct Space {
    exact: HashMap<String, Term>,
    normalized: HashMap<String, Term>,
}

impl Space {
    fn lookup_normalized(&self, spelling: &str) -> Option<Term> {
        let key = normalize_spelling(spelling);
        if key.is_empty() {
            return None;
        }
        self.normalized.get(&key).cloned()
    }

    fn terms(&self) -> impl Iterator<Item = &Term> {
        self.exact.values()
    }
}

/// A registered authority under which unseen spellings fabricate terms in
/// their own namespace instead of the unknown one.
struct OpenNamespace {
    prefix: String,
    namespace: String,
}

impl Index {
    fn space(&self, is_class: bool) -> &Space {
        if is_class { &self.classes } else { &self.properties }
    }

    /// Indexes one lookup key, plus its normalized form. The earlier
    /// registration always wins; a clash with a different term is reported
    /// and dropped, never raised.
    fn add(&mut self, key: &str, term: &Term) {
        let key = key.trim();
        if key.is_empty() {
            return;
        }
        let space = if term.is_class() {
            &mut self.classes
        } else {
            &mut self.properties
        };
        if let Some(existing) = space.exact.get(key) {
            if existing != term {
                tracing::warn!(
                    key,
                    kept = %existing,
                    dropped = %term,
                    class = term.is_class(),
                    "two terms share a lookup key, keeping the earlier registration"
                );
            }
            return;
        }
        space.exact.insert(key.to_string(), term.clone());
        let normalized = normalize_spelling(key);
        if !normalized.is_empty() && !space.normalized.contains_key(&normalized) {
            space.normalized.insert(normalized, term.clone());
        }
    }

    fn add_standard_keys(&mut self, term: &Term) {
        self.add(term.simple_name(), term);
        self.add(term.prefixed_name(), term);
        self.add(term.qualified_name(), term);
    }

    /// Exact key first, then the normalized key. `None` searches the class
    /// space before the property space within each pass, so an ambiguous bare
    /// spelling prefers the rarer, more specific class term.
    fn lookup(&self, spelling: &str, space: Option<bool>) -> Option<Term> {
        match space {
            Some(is_class) => {
                let space = self.space(is_class);
                space
                    .exact
                    .get(spelling)
                    .cloned()
                    .or_else(|| space.lookup_normalized(spelling))
            }
            None => self
                .classes
                .exact
                .get(spelling)
                .or_else(|| self.properties.exact.get(spelling))
                .cloned()
                .or_else(|| self.classes.lookup_normalized(spelling))
                .or_else(|| self.properties.lookup_normalized(spelling)),
        }
    }

    /// Builds a fresh identity for a spelling that matched nothing.
    fn fabricate(&self, spelling: &str, is_class: bool) -> Result<Term> {
        for open in &self.open_namespaces {
            let prefixed = format!("{}:", open.prefix);
            let local = spelling
                .strip_prefix(&prefixed)
                .or_else(|| spelling.strip_prefix(&open.namespace));
            if let Some(local) = local.filter(|l| !l.is_empty()) {
                unknown::validate(spelling)?;
                let qualified = format!("{}{local}", open.namespace);
                let namespace = open.namespace.trim_end_matches(['/', '#']).to_string();
                return Ok(Term::unknown_prefixed(
                    &open.prefix,
                    &namespace,
                    &qualified,
                    local,
                    is_class,
                ));
            }
        }
        unknown::synthesize(spelling, is_class)
    }
}

impl TermRegistry {
    /// An empty registry with no vocabularies loaded.
    pub fn new() -> Self {
        Self {
            index: RwLock::new(Index::default()),
        }
    }

    /// A registry pre-populated with every built-in vocabulary, in the fixed
    /// order that decides collision tie-breaks.
    pub fn with_known_vocabularies() -> Self {
        let registry = Self::new();
        vocabularies::register_defaults(&registry);
        registry
    }

    /// Bulk-loads a vocabulary catalog.
    ///
    /// Every row is indexed under its simple, prefixed and qualified name,
    /// every alternative name (bare, with the catalog prefix, with each
    /// alternate prefix, and resolved against the namespace), and the
    /// normalized form of each of those. Registering the same catalog name
    /// twice is a no-op.
    pub fn register_vocabulary(&self, catalog: &VocabularyCatalog, alt_prefixes: &[&str]) {
        let mut index = self.index.write();
        if !index.catalogs.insert(catalog.name.clone()) {
            tracing::debug!(catalog = %catalog.name, "vocabulary is already registered");
            return;
        }
        for row in &catalog.terms {
            let term = catalog.term(row);
            index.add_standard_keys(&term);
            for prefix in alt_prefixes {
                index.add(&format!("{prefix}:{}", row.simple_name), &term);
            }
            for alt in &row.alternatives {
                index.add(alt, &term);
                // qualified or already-prefixed alternatives are indexed as-is
                if !alt.starts_with("http") && !alt.contains(':') {
                    index.add(&format!("{}:{alt}", catalog.prefix), &term);
                    index.add(&format!("{}{alt}", catalog.namespace), &term);
                    for prefix in alt_prefixes {
                        index.add(&format!("{prefix}:{alt}"), &term);
                    }
                }
            }
        }
    }

    /// Loads a catalog under its prefixed and qualified names only, for
    /// vocabularies whose simple names would clash with better-known terms.
    pub fn register_vocabulary_qualified_only(&self, catalog: &VocabularyCatalog) {
        let mut index = self.index.write();
        if !index.catalogs.insert(catalog.name.clone()) {
            tracing::debug!(catalog = %catalog.name, "vocabulary is already registered");
            return;
        }
        for row in &catalog.terms {
            let term = catalog.term(row);
            index.add(term.prefixed_name(), &term);
            index.add(term.qualified_name(), &term);
        }
    }

    /// Registers a single standalone term.
    pub fn register_term(&self, term: &Term) {
        self.index.write().add_standard_keys(term);
    }

    /// Registers an authority whose unseen spellings (`prefix:local` or
    /// `namespace + local`) fabricate terms under that namespace instead of
    /// the unknown one.
    pub fn register_open_namespace(&self, prefix: &str, namespace: &str) {
        let mut namespace = namespace.to_string();
        if !namespace.ends_with('/') && !namespace.ends_with('#') {
            namespace.push('/');
        }
        self.index.write().open_namespaces.push(OpenNamespace {
            prefix: prefix.to_string(),
            namespace,
        });
    }

    /// Resolves a spelling searching both class and property terms, class
    /// space first. Fabricates (and caches) an unknown property term when
    /// nothing matches.
    pub fn resolve(&self, spelling: &str) -> Result<Term> {
        self.resolve_spelling(spelling, None)
    }

    /// Like [`TermRegistry::resolve`], restricted to one space; misses
    /// fabricate into that space.
    pub fn resolve_in(&self, spelling: &str, is_class: bool) -> Result<Term> {
        self.resolve_spelling(spelling, Some(is_class))
    }

    /// Resolves among class terms only.
    pub fn resolve_class(&self, spelling: &str) -> Result<Term> {
        self.resolve_in(spelling, true)
    }

    /// Resolves among property terms only.
    pub fn resolve_property(&self, spelling: &str) -> Result<Term> {
        self.resolve_in(spelling, false)
    }

    fn resolve_spelling(&self, spelling: &str, space: Option<bool>) -> Result<Term> {
        let spelling = spelling.trim();
        if spelling.is_empty() {
            return Err(TermError::BlankSpelling);
        }
        {
            let index = self.index.read();
            if let Some(term) = index.lookup(spelling, space) {
                return Ok(term);
            }
        }
        let mut index = self.index.write();
        // a concurrent caller may have fabricated this spelling while we
        // waited for the write lock
        if let Some(term) = index.lookup(spelling, space) {
            return Ok(term);
        }
        let term = index.fabricate(spelling, space.unwrap_or(false))?;
        index.add(spelling, &term);
        index.add(term.prefixed_name(), &term);
        index.add(term.qualified_name(), &term);
        Ok(term)
    }

    /// Identities of every catalog registered so far, sorted.
    pub fn registered_vocabularies(&self) -> Vec<String> {
        let index = self.index.read();
        let mut names: Vec<String> = index.catalogs.iter().cloned().collect();
        names.sort();
        names
    }

    /// All distinct known terms whose values are backed by a controlled
    /// vocabulary, ordered by qualified name.
    pub fn vocabulary_backed_terms(&self) -> Vec<Term> {
        let index = self.index.read();
        let backed: BTreeSet<Term> = index
            .classes
            .terms()
            .chain(index.properties.terms())
            .filter(|term| term.is_vocabulary_backed())
            .cloned()
            .collect();
        backed.into_iter().collect()
    }
}

impl Default for TermRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT: OnceLock<TermRegistry> = OnceLock::new();

/// The process-wide registry, built with every built-in vocabulary on first
/// access. Only the very first caller pays for the bulk load; everyone else
/// proceeds lock-free for already-known keys.
pub fn default_registry() -> &'static TermRegistry {
    DEFAULT.get_or_init(|| {
        tracing::debug!("building the default term registry");
        TermRegistry::with_known_vocabularies()
    })
}
