#![deny(unsafe_code)]

pub mod registry;
pub mod serde_support;
pub mod unknown;
pub mod vocabularies;

pub use registry::{TermRegistry, default_registry};
pub use unknown::UNKNOWN_NAMESPACE;
pub use vocab_model::{
    CatalogTerm, Result, Term, TermError, TermKind, VocabularyCatalog, normalize_spelling,
};
