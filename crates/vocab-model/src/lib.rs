#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod normalize;
pub mod term;
pub mod values;

pub use catalog::{CatalogTerm, VocabularyCatalog};
pub use error::{Result, TermError};
pub use normalize::normalize_spelling;
pub use term::{Term, TermKind};
pub use values::{first_value, is_value_blank};
