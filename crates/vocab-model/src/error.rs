use thiserror::Error;

/// Invalid-input failures when building or resolving a term.
///
/// Lookup-key collisions between known vocabularies are deliberately not an
/// error: the registry keeps the earlier registration and reports the clash
/// as a warning.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("term spelling must not be blank")]
    BlankSpelling,

    #[error("term spelling {spelling:?} contains whitespace")]
    EmbeddedWhitespace { spelling: String },

    #[error("cannot derive an absolute identifier from {spelling:?}: {message}")]
    InvalidIdentifier { spelling: String, message: String },
}

pub type Result<T> = std::result::Result<T, TermError>;
