// src/infra/errors.rs — Error types for relay construction

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    // Chain configuration
    #[error("A relay needs at least 2 languages, got {len}")]
    ChainTooShort { len: usize },

    #[error("Language '{name}' not found")]
    LanguageNotFound { name: String },

    #[error("Language '{name}' appears more than once in the chain")]
    DuplicateLanguage { name: String },

    #[error("'{name}' is the base language and cannot be used as a writer")]
    BaseAsWriter { name: String },

    #[error("Escape token '{token}' is shared by {first} and {second}")]
    TokenCollision {
        first: String,
        second: String,
        token: String,
    },

    // Construction
    #[error("Base template must contain the payload hole exactly once (found {found})")]
    PlaceholderHole { found: usize },

    #[error("{language} {what} literal cannot hold U+{code:04X}")]
    Unembeddable {
        language: String,
        what: &'static str,
        code: u32,
    },

    #[error("Template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    // Simulation
    #[error("Cannot execute {language} program: {message}")]
    Simulation { language: String, message: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayError {
    pub fn not_found(name: impl Into<String>) -> Self {
        RelayError::LanguageNotFound { name: name.into() }
    }

    /// Errors caused by user-supplied chain configuration rather than a
    /// broken template.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RelayError::ChainTooShort { .. }
                | RelayError::LanguageNotFound { .. }
                | RelayError::DuplicateLanguage { .. }
                | RelayError::BaseAsWriter { .. }
                | RelayError::Config(_)
        )
    }
}
