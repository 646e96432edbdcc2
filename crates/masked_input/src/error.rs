//! Error types for masked_input

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the owner when a masking engine is built.
///
/// The synchronizer itself performs no validation; these come from engine
/// factories and from compiling placeholder patterns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid mask: {0}")]
    InvalidMask(String),

    #[error("placeholder character {0:?} must not appear as a literal in the mask")]
    PlaceholderInMask(char),

    #[error("masking engine failed to build: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}
