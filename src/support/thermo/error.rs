use thiserror::Error;

/// Errors that may occur when evaluating pure-component properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the correlation's valid domain.
    ///
    /// For example, an Antoine correlation evaluated at a temperature where
    /// `C + T ≤ 0`.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The correlation parameters themselves are unusable.
    #[error("invalid parameters: {context}")]
    InvalidParameters { context: String },

    /// The calculation produced a non-finite value.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
