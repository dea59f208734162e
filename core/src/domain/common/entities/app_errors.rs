use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Missing shopId or language")]
    InvalidInput,

    #[error("Shop not found")]
    NotFound,

    #[error("Language not supported")]
    UnsupportedLanguage,

    #[error("{0}")]
    ConfigurationError(String),

    /// The generation service did not answer with a usable completion.
    /// `status` is the upstream HTTP status when one was received.
    #[error("LLM API error: {message}")]
    UpstreamFailure {
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid shop registry: {0}")]
    InvalidRegistry(String),
}
