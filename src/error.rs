use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("invalid input: {0}")]
    /// The request can't be turned into a label, e.g. the destination address
    /// has no printable lines. Nothing is rendered.
    InvalidInput(String),

    #[error("failed to render label: {0}")]
    /// The document could not be produced or written out
    RenderingFailure(#[source] std::io::Error),

    #[error("invalid configuration: {0}")]
    /// A configuration file could not be read or understood
    Config(String),

    #[error(transparent)]
    /// [serde_json] failed to parse a request or configuration document
    Json(#[from] serde_json::Error),
}

impl LabelError {
    pub(crate) fn invalid_input<S: ToString>(message: S) -> LabelError {
        LabelError::InvalidInput(message.to_string())
    }
}

impl From<std::io::Error> for LabelError {
    fn from(err: std::io::Error) -> Self {
        LabelError::RenderingFailure(err)
    }
}
