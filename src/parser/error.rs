use thiserror::Error;

/// Failure while parsing one input file or writing its output
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid XML: {0}")]
    Xml(String),

    #[error("Missing <{field}> element in item #{item}")]
    MissingField { field: String, item: usize },
}

impl HandlerError {
    pub(crate) fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Extension {extension} is already handled by {existing}; cannot register {rejected}")]
    DuplicateExtension {
        extension: String,
        existing: String,
        rejected: String,
    },
}
