use thiserror::Error;

/// Broad classification of a [`TypewiseError`], mirroring the error kinds a
/// dynamic caller distinguishes (usage, type, lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Type,
    Lookup,
    Config,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypewiseError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    QueryShape(String),
    #[error("Invalid type: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
    #[error("Unknown type \"{0}\"")]
    UnknownType(String),
    #[error("Unknown operation \"{0}\"")]
    UnknownOperation(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl TypewiseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::QueryShape(_) | Self::Mismatch { .. } => ErrorKind::Type,
            Self::UnknownType(_) | Self::UnknownOperation(_) => ErrorKind::Lookup,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, TypewiseError>;

// Helper conversions
impl From<config::ConfigError> for TypewiseError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
