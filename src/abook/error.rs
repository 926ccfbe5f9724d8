use thiserror::Error;

/// The class of failure, as the user sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Lookup,
    NotSet,
    Format,
    Internal,
}

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("Please use correct number of arguments")]
    WrongArgCount,

    #[error("{0}")]
    Usage(String),

    #[error("Name is not present: {0}")]
    NotFound(String),

    #[error("Nothing to show: {field} is not set for {name}")]
    NotSet { name: String, field: &'static str },

    #[error("Phone: {0} is not correct it should contain 10 digits")]
    InvalidPhone(String),

    #[error("Please use correct date format DD.MM.YYYY, instead of {0}")]
    InvalidDate(String),

    #[error("Email: {0} is not correct, use local@domain.tld of up to 50 characters")]
    InvalidEmail(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl AbookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AbookError::WrongArgCount | AbookError::Usage(_) => ErrorKind::Usage,
            AbookError::NotFound(_) => ErrorKind::Lookup,
            AbookError::NotSet { .. } => ErrorKind::NotSet,
            AbookError::InvalidPhone(_)
            | AbookError::InvalidDate(_)
            | AbookError::InvalidEmail(_) => ErrorKind::Format,
            AbookError::Io(_) | AbookError::Serialization(_) | AbookError::Store(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub(crate) fn not_set(name: &str, field: &'static str) -> Self {
        AbookError::NotSet {
            name: name.to_string(),
            field,
        }
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
