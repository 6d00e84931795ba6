use thiserror::Error;

#[derive(Error, Debug)]
pub enum XatagError {
    #[error("Not a xatag attribute: {0}")]
    InvalidAttributeName(String),

    #[error("Cannot parse tag expression: {0:?}")]
    MalformedTagString(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, XatagError>;
