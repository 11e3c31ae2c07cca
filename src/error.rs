#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] serde_yaml::Error),
    #[error("render not found for component of kind '{0}'")]
    UnknownKind(String),
    #[error("node with id '{id}' not found")]
    UnknownNode { id: String },
    #[error("unknown cloud provider '{0}' (expected one of: aws, gcp, azure)")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
