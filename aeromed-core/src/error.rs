use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
