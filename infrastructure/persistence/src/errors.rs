use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.invalid_key")]
    InvalidKey,
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.read")]
    Read,
    #[error("storage.write")]
    Write,
}
