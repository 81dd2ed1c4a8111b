/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.malformed")]
    Malformed,
    #[error("repository.read")]
    Read,
    #[error("repository.write")]
    Write,
}

