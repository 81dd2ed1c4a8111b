#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.id_empty")]
    IdEmpty,
}
