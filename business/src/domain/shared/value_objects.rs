use crate::domain::product::errors::ProductError;

/// Identifies a product in the storefront catalog.
/// Used as the deduplication key of cart lines and wishlist entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a ProductId, rejecting empty or whitespace-only identifiers.
    pub fn new(id: impl Into<String>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ProductError::IdEmpty);
        }
        Ok(Self(id))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ProductId {
    type Error = ProductError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
