//! Error types for the product store.

use doc_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Offer price {offer} must be less than price {price}")]
    OfferNotBelowPrice { offer: f64, price: f64 },

    #[error("Product name is required")]
    MissingName,

    /// The collection could not be reached or failed internally.
    #[error("Product store error: {0}")]
    Store(String),
}

impl From<StoreError> for ProductError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(domain) => *domain,
                Err(other) => ProductError::Store(other.to_string()),
            },
            other => ProductError::Store(other.to_string()),
        }
    }
}
