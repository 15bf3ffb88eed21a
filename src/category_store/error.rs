use doc_store::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("Category name is required")]
    MissingName,

    #[error("Category already exists: {0}")]
    DuplicateName(String),

    #[error("Subcategory already exists: {0}")]
    DuplicateSubcategory(String),

    #[error("Unknown subcategory: {0}")]
    UnknownSubcategory(String),

    #[error("Category store error: {0}")]
    Store(String),
}

impl From<StoreError> for CategoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => CategoryError::NotFound(id),
            StoreError::Conflict(name) => CategoryError::DuplicateName(name),
            StoreError::EntityError(inner) => match inner.downcast::<CategoryError>() {
                Ok(domain) => *domain,
                Err(other) => CategoryError::Store(other.to_string()),
            },
            other => CategoryError::Store(other.to_string()),
        }
    }
}
