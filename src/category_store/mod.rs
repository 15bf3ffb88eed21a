//! # Category Store
//!
//! Category names with their subcategory lists, kept in a
//! [`Collection`](doc_store::Collection) that enforces unique names.
//!
//! - [`entity`] - [`Document`](doc_store::Document) implementation for [`Category`]
//! - [`error`] - [`CategoryError`]
//! - [`new()`] - Factory that creates the collection and its client

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use doc_store::Collection;

/// Creates a category collection and its client.
pub fn new(buffer_size: usize) -> (Collection<Category>, CategoryClient) {
    let (collection, inner) = Collection::new(buffer_size);
    (collection, CategoryClient::new(inner))
}
