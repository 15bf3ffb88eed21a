//! # Product Store
//!
//! The product catalog as a [`Collection`](doc_store::Collection) of
//! [`Product`] documents.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](doc_store::Document) implementation for [`Product`]
//! - [`error`] - [`ProductError`] for catalog failures
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock and visibility
//! - [`new()`] - Factory that creates the collection and its client
//!
//! ## Usage
//!
//! ```rust
//! use seller_console::product_store;
//! use seller_console::model::{ProductCategory, ProductCreate, SellerId, SpecSheet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (collection, client) = product_store::new(32);
//!     tokio::spawn(collection.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate {
//!             seller: SellerId::from("seller_1"),
//!             name: "Studio Buds".to_string(),
//!             description: String::new(),
//!             category: ProductCategory::Earphone,
//!             price: 99.0,
//!             offer_price: Some(79.0),
//!             stock: 12,
//!             images: vec!["uploads/buds.png".to_string()],
//!             specs: SpecSheet::new(),
//!         })
//!         .await?;
//!
//!     let updated = client.set_stock(id, 0).await?;
//!     assert!(updated.shows_out_of_stock());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use doc_store::Collection;

/// Creates a product collection and its client.
pub fn new(buffer_size: usize) -> (Collection<Product>, ProductClient) {
    let (collection, inner) = Collection::new(buffer_size);
    (collection, ProductClient::new(inner))
}
