//! Domain wrappers around [`CollectionClient`](doc_store::CollectionClient).

pub mod category_client;
pub mod product_client;

pub use category_client::*;
pub use product_client::*;
