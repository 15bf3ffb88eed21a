//! # Seller API
//!
//! The backend contract the consoles talk to, as an object-safe trait.
//!
//! | Operation | Method & path |
//! |---|---|
//! | List seller products | `GET /api/product/seller-list` |
//! | Update stock | `POST /api/seller/update-stock` |
//! | Delete product | `DELETE /api/seller/delete/{id}` |
//! | Toggle visibility | `POST /api/seller/toggle-stock-visibility` |
//! | Create product | `POST /api/product/add` (multipart) |
//! | Bulk import | `POST /api/upload` (multipart, field `file`) |
//!
//! Every call carries a bearer token. A reply with `success: false` is not an
//! `Err`: it comes back as an [`ApiReply`] so callers can surface the server's
//! message verbatim. `Err` is reserved for transport and decoding failures.
//!
//! Two implementations ship with the crate:
//! - [`HttpSellerApi`] speaks HTTP through `reqwest`
//! - [`InMemorySellerApi`] serves the same contract from the local stores

pub mod error;
pub mod http;
pub mod memory;

pub use error::*;
pub use http::*;
pub use memory::*;

use crate::model::{
    Ack, ApiReply, ProductCategory, ProductId, ProductList, SpecSheet, ToggledProduct, UploadFile,
};
use async_trait::async_trait;

pub const SELLER_LIST_PATH: &str = "/api/product/seller-list";
pub const UPDATE_STOCK_PATH: &str = "/api/seller/update-stock";
pub const DELETE_PRODUCT_PATH: &str = "/api/seller/delete";
pub const TOGGLE_VISIBILITY_PATH: &str = "/api/seller/toggle-stock-visibility";
pub const ADD_PRODUCT_PATH: &str = "/api/product/add";
pub const BULK_UPLOAD_PATH: &str = "/api/upload";

/// A validated product ready to be sent to the create endpoint.
#[derive(Debug, Clone)]
pub struct ProductSubmission {
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub price: f64,
    pub offer_price: Option<f64>,
    pub stock: u32,
    pub specs: SpecSheet,
    pub images: Vec<UploadFile>,
}

#[async_trait]
pub trait SellerApi: Send + Sync {
    async fn list_seller_products(&self, token: &str) -> Result<ApiReply<ProductList>, ApiError>;

    async fn update_stock(
        &self,
        token: &str,
        id: &ProductId,
        new_stock: u32,
    ) -> Result<ApiReply<Ack>, ApiError>;

    async fn delete_product(&self, token: &str, id: &ProductId) -> Result<ApiReply<Ack>, ApiError>;

    async fn toggle_stock_visibility(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<ApiReply<ToggledProduct>, ApiError>;

    async fn add_product(
        &self,
        token: &str,
        submission: ProductSubmission,
    ) -> Result<ApiReply<Ack>, ApiError>;

    async fn bulk_upload(&self, token: &str, file: UploadFile) -> Result<ApiReply<Ack>, ApiError>;
}
