//! # Product Client
//!
//! High-level API over the product collection. Wraps a
//! `CollectionClient<Product>` and exposes catalog operations with
//! [`ProductError`] results.
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_store::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use doc_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductClient {
    inner: CollectionClient<Product>,
}

impl ProductClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ProductError::from)
    }

    /// Current stock level.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!(%id, "Checking stock");
        match self.inner.perform_action(id, ProductAction::CheckStock).await {
            Ok(ProductActionResult::CheckStock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return CheckStock result"),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the stock level and returns the updated product.
    #[instrument(skip(self))]
    pub async fn set_stock(&self, id: ProductId, stock: u32) -> Result<Product, ProductError> {
        debug!(%id, stock, "Setting stock");
        match self
            .inner
            .perform_action(id, ProductAction::SetStock(stock))
            .await
        {
            Ok(ProductActionResult::SetStock(product)) => Ok(product),
            Ok(_) => unreachable!("SetStock action must return SetStock result"),
            Err(e) => Err(e.into()),
        }
    }

    /// Flips the manual out-of-stock flag and returns the updated product.
    #[instrument(skip(self))]
    pub async fn toggle_visibility(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!(%id, "Toggling visibility");
        match self
            .inner
            .perform_action(id, ProductAction::ToggleVisibility)
            .await
        {
            Ok(ProductActionResult::ToggleVisibility(product)) => Ok(product),
            Ok(_) => unreachable!("ToggleVisibility action must return ToggleVisibility result"),
            Err(e) => Err(e.into()),
        }
    }
}
