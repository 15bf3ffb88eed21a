//! # Category Client
//!
//! High-level API over the category collection.
use crate::category_store::{CategoryAction, CategoryError};
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;
use doc_store::{CollectionClient, DocumentClient, StoreError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CategoryClient {
    inner: CollectionClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: CollectionClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &CollectionClient<Category> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CategoryError::from(e)
    }
}

impl CategoryClient {
    #[instrument(skip(self))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CategoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn rename_category(
        &self,
        id: CategoryId,
        name: String,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        let update = CategoryUpdate {
            name: Some(name),
            subcategories: None,
        };
        self.inner.update(id, update).await.map_err(CategoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn add_subcategory(
        &self,
        id: CategoryId,
        name: String,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CategoryAction::AddSubcategory(name))
            .await
            .map_err(CategoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn remove_subcategory(
        &self,
        id: CategoryId,
        name: String,
    ) -> Result<Category, CategoryError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CategoryAction::RemoveSubcategory(name))
            .await
            .map_err(CategoryError::from)
    }

    /// Looks a category up by its exact name.
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, CategoryError> {
        let all = self.list(()).await?;
        Ok(all.into_iter().find(|c| c.name == name.trim()))
    }
}
