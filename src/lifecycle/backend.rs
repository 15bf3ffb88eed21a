use crate::api::InMemorySellerApi;
use crate::auth::TokenProvider;
use crate::category_store::{self, CategoryError};
use crate::clients::{CategoryClient, ProductClient};
use crate::config::StoreConfig;
use crate::console::ConsoleContext;
use crate::model::{CategoryCreate, ProductCategory, SellerId};
use crate::notify::Notifier;
use crate::product_store;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Collection task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The in-process backend: both collections plus the API served from them.
///
/// # Example
///
/// ```ignore
/// let backend = SellerBackend::new(&StoreConfig::default());
/// backend.register_seller("token", SellerId::from("seller_1")).await;
///
/// let ctx = backend.context(tokens, notifier);
/// let console = StockConsole::new(ctx);
/// console.mount().await?;
///
/// drop(console);
/// backend.shutdown().await?;
/// ```
pub struct SellerBackend {
    pub products: ProductClient,
    pub categories: CategoryClient,
    api: Arc<InMemorySellerApi>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SellerBackend {
    /// Spawns the product and category collections.
    pub fn new(config: &StoreConfig) -> Self {
        let (product_collection, products) = product_store::new(config.buffer_size);
        let (category_collection, categories) = category_store::new(config.buffer_size);

        let product_handle = tokio::spawn(product_collection.run(()));
        let category_handle = tokio::spawn(category_collection.run(()));

        let api = Arc::new(InMemorySellerApi::new(products.clone()));

        Self {
            products,
            categories,
            api,
            handles: vec![product_handle, category_handle],
        }
    }

    pub fn api(&self) -> Arc<InMemorySellerApi> {
        self.api.clone()
    }

    pub async fn register_seller(&self, token: impl Into<String>, seller: SellerId) {
        self.api.register_seller(token, seller).await;
    }

    /// Context for consoles and forms backed by this backend.
    pub fn context(
        &self,
        tokens: Arc<dyn TokenProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> ConsoleContext {
        ConsoleContext::new(self.api.clone(), tokens, notifier)
    }

    /// Creates one category per [`ProductCategory`] that does not exist yet.
    pub async fn seed_categories(&self) -> Result<usize, CategoryError> {
        let mut created = 0;
        for category in ProductCategory::ALL {
            if self.categories.find_by_name(category.as_str()).await?.is_some() {
                continue;
            }
            self.categories
                .create_category(CategoryCreate {
                    name: category.as_str().to_string(),
                    subcategories: Vec::new(),
                })
                .await?;
            created += 1;
        }
        info!(created, "Categories seeded");
        Ok(created)
    }

    /// Closes both collections and waits for them to stop.
    ///
    /// Every [`ConsoleContext`] obtained from [`context`](Self::context) and
    /// every [`api`](Self::api) handle must be dropped first; they keep the
    /// product collection open.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down backend...");

        drop(self.api);
        drop(self.products);
        drop(self.categories);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Backend shutdown complete.");
        Ok(())
    }
}
