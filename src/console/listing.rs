//! List state and the mutations shared by both consoles.

use super::context::{settle, ConsoleContext};
use super::input::parse_stock_input;
use super::locks::RowLocks;
use super::{Outcome, REJECTED_FALLBACK};
use crate::error::ConsoleError;
use crate::model::{Product, ProductId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListingFilter {
    All,
    OutOfStockOnly,
}

impl ListingFilter {
    fn keeps(self, product: &Product) -> bool {
        match self {
            ListingFilter::All => true,
            ListingFilter::OutOfStockOnly => product.stock == 0,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ListingState {
    pub(crate) products: Vec<Product>,
    pub(crate) loading: bool,
    pub(crate) drafts: HashMap<ProductId, String>,
    pub(crate) armed: Option<ProductId>,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            drafts: HashMap::new(),
            armed: None,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Listing {
    pub(crate) ctx: ConsoleContext,
    filter: ListingFilter,
    state: Arc<RwLock<ListingState>>,
    locks: RowLocks,
}

impl Listing {
    pub(crate) fn new(ctx: ConsoleContext, filter: ListingFilter) -> Self {
        Self {
            ctx,
            filter,
            state: Arc::default(),
            locks: RowLocks::new(),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, ListingState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, ListingState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn locks(&self) -> &RowLocks {
        &self.locks
    }

    /// Fetches only once somebody is signed in.
    pub(crate) async fn mount(&self) -> Result<Outcome, ConsoleError> {
        if self.ctx.tokens.token().await.is_none() {
            debug!("No session yet, list not fetched");
            return Ok(Outcome::Skipped);
        }
        self.refresh().await.map(|_| Outcome::Applied)
    }

    /// Replaces the held list with a fresh copy from the server.
    ///
    /// The loading flag is cleared whether or not the fetch succeeds.
    #[instrument(skip(self), fields(filter = ?self.filter))]
    pub(crate) async fn refresh(&self) -> Result<(), ConsoleError> {
        let result = self.fetch().await;
        let mut state = self.write();
        state.loading = false;
        match result {
            Ok(products) => {
                debug!(count = products.len(), "List refreshed");
                state.products = products;
                Ok(())
            }
            Err(e) => {
                drop(state);
                Err(self.ctx.fail(e))
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>, ConsoleError> {
        let token = self.ctx.token().await?;
        let result = self.ctx.api.list_seller_products(&token).await;
        let (_, list) = settle(result, REJECTED_FALLBACK)?;
        let filter = self.filter;
        Ok(list
            .products
            .into_iter()
            .filter(|p| filter.keeps(p))
            .collect())
    }

    #[instrument(skip(self, raw))]
    pub(crate) async fn update_stock(
        &self,
        id: &ProductId,
        raw: &str,
    ) -> Result<Outcome, ConsoleError> {
        if id.is_empty() {
            return Ok(Outcome::Skipped);
        }
        let Some(new_stock) = parse_stock_input(raw) else {
            debug!(raw, "Stock input ignored");
            return Ok(Outcome::Skipped);
        };

        let _row = self.locks.lock(id).await;
        let sent = async {
            let token = self.ctx.token().await?;
            let result = self.ctx.api.update_stock(&token, id, new_stock).await;
            settle(result, REJECTED_FALLBACK)
        }
        .await;
        if let Err(e) = sent {
            return Err(self.ctx.fail(e));
        }

        info!(%id, new_stock, "Stock updated");
        self.ctx.notifier.success("Stock updated");
        let _ = self.refresh().await;
        Ok(Outcome::Applied)
    }

    #[instrument(skip(self))]
    pub(crate) async fn delete(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        if id.is_empty() {
            return Ok(Outcome::Skipped);
        }

        let _row = self.locks.lock(id).await;
        let sent = async {
            let token = self.ctx.token().await?;
            let result = self.ctx.api.delete_product(&token, id).await;
            settle(result, REJECTED_FALLBACK)
        }
        .await;
        if let Err(e) = sent {
            return Err(self.ctx.fail(e));
        }

        info!(%id, "Product deleted");
        self.ctx.notifier.success("Product deleted");
        let _ = self.refresh().await;
        Ok(Outcome::Applied)
    }

    pub(crate) fn set_draft(&self, id: &ProductId, raw: impl Into<String>) {
        self.write().drafts.insert(id.clone(), raw.into());
    }

    pub(crate) fn draft(&self, id: &ProductId) -> String {
        self.read().drafts.get(id).cloned().unwrap_or_default()
    }

    /// Swaps in `product` wherever a row has the same id.
    pub(crate) fn merge(&self, product: Product) {
        let mut state = self.write();
        for row in state.products.iter_mut().filter(|row| row.id == product.id) {
            *row = product.clone();
        }
    }
}
