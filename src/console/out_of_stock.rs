//! Products with nothing left, with a two-step delete.

use super::context::ConsoleContext;
use super::listing::{Listing, ListingFilter};
use super::Outcome;
use crate::error::ConsoleError;
use crate::model::{Product, ProductCategory, ProductId};
use tracing::debug;

pub const ALL_IN_STOCK: &str = "All products are in stock.";

#[derive(Debug, Clone, PartialEq)]
pub struct OutOfStockRow {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub stock_label: String,
    pub draft: String,
    /// Shows "Confirm Delete" and "Cancel" instead of "Delete".
    pub armed: bool,
}

#[derive(Clone)]
pub struct OutOfStockConsole {
    listing: Listing,
}

impl OutOfStockConsole {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            listing: Listing::new(ctx, ListingFilter::OutOfStockOnly),
        }
    }

    pub async fn mount(&self) -> Result<Outcome, ConsoleError> {
        self.listing.mount().await
    }

    pub async fn refresh(&self) -> Result<(), ConsoleError> {
        self.listing.refresh().await
    }

    pub fn is_loading(&self) -> bool {
        self.listing.read().loading
    }

    /// Held products; every one has a stock of zero.
    pub fn products(&self) -> Vec<Product> {
        self.listing.read().products.clone()
    }

    pub fn rows(&self) -> Vec<OutOfStockRow> {
        let state = self.listing.read();
        state
            .products
            .iter()
            .filter(|p| p.is_identified())
            .map(|p| OutOfStockRow {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.display_price(),
                thumbnail: p.thumbnail().map(str::to_string),
                stock_label: format!("Current Stock: {}", p.stock),
                draft: state.drafts.get(&p.id).cloned().unwrap_or_default(),
                armed: state.armed.as_ref() == Some(&p.id),
            })
            .collect()
    }

    /// Text to show instead of the table, if there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.listing
            .read()
            .products
            .is_empty()
            .then_some(ALL_IN_STOCK)
    }

    pub fn set_stock_draft(&self, id: &ProductId, raw: impl Into<String>) {
        self.listing.set_draft(id, raw);
    }

    pub fn stock_draft(&self, id: &ProductId) -> String {
        self.listing.draft(id)
    }

    pub async fn submit_stock_draft(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        let raw = self.listing.draft(id);
        self.listing.update_stock(id, &raw).await
    }

    pub async fn update_stock(&self, id: &ProductId, raw: &str) -> Result<Outcome, ConsoleError> {
        self.listing.update_stock(id, raw).await
    }

    /// Arms `id` for deletion, disarming any other row.
    pub fn arm_delete(&self, id: &ProductId) {
        self.listing.write().armed = Some(id.clone());
    }

    pub fn cancel_delete(&self) {
        self.listing.write().armed = None;
    }

    pub fn armed(&self) -> Option<ProductId> {
        self.listing.read().armed.clone()
    }

    /// Deletes `id` if it is the armed row. The row is disarmed only when the
    /// delete succeeds.
    pub async fn confirm_delete(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        if self.armed().as_ref() != Some(id) {
            debug!(%id, "Confirm on a row that is not armed");
            return Ok(Outcome::Skipped);
        }
        let outcome = self.listing.delete(id).await?;
        if outcome == Outcome::Applied {
            let mut state = self.listing.write();
            if state.armed.as_ref() == Some(id) {
                state.armed = None;
            }
        }
        Ok(outcome)
    }
}
