//! The full stock list of the signed-in seller.

use super::context::{settle, ConsoleContext};
use super::listing::{Listing, ListingFilter};
use super::{Outcome, REJECTED_FALLBACK};
use crate::error::ConsoleError;
use crate::model::{Product, ProductCategory, ProductId};
use tracing::{info, instrument};

pub const SHOW_STOCK: &str = "Show Stock";
pub const HIDE_STOCK: &str = "Hide Stock";
pub const OUT_OF_STOCK: &str = "Out of Stock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockBadge {
    pub label: String,
    pub tone: Tone,
}

impl StockBadge {
    pub fn for_product(product: &Product) -> Self {
        if product.shows_out_of_stock() {
            Self {
                label: OUT_OF_STOCK.to_string(),
                tone: Tone::Red,
            }
        } else {
            Self {
                label: format!("Current Stock: {}", product.stock),
                tone: Tone::Green,
            }
        }
    }
}

/// One rendered line of the stock table.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub thumbnail: Option<String>,
    pub badge: StockBadge,
    pub toggle_label: &'static str,
    pub draft: String,
}

#[derive(Clone)]
pub struct StockConsole {
    listing: Listing,
}

impl StockConsole {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self {
            listing: Listing::new(ctx, ListingFilter::All),
        }
    }

    /// Loads the list if a session exists; otherwise stays loading.
    pub async fn mount(&self) -> Result<Outcome, ConsoleError> {
        self.listing.mount().await
    }

    pub async fn refresh(&self) -> Result<(), ConsoleError> {
        self.listing.refresh().await
    }

    /// True until the first fetch has finished, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.listing.read().loading
    }

    /// The held list exactly as fetched, unidentified entries included.
    pub fn products(&self) -> Vec<Product> {
        self.listing.read().products.clone()
    }

    pub fn rows(&self) -> Vec<StockRow> {
        let state = self.listing.read();
        state
            .products
            .iter()
            .filter(|p| p.is_identified())
            .map(|p| StockRow {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.display_price(),
                thumbnail: p.thumbnail().map(str::to_string),
                badge: StockBadge::for_product(p),
                toggle_label: if p.force_out_of_stock {
                    SHOW_STOCK
                } else {
                    HIDE_STOCK
                },
                draft: state.drafts.get(&p.id).cloned().unwrap_or_default(),
            })
            .collect()
    }

    pub fn set_stock_draft(&self, id: &ProductId, raw: impl Into<String>) {
        self.listing.set_draft(id, raw);
    }

    pub fn stock_draft(&self, id: &ProductId) -> String {
        self.listing.draft(id)
    }

    /// Sends the pending draft for `id`. The draft is kept afterwards.
    pub async fn submit_stock_draft(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        let raw = self.listing.draft(id);
        self.listing.update_stock(id, &raw).await
    }

    /// Sets the stock of `id` from raw user input, then refetches the list.
    ///
    /// Returns [`Outcome::Skipped`] without any request when `id` is empty or
    /// `raw` is not a non-negative integer.
    pub async fn update_stock(&self, id: &ProductId, raw: &str) -> Result<Outcome, ConsoleError> {
        self.listing.update_stock(id, raw).await
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        self.listing.delete(id).await
    }

    /// Flips the manual out-of-stock flag and merges the returned product
    /// into the held list without refetching.
    #[instrument(skip(self))]
    pub async fn toggle_stock_visibility(&self, id: &ProductId) -> Result<Outcome, ConsoleError> {
        let ctx = &self.listing.ctx;
        if id.is_empty() {
            return Err(ctx.fail(ConsoleError::InvalidProductId));
        }

        let _row = self.listing.locks().lock(id).await;
        let sent = async {
            let token = ctx.token().await?;
            let result = ctx.api.toggle_stock_visibility(&token, id).await;
            settle(result, REJECTED_FALLBACK)
        }
        .await;
        let (message, toggled) = match sent {
            Ok(reply) => reply,
            Err(e) => return Err(ctx.fail(e)),
        };

        if let Some(message) = message {
            ctx.notifier.success(&message);
        }
        if let Some(product) = toggled.product {
            info!(%id, forced = product.force_out_of_stock, "Visibility toggled");
            self.listing.merge(product);
        }
        Ok(Outcome::Applied)
    }
}
