//! # Seller Consoles
//!
//! Headless view state for the two stock management screens.
//!
//! - [`StockConsole`] lists every product of the signed-in seller and lets
//!   them edit stock, delete, and toggle the manual out-of-stock flag.
//! - [`OutOfStockConsole`] shows only products whose stock is zero and asks
//!   for confirmation before deleting.
//!
//! Both are cheap to clone: clones share one list, one set of stock drafts and
//! one set of per-product locks. Mutations on the same product id run one at a
//! time; mutations on different products run concurrently.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let console = StockConsole::new(ctx);
//! console.mount().await?;
//! console.set_stock_draft(&id, "12");
//! console.submit_stock_draft(&id).await?;
//! for row in console.rows() {
//!     println!("{} {}", row.name, row.badge.label);
//! }
//! ```

pub mod context;
pub mod input;
mod listing;
pub mod locks;
pub mod out_of_stock;
pub mod stock;

pub use context::*;
pub use input::*;
pub use locks::*;
pub use out_of_stock::*;
pub use stock::*;

/// What a console call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request was sent and accepted.
    Applied,
    /// Nothing was sent: missing id, unparsable input, or no session yet.
    Skipped,
}

/// Fallback shown when the server rejects a request without saying why.
pub const REJECTED_FALLBACK: &str = "Something went wrong!";
