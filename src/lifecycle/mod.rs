//! # Backend Lifecycle
//!
//! Starting, wiring and stopping the in-process backend.
//!
//! [`SellerBackend::new`] spawns one task per collection (products,
//! categories) and builds an [`InMemorySellerApi`](crate::api::InMemorySellerApi)
//! on top of the product client. Consoles receive that API through a
//! [`ConsoleContext`](crate::console::ConsoleContext).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop every console, form and context** - they hold the API, which
//!    holds a product client
//! 2. **Call [`SellerBackend::shutdown`]** - drops the remaining clients
//! 3. **Collections detect closure** - `receiver.recv()` returns `None`
//! 4. **Await completion** - both tasks are joined
//!
//! Collections do not depend on each other, so channel closure is enough to
//! stop them in any order.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes the subscriber; see the [`tracing`] module.

pub mod backend;
pub mod tracing;

pub use backend::*;
pub use tracing::*;
