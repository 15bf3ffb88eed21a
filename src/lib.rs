//! # Seller Console
//!
//! > **Headless seller-side catalog administration.**
//!
//! Sellers add products, edit stock levels, hide or show products as out of
//! stock, and delete listings. This crate holds the state behind those screens
//! and the requests they make; rendering is left to the caller.
//!
//! ## Module Tour
//!
//! ### 1. Storage ([`product_store`], [`category_store`])
//! Products and categories live in [`doc_store`] collections, each running in
//! its own Tokio task.
//! - **Key items**: [`Product`](model::Product), [`Category`](model::Category),
//!   [`ProductClient`](clients::ProductClient), [`CategoryClient`](clients::CategoryClient).
//!
//! ### 2. The Contract ([`api`])
//! The backend endpoints as the [`SellerApi`](api::SellerApi) trait, with an
//! HTTP implementation and an in-memory one served from the stores.
//!
//! ### 3. The Screens ([`console`], [`intake`])
//! - [`StockConsole`](console::StockConsole): every product of the seller
//! - [`OutOfStockConsole`](console::OutOfStockConsole): zero-stock products only
//! - [`ProductIntakeForm`](intake::ProductIntakeForm): add one product, or bulk
//!   import a JSON file
//!
//! Screens get their collaborators through a
//! [`ConsoleContext`](console::ConsoleContext): the API, a
//! [`TokenProvider`](auth::TokenProvider) and a [`Notifier`](notify::Notifier).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`SellerBackend`](lifecycle::SellerBackend) starts the collections and
//! shuts them down; [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## Running the Demo
//!
//! ```bash
//! # In-memory backend
//! RUST_LOG=info cargo run
//!
//! # Against a live backend
//! SELLER_CONSOLE_BASE_URL=http://localhost:3000 SELLER_CONSOLE_TOKEN=... cargo run
//! ```

pub mod api;
pub mod auth;
pub mod category_store;
pub mod clients;
pub mod config;
pub mod console;
pub mod error;
pub mod intake;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod product_store;
