//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); events carry
//! structured fields such as `doc_type`, `id` and `new_stock` instead.
//!
//! ## What Gets Traced
//!
//! - **Collections**: startup, shutdown, every create/update/delete/action
//! - **Clients**: one span per call (`#[instrument]`)
//! - **Consoles**: refreshes, stock edits, deletions, visibility toggles
//! - **Notices**: with [`TracingNotifier`](crate::notify::TracingNotifier), every toast
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run          # request payloads
//! RUST_LOG=doc_store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a stock edit reads:
//!
//! ```text
//! INFO update_stock: Stock updated id=000000000000000000000001 new_stock=5
//! INFO Success notice=Stock updated
//! ```

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
