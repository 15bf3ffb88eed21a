//! # Document Store
//!
//! An in-process document collection built on the actor model. Each collection
//! owns its documents inside a single Tokio task and serves CRUD + Action
//! requests sent over a channel, so no locks guard the stored state.
//!
//! ## Layers
//!
//! 1. **Document Layer** ([`Document`]) - the stored type, its DTOs and hooks
//! 2. **Runtime Layer** ([`Collection`]) - the message loop that owns the documents
//! 3. **Interface Layer** ([`CollectionClient`]) - cloneable, type-safe handle
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use doc_store::{Collection, Document};
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String }
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl Document for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Query = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: NoteAction, _ctx: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (collection, client) = Collection::<Note>::new(10);
//!     tokio::spawn(collection.run(()));
//!
//!     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     let note = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(note.text, "hello");
//!     assert_eq!(client.list(()).await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockCollection`] answers requests from a queue of expectations, which
//! makes failure paths (closed collections, conflicts) easy to reproduce.

pub mod client;
pub mod client_trait;
pub mod collection;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use client::CollectionClient;
pub use client_trait::DocumentClient;
pub use collection::Collection;
pub use document::Document;
pub use error::StoreError;
pub use message::{CollectionRequest, Response};
