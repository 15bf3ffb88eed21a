//! # Document Trait
//!
//! The contract every stored type implements to live inside a [`Collection`](crate::Collection).
//! Associated types pin down the identifier, the DTOs accepted for create and
//! update, the custom actions, the list query and the error type, so a product
//! payload can never be sent to a category collection.
//!
//! Hooks with default bodies (`on_create`, `on_delete`, `matches`, `unique_key`)
//! only need overriding when a document has something to say.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A stored document managed by a [`Collection`](crate::Collection).
///
/// # Context
/// `Context` is handed to every async hook. It is supplied when the collection
/// starts running, not when it is constructed, so documents can depend on
/// clients of collections created later.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier type. Built from the collection's internal sequence number.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for inserting a new document.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing document.
    type Update: Send + Sync + Debug;

    /// Document-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of a custom action.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by list requests. Use `()` for "everything".
    type Query: Send + Sync + Debug;

    /// Runtime dependencies injected into hooks.
    type Context: Send + Sync;

    /// One error enum for the whole document type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the document from its new identifier and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this document belongs in the result of a list request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    /// Value that must be unique across the collection, if any.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Called after construction, before the document is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload.
    async fn on_update(&mut self, update: Self::Update, _ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called right before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a document-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
