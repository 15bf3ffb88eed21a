//! # DocumentClient Trait
//!
//! Lets a domain-specific client wrapper inherit `get`, `list` and `delete`
//! from its inner [`CollectionClient`] while mapping [`StoreError`] into its
//! own error type.
use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Shared read/delete operations for collection client wrappers.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use doc_store::{CollectionClient, Document, DocumentClient, StoreError};
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl Document for Tag {
///     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
///     type Action = TagAction; type ActionResult = (); type Query = ();
///     type Context = (); type Error = TagError;
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TagAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct TagClient { inner: CollectionClient<Tag> }
///
/// #[async_trait]
/// impl DocumentClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &CollectionClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.get(1).await;
///     let _ = client.list(()).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait DocumentClient<T: Document>: Send + Sync {
    /// The wrapper's error type.
    type Error: Send + Sync;

    /// Access the inner collection client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the wrapper's error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List documents matching a query.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
