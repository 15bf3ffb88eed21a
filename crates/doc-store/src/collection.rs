//! # Collection Actor
//!
//! The server half of the store. A `Collection<T>` owns every document of type
//! `T` and processes requests one at a time, so two mutations of the same
//! document can never interleave.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A document collection running as an actor.
///
/// Documents are kept in a `HashMap` for lookup plus an insertion-ordered list
/// of identifiers, so list requests return documents in the order they were
/// created. Identifiers come from an internal `u32` sequence converted with
/// `T::Id::from`.
///
/// # Operations
///
/// * **Create**: allocate an id, build the document, run `on_create`, reject a
///   duplicate `unique_key`, store it.
/// * **Get**: clone of the document or `None`.
/// * **List**: clones of every document whose `matches` accepts the query.
/// * **Update**: apply `on_update` to a copy, re-check `unique_key`, commit.
/// * **Delete**: run `on_delete`, then remove.
/// * **Action**: run `handle_action` against the stored document.
pub struct Collection<T: Document> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: Document> Collection<T> {
    /// Creates a collection and a client connected to it.
    ///
    /// `buffer_size` bounds the request channel; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let collection = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        (collection, CollectionClient::new(sender))
    }

    fn key_taken(&self, key: &str, except: Option<&T::Id>) -> bool {
        self.store.iter().any(|(id, doc)| {
            Some(id) != except && doc.unique_key().as_deref() == Some(key)
        })
    }

    /// Runs the message loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let doc_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(doc_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(doc_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let mut doc = match T::from_create_params(id.clone(), params) {
                        Ok(doc) => doc,
                        Err(e) => {
                            warn!(doc_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = doc.on_create(&context).await {
                        warn!(doc_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(key) = doc.unique_key() {
                        if self.key_taken(&key, None) {
                            warn!(doc_type, %key, "Duplicate key");
                            let _ = respond_to.send(Err(StoreError::Conflict(key)));
                            continue;
                        }
                    }
                    self.store.insert(id.clone(), doc);
                    self.order.push(id.clone());
                    info!(doc_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                CollectionRequest::Get { id, respond_to } => {
                    let doc = self.store.get(&id).cloned();
                    debug!(doc_type, %id, found = doc.is_some(), "Get");
                    let _ = respond_to.send(Ok(doc));
                }
                CollectionRequest::List { query, respond_to } => {
                    let docs: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id))
                        .filter(|doc| doc.matches(&query))
                        .cloned()
                        .collect();
                    debug!(doc_type, ?query, count = docs.len(), "List");
                    let _ = respond_to.send(Ok(docs));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(doc_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(doc_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut next = current.clone();
                    if let Err(e) = next.on_update(update, &context).await {
                        warn!(doc_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(key) = next.unique_key() {
                        if self.key_taken(&key, Some(&id)) {
                            warn!(doc_type, %id, %key, "Duplicate key");
                            let _ = respond_to.send(Err(StoreError::Conflict(key)));
                            continue;
                        }
                    }
                    self.store.insert(id.clone(), next.clone());
                    info!(doc_type, %id, "Updated");
                    let _ = respond_to.send(Ok(next));
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(doc_type, %id, "Delete");
                    let Some(doc) = self.store.get(&id) else {
                        warn!(doc_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = doc.on_delete(&context).await {
                        warn!(doc_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    self.order.retain(|existing| existing != &id);
                    info!(doc_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                CollectionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(doc_type, %id, ?action, "Action");
                    let Some(doc) = self.store.get_mut(&id) else {
                        warn!(doc_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = doc
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| StoreError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(doc_type, %id, "Action ok"),
                        Err(e) => warn!(doc_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(doc_type, size = self.store.len(), "Shutdown");
    }
}
