//! # Collection Messages
//!
//! The request enum exchanged between [`CollectionClient`](crate::CollectionClient)
//! and [`Collection`](crate::Collection). Variants map onto CRUD plus a list
//! query and a custom `Action` for operations that don't fit CRUD.

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a collection.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
