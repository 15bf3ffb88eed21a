//! # Mock Collections
//!
//! Test doubles for code that talks to a [`CollectionClient`] without running a
//! real [`Collection`](crate::Collection).
//!
//! | | `MockCollection` | Real collection |
//! |---|---|---|
//! | State | none, answers come from expectations | real documents |
//! | Error injection | `return_err(..)` | needs a crafted state |
//! | Use for | wrappers and backends built on a client | the document hooks themselves |
//!
//! Two styles are available:
//!
//! * [`MockCollection`] - queue expectations up front, hand out the client,
//!   call [`MockCollection::verify`] at the end.
//! * [`create_mock_client`] plus the `expect_*` helpers - receive each raw
//!   request, inspect its payload and reply by hand.
//!
//! ```rust
//! use async_trait::async_trait;
//! use doc_store::mock::MockCollection;
//! use doc_store::{Document, StoreError};
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("item")] struct ItemError;
//!
//! #[async_trait]
//! impl Document for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Action = ItemAction; type ActionResult = (); type Query = ();
//!     type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: ItemAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::<Item>::new();
//!     mock.expect_get(1).return_err(StoreError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// An expected request and the reply to give it.
enum Expectation<T: Document> {
    Create(Result<T::Id, StoreError>),
    Get(T::Id, Result<Option<T>, StoreError>),
    List(Result<Vec<T>, StoreError>),
    Update(T::Id, Result<T, StoreError>),
    Delete(T::Id, Result<(), StoreError>),
    Action(T::Id, Result<T::ActionResult, StoreError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn reply<R>(respond_to: oneshot::Sender<Result<R, StoreError>>, response: Result<R, StoreError>) {
    let _ = respond_to.send(response);
}

fn check_id<Id: PartialEq + std::fmt::Debug>(expected: &Id, actual: &Id) {
    assert_eq!(expected, actual, "Mock received a request for an unexpected id");
}

/// A collection stand-in that answers from a queue of expectations.
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (CollectionRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        reply(respond_to, r)
                    }
                    (CollectionRequest::Get { id, respond_to }, Some(Expectation::Get(want, r))) => {
                        check_id(&want, &id);
                        reply(respond_to, r)
                    }
                    (CollectionRequest::List { respond_to, .. }, Some(Expectation::List(r))) => {
                        reply(respond_to, r)
                    }
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, r)),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, r)
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(want, r)),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, r)
                    }
                    (
                        CollectionRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action(want, r)),
                    ) => {
                        check_id(&want, &id);
                        reply(respond_to, r)
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ReplyBuilder<T, T::Id> {
        ReplyBuilder::new(self.expectations.clone(), Box::new(Expectation::Create))
    }

    pub fn expect_get(&mut self, id: T::Id) -> ReplyBuilder<T, Option<T>> {
        ReplyBuilder::new(
            self.expectations.clone(),
            Box::new(move |r| Expectation::Get(id, r)),
        )
    }

    pub fn expect_list(&mut self) -> ReplyBuilder<T, Vec<T>> {
        ReplyBuilder::new(self.expectations.clone(), Box::new(Expectation::List))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ReplyBuilder<T, T> {
        ReplyBuilder::new(
            self.expectations.clone(),
            Box::new(move |r| Expectation::Update(id, r)),
        )
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ReplyBuilder<T, ()> {
        ReplyBuilder::new(
            self.expectations.clone(),
            Box::new(move |r| Expectation::Delete(id, r)),
        )
    }

    pub fn expect_action(&mut self, id: T::Id) -> ReplyBuilder<T, T::ActionResult> {
        ReplyBuilder::new(
            self.expectations.clone(),
            Box::new(move |r| Expectation::Action(id, r)),
        )
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ReplyBuilder<T: Document, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ReplyBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        wrap: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    ) -> Self {
        Self { expectations, wrap }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: StoreError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client plus the raw receiving end of its channel.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
pub async fn expect_list<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Vec<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Sku {
        id: u32,
        code: String,
    }

    #[derive(Debug)]
    struct SkuCreate {
        code: String,
    }

    #[derive(Debug)]
    struct SkuUpdate;

    #[derive(Debug)]
    enum SkuAction {
        Touch,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("sku error")]
    struct SkuError;

    #[async_trait]
    impl Document for Sku {
        type Id = u32;
        type Create = SkuCreate;
        type Update = SkuUpdate;
        type Action = SkuAction;
        type ActionResult = bool;
        type Query = ();
        type Context = ();
        type Error = SkuError;

        fn from_create_params(id: u32, params: SkuCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                code: params.code,
            })
        }

        async fn on_update(&mut self, _: SkuUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: SkuAction, _: &()) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Sku>(10);

        let task = tokio::spawn(async move {
            client
                .create(SkuCreate {
                    code: "A-1".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.code, "A-1");
        responder.send(Ok(7)).unwrap();

        assert!(matches!(task.await.unwrap(), Ok(7)));
    }

    #[tokio::test]
    async fn raw_channel_action() {
        let (client, mut receiver) = create_mock_client::<Sku>(10);

        let task = tokio::spawn(async move { client.perform_action(3, SkuAction::Touch).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, SkuAction::Touch));
        responder.send(Ok(false)).unwrap();

        assert!(matches!(task.await.unwrap(), Ok(false)));
    }

    #[tokio::test]
    async fn queued_expectations_answer_in_order() {
        let mut mock = MockCollection::<Sku>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![Sku {
            id: 1,
            code: "A-1".to_string(),
        }]);
        mock.expect_delete(1).return_err(StoreError::NotFound("1".to_string()));

        let client = mock.client();
        let id = client
            .create(SkuCreate {
                code: "A-1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let listed = client.list(()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].code, "A-1");

        let deleted = client.delete(1).await;
        assert!(matches!(deleted, Err(StoreError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn verify_reports_leftovers() {
        let mut mock = MockCollection::<Sku>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
