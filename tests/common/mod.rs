#![allow(dead_code)]

use async_trait::async_trait;
use seller_console::api::{ApiError, ProductSubmission, SellerApi};
use seller_console::auth::StaticToken;
use seller_console::console::ConsoleContext;
use seller_console::model::{
    Ack, ApiReply, Product, ProductId, ProductList, ToggledProduct, UploadFile,
};
use seller_console::notify::RecordingNotifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TOKEN: &str = "test-token";

/// A `SellerApi` fake with a scripted product list and a call log.
#[derive(Default)]
pub struct ScriptedApi {
    pub products: Mutex<Vec<Product>>,
    pub calls: Mutex<Vec<String>>,
    pub submissions: Mutex<Vec<ProductSubmission>>,
    pub uploads: Mutex<Vec<UploadFile>>,
    /// When set, every mutation answers `success: false` with this message.
    pub reject_with: Mutex<Option<Option<String>>>,
    /// When set, the toggle endpoint answers with this instead of flipping.
    pub toggle_reply: Mutex<Option<ApiReply<ToggledProduct>>>,
    /// When set, every call fails at the transport level.
    pub transport_down: Mutex<bool>,
    pub delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedApi {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Default::default()
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn reject(&self, message: Option<&str>) {
        *self.reject_with.lock().unwrap() = Some(message.map(str::to_string));
    }

    pub fn go_down(&self) {
        *self.transport_down.lock().unwrap() = true;
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_transport(&self) -> Result<(), ApiError> {
        if *self.transport_down.lock().unwrap() {
            return Err(ApiError::Status {
                status: 503,
                body: String::new(),
            });
        }
        Ok(())
    }

    fn rejection<T: Default>(&self) -> Option<ApiReply<T>> {
        self.reject_with.lock().unwrap().clone().map(|message| ApiReply {
            success: false,
            message,
            payload: T::default(),
        })
    }

    async fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SellerApi for ScriptedApi {
    async fn list_seller_products(&self, token: &str) -> Result<ApiReply<ProductList>, ApiError> {
        assert_eq!(token, TOKEN);
        self.log("list".into());
        self.check_transport()?;
        let products = self.products.lock().unwrap().clone();
        Ok(ApiReply::ok(None, ProductList { products }))
    }

    async fn update_stock(
        &self,
        _token: &str,
        id: &ProductId,
        new_stock: u32,
    ) -> Result<ApiReply<Ack>, ApiError> {
        self.log(format!("update_stock {id} {new_stock}"));
        self.check_transport()?;
        if let Some(reply) = self.rejection() {
            return Ok(reply);
        }
        self.enter().await;
        for p in self.products.lock().unwrap().iter_mut().filter(|p| &p.id == id) {
            p.stock = new_stock;
        }
        self.leave();
        Ok(ApiReply::ok(Some("Stock updated".into()), Ack {}))
    }

    async fn delete_product(&self, _token: &str, id: &ProductId) -> Result<ApiReply<Ack>, ApiError> {
        self.log(format!("delete {id}"));
        self.check_transport()?;
        if let Some(reply) = self.rejection() {
            return Ok(reply);
        }
        self.enter().await;
        self.products.lock().unwrap().retain(|p| &p.id != id);
        self.leave();
        Ok(ApiReply::ok(Some("Product deleted".into()), Ack {}))
    }

    async fn toggle_stock_visibility(
        &self,
        _token: &str,
        id: &ProductId,
    ) -> Result<ApiReply<ToggledProduct>, ApiError> {
        self.log(format!("toggle {id}"));
        self.check_transport()?;
        if let Some(reply) = self.rejection() {
            return Ok(reply);
        }
        if let Some(reply) = self.toggle_reply.lock().unwrap().clone() {
            return Ok(reply);
        }
        let mut products = self.products.lock().unwrap();
        let product = products.iter_mut().find(|p| &p.id == id).map(|p| {
            p.force_out_of_stock = !p.force_out_of_stock;
            p.clone()
        });
        Ok(ApiReply::ok(
            Some("Visibility updated".into()),
            ToggledProduct { product },
        ))
    }

    async fn add_product(
        &self,
        _token: &str,
        submission: ProductSubmission,
    ) -> Result<ApiReply<Ack>, ApiError> {
        self.log(format!("add {}", submission.name));
        self.check_transport()?;
        if let Some(reply) = self.rejection() {
            return Ok(reply);
        }
        self.submissions.lock().unwrap().push(submission);
        Ok(ApiReply::ok(None, Ack {}))
    }

    async fn bulk_upload(&self, _token: &str, file: UploadFile) -> Result<ApiReply<Ack>, ApiError> {
        self.log(format!("bulk {}", file.name));
        self.check_transport()?;
        if let Some(reply) = self.rejection() {
            return Ok(reply);
        }
        self.uploads.lock().unwrap().push(file);
        Ok(ApiReply::ok(None, Ack {}))
    }
}

pub fn context(api: Arc<ScriptedApi>) -> (ConsoleContext, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let ctx = ConsoleContext::new(
        api,
        Arc::new(StaticToken::new(TOKEN)),
        Arc::new(notifier.clone()),
    );
    (ctx, notifier)
}

pub fn product(id: &str, stock: u32) -> Product {
    Product::new(id, format!("Product {id}"), 50.0, stock)
}
