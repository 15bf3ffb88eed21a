//! [`SellerApi`] served from the local product store.
//!
//! Tokens map to sellers through a registry filled at startup. Every mutation
//! checks that the product belongs to the calling seller. Image uploads are
//! not persisted; the stored reference is `uploads/<file name>`.

use super::{ApiError, ProductSubmission, SellerApi};
use crate::clients::ProductClient;
use crate::model::{
    Ack, ApiReply, Product, ProductCreate, ProductId, ProductList, SellerId, ToggledProduct,
    UploadFile,
};
use crate::product_store::{ProductError, ProductQuery};
use async_trait::async_trait;
use doc_store::DocumentClient;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

pub const NOT_AUTHORIZED: &str = "Not Authorized";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

#[derive(Clone)]
pub struct InMemorySellerApi {
    products: ProductClient,
    sellers: Arc<RwLock<HashMap<String, SellerId>>>,
}

/// Store failures that are the caller's fault become rejections, the rest
/// are backend errors.
fn settle<T: Default>(e: ProductError) -> Result<ApiReply<T>, ApiError> {
    match e {
        ProductError::Store(msg) => Err(ApiError::Backend(msg)),
        ProductError::NotFound(_) => Ok(ApiReply::rejected(PRODUCT_NOT_FOUND)),
        other => Ok(ApiReply::rejected(other.to_string())),
    }
}

fn image_ref(file: &UploadFile) -> String {
    format!("uploads/{}", file.name)
}

impl InMemorySellerApi {
    pub fn new(products: ProductClient) -> Self {
        Self {
            products,
            sellers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Lets `token` act as `seller`.
    pub async fn register_seller(&self, token: impl Into<String>, seller: SellerId) {
        self.sellers.write().await.insert(token.into(), seller);
    }

    async fn seller(&self, token: &str) -> Option<SellerId> {
        self.sellers.read().await.get(token).cloned()
    }

    /// Loads a product and checks it belongs to the seller.
    ///
    /// The outer `Err` is a reply to send back as is.
    async fn owned(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<Result<Product, String>, ProductError> {
        let Some(seller) = self.seller(token).await else {
            return Ok(Err(NOT_AUTHORIZED.to_string()));
        };
        match self.products.get(id.clone()).await? {
            None => Ok(Err(PRODUCT_NOT_FOUND.to_string())),
            Some(product) if product.user_id != seller => {
                warn!(%id, %seller, "Seller does not own product");
                Ok(Err(NOT_AUTHORIZED.to_string()))
            }
            Some(product) => Ok(Ok(product)),
        }
    }
}

#[async_trait]
impl SellerApi for InMemorySellerApi {
    #[instrument(skip(self, token))]
    async fn list_seller_products(&self, token: &str) -> Result<ApiReply<ProductList>, ApiError> {
        let Some(seller) = self.seller(token).await else {
            return Ok(ApiReply::rejected(NOT_AUTHORIZED));
        };
        match self.products.list(ProductQuery::BySeller(seller)).await {
            Ok(products) => Ok(ApiReply::ok(None, ProductList { products })),
            Err(e) => settle(e),
        }
    }

    #[instrument(skip(self, token))]
    async fn update_stock(
        &self,
        token: &str,
        id: &ProductId,
        new_stock: u32,
    ) -> Result<ApiReply<Ack>, ApiError> {
        match self.owned(token, id).await {
            Ok(Ok(_)) => {}
            Ok(Err(message)) => return Ok(ApiReply::rejected(message)),
            Err(e) => return settle(e),
        }
        match self.products.set_stock(id.clone(), new_stock).await {
            Ok(_) => {
                info!(%id, new_stock, "Stock updated");
                Ok(ApiReply::ok(Some("Stock updated".to_string()), Ack {}))
            }
            Err(e) => settle(e),
        }
    }

    #[instrument(skip(self, token))]
    async fn delete_product(&self, token: &str, id: &ProductId) -> Result<ApiReply<Ack>, ApiError> {
        match self.owned(token, id).await {
            Ok(Ok(_)) => {}
            Ok(Err(message)) => return Ok(ApiReply::rejected(message)),
            Err(e) => return settle(e),
        }
        match self.products.delete(id.clone()).await {
            Ok(()) => {
                info!(%id, "Product deleted");
                Ok(ApiReply::ok(Some("Product deleted".to_string()), Ack {}))
            }
            Err(e) => settle(e),
        }
    }

    #[instrument(skip(self, token))]
    async fn toggle_stock_visibility(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<ApiReply<ToggledProduct>, ApiError> {
        match self.owned(token, id).await {
            Ok(Ok(_)) => {}
            Ok(Err(message)) => return Ok(ApiReply::rejected(message)),
            Err(e) => return settle(e),
        }
        match self.products.toggle_visibility(id.clone()).await {
            Ok(product) => {
                let message = if product.force_out_of_stock {
                    "Product marked as out of stock"
                } else {
                    "Product marked as in stock"
                };
                info!(%id, forced = product.force_out_of_stock, "Visibility toggled");
                Ok(ApiReply::ok(
                    Some(message.to_string()),
                    ToggledProduct {
                        product: Some(product),
                    },
                ))
            }
            Err(e) => settle(e),
        }
    }

    #[instrument(skip(self, token, submission), fields(name = %submission.name))]
    async fn add_product(
        &self,
        token: &str,
        submission: ProductSubmission,
    ) -> Result<ApiReply<Ack>, ApiError> {
        let Some(seller) = self.seller(token).await else {
            return Ok(ApiReply::rejected(NOT_AUTHORIZED));
        };
        if submission.images.is_empty() {
            return Ok(ApiReply::rejected("No images uploaded"));
        }
        let params = ProductCreate {
            seller,
            name: submission.name,
            description: submission.description,
            category: submission.category,
            price: submission.price,
            offer_price: submission.offer_price,
            stock: submission.stock,
            images: submission.images.iter().map(image_ref).collect(),
            specs: submission.specs,
        };
        match self.products.create_product(params).await {
            Ok(id) => {
                info!(%id, "Product added");
                Ok(ApiReply::ok(Some("Product Added".to_string()), Ack {}))
            }
            Err(e) => settle(e),
        }
    }

    /// Imports a JSON array of product objects for the calling seller.
    ///
    /// Entries are created in file order; the first invalid entry stops the
    /// import and earlier entries stay.
    #[instrument(skip(self, token, file), fields(file = %file.name))]
    async fn bulk_upload(&self, token: &str, file: UploadFile) -> Result<ApiReply<Ack>, ApiError> {
        let Some(seller) = self.seller(token).await else {
            return Ok(ApiReply::rejected(NOT_AUTHORIZED));
        };
        let entries: Vec<Product> = match serde_json::from_slice(&file.bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Bulk file is not a product array");
                return Ok(ApiReply::rejected("Invalid JSON file"));
            }
        };

        let total = entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            let params = ProductCreate {
                seller: seller.clone(),
                name: entry.name,
                description: entry.description,
                category: entry.category,
                price: entry.price,
                offer_price: entry.offer_price,
                stock: entry.stock,
                images: entry.images,
                specs: entry.specs,
            };
            if let Err(e) = self.products.create_product(params).await {
                warn!(index, error = %e, "Bulk entry rejected");
                return match e {
                    ProductError::Store(msg) => Err(ApiError::Backend(msg)),
                    other => Ok(ApiReply::rejected(format!(
                        "Entry {} rejected: {other}",
                        index + 1
                    ))),
                };
            }
        }
        info!(total, "Bulk upload imported");
        Ok(ApiReply::ok(Some(format!("Imported {total} products")), Ack {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCategory, SpecSheet};
    use crate::product_store;

    async fn api_with_seller() -> InMemorySellerApi {
        let (collection, client) = product_store::new(16);
        tokio::spawn(collection.run(()));
        let api = InMemorySellerApi::new(client);
        api.register_seller("token_a", SellerId::from("seller_a")).await;
        api.register_seller("token_b", SellerId::from("seller_b")).await;
        api
    }

    fn submission(name: &str) -> ProductSubmission {
        ProductSubmission {
            name: name.into(),
            description: "desc".into(),
            category: ProductCategory::Mouse,
            price: 20.0,
            offer_price: None,
            stock: 0,
            specs: SpecSheet::new(),
            images: vec![UploadFile::new("m.png", "image/png", vec![1, 2, 3])],
        }
    }

    #[tokio::test]
    async fn unknown_token_is_not_authorized() {
        let api = api_with_seller().await;
        let reply = api.list_seller_products("nope").await.unwrap();
        assert_eq!(reply.accept(), Err(Some(NOT_AUTHORIZED.to_string())));
    }

    #[tokio::test]
    async fn sellers_only_see_and_touch_their_own_products() {
        let api = api_with_seller().await;
        api.add_product("token_a", submission("Mouse A")).await.unwrap();

        let (_, list) = api.list_seller_products("token_a").await.unwrap().accept().unwrap();
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].images, vec!["uploads/m.png".to_string()]);
        let id = list.products[0].id.clone();

        let (_, other) = api.list_seller_products("token_b").await.unwrap().accept().unwrap();
        assert!(other.products.is_empty());

        let reply = api.delete_product("token_b", &id).await.unwrap();
        assert_eq!(reply.accept(), Err(Some(NOT_AUTHORIZED.to_string())));

        let reply = api.toggle_stock_visibility("token_a", &id).await.unwrap();
        let (_, toggled) = reply.accept().unwrap();
        assert!(toggled.product.unwrap().force_out_of_stock);
    }

    #[tokio::test]
    async fn bulk_upload_imports_array() {
        let api = api_with_seller().await;
        let json = br#"[
            {"name":"Cam","price":300,"stock":2,"category":"Camera"},
            {"name":"Pad","price":150,"offerPrice":120,"stock":0,"category":"Tablet"}
        ]"#;
        let reply = api
            .bulk_upload("token_a", UploadFile::new("p.json", "application/json", json.to_vec()))
            .await
            .unwrap();
        assert_eq!(reply.message.as_deref(), Some("Imported 2 products"));

        let (_, list) = api.list_seller_products("token_a").await.unwrap().accept().unwrap();
        assert_eq!(list.products.len(), 2);
        assert!(list.products.iter().all(|p| p.user_id == SellerId::from("seller_a")));
    }

    #[tokio::test]
    async fn bulk_upload_rejects_malformed_json() {
        let api = api_with_seller().await;
        let reply = api
            .bulk_upload("token_a", UploadFile::new("p.json", "application/json", b"{".to_vec()))
            .await
            .unwrap();
        assert_eq!(reply.accept(), Err(Some("Invalid JSON file".to_string())));
    }

    #[tokio::test]
    async fn missing_product_is_rejected() {
        let api = api_with_seller().await;
        let reply = api
            .update_stock("token_a", &ProductId::from("missing"), 3)
            .await
            .unwrap();
        assert_eq!(reply.accept(), Err(Some(PRODUCT_NOT_FOUND.to_string())));
    }
}
