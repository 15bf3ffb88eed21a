//! `reqwest`-backed [`SellerApi`].

use super::{
    ApiError, ProductSubmission, SellerApi, ADD_PRODUCT_PATH, BULK_UPLOAD_PATH,
    DELETE_PRODUCT_PATH, SELLER_LIST_PATH, TOGGLE_VISIBILITY_PATH, UPDATE_STOCK_PATH,
};
use crate::model::{
    Ack, ApiReply, ProductId, ProductList, ToggleVisibilityRequest, ToggledProduct,
    UpdateStockRequest, UploadFile,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone)]
pub struct HttpSellerApi {
    client: Client,
    base_url: String,
}

impl HttpSellerApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T>(&self, request: RequestBuilder, token: &str) -> Result<ApiReply<T>, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), len = body.len(), "Response received");
        decode_reply(status, &body)
    }
}

#[derive(Deserialize)]
struct FailureEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// Decodes a response body into an envelope.
///
/// Error statuses whose body still carries a `message` are reported as a
/// logical failure with that message; anything else becomes
/// [`ApiError::Status`].
pub fn decode_reply<T>(status: StatusCode, body: &[u8]) -> Result<ApiReply<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }
    match serde_json::from_slice::<FailureEnvelope>(body) {
        Ok(FailureEnvelope {
            message: Some(message),
        }) => Ok(ApiReply::rejected(message)),
        _ => {
            warn!(status = status.as_u16(), "Request failed");
            Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(body).into_owned(),
            })
        }
    }
}

fn file_part(file: UploadFile) -> Result<Part, ApiError> {
    Ok(Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str(&file.mime)?)
}

fn submission_form(submission: ProductSubmission) -> Result<Form, ApiError> {
    let specs = serde_json::to_string(&submission.specs)?;
    let offer_price = submission
        .offer_price
        .map(|p| p.to_string())
        .unwrap_or_default();
    let mut form = Form::new()
        .text("name", submission.name)
        .text("description", submission.description)
        .text("category", submission.category.to_string())
        .text("price", submission.price.to_string())
        .text("offerPrice", offer_price)
        .text("stock", submission.stock.to_string())
        .text("specs", specs);
    for image in submission.images {
        form = form.part("images", file_part(image)?);
    }
    Ok(form)
}

#[async_trait]
impl SellerApi for HttpSellerApi {
    #[instrument(skip(self, token))]
    async fn list_seller_products(&self, token: &str) -> Result<ApiReply<ProductList>, ApiError> {
        let request = self.client.get(self.url(SELLER_LIST_PATH));
        self.send(request, token).await
    }

    #[instrument(skip(self, token))]
    async fn update_stock(
        &self,
        token: &str,
        id: &ProductId,
        new_stock: u32,
    ) -> Result<ApiReply<Ack>, ApiError> {
        let body = UpdateStockRequest {
            product_id: id.to_string(),
            new_stock,
        };
        let request = self.client.post(self.url(UPDATE_STOCK_PATH)).json(&body);
        self.send(request, token).await
    }

    #[instrument(skip(self, token))]
    async fn delete_product(&self, token: &str, id: &ProductId) -> Result<ApiReply<Ack>, ApiError> {
        let url = format!("{}/{}", self.url(DELETE_PRODUCT_PATH), id);
        self.send(self.client.delete(url), token).await
    }

    #[instrument(skip(self, token))]
    async fn toggle_stock_visibility(
        &self,
        token: &str,
        id: &ProductId,
    ) -> Result<ApiReply<ToggledProduct>, ApiError> {
        let body = ToggleVisibilityRequest {
            product_id: id.to_string(),
        };
        let request = self.client.post(self.url(TOGGLE_VISIBILITY_PATH)).json(&body);
        self.send(request, token).await
    }

    #[instrument(skip(self, token, submission), fields(name = %submission.name, images = submission.images.len()))]
    async fn add_product(
        &self,
        token: &str,
        submission: ProductSubmission,
    ) -> Result<ApiReply<Ack>, ApiError> {
        let form = submission_form(submission)?;
        let request = self.client.post(self.url(ADD_PRODUCT_PATH)).multipart(form);
        self.send(request, token).await
    }

    #[instrument(skip(self, token, file), fields(file = %file.name))]
    async fn bulk_upload(&self, token: &str, file: UploadFile) -> Result<ApiReply<Ack>, ApiError> {
        let form = Form::new().part("file", file_part(file)?);
        let request = self.client.post(self.url(BULK_UPLOAD_PATH)).multipart(form);
        self.send(request, token).await
    }
}
