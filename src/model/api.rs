//! Wire envelopes shared by the HTTP client and the in-memory backend.
//!
//! Every response is `{ success, message?, ...payload }`. The payload fields are
//! flattened into the envelope, so `ApiReply<ProductList>` reads
//! `{"success":true,"products":[...]}`.
use super::Product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReply<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ApiReply<T> {
    pub fn ok(message: Option<String>, payload: T) -> Self {
        Self {
            success: true,
            message,
            payload,
        }
    }

    /// Converts a logical failure into `Err(message)`.
    ///
    /// A rejection without a message yields `Err(None)` and the caller picks
    /// its own fallback text.
    pub fn accept(self) -> Result<(Option<String>, T), Option<String>> {
        if self.success {
            Ok((self.message, self.payload))
        } else {
            Err(self.message)
        }
    }
}

impl<T: Default> ApiReply<T> {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            payload: T::default(),
        }
    }
}

/// Payload of the seller product list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Payload of the visibility toggle: the product as it is after the flip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToggledProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
}

/// Replies that carry nothing beyond `success` and `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    pub product_id: String,
    pub new_stock: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVisibilityRequest {
    pub product_id: String,
}
