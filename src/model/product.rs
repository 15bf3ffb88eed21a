/// A product listing as stored by the catalog and sent over the wire.
///
/// # Document Store
/// This struct implements [`Document`](doc_store::Document), so it can live in a
/// [`Collection`](doc_store::Collection). See
/// [`impl Document for Product`](#impl-Document-for-Product) for:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Custom actions ([`ProductAction`](crate::product_store::ProductAction))
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Specification groups: group title -> key -> value, in the order entered.
pub type SpecSheet = IndexMap<String, IndexMap<String, String>>;

/// Product identifier (`_id` on the wire).
///
/// An empty identifier is legal on the wire; such products are never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Store-generated ids look like 24-digit hex object ids.
impl From<u32> for ProductId {
    fn from(seq: u32) -> Self {
        Self(format!("{seq:024x}"))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the seller owning a product (`userId` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub String);

impl From<&str> for SellerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for SellerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of product categories offered by the intake form.
///
/// Listings may carry a category outside that set; it is kept as
/// [`ProductCategory::Other`] and rendered as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    #[default]
    Earphone,
    Headphone,
    Watch,
    Smartphone,
    Laptop,
    Camera,
    Mouse,
    Tablet,
    Keyboard,
    Monitor,
    Processor,
    Accessories,
    #[serde(untagged)]
    Other(String),
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 12] = [
        Self::Earphone,
        Self::Headphone,
        Self::Watch,
        Self::Smartphone,
        Self::Laptop,
        Self::Camera,
        Self::Mouse,
        Self::Tablet,
        Self::Keyboard,
        Self::Monitor,
        Self::Processor,
        Self::Accessories,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Earphone => "Earphone",
            Self::Headphone => "Headphone",
            Self::Watch => "Watch",
            Self::Smartphone => "Smartphone",
            Self::Laptop => "Laptop",
            Self::Camera => "Camera",
            Self::Mouse => "Mouse",
            Self::Tablet => "Tablet",
            Self::Keyboard => "Keyboard",
            Self::Monitor => "Monitor",
            Self::Processor => "Processor",
            Self::Accessories => "Accessories",
            Self::Other(name) => name,
        }
    }
}

impl Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: ProductId,
    #[serde(default)]
    pub user_id: SellerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub offer_price: Option<f64>,
    #[serde(default)]
    pub stock: u32,
    #[serde(rename = "image", default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specs: SpecSheet,
    #[serde(default)]
    pub force_out_of_stock: bool,
}

impl Product {
    /// Creates a product with no images, specs or offer price.
    ///
    /// # Arguments
    /// * `id` - Identifier (normally assigned by the store)
    /// * `name` - Display name
    /// * `price` - List price
    /// * `stock` - Units on hand
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            user_id: SellerId::default(),
            name: name.into(),
            description: String::new(),
            category: ProductCategory::default(),
            price,
            offer_price: None,
            stock,
            images: Vec::new(),
            specs: SpecSheet::new(),
            force_out_of_stock: false,
        }
    }

    /// Rows without an identifier are never shown or acted upon.
    pub fn is_identified(&self) -> bool {
        !self.id.is_empty()
    }

    /// Unavailable either by manual flag or because nothing is left.
    pub fn shows_out_of_stock(&self) -> bool {
        self.force_out_of_stock || self.stock == 0
    }

    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price shown to buyers: the offer price when there is one.
    pub fn display_price(&self) -> f64 {
        self.offer_price.unwrap_or(self.price)
    }
}

/// Payload for inserting a product into the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub seller: SellerId,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub price: f64,
    pub offer_price: Option<f64>,
    pub stock: u32,
    pub images: Vec<String>,
    pub specs: SpecSheet,
}

/// Partial update of a product's editable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub offer_price: Option<f64>,
    pub stock: Option<u32>,
}
