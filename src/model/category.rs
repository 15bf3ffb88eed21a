/// A product category with its subcategories.
///
/// Names are unique across the category store. Timestamps are set by the
/// store on create and refreshed on every successful mutation.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<u32> for CategoryId {
    fn from(seq: u32) -> Self {
        Self(format!("category_{seq}"))
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, subcategories: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            subcategories,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_subcategory(&self, name: &str) -> bool {
        self.subcategories.iter().any(|s| s == name)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryCreate {
    pub name: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub subcategories: Option<Vec<String>>,
}
