//! [`Document`] implementation for [`Category`].
//!
//! The trimmed name is the unique key, so "Audio" and "Audio " collide.

use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use async_trait::async_trait;
use doc_store::Document;

#[derive(Debug, Clone)]
pub enum CategoryAction {
    AddSubcategory(String),
    RemoveSubcategory(String),
}

fn clean_name(name: &str) -> Result<String, CategoryError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryError::MissingName);
    }
    Ok(name.to_string())
}

/// Trims entries and drops blanks and repeats, keeping first occurrences.
fn clean_subcategories(raw: Vec<String>) -> Vec<String> {
    let mut subcategories: Vec<String> = Vec::new();
    for sub in raw {
        let sub = sub.trim().to_string();
        if !sub.is_empty() && !subcategories.contains(&sub) {
            subcategories.push(sub);
        }
    }
    subcategories
}

#[async_trait]
impl Document for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = CategoryAction;
    type ActionResult = Category;
    type Query = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        let name = clean_name(&params.name)?;
        Ok(Category::new(id, name, clean_subcategories(params.subcategories)))
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            self.name = clean_name(&name)?;
        }
        if let Some(subcategories) = update.subcategories {
            self.subcategories = clean_subcategories(subcategories);
        }
        self.touch();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CategoryAction,
        _ctx: &(),
    ) -> Result<Category, CategoryError> {
        match action {
            CategoryAction::AddSubcategory(name) => {
                let name = clean_name(&name)?;
                if self.has_subcategory(&name) {
                    return Err(CategoryError::DuplicateSubcategory(name));
                }
                self.subcategories.push(name);
            }
            CategoryAction::RemoveSubcategory(name) => {
                if !self.has_subcategory(&name) {
                    return Err(CategoryError::UnknownSubcategory(name));
                }
                self.subcategories.retain(|s| s != &name);
            }
        }
        self.touch();
        Ok(self.clone())
    }
}
