//! [`Document`] implementation for [`Product`].
//!
//! Prices are validated on create and update so the catalog never holds an
//! offer price at or above the list price.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, SellerId};
use async_trait::async_trait;
use doc_store::Document;

/// Filter for listing products.
#[derive(Debug, Clone, Default)]
pub enum ProductQuery {
    #[default]
    All,
    BySeller(SellerId),
}

fn check_prices(price: f64, offer_price: Option<f64>) -> Result<(), ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::InvalidPrice(price));
    }
    match offer_price {
        Some(offer) if !offer.is_finite() || offer < 0.0 => Err(ProductError::InvalidPrice(offer)),
        Some(offer) if offer >= price => Err(ProductError::OfferNotBelowPrice { offer, price }),
        _ => Ok(()),
    }
}

#[async_trait]
impl Document for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ProductQuery;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::MissingName);
        }
        check_prices(params.price, params.offer_price)?;
        Ok(Self {
            id,
            user_id: params.seller,
            name: params.name,
            description: params.description,
            category: params.category,
            price: params.price,
            offer_price: params.offer_price,
            stock: params.stock,
            images: params.images,
            specs: params.specs,
            force_out_of_stock: false,
        })
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        match query {
            ProductQuery::All => true,
            ProductQuery::BySeller(seller) => &self.user_id == seller,
        }
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        let price = update.price.unwrap_or(self.price);
        let offer_price = update.offer_price.or(self.offer_price);
        check_prices(price, offer_price)?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        self.price = price;
        self.offer_price = offer_price;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::SetStock(stock) => {
                self.stock = stock;
                Ok(ProductActionResult::SetStock(self.clone()))
            }
            ProductAction::ToggleVisibility => {
                self.force_out_of_stock = !self.force_out_of_stock;
                Ok(ProductActionResult::ToggleVisibility(self.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCategory, SpecSheet};

    fn create(price: f64, offer_price: Option<f64>) -> ProductCreate {
        ProductCreate {
            seller: SellerId::from("seller_1"),
            name: "Watch".into(),
            description: String::new(),
            category: ProductCategory::Watch,
            price,
            offer_price,
            stock: 3,
            images: vec![],
            specs: SpecSheet::new(),
        }
    }

    #[test]
    fn offer_must_be_below_price() {
        let err = Product::from_create_params(ProductId::from(1u32), create(10.0, Some(15.0)))
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::OfferNotBelowPrice {
                offer: 15.0,
                price: 10.0
            }
        );
    }

    #[test]
    fn price_must_be_positive() {
        let err = Product::from_create_params(ProductId::from(1u32), create(0.0, None)).unwrap_err();
        assert_eq!(err, ProductError::InvalidPrice(0.0));
    }

    #[tokio::test]
    async fn toggle_flips_the_flag_both_ways() {
        let mut product =
            Product::from_create_params(ProductId::from(1u32), create(10.0, None)).unwrap();
        let ProductActionResult::ToggleVisibility(after) = product
            .handle_action(ProductAction::ToggleVisibility, &())
            .await
            .unwrap()
        else {
            panic!("Expected ToggleVisibility result");
        };
        assert!(after.force_out_of_stock);
        product
            .handle_action(ProductAction::ToggleVisibility, &())
            .await
            .unwrap();
        assert!(!product.force_out_of_stock);
    }

    #[tokio::test]
    async fn update_rechecks_prices_against_existing_offer() {
        let mut product =
            Product::from_create_params(ProductId::from(1u32), create(10.0, Some(8.0))).unwrap();
        let update = ProductUpdate {
            price: Some(5.0),
            ..Default::default()
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn query_by_seller() {
        let product =
            Product::from_create_params(ProductId::from(1u32), create(10.0, None)).unwrap();
        assert!(product.matches(&ProductQuery::All));
        assert!(product.matches(&ProductQuery::BySeller(SellerId::from("seller_1"))));
        assert!(!product.matches(&ProductQuery::BySeller(SellerId::from("seller_2"))));
    }
}
