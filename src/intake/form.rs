use super::images::{ImageSlots, PreviewRegistry};
use super::specs::SpecDraft;
use crate::api::ProductSubmission;
use crate::console::context::settle;
use crate::console::{ConsoleContext, Outcome};
use crate::error::{ConsoleError, ValidationError};
use crate::model::{ProductCategory, UploadFile};
use tracing::{info, instrument, warn};

pub const ADDED_FALLBACK: &str = "Product added successfully!";
pub const ADD_REJECTED_FALLBACK: &str = "Something went wrong!";
pub const ADD_FAILED_FALLBACK: &str = "Submission failed.";
pub const BULK_OK_FALLBACK: &str = "Bulk upload successful!";
pub const BULK_REJECTED_FALLBACK: &str = "Bulk upload failed!";
pub const BULK_FAILED: &str = "Upload error.";

/// Text inputs exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeFields {
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub price: String,
    pub offer_price: String,
    pub stock: String,
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// State of the "add product" screen.
///
/// Submitting borrows the form mutably, so a second submission cannot start
/// before the first one settles.
pub struct ProductIntakeForm {
    ctx: ConsoleContext,
    pub fields: IntakeFields,
    pub specs: SpecDraft,
    images: ImageSlots,
}

impl ProductIntakeForm {
    pub fn new(ctx: ConsoleContext) -> Self {
        Self::with_previews(ctx, PreviewRegistry::new())
    }

    pub fn with_previews(ctx: ConsoleContext, previews: PreviewRegistry) -> Self {
        Self {
            ctx,
            fields: IntakeFields::default(),
            specs: SpecDraft::default(),
            images: ImageSlots::new(previews),
        }
    }

    pub fn images(&self) -> &ImageSlots {
        &self.images
    }

    /// Attaches or clears one of the four image slots.
    pub fn set_image(&mut self, index: usize, file: Option<UploadFile>) -> Result<(), ValidationError> {
        self.images.set(index, file)
    }

    /// Checks the form in a fixed order and builds the payload.
    ///
    /// 1. at least one image
    /// 2. price is a positive number
    /// 3. offer price, when given, is a number below the price
    /// 4. stock is a non-negative whole number (`3.0` counts as 3)
    pub fn validate(&self) -> Result<ProductSubmission, ValidationError> {
        if self.images.attached() == 0 {
            return Err(ValidationError::MissingImage);
        }

        let price = parse_number(&self.fields.price)
            .filter(|p| *p > 0.0)
            .ok_or(ValidationError::InvalidPrice)?;

        let offer_price = match self.fields.offer_price.trim() {
            "" => None,
            raw => {
                let offer = parse_number(raw)
                    .filter(|o| *o >= 0.0)
                    .ok_or(ValidationError::InvalidOfferPrice)?;
                if offer >= price {
                    return Err(ValidationError::OfferNotBelowPrice);
                }
                Some(offer)
            }
        };

        let stock = parse_number(&self.fields.stock)
            .filter(|s| *s >= 0.0 && s.fract() == 0.0 && *s <= f64::from(u32::MAX))
            .map(|s| s as u32)
            .ok_or(ValidationError::InvalidStock)?;

        Ok(ProductSubmission {
            name: self.fields.name.trim().to_string(),
            description: self.fields.description.trim().to_string(),
            category: self.fields.category.clone(),
            price,
            offer_price,
            stock,
            specs: self.specs.to_spec_sheet(),
            images: self.images.files(),
        })
    }

    /// Validates, sends the product, and resets the form on success.
    ///
    /// Every outcome is reported through the notifier; nothing is sent when
    /// validation fails.
    #[instrument(skip(self), fields(name = %self.fields.name))]
    pub async fn submit(&mut self) -> Result<Outcome, ConsoleError> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(e) => {
                warn!(error = %e, "Product rejected before submission");
                return Err(self.ctx.fail(e.into()));
            }
        };

        let token = match self.ctx.token().await {
            Ok(token) => token,
            Err(e) => return Err(self.ctx.fail(e)),
        };
        let result = self.ctx.api.add_product(&token, submission).await;
        match settle(result, ADD_REJECTED_FALLBACK) {
            Ok((message, _)) => {
                let message = message.unwrap_or_else(|| ADDED_FALLBACK.to_string());
                info!(%message, "Product submitted");
                self.ctx.notifier.success(&message);
                self.reset();
                Ok(Outcome::Applied)
            }
            Err(ConsoleError::Transport(message)) if message.trim().is_empty() => {
                Err(self.ctx.fail(ConsoleError::Transport(ADD_FAILED_FALLBACK.to_string())))
            }
            Err(e) => Err(self.ctx.fail(e)),
        }
    }

    /// Back to the initial state. Previews of attached images are revoked.
    pub fn reset(&mut self) {
        self.images.clear();
        self.fields = IntakeFields::default();
        self.specs = SpecDraft::default();
    }

    /// Imports a JSON file of products. The form fields are left untouched.
    #[instrument(skip(self, file), fields(file = %file.name))]
    pub async fn bulk_upload(&self, file: UploadFile) -> Result<Outcome, ConsoleError> {
        if !file.is_json() {
            return Err(self.ctx.fail(ValidationError::NotJson.into()));
        }

        let token = match self.ctx.token().await {
            Ok(token) => token,
            Err(e) => return Err(self.ctx.fail(e)),
        };
        let result = self.ctx.api.bulk_upload(&token, file).await;
        match settle(result, BULK_REJECTED_FALLBACK) {
            Ok((message, _)) => {
                let message = message.unwrap_or_else(|| BULK_OK_FALLBACK.to_string());
                info!(%message, "Bulk upload accepted");
                self.ctx.notifier.success(&message);
                Ok(Outcome::Applied)
            }
            Err(ConsoleError::Transport(_)) => {
                Err(self.ctx.fail(ConsoleError::Transport(BULK_FAILED.to_string())))
            }
            Err(e) => Err(self.ctx.fail(e)),
        }
    }
}
