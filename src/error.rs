//! Errors surfaced by the consoles and the intake form.
//!
//! The `Display` text of every variant is exactly what the user is shown.

use thiserror::Error;

/// Client-side checks that block a request from being sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload at least one image.")]
    MissingImage,

    #[error("Please enter a valid product price.")]
    InvalidPrice,

    #[error("Please enter a valid offer price.")]
    InvalidOfferPrice,

    #[error("Offer price must be less than original price.")]
    OfferNotBelowPrice,

    #[error("Stock must be a non-negative number.")]
    InvalidStock,

    #[error("Please upload a valid .json file.")]
    NotJson,

    #[error("No image slot {0}")]
    NoSuchImageSlot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a readable answer.
    #[error("{0}")]
    Transport(String),

    #[error("Invalid product ID")]
    InvalidProductId,

    #[error("Not signed in")]
    SignedOut,
}
