//! # Product Intake
//!
//! Form state for adding a product: four image slots with local previews,
//! plain text fields, and free-form specification groups. Also hosts the bulk
//! JSON import, which shares the form's context but never its fields.
//!
//! - [`specs`] - editable specification groups and their submit-time cleanup
//! - [`images`] - image slots and revocable preview URLs
//! - [`form`] - [`ProductIntakeForm`]: validation, submission, reset, bulk upload

pub mod form;
pub mod images;
pub mod specs;

pub use form::*;
pub use images::*;
pub use specs::*;
