//! Plain data: stored documents, their DTOs and the wire envelopes.

pub mod api;
pub mod category;
pub mod product;
pub mod upload;

pub use api::*;
pub use category::*;
pub use product::*;
pub use upload::*;
