//! Custom actions for product documents.
//!
//! Handled by [`Document::handle_action`](doc_store::Document::handle_action);
//! see [`impl Document for Product`](crate::model::Product#impl-Document-for-Product).

/// Operations on a product beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the stock level without modifying it.
    CheckStock,
    /// Replaces the stock level.
    SetStock(u32),
    /// Flips `force_out_of_stock`.
    ToggleVisibility,
}

/// Results of [`ProductAction`]s, one variant per action.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CheckStock(u32),
    /// The product after the change.
    SetStock(crate::model::Product),
    /// The product after the flip.
    ToggleVisibility(crate::model::Product),
}
