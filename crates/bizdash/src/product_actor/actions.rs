//! Stock actions for [`Product`](crate::model::Product) records.

use crate::model::{Product, StockStatus};
use serde::Serialize;

/// Operations on a product beyond CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level.
    CheckStock,
    /// Adds `delta` units to the stock (negative to remove). The result may go below zero.
    AdjustStock(i64),
}

/// Results of [`ProductAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    CheckStock(StockLevel),
    AdjustStock(StockLevel),
}

/// Stock snapshot of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub quantity: i64,
    pub status: StockStatus,
    /// `quantity <= reorder_level`.
    pub low_stock: bool,
}

impl From<&Product> for StockLevel {
    fn from(product: &Product) -> Self {
        Self {
            quantity: product.stock_quantity,
            status: product.status,
            low_stock: product.is_low_stock(),
        }
    }
}
