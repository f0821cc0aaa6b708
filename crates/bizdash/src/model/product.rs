//! Product (inventory) records and stock status.
use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Quantity at or below which a product is saved as `low-stock`.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Stock status stored on a product when it is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// `<= 0` is out of stock, `1..=5` is low stock, anything above is in stock.
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(StockStatus::InStock),
            "low-stock" => Ok(StockStatus::LowStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(format!("unknown stock status: {other}")),
        }
    }
}

/// A product in the inventory.
///
/// `status` is derived from `stock_quantity` each time the product is saved.
/// `is_low_stock` is a separate predicate against the product's own reorder level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub cost: Option<f64>,
    pub stock_quantity: i64,
    pub reorder_level: i64,
    pub description: Option<String>,
    pub status: StockStatus,
}

impl Product {
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            sku: params.sku,
            category: params.category,
            price: params.price,
            cost: params.cost,
            stock_quantity: params.stock_quantity,
            reorder_level: params.reorder_level,
            description: crate::model::non_empty(params.description),
            status: StockStatus::from_quantity(params.stock_quantity),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.reorder_level
    }

    /// Unit margin, when a cost is known.
    pub fn margin(&self) -> Option<f64> {
        self.cost.map(|cost| self.price - cost)
    }

    pub(crate) fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(cost) = update.cost {
            self.cost = Some(cost);
        }
        if let Some(quantity) = update.stock_quantity {
            self.stock_quantity = quantity;
        }
        if let Some(level) = update.reorder_level {
            self.reorder_level = level;
        }
        if let Some(description) = update.description {
            self.description = crate::model::non_empty(Some(description));
        }
        self.status = StockStatus::from_quantity(self.stock_quantity);
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: f64,
    pub cost: Option<f64>,
    pub stock_quantity: i64,
    pub reorder_level: i64,
    pub description: Option<String>,
}

/// Patch for an existing product; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    pub description: Option<String>,
}
