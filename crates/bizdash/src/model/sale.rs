//! Sales invoices.
use crate::invoice::{self, LineAmount};
use crate::model::{CustomerId, ProductId, SaleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
    Cancelled,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 4] = [
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Overdue,
        PaymentStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
            PaymentStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown payment status: {s}"))
    }
}

/// One line of an invoice: a snapshot of the product's name and price at the time
/// of sale, so later price changes do not touch existing invoices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// `None` until a product is chosen for the line.
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: f64,
    pub price: f64,
    /// Always `price * quantity`.
    pub total: f64,
}

impl SaleItem {
    pub fn new(product_id: ProductId, product_name: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            product_id: Some(product_id),
            product_name: product_name.into(),
            quantity,
            price,
            total: price * quantity,
        }
    }

    /// Line with no product, quantity 1 and price 0.
    pub fn blank() -> Self {
        Self {
            quantity: 1.0,
            ..Default::default()
        }
    }

    pub(crate) fn recompute(&mut self) {
        self.total = self.price * self.quantity;
    }
}

impl LineAmount for SaleItem {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// A sales invoice.
///
/// `sub_total`, `tax` and `total` are derived from `items`, `discount` and `tax_rate`
/// whenever the sale is created or updated. The customer name is copied at the time
/// of sale; nothing checks that `customer_id` still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub items: Vec<SaleItem>,
    pub sub_total: f64,
    pub discount: f64,
    /// Percentage, e.g. `8.5` for 8.5%.
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Full contents of an invoice form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreate {
    pub customer_id: Option<CustomerId>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub items: Vec<SaleItem>,
    pub discount: f64,
    pub tax_rate: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Updating a sale replaces the whole invoice body, as the edit form submits it.
pub type SaleUpdate = SaleCreate;

impl Sale {
    pub fn new(id: SaleId, params: SaleCreate) -> Self {
        let mut sale = Self {
            id,
            customer_id: None,
            customer_name: String::new(),
            date: params.date,
            items: Vec::new(),
            sub_total: 0.0,
            discount: 0.0,
            tax_rate: 0.0,
            tax: 0.0,
            total: 0.0,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            notes: None,
        };
        sale.replace(params);
        sale
    }

    pub(crate) fn replace(&mut self, params: SaleCreate) {
        self.customer_id = params.customer_id;
        self.customer_name = params.customer_name;
        self.date = params.date;
        self.items = params.items;
        self.items.iter_mut().for_each(SaleItem::recompute);
        self.discount = params.discount;
        self.tax_rate = params.tax_rate;
        self.payment_status = params.payment_status;
        self.payment_method = crate::model::non_empty(params.payment_method);
        self.notes = crate::model::non_empty(params.notes);

        let totals = invoice::compute_totals(&self.items, self.discount, self.tax_rate);
        self.sub_total = totals.sub_total;
        self.tax = totals.tax;
        self.total = totals.total;
    }

    /// Form contents that reproduce this sale.
    pub fn to_create(&self) -> SaleCreate {
        SaleCreate {
            customer_id: self.customer_id,
            customer_name: self.customer_name.clone(),
            date: self.date,
            items: self.items.clone(),
            discount: self.discount,
            tax_rate: self.tax_rate,
            payment_status: self.payment_status,
            payment_method: self.payment_method.clone(),
            notes: self.notes.clone(),
        }
    }
}
