//! # Invoice Totals
//!
//! The arithmetic behind every sale: a subtotal summed from the line items, a flat
//! discount taken off the subtotal, and a percentage tax applied to what remains.
//!
//! ```text
//! sub_total = Σ price × quantity
//! taxable   = sub_total − discount
//! tax       = taxable × tax_rate / 100
//! total     = taxable + tax
//! ```
//!
//! Nothing is validated or rounded. A discount larger than the subtotal yields a
//! negative taxable amount, negative tax and a negative total. Rounding is left to
//! display formatting ([`crate::format::format_currency`]).
//!
//! [`SaleEditor`] keeps a draft invoice consistent with these rules while it is edited.

pub mod editor;

pub use editor::*;

use serde::{Deserialize, Serialize};

/// Anything that contributes `price × quantity` to an invoice.
pub trait LineAmount {
    fn price(&self) -> f64;
    fn quantity(&self) -> f64;

    fn line_total(&self) -> f64 {
        self.price() * self.quantity()
    }
}

impl<L: LineAmount + ?Sized> LineAmount for &L {
    fn price(&self) -> f64 {
        (**self).price()
    }

    fn quantity(&self) -> f64 {
        (**self).quantity()
    }
}

impl LineAmount for (f64, f64) {
    fn price(&self) -> f64 {
        self.0
    }

    fn quantity(&self) -> f64 {
        self.1
    }
}

/// Derived amounts of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub sub_total: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    /// `sub_total − discount`; this is the base the tax applies to.
    pub fn taxable_amount(&self, discount: f64) -> f64 {
        self.sub_total - discount
    }
}

/// Computes the totals of an invoice from scratch.
///
/// `tax_rate` is a percentage (`10.0` means 10%).
pub fn compute_totals<L: LineAmount>(items: &[L], discount: f64, tax_rate: f64) -> InvoiceTotals {
    let sub_total: f64 = items.iter().map(LineAmount::line_total).sum();
    let taxable = sub_total - discount;
    let tax = taxable * (tax_rate / 100.0);
    InvoiceTotals {
        sub_total,
        tax,
        total: taxable + tax,
    }
}
