//! List searches.
//!
//! Every search is a case-insensitive substring match; an empty query matches
//! everything. Results keep the order of the input slice.
use crate::model::{Customer, Expense, PaymentStatus, Product, Sale};
use std::str::FromStr;

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn contains_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains(h, needle))
}

/// Customers whose name, email or phone contains `query`.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let query = query.trim().to_lowercase();
    customers
        .iter()
        .filter(|c| {
            contains(&c.name, &query)
                || contains_opt(c.email.as_deref(), &query)
                || contains_opt(c.phone.as_deref(), &query)
        })
        .collect()
}

/// Which products an inventory listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    /// Only products at or below their reorder level.
    LowStock,
}

impl FromStr for StockFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StockFilter::All),
            "low-stock" => Ok(StockFilter::LowStock),
            other => Err(format!("unknown stock filter: {other}")),
        }
    }
}

/// Products whose name, SKU or category contains `query`.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    stock: StockFilter,
) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            contains(&p.name, &query) || contains(&p.sku, &query) || contains(&p.category, &query)
        })
        .filter(|p| stock == StockFilter::All || p.is_low_stock())
        .collect()
}

/// Payment-status tab of the sales listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Sales whose customer name or id (`s3`) contains `query`.
pub fn filter_sales<'a>(sales: &'a [Sale], query: &str, status: StatusFilter) -> Vec<&'a Sale> {
    let query = query.trim().to_lowercase();
    sales
        .iter()
        .filter(|s| contains(&s.customer_name, &query) || contains(&s.id.to_string(), &query))
        .filter(|s| match status {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => s.payment_status == wanted,
        })
        .collect()
}

/// Expenses whose category or description contains `query`, optionally limited to
/// one category (exact, case-insensitive).
pub fn filter_expenses<'a>(
    expenses: &'a [Expense],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Expense> {
    let query = query.trim().to_lowercase();
    expenses
        .iter()
        .filter(|e| contains(&e.category, &query) || contains_opt(e.description.as_deref(), &query))
        .filter(|e| category.map_or(true, |c| e.category.eq_ignore_ascii_case(c)))
        .collect()
}
