//! # Dashboard & Reports
//!
//! Aggregates over a [`Snapshot`] of all four stores. Everything here is a pure
//! function of the snapshot; fetching it is [`BusinessSystem::snapshot`].
//!
//! Revenue is the sum of sale totals regardless of payment status, matching what the
//! dashboard cards show.
//!
//! [`BusinessSystem::snapshot`]: crate::lifecycle::BusinessSystem::snapshot
use crate::model::{Customer, Expense, PaymentStatus, Product, Sale};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Label used for sales without a payment method.
pub const OTHER_PAYMENT_METHOD: &str = "Other";

/// Every record of every store, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub expenses: Vec<Expense>,
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: usize,
    pub total_products: usize,
    pub total_sales: f64,
    pub total_expenses: f64,
    /// `total_sales - total_expenses`.
    pub net_profit: f64,
    /// Products at or below their reorder level.
    pub low_stock_products: usize,
    pub pending_sales: usize,
}

impl DashboardStats {
    pub fn compute(snapshot: &Snapshot) -> Self {
        let total_sales = total_sales(&snapshot.sales);
        let total_expenses = total_expenses(&snapshot.expenses);
        Self {
            total_customers: snapshot.customers.len(),
            total_products: snapshot.products.len(),
            total_sales,
            total_expenses,
            net_profit: total_sales - total_expenses,
            low_stock_products: snapshot.products.iter().filter(|p| p.is_low_stock()).count(),
            pending_sales: snapshot
                .sales
                .iter()
                .filter(|s| s.payment_status == PaymentStatus::Pending)
                .count(),
        }
    }
}

pub fn total_sales<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> f64 {
    sales.into_iter().map(|s| s.total).sum()
}

pub fn total_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().map(|e| e.amount).sum()
}

/// One slice of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub name: String,
    pub value: f64,
}

/// Groups values by name, sorted by value (largest first) and then by name.
fn breakdown<'a>(entries: impl Iterator<Item = (&'a str, f64)>) -> Vec<Breakdown> {
    let mut groups: HashMap<&str, f64> = HashMap::new();
    for (name, value) in entries {
        *groups.entry(name).or_default() += value;
    }
    let mut slices: Vec<Breakdown> = groups
        .into_iter()
        .map(|(name, value)| Breakdown {
            name: name.to_string(),
            value,
        })
        .collect();
    slices.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    slices
}

/// Sale totals per payment method; sales without one count as `Other`.
pub fn sales_by_payment_method(sales: &[Sale]) -> Vec<Breakdown> {
    breakdown(sales.iter().map(|s| {
        (
            s.payment_method.as_deref().unwrap_or(OTHER_PAYMENT_METHOD),
            s.total,
        )
    }))
}

/// Expense amounts per category.
pub fn expenses_by_category(expenses: &[Expense]) -> Vec<Breakdown> {
    breakdown(expenses.iter().map(|e| (e.category.as_str(), e.amount)))
}

/// Number of products per category.
pub fn products_by_category(products: &[Product]) -> Vec<Breakdown> {
    breakdown(products.iter().map(|p| (p.category.as_str(), 1.0)))
}

/// Sales, expenses and profit of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// `YYYY-MM`.
    pub month: String,
    pub sales: f64,
    pub expenses: f64,
    pub profit: f64,
}

/// Per-month totals for every month that has a sale or an expense, oldest first.
pub fn monthly_series(sales: &[Sale], expenses: &[Expense]) -> Vec<MonthlyPoint> {
    fn month_of(date: NaiveDate) -> (i32, u32) {
        (date.year(), date.month())
    }

    let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for sale in sales {
        months.entry(month_of(sale.date)).or_default().0 += sale.total;
    }
    for expense in expenses {
        months.entry(month_of(expense.date)).or_default().1 += expense.amount;
    }

    months
        .into_iter()
        .map(|((year, month), (sales, expenses))| MonthlyPoint {
            month: format!("{year:04}-{month:02}"),
            sales,
            expenses,
            profit: sales - expenses,
        })
        .collect()
}

/// Everything the reports page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub stats: DashboardStats,
    pub sales_by_payment_method: Vec<Breakdown>,
    pub expenses_by_category: Vec<Breakdown>,
    pub products_by_category: Vec<Breakdown>,
    pub monthly: Vec<MonthlyPoint>,
}

impl ReportSummary {
    pub fn build(snapshot: &Snapshot) -> Self {
        Self {
            stats: DashboardStats::compute(snapshot),
            sales_by_payment_method: sales_by_payment_method(&snapshot.sales),
            expenses_by_category: expenses_by_category(&snapshot.expenses),
            products_by_category: products_by_category(&snapshot.products),
            monthly: monthly_series(&snapshot.sales, &snapshot.expenses),
        }
    }

    /// Pretty-printed JSON export.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(id: u32, on: NaiveDate, price: f64, status: PaymentStatus, method: Option<&str>) -> Sale {
        Sale::new(
            SaleId(id),
            SaleCreate {
                customer_id: Some(CustomerId(1)),
                customer_name: "John Smith".into(),
                date: on,
                items: vec![SaleItem::new(ProductId(1), "Premium Shampoo", 1.0, price)],
                discount: 0.0,
                tax_rate: 0.0,
                payment_status: status,
                payment_method: method.map(Into::into),
                notes: None,
            },
        )
    }

    fn expense(id: u32, on: NaiveDate, category: &str, amount: f64) -> Expense {
        Expense::new(
            ExpenseId(id),
            ExpenseCreate {
                category: category.into(),
                amount,
                date: on,
                description: None,
                payment_method: None,
                reference: None,
                notes: None,
            },
        )
    }

    fn product(id: u32, category: &str, stock: i64, reorder: i64) -> Product {
        Product::new(
            ProductId(id),
            ProductCreate {
                name: format!("Product {id}"),
                category: category.into(),
                stock_quantity: stock,
                reorder_level: reorder,
                ..Default::default()
            },
        )
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            customers: vec![Customer::new(
                CustomerId(1),
                CustomerCreate {
                    name: "John Smith".into(),
                    ..Default::default()
                },
            )],
            products: vec![
                product(1, "Hair Care", 45, 10),
                product(2, "Hair Care", 8, 10),
                product(3, "Skin Care", 20, 5),
            ],
            sales: vec![
                sale(1, date(2024, 3, 28), 100.0, PaymentStatus::Paid, Some("Credit Card")),
                sale(2, date(2024, 4, 2), 50.0, PaymentStatus::Pending, None),
                sale(3, date(2024, 4, 3), 25.0, PaymentStatus::Pending, Some("Cash")),
            ],
            expenses: vec![
                expense(1, date(2024, 3, 1), "Rent", 60.0),
                expense(2, date(2024, 4, 5), "Utilities", 15.0),
                expense(3, date(2024, 4, 9), "Utilities", 5.0),
            ],
        }
    }

    #[test]
    fn dashboard_stats() {
        let stats = DashboardStats::compute(&snapshot());
        assert_eq!(
            stats,
            DashboardStats {
                total_customers: 1,
                total_products: 3,
                total_sales: 175.0,
                total_expenses: 80.0,
                net_profit: 95.0,
                low_stock_products: 1,
                pending_sales: 2,
            }
        );
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(DashboardStats::compute(&Snapshot::default()), DashboardStats::default());
    }

    #[test]
    fn missing_payment_method_is_other() {
        let names: Vec<(String, f64)> = sales_by_payment_method(&snapshot().sales)
            .into_iter()
            .map(|b| (b.name, b.value))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Credit Card".to_string(), 100.0),
                ("Other".to_string(), 50.0),
                ("Cash".to_string(), 25.0),
            ]
        );
    }

    #[test]
    fn breakdown_ties_sort_by_name() {
        let expenses = vec![
            expense(1, date(2024, 1, 1), "Supplies", 20.0),
            expense(2, date(2024, 1, 1), "Marketing", 20.0),
        ];
        let names: Vec<String> = expenses_by_category(&expenses)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Marketing", "Supplies"]);
    }

    #[test]
    fn products_counted_per_category() {
        let slices = products_by_category(&snapshot().products);
        assert_eq!(slices[0], Breakdown { name: "Hair Care".into(), value: 2.0 });
        assert_eq!(slices[1], Breakdown { name: "Skin Care".into(), value: 1.0 });
    }

    #[test]
    fn monthly_series_groups_by_calendar_month() {
        let s = snapshot();
        let series = monthly_series(&s.sales, &s.expenses);
        assert_eq!(
            series,
            vec![
                MonthlyPoint { month: "2024-03".into(), sales: 100.0, expenses: 60.0, profit: 40.0 },
                MonthlyPoint { month: "2024-04".into(), sales: 75.0, expenses: 20.0, profit: 55.0 },
            ]
        );
    }

    #[test]
    fn summary_exports_camel_case_json() {
        let json = ReportSummary::build(&snapshot()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["stats"]["netProfit"], 95.0);
        assert_eq!(value["salesByPaymentMethod"][1]["name"], "Other");
        assert_eq!(value["monthly"][0]["month"], "2024-03");
    }
}
