//! # bizdash demo
//!
//! Starts the stores, seeds a few records, writes one invoice through the
//! [`SaleEditor`], and logs the resulting dashboard.
//!
//! ```bash
//! cargo run -p bizdash                      # defaults
//! cargo run -p bizdash -- bizdash.toml      # with a config file
//! BIZDASH_LATENCY_MS=600 cargo run -p bizdash
//! RUST_LOG=debug cargo run -p bizdash       # full payloads
//! ```

use bizdash::config::DashboardConfig;
use bizdash::format::{format_currency, format_date};
use bizdash::invoice::SaleEditor;
use bizdash::lifecycle::BusinessSystem;
use bizdash::model::{CustomerCreate, ExpenseCreate, ProductCreate};
use bizdash::reports::ReportSummary;
use bizdash_actor::tracing::setup_tracing;
use bizdash_actor::Repository;
use std::path::PathBuf;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load_or_default(config_path.as_deref())?;
    setup_tracing(&config.log_level);

    info!(?config, "Starting bizdash");
    let system = BusinessSystem::new(&config);

    let span = tracing::info_span!("seeding");
    async {
        for (name, email) in [
            ("John Smith", "john.smith@example.com"),
            ("Emily Johnson", "emily.j@example.com"),
        ] {
            let id = system
                .customer_client
                .create_customer(CustomerCreate {
                    name: name.to_string(),
                    email: Some(email.to_string()),
                    ..Default::default()
                })
                .await?;
            info!(%id, name, "Customer created");
        }

        for (name, sku, category, price, stock, reorder) in [
            ("Premium Shampoo", "PS-001", "Hair Care", 24.99, 45, 10),
            ("Styling Gel", "SG-002", "Hair Care", 18.50, 8, 10),
            ("Facial Cleanser", "FC-003", "Skin Care", 32.99, 20, 5),
        ] {
            let id = system
                .product_client
                .create_product(ProductCreate {
                    name: name.to_string(),
                    sku: sku.to_string(),
                    category: category.to_string(),
                    price,
                    stock_quantity: stock,
                    reorder_level: reorder,
                    ..Default::default()
                })
                .await?;
            info!(%id, name, "Product created");
        }

        let id = system
            .expense_client
            .create_expense(ExpenseCreate {
                category: "Rent".to_string(),
                amount: 1200.0,
                date: chrono::Local::now().date_naive(),
                description: Some("Monthly office rent".to_string()),
                payment_method: Some("Bank Transfer".to_string()),
                reference: None,
                notes: None,
            })
            .await?;
        info!(%id, "Expense created");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    // The editor borrows the lists it offers for selection.
    let customers = system.customer_client.list().await?;
    let products = system.product_client.list().await?;

    let span = tracing::info_span!("invoice");
    async {
        let mut editor = SaleEditor::create(
            &customers,
            &products,
            chrono::Local::now().date_naive(),
            config.default_tax_rate,
        );
        if let Some(customer) = customers.first() {
            editor.select_customer(customer.id);
        }
        for product in products.iter().take(2) {
            let line = editor.add_item();
            editor.select_product(line, product.id);
        }
        editor.set_payment_method("Credit Card");

        let receipt = editor.save(&system.sale_client).await?;
        info!(title = %receipt.title, "{}", receipt.message);
        info!(
            id = %receipt.sale.id,
            date = %format_date(receipt.sale.date),
            total = %format_currency(receipt.sale.total, 2),
            "Invoice saved"
        );

        for item in &receipt.sale.items {
            let Some(product_id) = item.product_id else {
                continue;
            };
            let level = system
                .product_client
                .adjust_stock(product_id, -(item.quantity.round() as i64))
                .await?;
            if level.low_stock {
                warn!(%product_id, quantity = level.quantity, status = %level.status, "Low stock");
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let summary = ReportSummary::build(&system.snapshot().await?);
    info!(
        customers = summary.stats.total_customers,
        products = summary.stats.total_products,
        sales = %format_currency(summary.stats.total_sales, 2),
        expenses = %format_currency(summary.stats.total_expenses, 2),
        net_profit = %format_currency(summary.stats.net_profit, 2),
        low_stock = summary.stats.low_stock_products,
        pending = summary.stats.pending_sales,
        "Dashboard"
    );
    println!("{}", summary.to_json()?);

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
