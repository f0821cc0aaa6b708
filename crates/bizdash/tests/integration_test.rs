use bizdash::config::DashboardConfig;
use bizdash::customer_actor::CustomerError;
use bizdash::lifecycle::BusinessSystem;
use bizdash::model::{
    CustomerCreate, CustomerId, CustomerUpdate, ExpenseCreate, ExpenseUpdate, PaymentStatus,
    ProductCreate, ProductId, ProductUpdate, SaleCreate, SaleId, SaleItem, StockStatus,
};
use bizdash::product_actor::ProductError;
use bizdash::reports::{DashboardStats, ReportSummary};
use bizdash::sale_actor::SaleError;
use bizdash_actor::Repository;
use chrono::NaiveDate;
use std::time::Duration;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn shampoo() -> ProductCreate {
    ProductCreate {
        name: "Premium Shampoo".to_string(),
        sku: "PS-001".to_string(),
        category: "Hair Care".to_string(),
        price: 24.99,
        cost: Some(12.50),
        stock_quantity: 45,
        reorder_level: 10,
        description: None,
    }
}

/// Every store started together, used end to end.
#[tokio::test]
async fn test_full_business_system_integration() {
    let system = BusinessSystem::new(&DashboardConfig::default());

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "John Smith".to_string(),
            email: Some("john.smith@example.com".to_string()),
            phone: Some("".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create customer");
    assert_eq!(customer_id, CustomerId(1));

    let customer = system
        .customer_client
        .get(customer_id)
        .await
        .expect("Failed to get customer")
        .expect("Customer not found");
    assert_eq!(customer.name, "John Smith");
    assert_eq!(customer.phone, None);

    let product_id = system
        .product_client
        .create_product(shampoo())
        .await
        .expect("Failed to create product");

    let sale_id = system
        .sale_client
        .create_sale(SaleCreate {
            customer_id: Some(customer_id),
            customer_name: customer.name.clone(),
            date: date(2024, 4, 2),
            items: vec![SaleItem::new(product_id, "Premium Shampoo", 2.0, 24.99)],
            discount: 0.0,
            tax_rate: 0.0,
            payment_status: PaymentStatus::Pending,
            payment_method: Some("Credit Card".to_string()),
            notes: None,
        })
        .await
        .expect("Failed to create sale");
    assert_eq!(sale_id.to_string(), "s1");

    system
        .expense_client
        .create_expense(ExpenseCreate {
            category: "Supplies".to_string(),
            amount: 20.0,
            date: date(2024, 4, 5),
            description: None,
            payment_method: None,
            reference: Some("INV-2024-001".to_string()),
            notes: None,
        })
        .await
        .expect("Failed to create expense");

    let previous = system
        .sale_client
        .set_payment_status(sale_id, PaymentStatus::Paid)
        .await
        .expect("Failed to set status");
    assert_eq!(previous, PaymentStatus::Pending);

    let summary = ReportSummary::build(&system.snapshot().await.expect("Failed to snapshot"));
    assert_eq!(
        summary.stats,
        DashboardStats {
            total_customers: 1,
            total_products: 1,
            total_sales: 2.0 * 24.99,
            total_expenses: 20.0,
            net_profit: 2.0 * 24.99 - 20.0,
            low_stock_products: 0,
            pending_sales: 0,
        }
    );

    // Sales are independent of stock and customer totals.
    let level = system.product_client.check_stock(product_id).await.unwrap();
    assert_eq!(level.quantity, 45);
    let customer = system.customer_client.get(customer_id).await.unwrap().unwrap();
    assert_eq!(customer.total_purchases, 0.0);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_records_list_in_creation_order() {
    let system = BusinessSystem::new(&DashboardConfig::default());

    for name in ["Sarah Davis", "Michael Brown", "Emily Johnson"] {
        system
            .customer_client
            .create_customer(CustomerCreate {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }
    system.customer_client.delete(CustomerId(2)).await.unwrap();

    let names: Vec<String> = system
        .customer_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Sarah Davis", "Emily Johnson"]);

    // Ids are never reused.
    let id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Robert Wilson".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(id, CustomerId(4));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let system = BusinessSystem::new(&DashboardConfig::default());

    assert_eq!(system.customer_client.get(CustomerId(7)).await, Ok(None));
    assert_eq!(
        system
            .customer_client
            .update_customer(CustomerId(7), CustomerUpdate::default())
            .await,
        Err(CustomerError::NotFound("c7".to_string()))
    );
    assert_eq!(
        system.product_client.adjust_stock(ProductId(3), 1).await,
        Err(ProductError::NotFound("p3".to_string()))
    );
    assert_eq!(
        system.sale_client.delete(SaleId(1)).await,
        Err(SaleError::NotFound("s1".to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_status_follows_stock_changes() {
    let system = BusinessSystem::new(&DashboardConfig::default());
    let id = system.product_client.create_product(shampoo()).await.unwrap();

    let product = system
        .product_client
        .update_product(
            id,
            ProductUpdate {
                stock_quantity: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(product.status, StockStatus::LowStock);
    assert!(product.is_low_stock());

    let level = system.product_client.adjust_stock(id, -5).await.unwrap();
    assert_eq!(level.quantity, 0);
    assert_eq!(level.status, StockStatus::OutOfStock);

    let level = system.product_client.adjust_stock(id, 6).await.unwrap();
    assert_eq!(level.status, StockStatus::InStock);
    assert!(level.low_stock);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sale_update_recomputes_totals() {
    let system = BusinessSystem::new(&DashboardConfig::default());
    let mut params = SaleCreate {
        customer_id: None,
        customer_name: "Emily Johnson".to_string(),
        date: date(2024, 4, 1),
        items: vec![
            SaleItem::new(ProductId(1), "Premium Shampoo", 1.0, 24.99),
            SaleItem::new(ProductId(2), "Styling Gel", 1.0, 18.50),
        ],
        discount: 0.0,
        tax_rate: 0.0,
        payment_status: PaymentStatus::Pending,
        payment_method: None,
        notes: None,
    };
    let id = system.sale_client.create_sale(params.clone()).await.unwrap();
    let sale = system.sale_client.get(id).await.unwrap().unwrap();
    assert!((sale.total - 43.49).abs() < 1e-9);

    params.discount = 10.0;
    params.tax_rate = 10.0;
    let sale = system.sale_client.update_sale(id, params).await.unwrap();
    assert!((sale.sub_total - 43.49).abs() < 1e-9);
    assert!((sale.tax - 3.349).abs() < 1e-9);
    assert!((sale.total - 36.839).abs() < 1e-9);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_expense_update_patches_fields() {
    let system = BusinessSystem::new(&DashboardConfig::default());
    let id = system
        .expense_client
        .create_expense(ExpenseCreate {
            category: "Utilities".to_string(),
            amount: 180.0,
            date: date(2024, 4, 10),
            description: Some("Electricity bill".to_string()),
            payment_method: Some("Credit Card".to_string()),
            reference: None,
            notes: None,
        })
        .await
        .unwrap();

    let expense = system
        .expense_client
        .update_expense(
            id,
            ExpenseUpdate {
                amount: Some(195.5),
                description: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(expense.amount, 195.5);
    assert_eq!(expense.description, None);
    assert_eq!(expense.payment_method.as_deref(), Some("Credit Card"));

    system.shutdown().await.unwrap();
}

/// With a configured latency, saves and actions are acknowledged only after the delay.
#[tokio::test(start_paused = true)]
async fn test_configured_latency_delays_saves() {
    let config = DashboardConfig {
        simulated_latency_ms: 600,
        ..Default::default()
    };
    let system = BusinessSystem::new(&config);

    let start = tokio::time::Instant::now();
    system.product_client.create_product(shampoo()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(600));

    let start = tokio::time::Instant::now();
    system.product_client.list().await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(600));

    // Actions are delayed even when they only read.
    let start = tokio::time::Instant::now();
    system.product_client.check_stock(ProductId(1)).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(600));

    system.shutdown().await.unwrap();
}
