use bizdash::config::DashboardConfig;
use bizdash::invoice::{EditorMode, SaleEditor};
use bizdash::lifecycle::BusinessSystem;
use bizdash::model::{CustomerCreate, PaymentStatus, ProductCreate, SaleId};
use bizdash::sale_actor::SaleError;
use bizdash_actor::Repository;
use chrono::NaiveDate;

async fn seeded() -> BusinessSystem {
    let system = BusinessSystem::new(&DashboardConfig::default());
    system
        .customer_client
        .create_customer(CustomerCreate {
            name: "John Smith".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    for (name, price) in [("Premium Shampoo", 24.99), ("Styling Gel", 18.50)] {
        system
            .product_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price,
                stock_quantity: 20,
                ..Default::default()
            })
            .await
            .unwrap();
    }
    system
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
}

#[tokio::test]
async fn test_create_saves_sale_with_computed_totals() {
    let system = seeded().await;
    let customers = system.customer_client.list().await.unwrap();
    let products = system.product_client.list().await.unwrap();

    let mut editor = SaleEditor::create(&customers, &products, date(), 0.0);
    editor.select_customer(customers[0].id);
    for product in &products {
        let line = editor.add_item();
        editor.select_product(line, product.id);
    }
    editor.set_discount(10.0);
    editor.set_tax_rate(10.0);

    let receipt = editor.save(&system.sale_client).await.unwrap();
    assert_eq!(receipt.title, "Sale created successfully");
    assert_eq!(receipt.message, "Invoice for John Smith has been created.");
    assert_eq!(receipt.sale.id, SaleId(1));
    assert!((receipt.sale.sub_total - 43.49).abs() < 1e-9);
    assert!((receipt.sale.total - 36.839).abs() < 1e-9);

    let stored = system.sale_client.get(SaleId(1)).await.unwrap().unwrap();
    assert_eq!(stored, receipt.sale);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_edit_replaces_existing_sale() {
    let system = seeded().await;
    let customers = system.customer_client.list().await.unwrap();
    let products = system.product_client.list().await.unwrap();

    let mut editor = SaleEditor::create(&customers, &products, date(), 0.0);
    editor.select_customer(customers[0].id);
    let line = editor.add_item();
    editor.select_product(line, products[0].id);
    let created = editor.save(&system.sale_client).await.unwrap().sale;

    let mut editor = SaleEditor::edit(&created, &customers, &products);
    assert_eq!(editor.mode(), EditorMode::Edit(created.id));
    let line = editor.line_ids()[0];
    editor.set_quantity_text(line, "3");
    editor.set_payment_status(PaymentStatus::Paid);

    let receipt = editor.save(&system.sale_client).await.unwrap();
    assert_eq!(receipt.title, "Sale updated successfully");
    assert_eq!(receipt.message, "Invoice for John Smith has been updated.");
    assert_eq!(receipt.sale.id, created.id);
    assert!((receipt.sale.total - 3.0 * 24.99).abs() < 1e-9);
    assert_eq!(receipt.sale.payment_status, PaymentStatus::Paid);
    assert_eq!(system.sale_client.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_discard_sends_nothing() {
    let system = seeded().await;
    let customers = system.customer_client.list().await.unwrap();
    let products = system.product_client.list().await.unwrap();

    let mut editor = SaleEditor::create(&customers, &products, date(), 0.0);
    editor.add_item();
    editor.discard();

    assert!(system.sale_client.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_editing_deleted_sale_is_not_found() {
    let system = seeded().await;
    let customers = system.customer_client.list().await.unwrap();
    let products = system.product_client.list().await.unwrap();

    let created = SaleEditor::create(&customers, &products, date(), 0.0)
        .save(&system.sale_client)
        .await
        .unwrap()
        .sale;
    system.sale_client.delete(created.id).await.unwrap();

    let result = SaleEditor::edit(&created, &customers, &products)
        .save(&system.sale_client)
        .await;
    assert_eq!(result, Err(SaleError::NotFound(created.id.to_string())));

    system.shutdown().await.unwrap();
}
