use crate::clients::{CustomerClient, ExpenseClient, ProductClient, SaleClient};
use crate::config::DashboardConfig;
use crate::customer_actor::CustomerError;
use crate::expense_actor::ExpenseError;
use crate::product_actor::ProductError;
use crate::reports::Snapshot;
use crate::sale_actor::SaleError;
use bizdash_actor::Repository;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("{store} store task failed: {source}")]
    ActorFailed {
        store: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Sale(#[from] SaleError),
    #[error(transparent)]
    Expense(#[from] ExpenseError),
}

/// The running record stores of one business.
pub struct BusinessSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub sale_client: SaleClient,
    pub expense_client: ExpenseClient,
    handles: Vec<(&'static str, tokio::task::JoinHandle<()>)>,
}

impl BusinessSystem {
    /// Starts all four stores. Must be called inside a Tokio runtime.
    pub fn new(config: &DashboardConfig) -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new(config);
        let (product_actor, product_client) = crate::product_actor::new(config);
        let (sale_actor, sale_client) = crate::sale_actor::new(config);
        let (expense_actor, expense_client) = crate::expense_actor::new(config);

        let handles = vec![
            ("customer", tokio::spawn(customer_actor.run(()))),
            ("product", tokio::spawn(product_actor.run(()))),
            ("sale", tokio::spawn(sale_actor.run(()))),
            ("expense", tokio::spawn(expense_actor.run(()))),
        ];
        info!(
            channel_capacity = config.channel_capacity,
            latency_ms = config.simulated_latency_ms,
            "Business system started"
        );

        Self {
            customer_client,
            product_client,
            sale_client,
            expense_client,
            handles,
        }
    }

    /// Lists every store concurrently.
    pub async fn snapshot(&self) -> Result<Snapshot, SystemError> {
        let (customers, products, sales, expenses) = tokio::try_join!(
            async { self.customer_client.list().await.map_err(SystemError::from) },
            async { self.product_client.list().await.map_err(SystemError::from) },
            async { self.sale_client.list().await.map_err(SystemError::from) },
            async { self.expense_client.list().await.map_err(SystemError::from) },
        )?;
        Ok(Snapshot {
            customers,
            products,
            sales,
            expenses,
        })
    }

    /// Drops the clients and waits for every store task to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down business system...");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.sale_client);
        drop(self.expense_client);

        for (store, handle) in self.handles {
            if let Err(source) = handle.await {
                error!(store, error = %source, "Store task failed");
                return Err(SystemError::ActorFailed { store, source });
            }
        }

        info!("Business system shutdown complete.");
        Ok(())
    }
}
