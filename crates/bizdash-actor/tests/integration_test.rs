use async_trait::async_trait;
use bizdash_actor::{Record, RecordActor, StoreError};
use std::time::{Duration, Instant};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: u32,
    name: String,
    balance: i64,
}

#[derive(Debug)]
struct AccountCreate {
    name: String,
}

#[derive(Debug)]
struct AccountUpdate {
    name: Option<String>,
    balance: Option<i64>,
}

#[derive(Debug)]
enum AccountAction {
    Deposit(i64),
    Withdraw(i64),
}

#[derive(Debug, thiserror::Error)]
enum AccountError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("insufficient funds: balance {0}")]
    InsufficientFunds(i64),
}

#[async_trait]
impl Record for Account {
    type Id = u32;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = i64;
    type Context = ();
    type Error = AccountError;

    fn from_create(id: u32, params: AccountCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(AccountError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            balance: 0,
        })
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
        if let Some(name) = update.name {
            if name.is_empty() {
                return Err(AccountError::EmptyName);
            }
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<i64, Self::Error> {
        match action {
            AccountAction::Deposit(amount) => self.balance += amount,
            AccountAction::Withdraw(amount) => {
                if amount > self.balance {
                    return Err(AccountError::InsufficientFunds(self.balance));
                }
                self.balance -= amount;
            }
        }
        Ok(self.balance)
    }
}

fn create(name: &str) -> AccountCreate {
    AccountCreate {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = RecordActor::<Account>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let first = client.create(create("Alice")).await.unwrap();
    let second = client.create(create("Bob")).await.unwrap();
    assert_eq!((first, second), (1, 2));

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    let balance = client
        .perform_action(first, AccountAction::Deposit(50))
        .await
        .unwrap();
    assert_eq!(balance, 50);

    let updated = client
        .update(
            first,
            AccountUpdate {
                name: Some("Alicia".into()),
                balance: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.balance, 50);

    client.delete(first).await.unwrap();
    assert!(client.get(first).await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_missing_records_report_not_found() {
    let (actor, client) = RecordActor::<Account>::new(10);
    tokio::spawn(actor.run(()));

    let update = client
        .update(
            42,
            AccountUpdate {
                name: None,
                balance: None,
            },
        )
        .await;
    assert!(matches!(update, Err(StoreError::NotFound(id)) if id == "42"));

    let delete = client.delete(42).await;
    assert!(delete.as_ref().is_err_and(|e| e.is_not_found()));

    let action = client.perform_action(42, AccountAction::Deposit(1)).await;
    assert!(matches!(action, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_failed_hooks_leave_store_unchanged() {
    let (actor, client) = RecordActor::<Account>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(create("")).await;
    assert!(matches!(rejected, Err(StoreError::Record(_))));
    assert!(client.list().await.unwrap().is_empty());

    let id = client.create(create("Carol")).await.unwrap();
    client
        .perform_action(id, AccountAction::Deposit(10))
        .await
        .unwrap();

    // The balance change is applied before the name check fails; neither may stick.
    let result = client
        .update(
            id,
            AccountUpdate {
                name: Some(String::new()),
                balance: Some(999),
            },
        )
        .await;
    assert!(result.is_err());

    let overdraw = client
        .perform_action(id, AccountAction::Withdraw(100))
        .await;
    assert!(overdraw.is_err());

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Carol");
    assert_eq!(stored.balance, 10);
}

#[tokio::test(start_paused = true)]
async fn test_latency_applies_to_mutations_only() {
    let (actor, client) = RecordActor::<Account>::new(10);
    tokio::spawn(actor.with_latency(Duration::from_millis(600)).run(()));

    let started = tokio::time::Instant::now();
    let id = client.create(create("Dana")).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(600));

    let started = tokio::time::Instant::now();
    client.get(id).await.unwrap();
    client.list().await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(600));
}

#[tokio::test]
async fn test_zero_latency_is_immediate() {
    let (actor, client) = RecordActor::<Account>::new(10);
    tokio::spawn(actor.with_latency(Duration::ZERO).run(()));

    let started = Instant::now();
    client.create(create("Eve")).await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(500));
}
