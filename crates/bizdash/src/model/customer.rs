use crate::model::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer record.
///
/// `total_purchases` and `last_purchase` are entered by hand (create or update) and are
/// never derived from sale records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_purchases: f64,
    pub last_purchase: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Payload for creating a customer. Blank optional text fields are stored as `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub total_purchases: f64,
    pub last_purchase: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    /// Defaults to the time of creation.
    pub created_at: Option<DateTime<Utc>>,
}

/// Patch for an existing customer; `None` leaves a field unchanged.
///
/// Setting an optional text field to an empty string clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub total_purchases: Option<f64>,
    pub last_purchase: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, params: CustomerCreate) -> Self {
        use crate::model::non_empty;
        Self {
            id,
            name: params.name,
            email: non_empty(params.email),
            phone: non_empty(params.phone),
            address: non_empty(params.address),
            created_at: params.created_at.unwrap_or_else(Utc::now),
            total_purchases: params.total_purchases,
            last_purchase: params.last_purchase,
            notes: non_empty(params.notes),
        }
    }

    pub(crate) fn apply(&mut self, update: CustomerUpdate) {
        use crate::model::non_empty;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = non_empty(Some(email));
        }
        if let Some(phone) = update.phone {
            self.phone = non_empty(Some(phone));
        }
        if let Some(address) = update.address {
            self.address = non_empty(Some(address));
        }
        if let Some(total) = update.total_purchases {
            self.total_purchases = total;
        }
        if let Some(last) = update.last_purchase {
            self.last_purchase = Some(last);
        }
        if let Some(notes) = update.notes {
            self.notes = non_empty(Some(notes));
        }
    }
}
