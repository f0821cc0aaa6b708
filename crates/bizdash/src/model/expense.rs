use crate::model::ExpenseId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A business expense. Not linked to any other record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

/// Payload for creating an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Patch for an existing expense; `None` leaves a field unchanged and an empty
/// string clears an optional text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseUpdate {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub payment_method: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(id: ExpenseId, params: ExpenseCreate) -> Self {
        use crate::model::non_empty;
        Self {
            id,
            category: params.category,
            amount: params.amount,
            date: params.date,
            description: non_empty(params.description),
            payment_method: non_empty(params.payment_method),
            reference: non_empty(params.reference),
            notes: non_empty(params.notes),
        }
    }

    pub(crate) fn apply(&mut self, update: ExpenseUpdate) {
        use crate::model::non_empty;
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(description) = update.description {
            self.description = non_empty(Some(description));
        }
        if let Some(method) = update.payment_method {
            self.payment_method = non_empty(Some(method));
        }
        if let Some(reference) = update.reference {
            self.reference = non_empty(Some(reference));
        }
        if let Some(notes) = update.notes {
            self.notes = non_empty(Some(notes));
        }
    }
}
