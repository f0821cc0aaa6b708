use crate::model::PaymentStatus;

/// Operations on a sale beyond CRUD.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleAction {
    /// Changes only the payment status (e.g. marking an invoice paid).
    SetPaymentStatus(PaymentStatus),
}

/// Results of [`SaleAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleActionResult {
    /// The status before the change.
    SetPaymentStatus(PaymentStatus),
}
