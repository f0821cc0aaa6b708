//! Record types and their create/update payloads.
//!
//! Every record implements [`Record`](bizdash_actor::Record) in its `*_actor` module.

pub mod customer;
pub mod expense;
pub mod product;
pub mod sale;

pub use customer::*;
pub use expense::*;
pub use product::*;
pub use sale::*;

/// Declares a sequential record id that displays with a short prefix (`c1`, `p12`).
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.strip_prefix($prefix)
                    .and_then(|n| n.parse().ok())
                    .map(Self)
                    .ok_or_else(|| InvalidId(s.to_string()))
            }
        }
    };
}

record_id!(
    /// Customer id, displayed as `c<n>`.
    CustomerId,
    "c"
);
record_id!(
    /// Product id, displayed as `p<n>`.
    ProductId,
    "p"
);
record_id!(
    /// Sale (invoice) id, displayed as `s<n>`.
    SaleId,
    "s"
);
record_id!(
    /// Expense id, displayed as `e<n>`.
    ExpenseId,
    "e"
);

/// A string that is not a valid record id for the expected type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id: {0:?}")]
pub struct InvalidId(pub String);

/// Form text fields are optional; an empty or blank field means "not set".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
