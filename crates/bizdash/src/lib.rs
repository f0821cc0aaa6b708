//! # bizdash
//!
//! Record keeping for a small business: customers, inventory, sales invoices and
//! expenses, plus the numbers a dashboard shows about them.
//!
//! ## Modules
//!
//! - [`model`] - record types and their create/update payloads
//! - [`invoice`] - invoice totals and the [`SaleEditor`](invoice::SaleEditor) draft
//! - `*_actor` - one in-memory store per record type, built on [`bizdash_actor`]
//! - [`clients`] - typed clients for the stores
//! - [`filters`] and [`reports`] - list searches and dashboard aggregates
//! - [`format`] - currency/date display and form-number coercion
//! - [`config`] and [`lifecycle`] - configuration and starting/stopping the stores
//!
//! All data lives in memory for the lifetime of a [`BusinessSystem`](lifecycle::BusinessSystem).

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod expense_actor;
pub mod filters;
pub mod format;
pub mod invoice;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod reports;
pub mod sale_actor;
