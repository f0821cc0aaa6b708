//! # Observability
//!
//! Structured logging setup shared by every binary built on the record store.
//!
//! Stores log with `entity_type` and `id` fields instead of module paths, so the
//! subscriber hides targets and uses the compact formatter:
//!
//! ```text
//! INFO Store started entity_type="Customer"
//! INFO Created entity_type="Customer" id=c1 size=1
//! INFO create_sale: Created entity_type="Sale" id=s1 size=1
//! ```
//!
//! `RUST_LOG` always wins over the default directive passed in by the caller.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `default_directive` (e.g. `"info"` or `"bizdash=debug"`) is used when `RUST_LOG`
/// is unset or invalid. Calling this twice is harmless; the second call is ignored.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
