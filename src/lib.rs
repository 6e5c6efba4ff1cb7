#![doc(test(attr(deny(warnings))))]

//! Fleet Core offers the registry, ledger, and reporting primitives that
//! power owner-facing dashboards for small vehicle-rental fleets.

pub mod config;
pub mod errors;
pub mod fleet;
pub mod insight;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fleet Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
