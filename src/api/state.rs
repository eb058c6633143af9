//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::ledger::YukyuLedger;

/// Shared application state.
///
/// Contains the loaded per-company rate configurations and the yukyu
/// ledger, both shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded per-company rate configurations.
    config: Arc<ConfigLoader>,
    /// The paid-leave ledger.
    ledger: Arc<YukyuLedger>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and an empty ledger.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            ledger: Arc::new(YukyuLedger::new()),
        }
    }

    /// Creates a state around an existing ledger, for callers that hydrate
    /// balances before serving.
    pub fn with_ledger(config: ConfigLoader, ledger: Arc<YukyuLedger>) -> Self {
        Self {
            config: Arc::new(config),
            ledger,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the yukyu ledger.
    pub fn ledger(&self) -> &YukyuLedger {
        &self.ledger
    }
}
