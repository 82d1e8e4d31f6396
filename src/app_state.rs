//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    browser::TransactionBrowser,
    source::MockTransactionSource,
};

/// The browser type this application serves.
pub type AppBrowser = TransactionBrowser<MockTransactionSource>;

/// A handle to the process-wide browser instance.
pub type SharedBrowser = Arc<Mutex<AppBrowser>>;

/// The state of the server.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The single browser instance that all requests act on.
    ///
    /// The async lock serializes actions, so two in-flight requests can
    /// never read the same pagination cursor or interleave mutations; a
    /// queued action sees the state its predecessor left behind.
    pub browser: SharedBrowser,
}

impl AppState {
    /// Create the server state around a data source.
    pub fn new(source: MockTransactionSource) -> Self {
        Self {
            browser: Arc::new(Mutex::new(TransactionBrowser::new(source))),
        }
    }
}
