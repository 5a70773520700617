//! Application state for the web layer.

use std::sync::Arc;

use crate::reply::Responder;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Query and confirmation handling
    pub responder: Arc<Responder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }
}
