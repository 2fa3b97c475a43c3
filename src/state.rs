/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Cheap to clone: the session provider sits behind an Arc
 */
use std::sync::Arc;

use crate::services::session::SessionProvider;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }
}
