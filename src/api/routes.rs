/*
 * Responsibility
 * - URL structure: a single /notes endpoint dispatched by method
 * - GET/POST run inside the session middleware; every other method gets 405
 *   (HEAD included: `on(GET)` instead of `get()`, which also matches HEAD)
 */
use axum::{
    Router,
    routing::{MethodFilter, on},
};

use crate::api::handlers::notes::{create_note, list_notes, method_not_supported};
use crate::middleware::db_session;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let notes = db_session::apply(on(MethodFilter::GET, list_notes).post(create_note), state)
        .fallback(method_not_supported);

    Router::new().route("/notes", notes)
}
