//! Per-request database session.
//!
//! Acquires a session from `AppState.sessions`, stores it as a `DbSession`
//! request extension, runs the handler and releases the session afterwards.
//!
//! Release happens on every exit path:
//! - handler returned (success or error response): explicit `release()`;
//! - handler panicked or the request future was dropped: the session is
//!   dropped with the last `DbSession` clone and goes back to the pool.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::api::extractors::DbSession;
use crate::error::AppError;
use crate::state::AppState;

/// Wraps the given method routes with the session middleware.
///
/// Applied with `route_layer`, so a fallback added afterwards (e.g. the 405
/// responder) never acquires a session.
pub fn apply(routes: MethodRouter<AppState>, state: AppState) -> MethodRouter<AppState> {
    routes.route_layer(middleware::from_fn_with_state(state, db_session_middleware))
}

async fn db_session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = match state.sessions.acquire().await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(
                backend = state.sessions.backend_name(),
                error = %err,
                "cannot acquire database session"
            );
            return Err(AppError::Session(err));
        }
    };

    let handle = DbSession::new(session);
    req.extensions_mut().insert(handle.clone());

    let response = next.run(req).await;

    if handle.release().await {
        tracing::debug!(backend = state.sessions.backend_name(), "session released");
    }

    Ok(response)
}
