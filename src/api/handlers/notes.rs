/*
 * Responsibility
 * - /notes handlers: create (POST, form body) and list (GET, JSON)
 * - Both work on the request's DbSession placed by the session middleware
 */
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    api::{
        dto::notes::CreateNoteRequest,
        extractors::{DbSession, FormValues},
    },
    error::AppError,
};

pub async fn create_note(session: DbSession, form: FormValues) -> Result<StatusCode, AppError> {
    tracing::info!("create_note");

    let note = CreateNoteRequest::from_form(&form)?.into_note();
    tracing::debug!(?note, "note");

    if let Err(e) = session.insert(&note).await {
        tracing::warn!(error = %e, "insert failed");
        return Err(AppError::Insert(e));
    }

    tracing::info!("insert ok");
    Ok(StatusCode::OK)
}

pub async fn list_notes(session: DbSession) -> Result<Response, AppError> {
    tracing::info!("list_notes");

    let notes = session.newest_first().await.map_err(AppError::Query)?;
    let body = serde_json::to_vec(&notes)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

pub async fn method_not_supported() -> AppError {
    AppError::MethodNotSupported
}
