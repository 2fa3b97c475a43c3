/*
 * Responsibility
 * - Extractors handlers use to receive request-scoped values
 */
mod db_session;
mod note_form;

pub use db_session::DbSession;
pub use note_form::FormValues;
