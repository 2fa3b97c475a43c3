/*
 * Responsibility
 * - Middleware entry points: per-request db session, HTTP cross-cutting layers
 */
pub mod db_session;
pub mod http;
