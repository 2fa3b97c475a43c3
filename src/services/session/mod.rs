pub mod postgres;
pub mod provider;

#[cfg(test)]
pub mod memory;

pub use postgres::PgSessionProvider;
pub use provider::{NoteSession, SessionError, SessionProvider, SessionResult};
