/*
 * Responsibility
 * - Note entity shared by handlers, sessions and the repo layer
 * - JSON shape: {"text", "user", "when"} with `when` as RFC 3339
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub text: String,
    pub user: String,
    pub when: DateTime<Utc>,
}

impl Note {
    /// Builds a note stamped with the current server time.
    pub fn new(text: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: user.into(),
            when: Utc::now(),
        }
    }
}
