/*
 * Responsibility
 * - SQLx operations on the notes collection (table `notes`)
 * - Takes a borrowed connection so each request works on its own session
 */
use sqlx::{PgConnection, PgPool};

use crate::models::Note;
use crate::repos::error::RepoResult;

/// Creates the collection if it is missing. No versioning, no indexes.
pub async fn ensure_table(db: &PgPool) -> RepoResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            text TEXT NOT NULL,
            "user" TEXT NOT NULL,
            "when" TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}

pub async fn insert(conn: &mut PgConnection, note: &Note) -> RepoResult<()> {
    sqlx::query(
        r#"
        INSERT INTO notes (text, "user", "when")
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(&note.text)
    .bind(&note.user)
    .bind(note.when)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn list_newest_first(conn: &mut PgConnection) -> RepoResult<Vec<Note>> {
    let rows = sqlx::query_as::<_, Note>(
        r#"
        SELECT text, "user", "when"
        FROM notes
        ORDER BY "when" DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}
