//! Charlie/Deltum repository: mandatory one-to-one from the charlie side.
//!
//! The pair that is enforced twice. `create_charlie` refuses a missing
//! deltum at the application tier; `insert_charlie` skips that check and
//! lets the `NOT NULL` column refuse it instead. Tests drive both paths
//! to show the outcomes differ only in *who* rejects the row.

use crate::model::charlie_deltum::{Charlie, CharlieId, Deltum, DeltumId};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const CHARLIE_SELECT_SQL: &str = "SELECT id, deltum_id, created_at, updated_at FROM charlies";
const DELTUM_SELECT_SQL: &str = "SELECT id, created_at, updated_at FROM delta";

/// Repository interface for the Charlie {0..1} <--> {1} Deltum pair.
pub trait CharlieDeltumRepository {
    fn create_deltum(&self) -> RepoResult<DeltumId>;
    /// Validated path: rejects `None` with
    /// [`ValidationError::CharlieWithoutDeltum`] before any SQL runs.
    fn create_charlie(&self, deltum_id: Option<DeltumId>) -> RepoResult<CharlieId>;
    /// Raw path: binds whatever it is given. With `None` the insert
    /// reaches SQLite and dies on the `NOT NULL` constraint, proving the
    /// mandatory side holds even without validations.
    fn insert_charlie(&self, deltum_id: Option<DeltumId>) -> RepoResult<CharlieId>;
    fn get_charlie(&self, id: CharlieId) -> RepoResult<Option<Charlie>>;
    fn get_deltum(&self, id: DeltumId) -> RepoResult<Option<Deltum>>;
    /// Inverse lookup from the FK-less side.
    fn charlie_of_deltum(&self, id: DeltumId) -> RepoResult<Option<Charlie>>;
    fn delete_charlie(&self, id: CharlieId) -> RepoResult<()>;
    /// Plain DELETE. When a charlie still references the deltum the FK
    /// (no delete action) turns this into a constraint violation.
    fn delete_deltum(&self, id: DeltumId) -> RepoResult<()>;
    fn count_charlies(&self) -> RepoResult<i64>;
    fn count_delta(&self) -> RepoResult<i64>;
}

/// SQLite-backed implementation.
pub struct SqliteCharlieDeltumRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCharlieDeltumRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CharlieDeltumRepository for SqliteCharlieDeltumRepository<'_> {
    fn create_deltum(&self) -> RepoResult<DeltumId> {
        self.conn.execute("INSERT INTO delta DEFAULT VALUES;", [])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn create_charlie(&self, deltum_id: Option<DeltumId>) -> RepoResult<CharlieId> {
        if deltum_id.is_none() {
            return Err(ValidationError::CharlieWithoutDeltum.into());
        }

        self.insert_charlie(deltum_id)
    }

    fn insert_charlie(&self, deltum_id: Option<DeltumId>) -> RepoResult<CharlieId> {
        self.conn.execute(
            "INSERT INTO charlies (deltum_id) VALUES (?1);",
            params![deltum_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_charlie(&self, id: CharlieId) -> RepoResult<Option<Charlie>> {
        let charlie = self
            .conn
            .query_row(
                &format!("{CHARLIE_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_charlie_row,
            )
            .optional()?;
        Ok(charlie)
    }

    fn get_deltum(&self, id: DeltumId) -> RepoResult<Option<Deltum>> {
        let deltum = self
            .conn
            .query_row(
                &format!("{DELTUM_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_deltum_row,
            )
            .optional()?;
        Ok(deltum)
    }

    fn charlie_of_deltum(&self, id: DeltumId) -> RepoResult<Option<Charlie>> {
        let charlie = self
            .conn
            .query_row(
                &format!("{CHARLIE_SELECT_SQL} WHERE deltum_id = ?1;"),
                params![id],
                parse_charlie_row,
            )
            .optional()?;
        Ok(charlie)
    }

    fn delete_charlie(&self, id: CharlieId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM charlies WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "charlies",
                id,
            });
        }

        Ok(())
    }

    fn delete_deltum(&self, id: DeltumId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM delta WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "delta", id });
        }

        Ok(())
    }

    fn count_charlies(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM charlies;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_delta(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM delta;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_charlie_row(row: &Row<'_>) -> rusqlite::Result<Charlie> {
    Ok(Charlie {
        id: row.get(0)?,
        deltum_id: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn parse_deltum_row(row: &Row<'_>) -> rusqlite::Result<Deltum> {
    Ok(Deltum {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
    })
}
