//! Echo/Foxtrot repository: optional FK, inbound-reference validation.
//!
//! `create_foxtrot` is the only write here that does real work: it
//! demands an echo, inserts the foxtrot, and points the echo's FK at it
//! inside one transaction so no observer sees a rule-breaking orphan.
//! `insert_foxtrot` shows the other half of the story; the database has
//! no opinion about orphan foxtrots, so the raw insert just succeeds.

use crate::model::echo_foxtrot::{Echo, EchoId, Foxtrot, FoxtrotId};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult, TOUCH_UPDATED_AT};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ECHO_SELECT_SQL: &str = "SELECT id, foxtrot_id, created_at, updated_at FROM echos";
const FOXTROT_SELECT_SQL: &str = "SELECT id, created_at, updated_at FROM foxtrots";

/// Repository interface for the Echo {0..1} <--> "{1}" Foxtrot pair.
pub trait EchoFoxtrotRepository {
    fn create_echo(&self, foxtrot_id: Option<FoxtrotId>) -> RepoResult<EchoId>;
    /// Validated path: requires an existing echo and links it to the new
    /// foxtrot transactionally. Fails with
    /// [`ValidationError::FoxtrotWithoutEcho`] when `echo_id` is `None`.
    fn create_foxtrot(&self, echo_id: Option<EchoId>) -> RepoResult<FoxtrotId>;
    /// Raw path: inserts an orphan foxtrot. Succeeds, which is the
    /// documented weakness of a validation-only minimum count.
    fn insert_foxtrot(&self) -> RepoResult<FoxtrotId>;
    fn get_echo(&self, id: EchoId) -> RepoResult<Option<Echo>>;
    fn get_foxtrot(&self, id: FoxtrotId) -> RepoResult<Option<Foxtrot>>;
    /// Inverse lookup from the FK-less side.
    fn echo_of_foxtrot(&self, id: FoxtrotId) -> RepoResult<Option<Echo>>;
    fn assign_foxtrot(&self, echo_id: EchoId, foxtrot_id: Option<FoxtrotId>) -> RepoResult<()>;
    fn delete_echo(&self, id: EchoId) -> RepoResult<()>;
    /// Plain DELETE; a still-referencing echo makes this a FK violation
    /// since the constraint carries no delete action.
    fn delete_foxtrot(&self, id: FoxtrotId) -> RepoResult<()>;
    fn count_echos(&self) -> RepoResult<i64>;
    fn count_foxtrots(&self) -> RepoResult<i64>;
}

/// SQLite-backed implementation.
pub struct SqliteEchoFoxtrotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEchoFoxtrotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EchoFoxtrotRepository for SqliteEchoFoxtrotRepository<'_> {
    fn create_echo(&self, foxtrot_id: Option<FoxtrotId>) -> RepoResult<EchoId> {
        self.conn.execute(
            "INSERT INTO echos (foxtrot_id) VALUES (?1);",
            params![foxtrot_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn create_foxtrot(&self, echo_id: Option<EchoId>) -> RepoResult<FoxtrotId> {
        let echo_id = match echo_id {
            Some(id) => id,
            None => return Err(ValidationError::FoxtrotWithoutEcho.into()),
        };

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("INSERT INTO foxtrots DEFAULT VALUES;", [])?;
        let foxtrot_id = tx.last_insert_rowid();

        let changed = tx.execute(
            &format!("UPDATE echos SET foxtrot_id = ?1, {TOUCH_UPDATED_AT} WHERE id = ?2;"),
            params![foxtrot_id, echo_id],
        )?;
        if changed == 0 {
            // Dropping the transaction rolls the foxtrot insert back.
            return Err(RepoError::NotFound {
                table: "echos",
                id: echo_id,
            });
        }

        tx.commit()?;
        Ok(foxtrot_id)
    }

    fn insert_foxtrot(&self) -> RepoResult<FoxtrotId> {
        self.conn
            .execute("INSERT INTO foxtrots DEFAULT VALUES;", [])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_echo(&self, id: EchoId) -> RepoResult<Option<Echo>> {
        let echo = self
            .conn
            .query_row(
                &format!("{ECHO_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_echo_row,
            )
            .optional()?;
        Ok(echo)
    }

    fn get_foxtrot(&self, id: FoxtrotId) -> RepoResult<Option<Foxtrot>> {
        let foxtrot = self
            .conn
            .query_row(
                &format!("{FOXTROT_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_foxtrot_row,
            )
            .optional()?;
        Ok(foxtrot)
    }

    fn echo_of_foxtrot(&self, id: FoxtrotId) -> RepoResult<Option<Echo>> {
        let echo = self
            .conn
            .query_row(
                &format!("{ECHO_SELECT_SQL} WHERE foxtrot_id = ?1;"),
                params![id],
                parse_echo_row,
            )
            .optional()?;
        Ok(echo)
    }

    fn assign_foxtrot(&self, echo_id: EchoId, foxtrot_id: Option<FoxtrotId>) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("UPDATE echos SET foxtrot_id = ?1, {TOUCH_UPDATED_AT} WHERE id = ?2;"),
            params![foxtrot_id, echo_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "echos",
                id: echo_id,
            });
        }

        Ok(())
    }

    fn delete_echo(&self, id: EchoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM echos WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "echos", id });
        }

        Ok(())
    }

    fn delete_foxtrot(&self, id: FoxtrotId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM foxtrots WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "foxtrots",
                id,
            });
        }

        Ok(())
    }

    fn count_echos(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM echos;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_foxtrots(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM foxtrots;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_echo_row(row: &Row<'_>) -> rusqlite::Result<Echo> {
    Ok(Echo {
        id: row.get(0)?,
        foxtrot_id: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn parse_foxtrot_row(row: &Row<'_>) -> rusqlite::Result<Foxtrot> {
    Ok(Foxtrot {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
    })
}
