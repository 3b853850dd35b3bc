//! Alfa/Bravo repository: optional one-to-one, FK nullified on delete.
//!
//! Nothing here validates anything; with both sides optional there is no
//! rule to check. Every operation maps to one SQL statement, and the one
//! interesting behavior (deleting a bravo detaches its alfa) is done
//! entirely by the `ON DELETE SET NULL` clause in the schema.

use crate::model::alfa_bravo::{Alfa, AlfaId, Bravo, BravoId};
use crate::repo::{RepoError, RepoResult, TOUCH_UPDATED_AT};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ALFA_SELECT_SQL: &str = "SELECT id, bravo_id, created_at, updated_at FROM alfas";
const BRAVO_SELECT_SQL: &str = "SELECT id, created_at, updated_at FROM bravos";

/// Repository interface for the Alfa {0..1} <--> {0..1} Bravo pair.
pub trait AlfaBravoRepository {
    fn create_bravo(&self) -> RepoResult<BravoId>;
    /// `bravo_id = None` is fine: the relationship is optional on both
    /// sides, so there is no validated/raw split for this pair.
    fn create_alfa(&self, bravo_id: Option<BravoId>) -> RepoResult<AlfaId>;
    fn get_alfa(&self, id: AlfaId) -> RepoResult<Option<Alfa>>;
    fn get_bravo(&self, id: BravoId) -> RepoResult<Option<Bravo>>;
    /// Inverse lookup: the bravo row holds no FK, so its alfa is found
    /// by querying `alfas.bravo_id`.
    fn alfa_of_bravo(&self, id: BravoId) -> RepoResult<Option<Alfa>>;
    /// Reassigns (or clears) the FK. The only mutation the relationship
    /// supports beyond create/delete.
    fn assign_bravo(&self, alfa_id: AlfaId, bravo_id: Option<BravoId>) -> RepoResult<()>;
    fn delete_alfa(&self, id: AlfaId) -> RepoResult<()>;
    /// Plain DELETE; the FK action, not this code, nullifies any alfa
    /// still pointing at the bravo.
    fn delete_bravo(&self, id: BravoId) -> RepoResult<()>;
    fn count_alfas(&self) -> RepoResult<i64>;
    fn count_bravos(&self) -> RepoResult<i64>;
}

/// SQLite-backed implementation.
pub struct SqliteAlfaBravoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAlfaBravoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AlfaBravoRepository for SqliteAlfaBravoRepository<'_> {
    fn create_bravo(&self) -> RepoResult<BravoId> {
        self.conn
            .execute("INSERT INTO bravos DEFAULT VALUES;", [])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn create_alfa(&self, bravo_id: Option<BravoId>) -> RepoResult<AlfaId> {
        self.conn.execute(
            "INSERT INTO alfas (bravo_id) VALUES (?1);",
            params![bravo_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_alfa(&self, id: AlfaId) -> RepoResult<Option<Alfa>> {
        let alfa = self
            .conn
            .query_row(
                &format!("{ALFA_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_alfa_row,
            )
            .optional()?;
        Ok(alfa)
    }

    fn get_bravo(&self, id: BravoId) -> RepoResult<Option<Bravo>> {
        let bravo = self
            .conn
            .query_row(
                &format!("{BRAVO_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_bravo_row,
            )
            .optional()?;
        Ok(bravo)
    }

    fn alfa_of_bravo(&self, id: BravoId) -> RepoResult<Option<Alfa>> {
        let alfa = self
            .conn
            .query_row(
                &format!("{ALFA_SELECT_SQL} WHERE bravo_id = ?1;"),
                params![id],
                parse_alfa_row,
            )
            .optional()?;
        Ok(alfa)
    }

    fn assign_bravo(&self, alfa_id: AlfaId, bravo_id: Option<BravoId>) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("UPDATE alfas SET bravo_id = ?1, {TOUCH_UPDATED_AT} WHERE id = ?2;"),
            params![bravo_id, alfa_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "alfas",
                id: alfa_id,
            });
        }

        Ok(())
    }

    fn delete_alfa(&self, id: AlfaId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM alfas WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "alfas", id });
        }

        Ok(())
    }

    fn delete_bravo(&self, id: BravoId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM bravos WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "bravos", id });
        }

        Ok(())
    }

    fn count_alfas(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM alfas;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_bravos(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM bravos;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_alfa_row(row: &Row<'_>) -> rusqlite::Result<Alfa> {
    Ok(Alfa {
        id: row.get(0)?,
        bravo_id: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn parse_bravo_row(row: &Row<'_>) -> rusqlite::Result<Bravo> {
    Ok(Bravo {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
    })
}
