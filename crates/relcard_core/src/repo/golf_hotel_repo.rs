//! Golf/Hotel repository: one-to-many with a guarded minimum count.
//!
//! Three write paths carry the lesson of this pair:
//! - `create_hotel` validates the golf list is non-empty and claims the
//!   golves in one transaction;
//! - `destroy_golf` recounts siblings inside its transaction and aborts
//!   with [`RepoError::LastGolfOfHotel`] when the golf is the hotel's
//!   last one;
//! - `insert_hotel` and `delete_golf` skip both of those, and succeed,
//!   because nothing at the database layer knows about the minimum.
//!
//! Deleting a hotel needs no code at all: `ON DELETE SET NULL` detaches
//! the surviving golves.

use crate::model::golf_hotel::{Golf, GolfId, Hotel, HotelId};
use crate::model::ValidationError;
use crate::repo::{RepoError, RepoResult, TOUCH_UPDATED_AT};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension, Row};

const GOLF_SELECT_SQL: &str = "SELECT id, hotel_id, created_at, updated_at FROM golves";
const HOTEL_SELECT_SQL: &str = "SELECT id, created_at, updated_at FROM hotels";

/// Repository interface for the Golf {0..1} <--> {1..N} Hotel pair.
pub trait GolfHotelRepository {
    fn create_golf(&self, hotel_id: Option<HotelId>) -> RepoResult<GolfId>;
    /// Validated path: refuses an empty golf list with
    /// [`ValidationError::HotelWithoutGolves`], then inserts the hotel
    /// and points every listed golf at it, all in one transaction.
    fn create_hotel(&self, golves: &[GolfId]) -> RepoResult<HotelId>;
    /// Raw path: persists a hotel with zero golves. The minimum-count
    /// rule lives only in application code, so nothing stops this.
    fn insert_hotel(&self) -> RepoResult<HotelId>;
    fn get_golf(&self, id: GolfId) -> RepoResult<Option<Golf>>;
    fn get_hotel(&self, id: HotelId) -> RepoResult<Option<Hotel>>;
    /// Inverse side of the FK: all golves currently claimed by a hotel,
    /// in stable id order.
    fn golves_of_hotel(&self, id: HotelId) -> RepoResult<Vec<Golf>>;
    /// Guarded delete. When the golf belongs to a hotel, the guard
    /// recounts that hotel's golves inside the delete transaction and
    /// aborts rather than orphan the hotel below one golf.
    fn destroy_golf(&self, id: GolfId) -> RepoResult<()>;
    /// Raw DELETE that skips the guard; the bypass that leaves a hotel
    /// with zero golves and nobody to object.
    fn delete_golf(&self, id: GolfId) -> RepoResult<()>;
    /// Plain DELETE; the FK action detaches surviving golves.
    fn delete_hotel(&self, id: HotelId) -> RepoResult<()>;
    fn count_golves(&self) -> RepoResult<i64>;
    fn count_hotels(&self) -> RepoResult<i64>;
}

/// SQLite-backed implementation.
pub struct SqliteGolfHotelRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGolfHotelRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GolfHotelRepository for SqliteGolfHotelRepository<'_> {
    fn create_golf(&self, hotel_id: Option<HotelId>) -> RepoResult<GolfId> {
        self.conn.execute(
            "INSERT INTO golves (hotel_id) VALUES (?1);",
            params![hotel_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn create_hotel(&self, golves: &[GolfId]) -> RepoResult<HotelId> {
        if golves.is_empty() {
            return Err(ValidationError::HotelWithoutGolves.into());
        }

        let tx = self.conn.unchecked_transaction()?;
        tx.execute("INSERT INTO hotels DEFAULT VALUES;", [])?;
        let hotel_id = tx.last_insert_rowid();

        for &golf_id in golves {
            let changed = tx.execute(
                &format!("UPDATE golves SET hotel_id = ?1, {TOUCH_UPDATED_AT} WHERE id = ?2;"),
                params![hotel_id, golf_id],
            )?;
            if changed == 0 {
                // Dropping the transaction rolls back the hotel and any
                // golves already claimed.
                return Err(RepoError::NotFound {
                    table: "golves",
                    id: golf_id,
                });
            }
        }

        tx.commit()?;
        Ok(hotel_id)
    }

    fn insert_hotel(&self) -> RepoResult<HotelId> {
        self.conn
            .execute("INSERT INTO hotels DEFAULT VALUES;", [])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_golf(&self, id: GolfId) -> RepoResult<Option<Golf>> {
        let golf = self
            .conn
            .query_row(
                &format!("{GOLF_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_golf_row,
            )
            .optional()?;
        Ok(golf)
    }

    fn get_hotel(&self, id: HotelId) -> RepoResult<Option<Hotel>> {
        let hotel = self
            .conn
            .query_row(
                &format!("{HOTEL_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_hotel_row,
            )
            .optional()?;
        Ok(hotel)
    }

    fn golves_of_hotel(&self, id: HotelId) -> RepoResult<Vec<Golf>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "{GOLF_SELECT_SQL} WHERE hotel_id = ?1 ORDER BY id ASC;"
            ))?;
        let rows = stmt.query_map(params![id], parse_golf_row)?;

        let mut golves = Vec::new();
        for golf in rows {
            golves.push(golf?);
        }
        Ok(golves)
    }

    fn destroy_golf(&self, id: GolfId) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        let hotel_id: Option<HotelId> = match tx
            .query_row(
                "SELECT hotel_id FROM golves WHERE id = ?1;",
                params![id],
                |row| row.get(0),
            )
            .optional()?
        {
            Some(hotel_id) => hotel_id,
            None => return Err(RepoError::NotFound { table: "golves", id }),
        };

        // An unattached golf has nothing to guard.
        if let Some(hotel_id) = hotel_id {
            let siblings: i64 = tx.query_row(
                "SELECT COUNT(*) FROM golves WHERE hotel_id = ?1;",
                params![hotel_id],
                |row| row.get(0),
            )?;

            if siblings <= 1 {
                warn!(
                    "event=destroy_golf module=repo status=blocked golf_id={id} hotel_id={hotel_id} siblings={siblings}"
                );
                return Err(RepoError::LastGolfOfHotel { hotel_id });
            }
        }

        tx.execute("DELETE FROM golves WHERE id = ?1;", params![id])?;
        tx.commit()?;
        Ok(())
    }

    fn delete_golf(&self, id: GolfId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM golves WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "golves", id });
        }

        Ok(())
    }

    fn delete_hotel(&self, id: HotelId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM hotels WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: "hotels", id });
        }

        Ok(())
    }

    fn count_golves(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM golves;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn count_hotels(&self) -> RepoResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM hotels;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_golf_row(row: &Row<'_>) -> rusqlite::Result<Golf> {
    Ok(Golf {
        id: row.get(0)?,
        hotel_id: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
    })
}

fn parse_hotel_row(row: &Row<'_>) -> rusqlite::Result<Hotel> {
    Ok(Hotel {
        id: row.get(0)?,
        created_at: row.get(1)?,
        updated_at: row.get(2)?,
    })
}
