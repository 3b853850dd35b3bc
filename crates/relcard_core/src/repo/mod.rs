//! Repository layer: persistence contracts and SQLite implementations,
//! one module per relationship pair.
//!
//! # Responsibility
//! - Expose the create/lookup/reassign/delete operations each pairing
//!   supports, and keep all SQL behind this boundary.
//! - Offer both validated and raw write paths, because the distance
//!   between those two is what this crate exists to demonstrate.
//!
//! # Invariants
//! - Validated paths (`create_*`, `destroy_*`) check application rules
//!   before any SQL mutation.
//! - Raw paths (`insert_*`, `delete_*`) go straight to SQL; whatever
//!   stops them there is a genuine database constraint.

use crate::db::{ConstraintKind, DbError};
use crate::model::golf_hotel::HotelId;
use crate::model::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod alfa_bravo_repo;
pub mod charlie_deltum_repo;
pub mod echo_foxtrot_repo;
pub mod golf_hotel_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface shared by every relationship repository.
#[derive(Debug)]
pub enum RepoError {
    /// An application rule rejected the write before SQL ran.
    Validation(ValidationError),
    /// SQLite rejected the statement; use [`RepoError::constraint_kind`]
    /// to see whether a constraint did it.
    Db(DbError),
    /// Target row does not exist.
    NotFound { table: &'static str, id: i64 },
    /// Pre-delete guard: deleting this golf would leave its hotel with
    /// zero golves.
    LastGolfOfHotel { hotel_id: HotelId },
}

impl RepoError {
    /// Returns which database constraint tier rejected the write, if one
    /// did. `None` for application-tier failures.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Self::Db(err) => err.constraint_kind(),
            _ => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "no row with id {id} in `{table}`"),
            Self::LastGolfOfHotel { hotel_id } => write!(
                f,
                "refusing to delete: hotel {hotel_id} would be left with no golf"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::LastGolfOfHotel { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Epoch-ms `updated_at` expression shared by the UPDATE statements.
pub(crate) const TOUCH_UPDATED_AT: &str = "updated_at = (strftime('%s', 'now') * 1000)";
