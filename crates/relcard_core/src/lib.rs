//! Executable examples of relational cardinality constraints.
//!
//! Each relationship pair (alfa/bravo, charlie/deltum, echo/foxtrot,
//! golf/hotel) demonstrates one way of pinning a cardinality: nullable
//! vs `NOT NULL` foreign keys, delete actions, application validations,
//! and pre-delete guards. The recurring theme is the difference between
//! a rule that is *validated* (application code, skippable) and one that
//! is *enforced* (database constraint, not skippable).

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, ConstraintKind, DbError, DbResult};
pub use logging::{default_log_level, init_logging};
pub use model::alfa_bravo::{Alfa, AlfaId, Bravo, BravoId};
pub use model::charlie_deltum::{Charlie, CharlieId, Deltum, DeltumId};
pub use model::echo_foxtrot::{Echo, EchoId, Foxtrot, FoxtrotId};
pub use model::golf_hotel::{Golf, GolfId, Hotel, HotelId};
pub use model::ValidationError;
pub use repo::alfa_bravo_repo::{AlfaBravoRepository, SqliteAlfaBravoRepository};
pub use repo::charlie_deltum_repo::{CharlieDeltumRepository, SqliteCharlieDeltumRepository};
pub use repo::echo_foxtrot_repo::{EchoFoxtrotRepository, SqliteEchoFoxtrotRepository};
pub use repo::golf_hotel_repo::{GolfHotelRepository, SqliteGolfHotelRepository};
pub use repo::{RepoError, RepoResult};
pub use service::hotel_service::HotelService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
