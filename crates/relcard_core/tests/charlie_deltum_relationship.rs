//! Charlie {0..1} <--> {1} Deltum.
//!
//! The mandatory pairing: the "exactly one deltum" rule is both a
//! validation and a `NOT NULL` column, so skipping the validation only
//! changes which tier rejects the bad row.

use relcard_core::db::open_db_in_memory;
use relcard_core::{
    CharlieDeltumRepository, ConstraintKind, RepoError, SqliteCharlieDeltumRepository,
    ValidationError,
};

#[test]
fn charlie_without_deltum_fails_validation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let err = repo.create_charlie(None).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::CharlieWithoutDeltum)
    ));
    // Application-tier rejection, not a constraint.
    assert_eq!(err.constraint_kind(), None);
    assert_eq!(repo.count_charlies().unwrap(), 0);
}

#[test]
fn charlie_without_deltum_hits_not_null_when_validation_is_skipped() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let err = repo.insert_charlie(None).unwrap_err();

    assert_eq!(err.constraint_kind(), Some(ConstraintKind::NotNull));
    assert_eq!(repo.count_charlies().unwrap(), 0);
}

#[test]
fn charlie_with_one_deltum_saves_on_both_paths() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let deltum_id = repo.create_deltum().unwrap();

    let validated = repo.create_charlie(Some(deltum_id)).unwrap();
    let raw = repo.insert_charlie(Some(deltum_id)).unwrap();

    assert_eq!(repo.get_charlie(validated).unwrap().unwrap().deltum_id, deltum_id);
    assert_eq!(repo.get_charlie(raw).unwrap().unwrap().deltum_id, deltum_id);
}

#[test]
fn deleting_the_charlie_does_nothing_to_the_deltum() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let deltum_id = repo.create_deltum().unwrap();
    let charlie_id = repo.create_charlie(Some(deltum_id)).unwrap();

    repo.delete_charlie(charlie_id).unwrap();

    assert_eq!(repo.count_delta().unwrap(), 1);
    assert!(repo.charlie_of_deltum(deltum_id).unwrap().is_none());
}

#[test]
fn deleting_a_deltum_with_a_charlie_is_a_foreign_key_violation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let deltum_id = repo.create_deltum().unwrap();
    repo.create_charlie(Some(deltum_id)).unwrap();

    // No application rule fires here; the FK constraint alone protects
    // the charlie from losing its mandatory deltum.
    let err = repo.delete_deltum(deltum_id).unwrap_err();

    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    assert_eq!(repo.count_charlies().unwrap(), 1);
    assert_eq!(repo.count_delta().unwrap(), 1);
}

#[test]
fn deleting_a_deltum_with_no_charlie_succeeds() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let deltum_id = repo.create_deltum().unwrap();

    repo.delete_deltum(deltum_id).unwrap();

    assert_eq!(repo.count_delta().unwrap(), 0);
}

#[test]
fn charlie_with_dangling_deltum_id_is_rejected_by_the_database() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCharlieDeltumRepository::new(&conn);

    let err = repo.insert_charlie(Some(9000)).unwrap_err();

    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}
