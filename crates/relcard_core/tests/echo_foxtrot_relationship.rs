//! Echo {0..1} <--> "{1}" Foxtrot.
//!
//! The "every foxtrot has an echo" rule is application-only. These tests
//! show the validated path honoring it, the raw path ignoring it, and
//! the FK (no delete action) being the only rule the database itself
//! holds.

use relcard_core::db::open_db_in_memory;
use relcard_core::{
    ConstraintKind, EchoFoxtrotRepository, RepoError, SqliteEchoFoxtrotRepository, ValidationError,
};

#[test]
fn echo_can_exist_with_or_without_a_foxtrot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let lone_echo = repo.create_echo(None).unwrap();
    assert_eq!(repo.get_echo(lone_echo).unwrap().unwrap().foxtrot_id, None);

    let foxtrot_id = repo.insert_foxtrot().unwrap();
    let linked_echo = repo.create_echo(Some(foxtrot_id)).unwrap();
    assert_eq!(
        repo.get_echo(linked_echo).unwrap().unwrap().foxtrot_id,
        Some(foxtrot_id)
    );
}

#[test]
fn foxtrot_without_echo_fails_validation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let err = repo.create_foxtrot(None).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::FoxtrotWithoutEcho)
    ));
    assert_eq!(repo.count_foxtrots().unwrap(), 0);
}

#[test]
fn foxtrot_with_echo_is_created_and_linked() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let echo_id = repo.create_echo(None).unwrap();
    let foxtrot_id = repo.create_foxtrot(Some(echo_id)).unwrap();

    let echo = repo.get_echo(echo_id).unwrap().unwrap();
    assert_eq!(echo.foxtrot_id, Some(foxtrot_id));

    let inverse = repo.echo_of_foxtrot(foxtrot_id).unwrap().unwrap();
    assert_eq!(inverse.id, echo_id);
}

#[test]
fn foxtrot_creation_rolls_back_when_the_echo_does_not_exist() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let err = repo.create_foxtrot(Some(777)).unwrap_err();

    assert!(matches!(err, RepoError::NotFound { table: "echos", .. }));
    // The inserted foxtrot must not survive the failed link.
    assert_eq!(repo.count_foxtrots().unwrap(), 0);
}

#[test]
fn weakness_raw_insert_persists_an_orphan_foxtrot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    // The schema has no way to demand an inbound echo reference, so the
    // rule evaporates as soon as validation is skipped.
    let foxtrot_id = repo.insert_foxtrot().unwrap();

    assert!(repo.get_foxtrot(foxtrot_id).unwrap().is_some());
    assert!(repo.echo_of_foxtrot(foxtrot_id).unwrap().is_none());
}

#[test]
fn deleting_a_referenced_foxtrot_is_a_foreign_key_violation() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let echo_id = repo.create_echo(None).unwrap();
    let foxtrot_id = repo.create_foxtrot(Some(echo_id)).unwrap();

    let err = repo.delete_foxtrot(foxtrot_id).unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

    // Detaching the echo first makes the delete legal.
    repo.assign_foxtrot(echo_id, None).unwrap();
    repo.delete_foxtrot(foxtrot_id).unwrap();
    assert_eq!(repo.count_foxtrots().unwrap(), 0);
}

#[test]
fn deleting_the_echo_leaves_the_foxtrot_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEchoFoxtrotRepository::new(&conn);

    let echo_id = repo.create_echo(None).unwrap();
    let foxtrot_id = repo.create_foxtrot(Some(echo_id)).unwrap();

    repo.delete_echo(echo_id).unwrap();

    // The foxtrot survives, now silently breaking the application rule.
    assert_eq!(repo.count_echos().unwrap(), 0);
    assert!(repo.get_foxtrot(foxtrot_id).unwrap().is_some());
}
