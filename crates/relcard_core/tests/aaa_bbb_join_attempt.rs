//! Aaa {0..1} <--> {1..N} Bbb through a join table: the unfinished
//! attempt. No repository exists for this pair; these tests poke the
//! schema directly to record what the join-table layout can and cannot
//! promise.

use relcard_core::db::open_db_in_memory;
use relcard_core::{ConstraintKind, DbError};
use rusqlite::{params, Connection};

#[test]
fn join_row_links_one_aaa_to_one_bbb() {
    let conn = open_db_in_memory().unwrap();
    let aaa = insert_row(&conn, "aaas");
    let bbb = insert_row(&conn, "bbbs");

    conn.execute(
        "INSERT INTO aaas_bbbs (aaa_id, bbb_id) VALUES (?1, ?2);",
        params![aaa, bbb],
    )
    .unwrap();

    let joined: i64 = conn
        .query_row("SELECT COUNT(*) FROM aaas_bbbs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(joined, 1);
}

#[test]
fn unique_index_caps_each_aaa_at_one_bbb() {
    let conn = open_db_in_memory().unwrap();
    let aaa = insert_row(&conn, "aaas");
    let bbb_1 = insert_row(&conn, "bbbs");
    let bbb_2 = insert_row(&conn, "bbbs");

    conn.execute(
        "INSERT INTO aaas_bbbs (aaa_id, bbb_id) VALUES (?1, ?2);",
        params![aaa, bbb_1],
    )
    .unwrap();

    // Second bbb for the same aaa: this is the {0..1} half working.
    let err = conn
        .execute(
            "INSERT INTO aaas_bbbs (aaa_id, bbb_id) VALUES (?1, ?2);",
            params![aaa, bbb_2],
        )
        .unwrap_err();

    assert_eq!(
        DbError::from(err).constraint_kind(),
        Some(ConstraintKind::Unique)
    );
}

#[test]
fn join_rows_cannot_dangle() {
    let conn = open_db_in_memory().unwrap();
    let aaa = insert_row(&conn, "aaas");

    let null_err = conn
        .execute(
            "INSERT INTO aaas_bbbs (aaa_id, bbb_id) VALUES (?1, NULL);",
            params![aaa],
        )
        .unwrap_err();
    assert_eq!(
        DbError::from(null_err).constraint_kind(),
        Some(ConstraintKind::NotNull)
    );

    let fk_err = conn
        .execute(
            "INSERT INTO aaas_bbbs (aaa_id, bbb_id) VALUES (?1, 404);",
            params![aaa],
        )
        .unwrap_err();
    assert_eq!(
        DbError::from(fk_err).constraint_kind(),
        Some(ConstraintKind::ForeignKey)
    );
}

#[test]
fn nothing_stops_a_bbb_with_zero_join_rows() {
    let conn = open_db_in_memory().unwrap();

    // The {1..N} half: a bbb is supposed to have at least one aaa, but
    // no column on bbbs can demand an inbound join row. This insert
    // succeeding is why the attempt stopped here.
    let bbb = insert_row(&conn, "bbbs");

    let joins: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM aaas_bbbs WHERE bbb_id = ?1;",
            params![bbb],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(joins, 0);
}

fn insert_row(conn: &Connection, table: &str) -> i64 {
    conn.execute(&format!("INSERT INTO {table} DEFAULT VALUES;"), [])
        .unwrap();
    conn.last_insert_rowid()
}
