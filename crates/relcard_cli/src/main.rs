//! CLI walkthrough entry point.
//!
//! # Responsibility
//! - Open a throwaway in-memory database and run every relationship
//!   scenario once, printing what held and what was bypassed.
//! - Double as a smoke probe for `relcard_core` wiring.

use relcard_core::{
    core_version, default_log_level, init_logging, open_db_in_memory, AlfaBravoRepository,
    CharlieDeltumRepository, EchoFoxtrotRepository, HotelService, SqliteAlfaBravoRepository,
    SqliteCharlieDeltumRepository, SqliteEchoFoxtrotRepository, SqliteGolfHotelRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("relcard_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // RELCARD_LOG_DIR overrides the rolling-file log location.
    let log_dir = match std::env::var("RELCARD_LOG_DIR") {
        Ok(dir) => dir,
        Err(_) => std::env::temp_dir()
            .join("relcard-logs")
            .to_string_lossy()
            .into_owned(),
    };
    init_logging(default_log_level(), &log_dir)?;

    println!("relcard_core version={}", core_version());
    let conn = open_db_in_memory()?;

    // Alfa {0..1} <--> {0..1} Bravo: the database detaches on delete.
    let alfa_bravo = SqliteAlfaBravoRepository::new(&conn);
    let bravo = alfa_bravo.create_bravo()?;
    let alfa = alfa_bravo.create_alfa(Some(bravo))?;
    alfa_bravo.delete_bravo(bravo)?;
    let detached = alfa_bravo.get_alfa(alfa)?.map(|a| a.bravo_id.is_none());
    println!("alfa/bravo: delete bravo -> alfa detached by FK action: {detached:?}");

    // Charlie {0..1} <--> {1} Deltum: validated and enforced.
    let charlie_deltum = SqliteCharlieDeltumRepository::new(&conn);
    let validation = match charlie_deltum.create_charlie(None) {
        Err(err) => err,
        Ok(id) => return Err(format!("charlie {id} saved without a deltum").into()),
    };
    let constraint = match charlie_deltum.insert_charlie(None) {
        Err(err) => err,
        Ok(id) => return Err(format!("charlie {id} inserted without a deltum").into()),
    };
    println!("charlie/deltum: validated path says `{validation}`");
    println!(
        "charlie/deltum: raw path is stopped by the database anyway: {:?}",
        constraint.constraint_kind()
    );

    // Echo {0..1} <--> "{1}" Foxtrot: validated but not enforced.
    let echo_foxtrot = SqliteEchoFoxtrotRepository::new(&conn);
    let orphan = echo_foxtrot.insert_foxtrot()?;
    println!(
        "echo/foxtrot: raw insert persisted orphan foxtrot {orphan}; the rule only lives in code"
    );

    // Golf {0..1} <--> {1..N} Hotel: guard vs bypass.
    let service = HotelService::new(SqliteGolfHotelRepository::new(&conn));
    let (hotel, golves) = service.found_hotel(1)?;
    let blocked = match service.destroy_golf(golves[0]) {
        Err(err) => err,
        Ok(()) => return Err("guard failed to protect the last golf".into()),
    };
    println!("golf/hotel: guard says `{blocked}`");
    service.delete_golf_bypassing_guard(golves[0])?;
    println!(
        "golf/hotel: bypass left hotel {hotel} with golves {}",
        serde_json::to_string(&service.golves_of_hotel(hotel)?)?
    );

    Ok(())
}
