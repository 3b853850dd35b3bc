//! Read models for the relationship example entities.
//!
//! # Responsibility
//! - Define the persisted shape of each entity, one module per pair.
//! - Name every application-level validation rule in one place.
//!
//! # Invariants
//! - Entities carry nothing but an id, timestamps, and at most one
//!   foreign-key column; all meaning lives in that column's nullability
//!   and the constraints around it.
//! - An `Option<FooId>` field mirrors a nullable FK column; a plain
//!   `FooId` field mirrors a `NOT NULL` one.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod alfa_bravo;
pub mod charlie_deltum;
pub mod echo_foxtrot;
pub mod golf_hotel;

/// Application validation rules, i.e. the cardinality claims the schema
/// cannot express on its own.
///
/// Validated write paths check these before touching SQL; raw write
/// paths skip them, which is exactly the bypass the tests demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A charlie must name a deltum. Backed by `NOT NULL`, so the
    /// database catches it even when this validation is skipped.
    CharlieWithoutDeltum,
    /// A foxtrot must be referenced by an echo. Pure application rule;
    /// nothing at the database layer backs it up.
    FoxtrotWithoutEcho,
    /// A hotel must hold at least one golf. Pure application rule;
    /// nothing at the database layer backs it up.
    HotelWithoutGolves,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CharlieWithoutDeltum => write!(f, "a charlie must have exactly one deltum"),
            Self::FoxtrotWithoutEcho => write!(f, "a foxtrot must have an echo"),
            Self::HotelWithoutGolves => write!(f, "a hotel must have at least one golf"),
        }
    }
}

impl Error for ValidationError {}
