//! Echo {0..1} <--> "{1}" Foxtrot.
//!
//! Structurally identical to a plain optional pairing: `echos.foxtrot_id`
//! is nullable with no delete action. The quotation marks around {1} are
//! the point: the "every foxtrot has an echo" rule exists only as
//! [`ValidationError::FoxtrotWithoutEcho`] on the validated create path.
//! The database cannot demand an inbound reference, so the raw insert
//! path produces a perfectly persisted, rule-breaking orphan foxtrot.
//!
//! [`ValidationError::FoxtrotWithoutEcho`]: super::ValidationError::FoxtrotWithoutEcho

use serde::{Deserialize, Serialize};

pub type EchoId = i64;
pub type FoxtrotId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub id: EchoId,
    pub foxtrot_id: Option<FoxtrotId>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foxtrot {
    pub id: FoxtrotId,
    pub created_at: i64,
    pub updated_at: i64,
}
